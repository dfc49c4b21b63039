//! # Domain Types
//!
//! Records exchanged with the lunch backend.

use serde::{Deserialize, Serialize};

/// A lunch location as reported by `GET /api/locations/plan`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub visit_count: u64,
    #[serde(default)]
    pub time_ago_label: Option<String>,
}

impl Location {
    pub fn is_visited(&self) -> bool {
        self.visit_count > 0
    }
}

/// `{ "message": ... }` reply of the random and mutating endpoints.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BackendMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/locations/addVisit`.
#[derive(Debug, Serialize)]
pub struct VisitRequest<'a> {
    pub name: &'a str,
}

/// Body of `PUT /api/locations/quick`.
#[derive(Debug, Serialize)]
pub struct QuickAddRequest<'a> {
    pub name: &'a str,
    pub author: &'a str,
}
