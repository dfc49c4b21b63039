//! # Domain Traits
//!
//! Abstract interfaces for the bot's two external collaborators: the chat
//! room it replies into and the lunch backend it relays commands to.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::error::BackendError;
use crate::domain::types::{BackendMessage, Location};

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a markdown message to the room, returning its event ID.
    async fn send_message(&self, content: &str) -> Result<String>;

    /// Send a notice (not tracked).
    async fn send_notification(&self, content: &str) -> Result<()>;

    /// Send a typing indicator
    async fn typing(&self, active: bool) -> Result<()>;

    /// Human-readable name for a room member.
    async fn display_name(&self, user_id: &str) -> Result<String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// The lunch-tracking REST backend.
#[async_trait]
pub trait LunchBackend: Send + Sync {
    /// Every known location with its visit statistics.
    async fn plan(&self) -> Result<Vec<Location>, BackendError>;

    /// Ask the backend to pick an unvisited location.
    async fn random(&self) -> Result<BackendMessage, BackendError>;

    /// Record a visit to `name` today.
    async fn add_visit(&self, name: &str) -> Result<BackendMessage, BackendError>;

    /// Add a new location on behalf of `author`.
    async fn quick_add(&self, name: &str, author: &str) -> Result<BackendMessage, BackendError>;
}
