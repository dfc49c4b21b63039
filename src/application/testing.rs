//! In-memory fakes for handler and router tests.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::config::AppConfig;
use crate::domain::error::BackendError;
use crate::domain::traits::{ChatProvider, LunchBackend};
use crate::domain::types::{BackendMessage, Location};

pub fn test_config(max_message_chars: usize) -> AppConfig {
    let yaml = format!(
        r#"
services:
  matrix:
    homeserver: "https://matrix.example.org"
    username: "yapbot"
    password: "hunter2"
backend:
  url: "http://yap-backend:3000"
  token: "secret"
chat:
  max_message_chars: {max_message_chars}
"#
    );
    AppConfig::from_yaml(&yaml).unwrap()
}

#[derive(Default)]
pub struct FakeChat {
    pub sent: Mutex<Vec<String>>,
    pub notices: Mutex<Vec<String>>,
    /// Fail every `send_message` once this many have succeeded.
    pub fail_after: Option<usize>,
    pub fail_typing: bool,
    pub names: HashMap<String, String>,
    pub lookups: Mutex<Vec<String>>,
}

impl FakeChat {
    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    pub fn name_lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn with_name(mut self, user_id: &str, name: &str) -> Self {
        self.names.insert(user_id.to_string(), name.to_string());
        self
    }
}

#[async_trait]
impl ChatProvider for FakeChat {
    async fn send_message(&self, content: &str) -> Result<String> {
        let mut sent = self.sent.lock().unwrap();
        if self.fail_after.is_some_and(|n| sent.len() >= n) {
            return Err(anyhow!("room unavailable"));
        }
        sent.push(content.to_string());
        Ok(format!("$event{}", sent.len()))
    }

    async fn send_notification(&self, content: &str) -> Result<()> {
        self.notices.lock().unwrap().push(content.to_string());
        Ok(())
    }

    async fn typing(&self, _active: bool) -> Result<()> {
        if self.fail_typing {
            return Err(anyhow!("typing notice rejected"));
        }
        Ok(())
    }

    async fn display_name(&self, user_id: &str) -> Result<String> {
        self.lookups.lock().unwrap().push(user_id.to_string());
        Ok(self.names.get(user_id).cloned().unwrap_or_else(|| user_id.to_string()))
    }

    fn room_id(&self) -> String {
        "!lunch:example.org".to_string()
    }
}

#[derive(Default)]
pub struct FakeBackend {
    pub locations: Vec<Location>,
    pub reply: BackendMessage,
    pub fail: bool,
    pub log: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn answer<T>(&self, call: String, value: T) -> Result<T, BackendError> {
        self.log.lock().unwrap().push(call);
        if self.fail {
            return Err(BackendError::Request("connection refused".to_string()));
        }
        Ok(value)
    }
}

#[async_trait]
impl LunchBackend for FakeBackend {
    async fn plan(&self) -> Result<Vec<Location>, BackendError> {
        self.answer("plan".to_string(), self.locations.clone())
    }

    async fn random(&self) -> Result<BackendMessage, BackendError> {
        self.answer("random".to_string(), self.reply.clone())
    }

    async fn add_visit(&self, name: &str) -> Result<BackendMessage, BackendError> {
        self.answer(format!("add_visit:{name}"), self.reply.clone())
    }

    async fn quick_add(&self, name: &str, author: &str) -> Result<BackendMessage, BackendError> {
        self.answer(format!("quick_add:{name}:{author}"), self.reply.clone())
    }
}
