//! # Location Commands
//!
//! Handles `!visited`, `!random` and `!addLocation`, which relay the backend's
//! one-line reply back to the room.

use anyhow::Result;

use crate::domain::error::BackendError;
use crate::domain::traits::{ChatProvider, LunchBackend};
use crate::domain::types::BackendMessage;
use crate::strings::messages;

fn reply_text(reply: BackendMessage) -> String {
    reply
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| messages::EMPTY_BACKEND_RESPONSE.to_string())
}

async fn relay(
    chat: &impl ChatProvider,
    reply: Result<BackendMessage, BackendError>,
    decorate: impl FnOnce(String) -> String,
) -> Result<()> {
    match reply {
        Ok(reply) => {
            chat.send_message(&decorate(reply_text(reply))).await?;
            Ok(())
        }
        Err(e) => super::report_backend_error(chat, &e).await,
    }
}

pub async fn handle_visited(
    backend: &dyn LunchBackend,
    chat: &impl ChatProvider,
    location: &str,
) -> Result<()> {
    relay(chat, backend.add_visit(location).await, |text| text).await
}

pub async fn handle_random(backend: &dyn LunchBackend, chat: &impl ChatProvider) -> Result<()> {
    relay(chat, backend.random().await, |text| text).await
}

pub async fn handle_add_location(
    backend: &dyn LunchBackend,
    chat: &impl ChatProvider,
    location: &str,
    author: &str,
) -> Result<()> {
    relay(chat, backend.quick_add(location, author).await, |text| {
        messages::location_added(&text, author)
    })
    .await
}
