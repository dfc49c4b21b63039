//! # Miscellaneous Commands
//!
//! Handles `ping` and `!who`.

use crate::domain::traits::ChatProvider;
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_ping(chat: &impl ChatProvider) -> Result<()> {
    chat.send_message(messages::PONG).await.map(|_| ())
}

pub async fn handle_who(chat: &impl ChatProvider) -> Result<()> {
    chat.send_message(&messages::who()).await.map(|_| ())
}
