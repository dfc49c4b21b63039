//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (e.g., !plan, !visited, !help).
//! These handlers are invoked by the Router.

pub mod help;
pub mod listing;
pub mod locations;
pub mod misc;

use crate::domain::error::BackendError;
use crate::domain::traits::ChatProvider;
use crate::strings::messages;
use anyhow::Result;

/// Report a backend failure to the room instead of failing the whole command.
pub(crate) async fn report_backend_error(chat: &impl ChatProvider, err: &BackendError) -> Result<()> {
    tracing::error!("Lunch backend request failed: {}", err);
    chat.send_notification(&messages::backend_error(&err.to_string()))
        .await
}
