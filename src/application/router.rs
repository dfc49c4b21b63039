//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! Classification happens once in `Command::parse`; routing is a single match.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::command::Command;
use crate::domain::config::AppConfig;
use crate::domain::traits::{ChatProvider, LunchBackend};
use crate::interface::commands;

pub struct CommandRouter {
    config: Arc<AppConfig>,
    backend: Arc<dyn LunchBackend>,
}

impl CommandRouter {
    pub fn new(config: Arc<AppConfig>, backend: Arc<dyn LunchBackend>) -> Self {
        Self { config, backend }
    }

    /// Handle one message body. `sender` is the user ID; it is only resolved to a
    /// display name when a command credits its author.
    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        let Some(command) = Command::parse(message) else {
            return Ok(());
        };

        tracing::info!(
            "Router dispatching cmd='{}' sender='{}' room='{}'",
            command.name(),
            sender,
            chat.room_id()
        );

        let backend = self.backend.as_ref();
        let limit = self.config.chat.max_message_chars;

        match command {
            Command::Ping => commands::misc::handle_ping(chat).await,
            Command::Who => commands::misc::handle_who(chat).await,
            Command::Help => commands::help::handle_help(chat).await,
            Command::Listing(view) => {
                commands::listing::handle_listing(backend, chat, view, limit).await
            }
            Command::Visited { location } => {
                commands::locations::handle_visited(backend, chat, &location).await
            }
            Command::Random => commands::locations::handle_random(backend, chat).await,
            Command::AddLocation { location } => {
                let author = match chat.display_name(sender).await {
                    Ok(name) => name,
                    Err(e) => {
                        tracing::warn!("Could not resolve display name for {}: {}", sender, e);
                        sender.to_string()
                    }
                };
                commands::locations::handle_add_location(backend, chat, &location, &author).await
            }
        }
    }
}
