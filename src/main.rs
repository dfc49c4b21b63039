//! # Main Entry Point
//!
//! Boots YapBot:
//! - Domain: Configuration, Commands and Types
//! - Infrastructure: Matrix session, lunch backend client
//! - Application: Router, Chunker, Logging
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::router::CommandRouter;
use crate::domain::config::AppConfig;
use crate::domain::traits::LunchBackend;
use crate::infrastructure::backend::YapClient;
use crate::infrastructure::matrix::{ChatSession, MatrixService};
use crate::strings::logs;

#[derive(Debug, Parser)]
#[command(name = "yapbot", version, about = "Matrix front end for the Yap lunch tracker")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "data/config.yaml")]
    config: PathBuf,

    /// Parse and validate the configuration, then exit
    #[arg(long)]
    check_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    if cli.check_config {
        println!("{}", config.check()?);
        return Ok(());
    }

    // 2. Logging Setup
    let _guard = application::logging::init(&config.system.log_dir)?;
    tracing::info!("{}", logs::STARTING);
    tracing::info!(
        "{}",
        logs::config_loaded(&cli.config.display().to_string(), &config.services.matrix.username)
    );

    // 3. Backend + Router
    let backend: Arc<dyn LunchBackend> = Arc::new(YapClient::new(&config.backend)?);
    let config = Arc::new(config);
    let router = Arc::new(CommandRouter::new(config.clone(), backend));

    // 4. Matrix Session
    let session = ChatSession::connect(&config.services.matrix).await?;
    let started_at = Utc::now();

    register_handlers(session.client(), router, config.clone(), started_at);

    // 5. Sync until Ctrl-C
    tracing::info!("{}", logs::SYNC_LOOP_START);
    let sync_client = session.client().clone();
    tokio::select! {
        result = sync_client.sync(SyncSettings::default()) => {
            if let Err(e) = result {
                tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
            }
        }
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                tracing::error!("Unable to listen for shutdown signal: {}", e);
            }
        }
    }

    tracing::info!("{}", logs::SHUTDOWN);
    session.disconnect().await?;
    Ok(())
}

/// Events stamped before the bot started are backlog from the initial sync.
fn is_stale(origin_ms: u64, started_at: DateTime<Utc>) -> bool {
    let started_ms = u64::try_from(started_at.timestamp_millis()).unwrap_or(0);
    origin_ms < started_ms
}

fn register_handlers(
    client: &Client,
    router: Arc<CommandRouter>,
    config: Arc<AppConfig>,
    started_at: DateTime<Utc>,
) {
    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();
        let config = config.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            let origin_ms: u64 = ev.origin_server_ts().get().into();
            if is_stale(origin_ms, started_at) {
                return;
            }

            if original_msg.sender == room.own_user_id() {
                return;
            }

            if !config.system.allows_room(room.room_id().as_str()) {
                return;
            }

            let MessageType::Text(text_content) = &original_msg.content.msgtype else {
                return;
            };

            let body = &text_content.body;
            tracing::debug!("Received message from {}: {}", original_msg.sender, body);

            let chat = MatrixService::new(room);

            if let Err(e) = router.route(&chat, body, original_msg.sender.as_str()).await {
                tracing::error!("Failed to route message: {:#}", e);
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::warn!(
                    "{}",
                    logs::invite_join_fail(room.room_id().as_str(), &e.to_string())
                );
            }
        }
    });
}
