//! # Matrix Service Adapter
//!
//! `ChatSession` owns the logged-in Matrix client for the lifetime of the bot;
//! it is created by `connect` and torn down by `disconnect`, and is passed
//! explicitly to whoever needs it.
//!
//! `MatrixService` implements the `ChatProvider` trait for a single room.

use anyhow::{Context, Result};
use async_trait::async_trait;
use matrix_sdk::Client;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::UserId;
use matrix_sdk::ruma::events::room::message::RoomMessageEventContent;

use crate::domain::config::MatrixConfig;
use crate::domain::traits::ChatProvider;
use crate::strings::logs;

const DEVICE_NAME: &str = "YapBot";

pub struct ChatSession {
    client: Client,
}

impl ChatSession {
    /// Log in to the homeserver and return a ready session.
    pub async fn connect(config: &MatrixConfig) -> Result<Self> {
        let client = Client::builder()
            .homeserver_url(&config.homeserver)
            .build()
            .await
            .with_context(|| format!("Failed to build client for {}", config.homeserver))?;

        client
            .matrix_auth()
            .login_username(&config.username, &config.password)
            .initial_device_display_name(DEVICE_NAME)
            .send()
            .await
            .context("Matrix login failed")?;

        tracing::info!("{}", logs::logged_in(&config.username));

        if let Some(name) = &config.display_name {
            tracing::info!("{}", logs::setting_display_name(name));
            if let Err(e) = client.account().set_display_name(Some(name)).await {
                tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
            }
        }

        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Log out and invalidate the access token.
    pub async fn disconnect(self) -> Result<()> {
        self.client
            .matrix_auth()
            .logout()
            .await
            .context("Matrix logout failed")?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }

    /// Best name to credit a sender with: room display name, else the user id localpart.
    async fn display_name_of(&self, user_id: &UserId) -> String {
        match self.room.get_member(user_id).await {
            Ok(Some(member)) => member
                .display_name()
                .map(str::to_string)
                .unwrap_or_else(|| user_id.localpart().to_string()),
            _ => user_id.localpart().to_string(),
        }
    }
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn send_message(&self, content: &str) -> Result<String> {
        tracing::debug!("Bot sending message to {}: {}", self.room_id(), content);
        let response = self
            .room
            .send(RoomMessageEventContent::text_markdown(content))
            .await?;
        Ok(response.event_id.to_string())
    }

    async fn send_notification(&self, content: &str) -> Result<()> {
        self.room
            .send(RoomMessageEventContent::notice_markdown(content))
            .await?;
        Ok(())
    }

    async fn typing(&self, active: bool) -> Result<()> {
        self.room.typing_notice(active).await?;
        Ok(())
    }

    async fn display_name(&self, user_id: &str) -> Result<String> {
        let user_id = <&UserId>::try_from(user_id)?;
        Ok(self.display_name_of(user_id).await)
    }
}
