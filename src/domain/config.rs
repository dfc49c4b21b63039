//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Matrix account, the lunch backend and chat limits.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::application::chunker::DEFAULT_MAX_MESSAGE_CHARS;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

impl AppConfig {
    /// Read and parse a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        if config.backend.url.trim().is_empty() {
            bail!("backend.url must not be empty");
        }
        if config.backend.token.is_none() && config.backend.token_env.is_none() {
            bail!("No backend token provided - set backend.token or backend.token_env");
        }
        Ok(config)
    }

    /// Full validation for `--check-config`, including resolving the backend token.
    /// Returns a one-line summary on success.
    pub fn check(&self) -> Result<String> {
        self.backend.resolve_token()?;
        Ok(format!(
            "Configuration OK: matrix user {} on {}, backend {}, chunk limit {}",
            self.services.matrix.username,
            self.services.matrix.homeserver,
            self.backend.url,
            self.chat.max_message_chars
        ))
    }
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub password: String,
    pub homeserver: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Where the lunch backend lives and how to authenticate against it.
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub url: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub token_env: Option<String>, // e.g. "YAP_BOT_TOKEN"
    #[serde(default = "default_backend_timeout")]
    pub timeout_secs: u64,
}

fn default_backend_timeout() -> u64 {
    30
}

impl BackendConfig {
    /// The `botbypasstoken` value: inline `token` first, then `token_env`.
    pub fn resolve_token(&self) -> Result<String> {
        if let Some(token) = &self.token {
            Ok(token.clone())
        } else if let Some(env_var) = &self.token_env {
            std::env::var(env_var)
                .with_context(|| format!("Backend token env var {} not set", env_var))
        } else {
            bail!("No backend token provided - set backend.token or backend.token_env")
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    /// Longest message the bot sends in one go; longer replies are chunked.
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: NonZeroUsize,
}

fn default_max_message_chars() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_MAX_MESSAGE_CHARS).unwrap_or(NonZeroUsize::MIN)
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_message_chars: default_max_message_chars(),
        }
    }
}

/// System-level settings for the bot.
#[derive(Debug, Deserialize, Clone)]
pub struct SystemConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Rooms the bot answers in. Empty means every joined room.
    #[serde(default)]
    pub rooms: Vec<String>,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            rooms: Vec::new(),
        }
    }
}

impl SystemConfig {
    pub fn allows_room(&self, room_id: &str) -> bool {
        self.rooms.is_empty() || self.rooms.iter().any(|r| r == room_id)
    }
}
