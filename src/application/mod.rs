//! # Application Layer
//!
//! Contains the core logic and orchestration of the bot: message chunking,
//! listing rendering, command routing and logging setup.

pub mod chunker;
pub mod listing;
pub mod logging;
pub mod router;

#[cfg(test)]
pub mod testing;
