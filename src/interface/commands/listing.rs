//! # Listing Commands
//!
//! Handles `lunch plan`, `!locations`, `!history` and `!plan`.
//! The header goes out as one message, the bulleted body through the chunker.

use anyhow::Result;
use std::num::NonZeroUsize;

use crate::application::{chunker, listing};
use crate::domain::command::ListingView;
use crate::domain::traits::{ChatProvider, LunchBackend};
use crate::strings::messages;

async fn set_typing(chat: &impl ChatProvider, active: bool) {
    if let Err(e) = chat.typing(active).await {
        tracing::warn!("Typing notice failed in {}: {}", chat.room_id(), e);
    }
}

pub async fn handle_listing(
    backend: &dyn LunchBackend,
    chat: &impl ChatProvider,
    view: ListingView,
    limit: NonZeroUsize,
) -> Result<()> {
    set_typing(chat, true).await;
    let locations = backend.plan().await;
    set_typing(chat, false).await;

    let locations = match locations {
        Ok(locations) => locations,
        Err(e) => return super::report_backend_error(chat, &e).await,
    };

    let Some(listing) = listing::render(view, &locations) else {
        chat.send_message(messages::NO_LOCATIONS).await?;
        return Ok(());
    };

    tracing::info!("Listing {:?}: {} of {} locations", view, listing.count, locations.len());

    chat.send_message(&listing.header).await?;
    chunker::send_to_chat(chat, &listing.body, limit).await?;
    Ok(())
}
