//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.

pub const PONG: &str = "Pong! :ping_pong:";
pub const NO_LOCATIONS: &str = "There are no locations in **The Grand Lunch Plan**.";
pub const EMPTY_BACKEND_RESPONSE: &str = "Response was empty from the lunch backend. Look into this.";
pub const UNKNOWN_LAST_VISIT: &str = "unknown";

pub fn who() -> String {
    format!("YapBot v{} (powered by Rust/matrix-sdk)", env!("CARGO_PKG_VERSION"))
}

pub fn all_locations_header(count: usize) -> String {
    format!("Here's all {count} locations!")
}

pub fn history_header(count: usize) -> String {
    format!("Here's all {count} latest visits!")
}

pub fn plan_header(count: usize) -> String {
    format!("Here's all {count} locations you need to visit!")
}

pub fn visited_entry(name: &str, last_visit: &str, visits: u64) -> String {
    format!("• **{name}** - Last Visit: {last_visit} ({visits} total)\n")
}

pub fn unvisited_entry(name: &str, marked: bool) -> String {
    if marked {
        format!("• **{name}** - NO VISITS\n")
    } else {
        format!("• **{name}**\n")
    }
}

pub fn location_added(reply: &str, author: &str) -> String {
    format!("{reply} It was added by **{author}**.")
}

pub fn backend_error(err: &str) -> String {
    format!("⚠️ Could not reach the lunch backend: {err}")
}
