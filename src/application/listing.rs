//! # Listing Formatter
//!
//! Renders the backend's location list into a header line and a bulleted body.
//! The body is one line per location so it can be chunked safely.

use crate::domain::command::ListingView;
use crate::domain::types::Location;
use crate::strings::messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub header: String,
    pub body: String,
    pub count: usize,
}

/// Build the listing for `view`. `None` when the backend has no locations at all.
pub fn render(view: ListingView, locations: &[Location]) -> Option<Listing> {
    if locations.is_empty() {
        return None;
    }

    let mut body = String::new();
    let mut count = 0;

    for location in locations {
        if location.is_visited() && view.shows_visited() {
            body.push_str(&messages::visited_entry(
                &location.name,
                location.time_ago_label.as_deref().unwrap_or(messages::UNKNOWN_LAST_VISIT),
                location.visit_count,
            ));
            count += 1;
        } else if !location.is_visited() && view.shows_unvisited() {
            body.push_str(&messages::unvisited_entry(&location.name, view.marks_unvisited()));
            count += 1;
        }
    }

    let header = match view {
        ListingView::LunchPlan | ListingView::Locations => messages::all_locations_header(count),
        ListingView::History => messages::history_header(count),
        ListingView::Plan => messages::plan_header(count),
    };

    Some(Listing { header, body, count })
}
