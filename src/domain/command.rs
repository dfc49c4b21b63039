//! # Commands
//!
//! Classifies an incoming chat message into one of the bot's commands.
//! Anything that does not match is ignored by the router.

pub const PING: &str = "ping";
pub const LUNCH_PLAN: &str = "lunch plan";
pub const LOCATIONS: &str = "!locations";
pub const HISTORY: &str = "!history";
pub const PLAN: &str = "!plan";
pub const VISITED: &str = "!visited";
pub const ADD_LOCATION: &str = "!addLocation";
pub const RANDOM: &str = "!random";
pub const WHO: &str = "!who";
pub const HELP: &str = "!help";

/// Which slice of the lunch plan a listing command shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingView {
    /// `lunch plan`: everything.
    LunchPlan,
    /// `!locations`: everything.
    Locations,
    /// `!history`: visited places only.
    History,
    /// `!plan`: places not visited yet.
    Plan,
}

impl ListingView {
    pub fn shows_visited(self) -> bool {
        !matches!(self, ListingView::Plan)
    }

    pub fn shows_unvisited(self) -> bool {
        !matches!(self, ListingView::History)
    }

    /// Whether unvisited entries get an explicit "no visits" marker.
    pub fn marks_unvisited(self) -> bool {
        matches!(self, ListingView::LunchPlan | ListingView::Locations)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ping,
    Listing(ListingView),
    Visited { location: String },
    Random,
    AddLocation { location: String },
    Who,
    Help,
}

impl Command {
    /// Classify a raw message body. Returns `None` for ordinary chatter.
    pub fn parse(body: &str) -> Option<Self> {
        let msg = body.trim();

        if msg == PING {
            return Some(Command::Ping);
        }

        let listings = [
            (LUNCH_PLAN, ListingView::LunchPlan),
            (LOCATIONS, ListingView::Locations),
            (HISTORY, ListingView::History),
            (PLAN, ListingView::Plan),
        ];
        if let Some((_, view)) = listings.iter().find(|(prefix, _)| msg.starts_with(prefix)) {
            return Some(Command::Listing(*view));
        }

        if let Some(location) = argument(msg, VISITED) {
            return Some(Command::Visited { location });
        }
        if let Some(location) = argument(msg, ADD_LOCATION) {
            return Some(Command::AddLocation { location });
        }

        match msg {
            RANDOM => Some(Command::Random),
            WHO => Some(Command::Who),
            HELP => Some(Command::Help),
            _ => None,
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping => "ping",
            Command::Listing(ListingView::LunchPlan) => "lunch-plan",
            Command::Listing(ListingView::Locations) => "locations",
            Command::Listing(ListingView::History) => "history",
            Command::Listing(ListingView::Plan) => "plan",
            Command::Visited { .. } => "visited",
            Command::Random => "random",
            Command::AddLocation { .. } => "add-location",
            Command::Who => "who",
            Command::Help => "help",
        }
    }
}

/// `"{keyword} {argument}"` -> trimmed, non-empty argument.
fn argument(msg: &str, keyword: &str) -> Option<String> {
    let rest = msg.strip_prefix(keyword)?.strip_prefix(' ')?.trim();
    (!rest.is_empty()).then(|| rest.to_string())
}
