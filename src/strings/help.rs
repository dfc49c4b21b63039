//! # Help Text
//!
//! Displayed to the user via the `!help` command.

pub const MAIN: &str = concat!(
    "Yap is a lunch tracking tool that we use to decide where to go to lunch ",
    "and which places we have not visited yet. YapBot relays these commands ",
    "to the Yap backend.\n",
    "\n",
    "**YapBot Commands:**\n",
    "**!locations** or **lunch plan** - Display visits and non-visits.\n",
    "**!history** - Display visited locations.\n",
    "**!plan** - Display locations that have not been visited.\n",
    "**!random** - Chooses a random place you have not been.\n",
    "**!visited [location]** - Mark this location as visited today.\n",
    "**!addLocation [location]** - Adds [location] to the lunch plan.\n",
    "**!help** - This command list.\n",
    "**!who** - Display version."
);
