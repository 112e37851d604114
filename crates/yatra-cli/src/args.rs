use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for yatra
#[derive(Debug, Parser)]
#[command(
    name = "yatra",
    version,
    about = "Explore Indian places, festivals and travel facts from the yatra-core dataset"
)]
pub struct CliArgs {
    /// Directory holding the table files (default: the bundled data directory)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Optional TOML settings file
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show row counts for every table
    Stats,

    /// Narrow zone -> state -> city -> place and show the chosen place
    Browse {
        #[arg(long)]
        zone: Option<String>,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        city: Option<String>,
        /// Place name
        #[arg(long)]
        place: Option<String>,
        /// Print the resolved place as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask a free-text question about Indian culture and travel
    Ask {
        /// The question (several words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Score how sustainable a trip is
    Score {
        /// electric-vehicle, public-transport, bike, car or flight
        #[arg(long)]
        vehicle: String,
        /// eco-lodge, budget-hotel or luxury-hotel
        #[arg(long)]
        stay: String,
        /// local-vegetarian, local-non-vegetarian or fast-food-chains
        #[arg(long)]
        food: String,
        /// Carrying reusable bottles and bags
        #[arg(long)]
        reusables: bool,
        /// Travelling in a group
        #[arg(long)]
        group: bool,
    },

    /// Domestic and foreign visitor counts
    Visitors {
        /// Only rows for this state (case-insensitive)
        #[arg(long)]
        state: Option<String>,
    },

    /// List cultural hotspots that have coordinates
    Hotspots {
        /// Substring of the hotspot name (case- and accent-insensitive)
        #[arg(long)]
        search: Option<String>,
    },

    /// Hotels near a cultural hotspot
    #[cfg(feature = "fetch")]
    Hotels {
        /// Exact hotspot name, as listed by `hotspots`
        hotspot: String,
        /// Keep hotels whose name or address contains this text
        #[arg(long)]
        keyword: Option<String>,
    },

    /// List festivals from the story guide
    Stories,

    /// Tell the story of one festival
    Story {
        /// Festival name, as listed by `stories`
        festival: String,
    },
}
