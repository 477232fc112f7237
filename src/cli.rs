use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{Slot, Weekday};
use crate::planner::constants::{DEFAULT_EXPORT_FILE, DEFAULT_STATE_FILE};

/// Weekly meal planner: rotates lunches and dinners across the work week.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the state file the plan is saved in.
    #[arg(short, long, default_value = DEFAULT_STATE_FILE)]
    pub state: PathBuf,

    /// JSON array of meal names to use instead of the built-in catalog.
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Seed for reproducible plans.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Interactive menu: generate, edit, and download the plan.
    #[default]
    Interactive,

    /// Generate a new plan for the week.
    Generate,

    /// Show the saved plan.
    Show,

    /// Replace the meal in one slot.
    Replace {
        /// Day name (e.g. "monday", "wed") or index 0-4.
        #[arg(short, long)]
        day: Weekday,

        /// "lunch" or "dinner".
        #[arg(short = 'm', long)]
        slot: Slot,
    },

    /// Export the saved plan to a CSV file.
    Export {
        /// Output file.
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },

    /// List the meal catalog.
    Catalog,
}
