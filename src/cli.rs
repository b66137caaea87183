use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Menu Matrix: classify menu dishes by profitability and popularity.
#[derive(Parser, Debug)]
#[command(name = "menu_matrix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the menu CSV file.
    #[arg(short, long, default_value = "hotel_menu.csv")]
    pub file: PathBuf,

    /// Path to a JSON config file (column names, currency, output path).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the categorized dishes, the category distribution and the summary.
    Classify {
        /// Write the optimized menu CSV to this path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show only the thresholds and per-category summary.
    Summary {
        /// Emit the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Browse categories and dishes interactively.
    Explore,
}

impl Default for Command {
    fn default() -> Self {
        Command::Classify { output: None }
    }
}
