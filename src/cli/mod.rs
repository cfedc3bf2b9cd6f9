//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// phone-cleaner - Extract and clean phone numbers from the first column
/// of a CSV file.
#[derive(Parser, Debug)]
#[command(name = "phone-cleaner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a configuration file (defaults to the user config dir).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean the first column and write the export artifacts.
    Clean {
        /// Input CSV file (header row, phone numbers in the first column).
        input: PathBuf,

        /// Output directory for artifacts (overrides config).
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Artifacts to generate: both, columnar, or joined.
        #[arg(short, long, default_value = "both")]
        format: String,
    },

    /// Show the first cleaned numbers without writing anything.
    Preview {
        /// Input CSV file.
        input: PathBuf,

        /// Number of entries to show (overrides config).
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the full comma-joined string (copy-ready), or save it.
    Joined {
        /// Input CSV file.
        input: PathBuf,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show extraction statistics for an input file.
    Stats {
        /// Input CSV file.
        input: PathBuf,

        /// Emit statistics as JSON.
        #[arg(long)]
        json: bool,
    },
}
