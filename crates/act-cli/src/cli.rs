//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Activity tracker.
///
/// Records time-boxed activities (start one, end it later) and derives
/// per-day, per-category duration summaries from the finished ones.
#[derive(Debug, Parser)]
#[command(name = "act", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage activity type definitions.
    Types {
        #[command(subcommand)]
        action: TypesAction,
    },

    /// Start a new activity.
    Start {
        /// Activity category (e.g. sports).
        category: String,

        /// Activity name (e.g. run).
        name: String,

        /// Print the started record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// End the activity with the given id.
    End {
        /// Record id, as printed by `start` and `list`.
        id: String,

        /// Print the closed record as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the activity currently in progress, if any.
    Active {
        /// Print the record as JSON (`null` if none).
        #[arg(long)]
        json: bool,
    },

    /// List all recorded activities.
    List {
        /// Print the records as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Aggregate finished activities into per-day category totals.
    Summary {
        /// Print the `{dates, data}` table as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show storage paths and record counts.
    Status,
}

/// Activity type subcommands.
#[derive(Debug, Subcommand)]
pub enum TypesAction {
    /// List all activity types.
    List {
        /// Print the types as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Define a new activity type.
    Add {
        category: String,
        name: String,

        /// Print the created type as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Rename an existing activity type.
    Update {
        id: String,
        category: String,
        name: String,

        /// Print the updated type as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Delete an activity type.
    Remove { id: String },
}
