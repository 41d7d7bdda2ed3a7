//! Command-line interface definitions using clap
//!
//! The binary only carries the offline data-preparation steps (the runtime
//! experience consumes the published documents directly) plus a `resolve`
//! debug command.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;

/// campus-wrapped - data tooling for the per-campus wrapped experience
#[derive(Parser)]
#[command(name = "campus-wrapped")]
#[command(version)]
#[command(about = "Data preparation and resolution tooling for the campus wrapped experience", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert the answers spreadsheet into the statistics store document
    Convert {
        /// Source CSV file (one row per POI)
        #[arg(long, short)]
        input: PathBuf,

        /// Output JSON document (POI id -> record)
        #[arg(long, short)]
        output: PathBuf,
    },

    /// Derive the reverse map (short code -> POI id) from the forward
    /// short-links document
    ReverseMap {
        /// Forward short-links JSON document
        #[arg(long)]
        short_links: PathBuf,

        /// Output JSON document (short code -> POI id)
        #[arg(long, short)]
        output: PathBuf,
    },

    /// Resolve an identifier against the published documents and print
    /// the record
    Resolve {
        /// POI id or short code
        id: String,

        /// Override WRAPPED_DATA_BASE_URL
        #[arg(long)]
        base_url: Option<String>,
    },
}
