use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "evidex",
    version,
    about = "Forensic evidence case explorer over fixture data",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Explicit config file path
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Directory with case fixtures overriding the embedded demo case
    #[arg(long = "fixtures", global = true)]
    pub fixtures: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Multilingual keyword search over case messages
    Search {
        /// Query words, English, Hindi or Hinglish
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Only return messages from this app
        #[arg(long)]
        app: Option<String>,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,

        /// Skip messages recovered from deleted storage
        #[arg(long = "exclude-deleted")]
        exclude_deleted: bool,
    },

    /// Chronological event listing
    Timeline {
        /// all | chat | call | media
        #[arg(long, default_value = "all")]
        filter: String,
    },

    /// High-risk persons from the communication network
    Network {
        /// Minimum risk score (exclusive)
        #[arg(long, default_value_t = evidex_core::HIGH_RISK_THRESHOLD)]
        threshold: f64,

        /// Show details for one graph node
        #[arg(long)]
        node: Option<String>,
    },

    /// Build the case report from selected evidence
    Report {
        /// Number of leading messages placed in the report
        #[arg(long, default_value_t = 5)]
        seed: usize,

        /// Additional message ids to include
        #[arg(long = "add")]
        add: Vec<String>,

        /// pdf | csv | bibtex
        #[arg(long)]
        export: Option<String>,
    },

    /// Run the extraction completeness check for an uploaded report
    Check {
        /// UFDR/XRY/Oxygen report file name
        file: String,
    },

    /// Print the core version
    Version,
}
