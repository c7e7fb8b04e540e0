use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Extract anchored values from standardized OCR documents.
#[derive(Debug, Parser)]
#[command(name = "textanchor", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the value adjacent to an anchor line
    Label {
        /// Path to the standardized document JSON
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Anchor text to search for (whole line, case-insensitive)
        #[arg(long)]
        anchor: String,

        /// Side of the anchor to read: above, below, left, or right
        #[arg(long)]
        position: Option<String>,

        /// Anchor edge the value lines up with: left or right
        #[arg(long)]
        alignment: Option<String>,

        /// Mark the query as multiline
        #[arg(long)]
        multiline: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Extract a value sharing a row with an anchor line
    Row {
        /// Path to the standardized document JSON
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Anchor text to search for (whole line, case-insensitive)
        #[arg(long)]
        anchor: String,

        /// Side of the anchor to read: left or right
        #[arg(long)]
        position: Option<String>,

        /// Which candidate to take: first, second, or last
        #[arg(long)]
        tiebreaker: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Run a query read from a JSON file
    Query {
        /// Path to the standardized document JSON
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Path to the query JSON file
        #[arg(long, value_name = "QUERY_FILE")]
        query: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List document lines with their box edges
    Lines {
        /// Path to the standardized document JSON
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Only list lines matching this pattern (regex by default)
        #[arg(long = "match", value_name = "PATTERN")]
        pattern: Option<String>,

        /// Match case-insensitively
        #[arg(long)]
        ignore_case: bool,

        /// Treat the pattern as a literal string (not regex)
        #[arg(long)]
        no_regex: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List distinct anchor texts with occurrence counts
    Anchors {
        /// Path to the standardized document JSON
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for all subcommands.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (tab-separated)
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
