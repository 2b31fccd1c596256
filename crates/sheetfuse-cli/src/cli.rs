//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sheetfuse: merge spreadsheet columns into one derived column
#[derive(Parser)]
#[command(name = "sheetfuse")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the columns of a data file
    Columns {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Merge selected columns into the derived column and export
    Merge {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to merge, in order (repeatable)
        #[arg(short, long = "select", value_name = "COLUMN")]
        select: Vec<String>,

        /// Name of the derived column
        #[arg(long, default_value = sheetfuse::DEFAULT_DERIVED_COLUMN)]
        column: String,

        /// Output path (default: <file>_merged.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,
    },

    /// Render an HTML preview of a data file
    Preview {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Column to merge before rendering, in order (repeatable)
        #[arg(short, long = "select", value_name = "COLUMN")]
        select: Vec<String>,

        /// Name of the derived column
        #[arg(long, default_value = sheetfuse::DEFAULT_DERIVED_COLUMN)]
        column: String,

        /// Output path for the HTML file (default: <file>_preview.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Don't automatically open the preview in a browser
        #[arg(long)]
        no_open: bool,
    },
}

#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
}

impl OutputFormat {
    /// The delimiter byte for this format.
    pub fn delimiter(&self) -> u8 {
        match self {
            OutputFormat::Csv => b',',
            OutputFormat::Tsv => b'\t',
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(format!("Unknown format: {}. Use csv or tsv.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Tsv => write!(f, "tsv"),
        }
    }
}
