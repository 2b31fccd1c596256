//! Sheetfuse CLI - merge spreadsheet columns into one derived column.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Columns { file, json } => commands::columns::run(file, json, cli.verbose),

        Commands::Merge {
            file,
            select,
            column,
            output,
            format,
        } => commands::merge::run(file, select, column, output, format, cli.verbose),

        Commands::Preview {
            file,
            select,
            column,
            output,
            no_open,
        } => commands::preview::run(file, select, column, output, no_open, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
