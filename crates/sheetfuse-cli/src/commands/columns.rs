//! Columns command - list the columns of a data file.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;
use sheetfuse::{Sheetfuse, DEFAULT_DERIVED_COLUMN};

#[derive(Serialize)]
struct ColumnListing {
    file: String,
    format: String,
    row_count: usize,
    columns: Vec<String>,
}

pub fn run(file: PathBuf, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let sheetfuse = Sheetfuse::new();
    let (dataset, source) = sheetfuse.load(&file)?;

    if json {
        let listing = ColumnListing {
            file: source.file,
            format: source.format,
            row_count: source.row_count,
            columns: dataset.headers.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!(
        "{} {} ({} rows, {})",
        "Columns of".cyan().bold(),
        source.file.white(),
        source.row_count.to_string().white().bold(),
        source.format
    );

    for (index, name) in dataset.headers.iter().enumerate() {
        if name == DEFAULT_DERIVED_COLUMN {
            println!("  {:3}  {}  {}", index, name, "(derived)".yellow());
        } else {
            println!("  {:3}  {}", index, name);
        }
    }

    if verbose {
        println!();
        println!("Hash: {}", source.hash);
    }

    Ok(())
}
