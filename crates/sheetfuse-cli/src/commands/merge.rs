//! Merge command - consolidate selected columns and export.

use std::path::PathBuf;

use colored::Colorize;
use sheetfuse::{Selection, Sheetfuse, Writer};

use crate::cli::OutputFormat;

pub fn run(
    file: PathBuf,
    select: Vec<String>,
    column: String,
    output: Option<PathBuf>,
    format: OutputFormat,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let sheetfuse = Sheetfuse::new().with_derived_column(column);
    let (mut dataset, source) = sheetfuse.load(&file)?;

    if verbose {
        println!(
            "{} {} ({} rows, {} columns)",
            "Loaded".cyan().bold(),
            source.file.white(),
            source.row_count,
            source.column_count
        );
    }

    let selection = Selection::from_names(select);
    if selection.is_empty() {
        println!(
            "{} No columns selected; '{}' will be empty.",
            "Note:".yellow(),
            sheetfuse.derived_column()
        );
    }

    let report = sheetfuse.consolidate(&mut dataset, &selection)?;

    println!(
        "{} {} rows into '{}'{}",
        "Merged".cyan().bold(),
        report.rows_merged.to_string().white().bold(),
        report.derived_column,
        if report.column_added {
            " (column added)"
        } else {
            ""
        }
    );

    // Determine output path
    let output_path = output.unwrap_or_else(|| {
        let stem = file.file_stem().unwrap_or_default().to_string_lossy();
        file.with_file_name(format!("{}_merged.{}", stem, format))
    });

    Writer::with_delimiter(format.delimiter()).write_file(&dataset, &output_path)?;

    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}
