//! Preview command - render a data file as an HTML table.

use std::path::PathBuf;

use colored::Colorize;
use sheetfuse::{render_page, Selection, Sheetfuse};

pub fn run(
    file: PathBuf,
    select: Vec<String>,
    column: String,
    output: Option<PathBuf>,
    no_open: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let sheetfuse = Sheetfuse::new().with_derived_column(column);
    let (mut dataset, source) = sheetfuse.load(&file)?;

    let selection = Selection::from_names(select);
    if !selection.is_empty() {
        let report = sheetfuse.consolidate(&mut dataset, &selection)?;
        if verbose {
            println!(
                "{} {} rows into '{}'",
                "Merged".cyan().bold(),
                report.rows_merged,
                report.derived_column
            );
        }
    }

    let html = render_page(&dataset, &source.file);

    let output_path = output.unwrap_or_else(|| {
        let stem = file.file_stem().unwrap_or_default().to_string_lossy();
        file.with_file_name(format!("{}_preview.html", stem))
    });

    std::fs::write(&output_path, html)?;

    println!(
        "{} {}",
        "Preview saved to".green().bold(),
        output_path.display().to_string().white()
    );

    if !no_open {
        if let Err(e) = open::that(&output_path) {
            eprintln!("{} Could not open browser: {}", "Warning:".yellow(), e);
        }
    }

    Ok(())
}
