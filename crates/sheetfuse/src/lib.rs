//! Sheetfuse: column consolidation for tabular datasets.
//!
//! Sheetfuse ingests a delimited data file, lets the caller pick an
//! ordered set of source columns, and (re)builds a single derived column
//! whose cells concatenate the formatted values of the selected columns,
//! with duplicate tokens suppressed.
//!
//! # Core Principles
//!
//! - **One owned column**: the engine creates and overwrites exactly one
//!   column; everything else in the dataset is left alone
//! - **Idempotent re-runs**: every run clears and recomputes the derived
//!   column, so repeating a run changes nothing
//! - **All-or-nothing**: a selection that names a missing column aborts
//!   before the dataset is touched
//!
//! # Example
//!
//! ```no_run
//! use sheetfuse::{Selection, Sheetfuse};
//!
//! let sheetfuse = Sheetfuse::new();
//! let (mut dataset, _source) = sheetfuse.load("accounts.csv").unwrap();
//!
//! let selection = Selection::from_names(["Account", "Balance"]);
//! let report = sheetfuse.consolidate(&mut dataset, &selection).unwrap();
//!
//! println!("{} rows merged into '{}'", report.rows_merged, report.derived_column);
//! ```

pub mod codec;
pub mod consolidate;
pub mod dataset;
pub mod error;
pub mod render;

mod sheetfuse;

pub use crate::sheetfuse::{Sheetfuse, SheetfuseConfig};
pub use codec::{Parser, ParserConfig, SourceMetadata, Writer};
pub use consolidate::{
    format_cell, ConsolidateReport, Consolidator, Selection, DEFAULT_DERIVED_COLUMN,
};
pub use dataset::{CellValue, Dataset};
pub use error::{Result, SheetfuseError};
pub use render::{render_html, render_page};
