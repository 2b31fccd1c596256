//! The column consolidation engine.

use serde::{Deserialize, Serialize};

use crate::dataset::{CellValue, Dataset};
use crate::error::{Result, SheetfuseError};

use super::format::format_cell;
use super::selection::Selection;

/// Column name used for the derived column when none is configured.
pub const DEFAULT_DERIVED_COLUMN: &str = "New Column";

/// Engine that (re)builds the derived column from the current selection.
///
/// The consolidator owns exactly one column of the dataset, identified by
/// its configured name. Every run clears that column and recomputes it
/// from scratch, so re-running with the same inputs is a no-op beyond the
/// first run.
#[derive(Debug, Clone)]
pub struct Consolidator {
    derived_column: String,
}

/// What a consolidation run changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidateReport {
    /// Name of the derived column.
    pub derived_column: String,
    /// Position of the derived column in the header row.
    pub derived_index: usize,
    /// Whether this run appended the column.
    pub column_added: bool,
    /// Number of data rows whose derived cell ended up non-empty.
    pub rows_merged: usize,
}

impl Consolidator {
    /// Create a consolidator using [`DEFAULT_DERIVED_COLUMN`].
    pub fn new() -> Self {
        Self::with_derived_column(DEFAULT_DERIVED_COLUMN)
    }

    /// Create a consolidator that owns the given derived column name.
    pub fn with_derived_column(name: impl Into<String>) -> Self {
        Self {
            derived_column: name.into(),
        }
    }

    /// The derived column name this consolidator owns.
    pub fn derived_column(&self) -> &str {
        &self.derived_column
    }

    /// Ensure the derived column exists and is empty, and return its index.
    ///
    /// If the column is already present, every data row's cell at its
    /// index is reset to empty; otherwise the name is appended to the
    /// header. Either way every data row is widened to the header length,
    /// so the dataset is a rectangular grid afterwards. Always succeeds.
    pub fn ensure_derived_column(&self, dataset: &mut Dataset) -> usize {
        let index = match dataset.column_index(&self.derived_column) {
            Some(index) => index,
            None => {
                dataset.headers.push(self.derived_column.clone());
                dataset.headers.len() - 1
            }
        };

        let width = dataset.headers.len();
        for row in &mut dataset.rows {
            row.resize(width, CellValue::Empty);
            row[index] = CellValue::Empty;
        }

        index
    }

    /// Rebuild the derived column from `selection`, in selection order.
    ///
    /// Every selected name is resolved against the header before anything
    /// is mutated; an unknown name aborts with
    /// [`SheetfuseError::UnresolvableColumn`] and the dataset untouched.
    /// An empty selection is valid and leaves the derived column present
    /// but entirely empty.
    pub fn consolidate(
        &self,
        dataset: &mut Dataset,
        selection: &Selection,
    ) -> Result<ConsolidateReport> {
        let mut sources = Vec::with_capacity(selection.len());
        for name in selection.iter() {
            let index = dataset.column_index(name).ok_or_else(|| {
                SheetfuseError::UnresolvableColumn {
                    column: name.to_string(),
                }
            })?;
            sources.push(index);
        }

        let column_added = dataset.column_index(&self.derived_column).is_none();
        let derived = self.ensure_derived_column(dataset);

        let mut rows_merged = 0;
        for row in &mut dataset.rows {
            let merged = merge_row(row, &sources);
            if !merged.is_empty() {
                row[derived] = CellValue::Text(merged);
                rows_merged += 1;
            }
        }

        Ok(ConsolidateReport {
            derived_column: self.derived_column.clone(),
            derived_index: derived,
            column_added,
            rows_merged,
        })
    }
}

impl Default for Consolidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge the selected columns of one row into a single deduplicated
/// string, in source order.
///
/// A token is skipped when the accumulated string already contains it as a
/// substring, so a short token can be swallowed by a longer earlier value
/// that happens to contain it ("1" after "21" adds nothing). Empty tokens
/// never append, since the empty string is a substring of everything.
fn merge_row(row: &[CellValue], sources: &[usize]) -> String {
    let mut merged = String::new();
    for &index in sources {
        let token = match row.get(index) {
            Some(cell) => format_cell(cell),
            None => String::new(),
        };
        if merged.is_empty() {
            merged = token;
        } else if !merged.contains(&token) {
            merged.push(' ');
            merged.push_str(&token);
        }
    }
    merged
}
