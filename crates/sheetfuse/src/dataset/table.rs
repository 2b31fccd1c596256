//! In-memory tabular dataset.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::cell::CellValue;

/// Header row plus data rows, the engine's sole input/output value type.
///
/// Row 0 of the source table becomes `headers`; everything after it lands
/// in `rows`, aligned by position. Data rows may be shorter than the
/// header (ragged input); the consolidator widens them when it writes the
/// derived column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Column headers.
    pub headers: Vec<String>,
    /// Row data (row-major order, header excluded).
    pub rows: Vec<Vec<CellValue>>,
    /// The delimiter the source file used.
    pub delimiter: u8,
}

impl Dataset {
    /// Create a new dataset.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of data rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolve a column name to its position in the header row.
    ///
    /// Lookup is an exact, case-sensitive string match; `None` means the
    /// column does not exist and must be treated as an error by callers,
    /// never as an implicit empty column.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get all values for a column by index. Rows too short to reach the
    /// column yield [`CellValue::Empty`].
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&CellValue::Empty))
    }

    /// Returns true if every data row has exactly the header's length.
    pub fn is_rectangular(&self) -> bool {
        let width = self.headers.len();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// Serialize the dataset to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
