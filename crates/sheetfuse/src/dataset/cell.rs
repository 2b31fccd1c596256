//! Cell value model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell in a tabular dataset.
///
/// The enum uses an explicit `{type, value}` tagged layout so datasets
/// serialize to stable, JSON-friendly structures. Integers get their own
/// variant because values at identifier magnitude (account numbers, phone
/// numbers) must round-trip exactly; an `f64`-only model cannot promise
/// that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// Empty / unset cell.
    Empty,
    /// Exact signed integer.
    Int(i64),
    /// Floating-point number.
    Number(f64),
    /// Text content, whitespace preserved.
    Text(String),
}

impl CellValue {
    /// Returns true if the value is [`CellValue::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Classify a raw text field into a typed cell.
    ///
    /// Only fields that parse in full become numbers; a field with
    /// surrounding whitespace or trailing junk stays text so the original
    /// content survives untouched. Non-finite parses (`inf`, `nan`) stay
    /// text as well.
    pub fn parse(raw: &str) -> CellValue {
        if raw.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(n) = raw.parse::<i64>() {
            return CellValue::Int(n);
        }
        if let Ok(x) = raw.parse::<f64>() {
            if x.is_finite() {
                return CellValue::Number(x);
            }
        }
        CellValue::Text(raw.to_string())
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

/// Literal export form: numbers in plain decimal notation, text verbatim,
/// empty cells as the empty string. Display formatting for merge tokens
/// lives in the consolidator, not here.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Number(x) => write!(f, "{}", x),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}
