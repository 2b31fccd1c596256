//! Delimited-text export.

use std::path::Path;

use crate::dataset::Dataset;
use crate::error::{Result, SheetfuseError};

/// Serializes a dataset back to delimited text.
///
/// Cells are written in their literal export form ([`std::fmt::Display`]
/// on the cell), never through the consolidator's token formatting: a
/// numeric cell exports its plain decimal value, a text cell its exact
/// content, an empty cell an empty field.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    delimiter: Option<u8>,
}

impl Writer {
    /// Create a writer that reuses each dataset's own delimiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with a fixed delimiter, overriding the dataset's.
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter: Some(delimiter),
        }
    }

    /// Serialize a dataset to a delimited string.
    pub fn to_string(&self, dataset: &Dataset) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter.unwrap_or(dataset.delimiter))
            .from_writer(Vec::new());

        writer.write_record(&dataset.headers)?;
        for row in &dataset.rows {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }

        let buffer = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Serialize a dataset to a file.
    pub fn write_file(&self, dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = self.to_string(dataset)?;
        std::fs::write(path, contents).map_err(|e| SheetfuseError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CellValue;

    fn sample() -> Dataset {
        Dataset::new(
            vec!["id".to_string(), "name".to_string(), "note".to_string()],
            vec![
                vec![
                    CellValue::Int(123456789012345),
                    CellValue::Text("Alice".to_string()),
                    CellValue::Empty,
                ],
                vec![
                    CellValue::Int(2),
                    CellValue::Text("Bob, Jr.".to_string()),
                    CellValue::Number(1.5),
                ],
            ],
            b',',
        )
    }

    #[test]
    fn test_export_uses_literal_cell_forms() {
        let out = Writer::new().to_string(&sample()).unwrap();
        assert_eq!(
            out,
            "id,name,note\n123456789012345,Alice,\n2,\"Bob, Jr.\",1.5\n"
        );
    }

    #[test]
    fn test_export_with_delimiter_override() {
        let out = Writer::with_delimiter(b'\t').to_string(&sample()).unwrap();
        assert!(out.starts_with("id\tname\tnote\n"));
    }

    #[test]
    fn test_export_parse_round_trip() {
        use crate::codec::Parser;

        let table = sample();
        let out = Writer::new().to_string(&table).unwrap();
        let back = Parser::new().parse_bytes(out.as_bytes(), b',').unwrap();

        assert_eq!(back, table);
    }
}
