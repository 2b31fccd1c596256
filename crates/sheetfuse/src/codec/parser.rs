//! Delimited-text parser with delimiter detection.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::dataset::{CellValue, Dataset};
use crate::error::{Result, SheetfuseError};

use super::source::SourceMetadata;

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the file has a header row.
    pub has_header: bool,
    /// Maximum data rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Parses delimited text files into datasets.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the dataset and source metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| SheetfuseError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| SheetfuseError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let dataset = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let source = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format,
            dataset.row_count(),
            dataset.column_count(),
        );

        Ok((dataset, source))
    }

    /// Parse bytes directly with a known delimiter.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut records = reader.records();

        let first = match records.next() {
            Some(record) => record?,
            None => return Err(SheetfuseError::EmptyData("no rows found".to_string())),
        };

        let (headers, mut rows) = if self.config.has_header {
            let headers: Vec<String> = first.iter().map(|s| s.to_string()).collect();
            (headers, Vec::new())
        } else {
            // Generate column names and keep the first record as data.
            let headers = (0..first.len())
                .map(|i| format!("column_{}", i + 1))
                .collect();
            (headers, vec![typed_row(&first)])
        };

        if headers.is_empty() {
            return Err(SheetfuseError::EmptyData("no columns found".to_string()));
        }

        let width = headers.len();
        for record in records {
            if let Some(max) = self.config.max_rows {
                if rows.len() >= max {
                    break;
                }
            }

            let mut row = typed_row(&record?);
            // Ragged input: pad short rows, drop spill-over.
            row.resize(width, CellValue::Empty);
            rows.push(row);
        }

        Ok(Dataset::new(headers, rows, delimiter))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify every field of a record into a typed cell.
fn typed_row(record: &csv::StringRecord) -> Vec<CellValue> {
    record.iter().map(CellValue::parse).collect()
}

/// Detect the delimiter by analyzing the first few lines.
///
/// The winner is the candidate with the most consistent, non-zero field
/// count across the sample; a tab gets a slight edge since tabs rarely
/// occur inside actual data.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(SheetfuseError::EmptyData("no lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0usize;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent {
            first_count * 1000 + usize::from(delim == b'\t') * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_detect_delimiter_ignores_quoted_commas() {
        let data = b"a;b\n\"x,y\";2\n\"p,q\";4";
        assert_eq!(detect_delimiter(data).unwrap(), b';');
    }

    #[test]
    fn test_parse_types_cells() {
        let parser = Parser::new();
        let data = b"name,age,balance,account\nAlice,30,19.99,123456789012345\nBob,,$5,9\n";
        let table = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(table.headers, vec!["name", "age", "balance", "account"]);
        assert_eq!(table.get(0, 0), Some(&CellValue::Text("Alice".to_string())));
        assert_eq!(table.get(0, 1), Some(&CellValue::Int(30)));
        assert_eq!(table.get(0, 2), Some(&CellValue::Number(19.99)));
        assert_eq!(table.get(0, 3), Some(&CellValue::Int(123456789012345)));
        assert_eq!(table.get(1, 1), Some(&CellValue::Empty));
        assert_eq!(table.get(1, 2), Some(&CellValue::Text("$5".to_string())));
    }

    #[test]
    fn test_parse_pads_short_rows() {
        let parser = Parser::new();
        let data = b"a,b,c\n1,2\n";
        let table = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(table.get(0, 2), Some(&CellValue::Empty));
        assert!(table.is_rectangular());
    }

    #[test]
    fn test_parse_without_header_generates_names() {
        let parser = Parser::with_config(ParserConfig {
            has_header: false,
            ..ParserConfig::default()
        });
        let data = b"1,2\n3,4\n";
        let table = parser.parse_bytes(data, b',').unwrap();

        assert_eq!(table.headers, vec!["column_1", "column_2"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_parse_header_only_file() {
        let parser = Parser::new();
        let table = parser.parse_bytes(b"a,b,c\n", b',').unwrap();

        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_parse_max_rows() {
        let parser = Parser::with_config(ParserConfig {
            max_rows: Some(1),
            ..ParserConfig::default()
        });
        let table = parser.parse_bytes(b"a\n1\n2\n3\n", b',').unwrap();

        assert_eq!(table.row_count(), 1);
    }
}
