//! Main Sheetfuse struct and public API.

use std::path::Path;

use crate::codec::{Parser, ParserConfig, SourceMetadata, Writer};
use crate::consolidate::{
    ConsolidateReport, Consolidator, Selection, DEFAULT_DERIVED_COLUMN,
};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::render;

/// Configuration for Sheetfuse.
#[derive(Debug, Clone)]
pub struct SheetfuseConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Name of the derived column the consolidator owns.
    pub derived_column: String,
}

impl Default for SheetfuseConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            derived_column: DEFAULT_DERIVED_COLUMN.to_string(),
        }
    }
}

/// The end-to-end column consolidation surface.
///
/// Composes the codec, the consolidator, and the renderer behind one entry
/// point: load a file into a [`Dataset`], rebuild its derived column from
/// a [`Selection`], then export or preview the result. The dataset itself
/// is handed back and forth by exclusive access; `Sheetfuse` carries no
/// state between calls beyond its configuration.
pub struct Sheetfuse {
    parser: Parser,
    consolidator: Consolidator,
}

impl Sheetfuse {
    /// Create a new instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(SheetfuseConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: SheetfuseConfig) -> Self {
        Self {
            parser: Parser::with_config(config.parser),
            consolidator: Consolidator::with_derived_column(config.derived_column),
        }
    }

    /// Use a different derived column name.
    pub fn with_derived_column(mut self, name: impl Into<String>) -> Self {
        self.consolidator = Consolidator::with_derived_column(name);
        self
    }

    /// The derived column name in use.
    pub fn derived_column(&self) -> &str {
        self.consolidator.derived_column()
    }

    /// Load a delimited data file into a dataset.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        self.parser.parse_file(path)
    }

    /// Rebuild the dataset's derived column from the selection.
    pub fn consolidate(
        &self,
        dataset: &mut Dataset,
        selection: &Selection,
    ) -> Result<ConsolidateReport> {
        self.consolidator.consolidate(dataset, selection)
    }

    /// Render the dataset as an HTML table fragment.
    pub fn render_html(&self, dataset: &Dataset) -> String {
        render::render_html(dataset)
    }

    /// Export the dataset to a delimited file using its own delimiter.
    pub fn export(&self, dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
        Writer::new().write_file(dataset, path)
    }
}

impl Default for Sheetfuse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_and_consolidate() {
        let file = create_test_file("name,account\nAlice,123456789012345\nBob,77\n");

        let sheetfuse = Sheetfuse::new();
        let (mut dataset, source) = sheetfuse.load(file.path()).unwrap();

        assert_eq!(source.format, "csv");
        assert_eq!(source.row_count, 2);

        let selection = Selection::from_names(["name", "account"]);
        let report = sheetfuse.consolidate(&mut dataset, &selection).unwrap();

        assert_eq!(report.rows_merged, 2);
        assert_eq!(
            dataset.get(0, 2).unwrap().to_string(),
            "Alice 123456789012345"
        );
        assert_eq!(dataset.get(1, 2).unwrap().to_string(), "Bob $77.00");
    }

    #[test]
    fn test_custom_derived_column() {
        let file = create_test_file("a\nx\n");

        let sheetfuse = Sheetfuse::new().with_derived_column("File Name");
        let (mut dataset, _) = sheetfuse.load(file.path()).unwrap();
        sheetfuse
            .consolidate(&mut dataset, &Selection::from_names(["a"]))
            .unwrap();

        assert_eq!(dataset.headers, vec!["a", "File Name"]);
    }
}
