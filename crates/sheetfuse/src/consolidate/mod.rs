//! Column consolidation: token formatting, ordered selection, and the
//! merge engine.

mod engine;
mod format;
mod selection;

pub use engine::{ConsolidateReport, Consolidator, DEFAULT_DERIVED_COLUMN};
pub use format::format_cell;
pub use selection::Selection;
