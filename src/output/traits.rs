//! Output writer trait and error types
//!
//! Each export format implements `DatasetWriter`; the formats are pure
//! serialization over the finished dataset and know nothing about the crawl.

use crate::record::CourseRow;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A sink that serializes the full dataset to one file format
pub trait DatasetWriter {
    /// Short format name used in log lines
    fn format_name(&self) -> &'static str;

    /// Destination path of this writer
    fn destination(&self) -> &Path;

    /// Writes all rows; called once per run with the complete dataset
    fn write(&self, rows: &[CourseRow]) -> OutputResult<()>;
}
