//! CSV export
//!
//! Header row comes from the `CourseRow` field names, keeping the three
//! export formats on one schema definition.

use crate::output::traits::{DatasetWriter, OutputResult};
use crate::record::CourseRow;
use std::path::{Path, PathBuf};

/// Writes the dataset as a delimited text file
pub struct CsvOutput {
    path: PathBuf,
}

impl CsvOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetWriter for CsvOutput {
    fn format_name(&self) -> &'static str {
        "CSV"
    }

    fn destination(&self) -> &Path {
        &self.path
    }

    fn write(&self, rows: &[CourseRow]) -> OutputResult<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;

        for row in rows {
            writer.serialize(row)?;
        }

        writer.flush()?;
        Ok(())
    }
}
