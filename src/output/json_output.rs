//! JSON export

use crate::output::traits::{DatasetWriter, OutputResult};
use crate::record::CourseRow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the dataset as a pretty-printed JSON array
pub struct JsonOutput {
    path: PathBuf,
}

impl JsonOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetWriter for JsonOutput {
    fn format_name(&self) -> &'static str {
        "JSON"
    }

    fn destination(&self) -> &Path {
        &self.path
    }

    fn write(&self, rows: &[CourseRow]) -> OutputResult<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, rows)?;
        writer.flush()?;
        Ok(())
    }
}
