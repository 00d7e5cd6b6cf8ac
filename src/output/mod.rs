//! Dataset serialization
//!
//! Writers for the three export formats, plus run summary statistics. All of
//! this consumes the finished dataset; nothing here touches the network.

mod csv_output;
mod json_output;
mod stats;
mod traits;
mod xlsx_output;

pub use csv_output::CsvOutput;
pub use json_output::JsonOutput;
pub use stats::{print_statistics, DatasetStatistics};
pub use traits::{DatasetWriter, OutputError, OutputResult};
pub use xlsx_output::XlsxOutput;

use crate::config::OutputConfig;
use crate::record::CourseRow;

/// Writes the dataset to every configured output file
///
/// An empty dataset writes nothing, matching the original behavior of
/// skipping file creation when a run found no data.
pub fn write_outputs(rows: &[CourseRow], config: &OutputConfig) -> OutputResult<()> {
    if rows.is_empty() {
        tracing::warn!("No data to save; skipping output files");
        return Ok(());
    }

    let writers: Vec<Box<dyn DatasetWriter>> = vec![
        Box::new(CsvOutput::new(&config.csv_path)),
        Box::new(JsonOutput::new(&config.json_path)),
        Box::new(XlsxOutput::new(&config.xlsx_path)),
    ];

    for writer in writers {
        writer.write(rows)?;
        tracing::info!(
            "{} data saved to {}",
            writer.format_name(),
            writer.destination().display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{expand_rows, CourseRecord};
    use tempfile::tempdir;

    #[test]
    fn test_write_outputs_creates_all_files() {
        let dir = tempdir().unwrap();
        let config = OutputConfig {
            csv_path: dir.path().join("c.csv").to_string_lossy().into_owned(),
            json_path: dir.path().join("c.json").to_string_lossy().into_owned(),
            xlsx_path: dir.path().join("c.xlsx").to_string_lossy().into_owned(),
        };

        let rows = expand_rows(&CourseRecord::default(), &["+994 1".to_string()]);
        write_outputs(&rows, &config).unwrap();

        assert!(dir.path().join("c.csv").exists());
        assert!(dir.path().join("c.json").exists());
        assert!(dir.path().join("c.xlsx").exists());
    }

    #[test]
    fn test_write_outputs_skips_empty_dataset() {
        let dir = tempdir().unwrap();
        let config = OutputConfig {
            csv_path: dir.path().join("c.csv").to_string_lossy().into_owned(),
            json_path: dir.path().join("c.json").to_string_lossy().into_owned(),
            xlsx_path: dir.path().join("c.xlsx").to_string_lossy().into_owned(),
        };

        write_outputs(&[], &config).unwrap();

        assert!(!dir.path().join("c.csv").exists());
        assert!(!dir.path().join("c.json").exists());
    }
}
