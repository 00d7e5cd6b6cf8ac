//! XLSX export
//!
//! Matches the spreadsheet consumers already use: styled header row, wrapped
//! cells, column widths sized from the first rows, header frozen in place.

use crate::output::traits::{DatasetWriter, OutputResult};
use crate::record::{CourseRow, OUTPUT_COLUMNS};
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};
use std::path::{Path, PathBuf};

const SHEET_NAME: &str = "Kurstap Courses";
const HEADER_COLOR: u32 = 0x366092;
const MAX_COLUMN_WIDTH: usize = 50;

/// How many rows are sampled when sizing columns
const WIDTH_SAMPLE_ROWS: usize = 100;

/// Writes the dataset as a formatted spreadsheet
pub struct XlsxOutput {
    path: PathBuf,
}

impl XlsxOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetWriter for XlsxOutput {
    fn format_name(&self) -> &'static str {
        "XLSX"
    }

    fn destination(&self) -> &Path {
        &self.path
    }

    fn write(&self, rows: &[CourseRow]) -> OutputResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        let header_format = Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(HEADER_COLOR))
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap();

        let cell_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);

        for (col, header) in OUTPUT_COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (row_index, row) in rows.iter().enumerate() {
            for (col, value) in row.values().iter().enumerate() {
                worksheet.write_string_with_format(
                    (row_index + 1) as u32,
                    col as u16,
                    *value,
                    &cell_format,
                )?;
            }
        }

        for (col, width) in column_widths(rows).into_iter().enumerate() {
            worksheet.set_column_width(col as u16, width as f64)?;
        }

        // Keep the header visible while scrolling
        worksheet.set_freeze_panes(1, 0)?;

        workbook.save(&self.path)?;
        Ok(())
    }
}

/// Column widths sized to content, padded and capped
fn column_widths(rows: &[CourseRow]) -> Vec<usize> {
    OUTPUT_COLUMNS
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let mut width = header.chars().count();
            for row in rows.iter().take(WIDTH_SAMPLE_ROWS) {
                width = width.max(row.values()[col].chars().count());
            }
            (width + 2).min(MAX_COLUMN_WIDTH)
        })
        .collect()
}
