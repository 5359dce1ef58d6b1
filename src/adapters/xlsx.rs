use crate::core::{Result, SheetSink, SheetWriter};
use crate::utils::validation::validate_non_empty_string;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Spreadsheet output backed by `rust_xlsxwriter`.
///
/// Rows accumulate in the in-memory workbook; nothing touches disk until
/// `persist`, so an abandoned sink leaves no partial file behind.
#[derive(Debug, Clone, Default)]
pub struct XlsxWriter;

impl XlsxWriter {
    pub fn new() -> Self {
        Self
    }
}

impl SheetWriter for XlsxWriter {
    type Sink = XlsxSink;

    fn create_sheet(&self, name: &str) -> Result<XlsxSink> {
        validate_non_empty_string("sheet_name", name)?;

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;

        Ok(XlsxSink {
            workbook,
            next_row: 0,
        })
    }
}

pub struct XlsxSink {
    workbook: Workbook,
    next_row: u32,
}

impl SheetSink for XlsxSink {
    fn append_row(&mut self, cells: &[String]) -> Result<()> {
        let worksheet = self.workbook.worksheet_from_index(0)?;
        for (col, cell) in cells.iter().enumerate() {
            worksheet.write_string(self.next_row, col as u16, cell)?;
        }
        self.next_row += 1;
        Ok(())
    }

    fn persist(mut self, path: &Path) -> Result<()> {
        self.workbook.save(path)?;
        Ok(())
    }
}
