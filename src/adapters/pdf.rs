use crate::core::{PdfDocument, PdfEngine, RawRow, RawTable, Result};
use crate::utils::error::EtlError;
use lopdf::Document;
use regex::Regex;
use std::path::Path;

/// Minimum consecutive delimited lines that count as a table.
const MIN_TABLE_ROWS: usize = 2;

/// Table extraction backed by `lopdf` text extraction.
///
/// Works on the linearized text layer: a table is a maximal run of
/// consecutive lines that each split into two or more cells on tabs or runs
/// of two-plus spaces. Good for text-layer PDFs whose generators preserve
/// column gaps; reconstructing ruled grids from drawing operators is out of
/// scope for this engine.
pub struct LopdfEngine;

impl PdfEngine for LopdfEngine {
    type Doc = LopdfDocument;

    fn open(&self, path: &Path) -> Result<LopdfDocument> {
        let doc = Document::load(path).map_err(|e| EtlError::OpenFailure {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();

        Ok(LopdfDocument {
            doc,
            page_numbers,
            splitter: Regex::new(r"\t|\s{2,}").unwrap(),
        })
    }
}

pub struct LopdfDocument {
    doc: Document,
    page_numbers: Vec<u32>,
    splitter: Regex,
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn tables_on_page(&self, page: usize) -> Result<Vec<RawTable>> {
        let Some(&page_number) = self.page_numbers.get(page) else {
            return Ok(Vec::new());
        };

        let text = self.doc.extract_text(&[page_number])?;
        Ok(detect_tables(&text, &self.splitter))
    }
}

fn detect_tables(text: &str, splitter: &Regex) -> Vec<RawTable> {
    let mut tables = Vec::new();
    let mut current: RawTable = Vec::new();

    for line in text.lines() {
        let cells = split_cells(line, splitter);
        if cells.len() >= 2 {
            current.push(cells);
        } else {
            flush_run(&mut tables, &mut current);
        }
    }
    flush_run(&mut tables, &mut current);

    tables
}

fn flush_run(tables: &mut Vec<RawTable>, current: &mut RawTable) {
    if current.len() >= MIN_TABLE_ROWS {
        tables.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

fn split_cells(line: &str, splitter: &Regex) -> RawRow {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    splitter
        .split(trimmed)
        .map(|cell| {
            let cell = cell.trim();
            if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            }
        })
        .collect()
}
