use crate::core::{NormalizedTable, RawRow, RawTable};
use std::collections::HashMap;

/// Make header names unique and non-empty, left to right.
///
/// Absent or blank cells become `col_{i}` (zero-based). A name seen before
/// gets an occurrence suffix: the second "Qty" becomes "Qty_1", the third
/// "Qty_2". Generated names are not re-checked against later originals, so
/// `["A", "A", "A_1"]` comes out with a duplicate "A_1". That matches the
/// observed behavior of the tool this replaces and is kept as-is.
pub fn make_unique_columns(cells: &RawRow) -> Vec<String> {
    let mut result = Vec::with_capacity(cells.len());
    let mut counter: HashMap<String, usize> = HashMap::new();

    for (i, cell) in cells.iter().enumerate() {
        let trimmed = cell.as_deref().unwrap_or("").trim();
        let candidate = if trimmed.is_empty() {
            format!("col_{}", i)
        } else {
            trimmed.to_string()
        };

        match counter.get_mut(&candidate) {
            Some(count) => {
                *count += 1;
                result.push(format!("{}_{}", candidate, count));
            }
            None => {
                counter.insert(candidate.clone(), 0);
                result.push(candidate);
            }
        }
    }

    result
}

fn is_blank(row: &RawRow) -> bool {
    row.iter().all(|cell| match cell {
        Some(text) => text.trim().is_empty(),
        None => true,
    })
}

/// Normalize one raw extracted table into a rectangular dataset.
///
/// Returns `None` when the table holds no usable data: fewer than two rows
/// (a table needs a header plus at least one data row), or every data row
/// blank. Never errors. The header width is fixed by the first row's length
/// before deduplication; surviving data rows are right-padded with empty
/// strings or truncated to match it.
pub fn normalize(raw: &RawTable) -> Option<NormalizedTable> {
    if raw.len() < 2 {
        return None;
    }

    let raw_header = &raw[0];
    let surviving: Vec<&RawRow> = raw[1..].iter().filter(|row| !is_blank(row)).collect();

    if surviving.is_empty() {
        return None;
    }

    let n_cols = raw_header.len();
    let header = make_unique_columns(raw_header);

    let rows = surviving
        .into_iter()
        .map(|row| {
            let mut cells: Vec<String> = row
                .iter()
                .take(n_cols)
                .map(|cell| cell.clone().unwrap_or_default())
                .collect();
            cells.resize(n_cols, String::new());
            cells
        })
        .collect();

    Some(NormalizedTable { header, rows })
}
