//! Tabular reader: raw CSV text and Excel workbooks into raw string rows.
//!
//! Output is not yet keyed by headers; header detection happens downstream
//! on the full table.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// A parsed table of raw string cells, before header detection.
///
/// Rows that were entirely blank in the source are already discarded.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// True when the table holds at least a header row and one data row.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.rows.len() >= 2
    }
}

const DELIMITER_CANDIDATES: [u8; 4] = [b',', b'\t', b';', b'|'];

/// Picks the candidate delimiter with the most occurrences in the first
/// line; comma wins a tie at zero.
fn sniff_delimiter(first_line: &str) -> u8 {
    let mut best = b',';
    let mut max_count = 0;
    for candidate in DELIMITER_CANDIDATES {
        let count = first_line.bytes().filter(|byte| *byte == candidate).count();
        if count > max_count {
            max_count = count;
            best = candidate;
        }
    }
    best
}

/// Strips one layer of surrounding quotes left over after CSV unquoting
/// (some vendor exports double-wrap, or single-quote, their cells).
fn strip_outer_quotes(value: &str) -> &str {
    let value = value.trim();
    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    let value = value.strip_suffix(['"', '\'']).unwrap_or(value);
    value.trim()
}

/// Parses CSV/TXT content into raw rows.
///
/// Blank lines are discarded up front, the delimiter is sniffed from the
/// first line, and quoted fields are honored. Fewer than two non-blank lines
/// yields an empty table ("no data found" downstream).
pub fn read_csv_text(text: &str) -> Result<RawTable> {
    let text = text.trim_start_matches('\u{feff}');
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Ok(RawTable::default());
    }
    let delimiter = sniff_delimiter(lines[0]);
    debug!(delimiter = %char::from(delimiter), lines = lines.len(), "parsing csv text");

    let joined = lines.join("\n");
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(joined.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::Read(error.to_string()))?;
        let row: Vec<String> = record
            .iter()
            .map(|cell| strip_outer_quotes(cell).to_string())
            .collect();
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        rows.push(row);
    }
    Ok(RawTable { rows })
}

/// One decoded worksheet, kept in the workbook's native order.
struct SheetRows {
    name: String,
    rows: Vec<Vec<String>>,
}

/// Index of the sheet with the most rows; ties keep the earliest sheet.
fn pick_best_sheet(sheets: &[SheetRows]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (index, sheet) in sheets.iter().enumerate() {
        if best.is_none_or(|current| sheet.rows.len() > sheets[current].rows.len()) {
            best = Some(index);
        }
    }
    best
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Decodes an XLSX/XLS workbook and returns the most data-rich sheet as raw
/// rows.
///
/// Every sheet is converted to row-major cells with empty-string defaults;
/// the sheet with the most rows wins. Sheets that fail to decode are skipped
/// rather than failing the upload.
pub fn read_workbook_bytes(bytes: &[u8]) -> Result<RawTable> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|error| IngestError::Read(error.to_string()))?;
    let names: Vec<String> = workbook.sheet_names().to_vec();

    let mut sheets = Vec::new();
    for name in names {
        let range = match workbook.worksheet_range(&name) {
            Ok(range) => range,
            Err(error) => {
                debug!(sheet = %name, error = %error, "skipping unreadable sheet");
                continue;
            }
        };
        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|cells| cells.iter().map(cell_to_string).collect())
            .collect();
        sheets.push(SheetRows { name, rows });
    }

    let Some(best) = pick_best_sheet(&sheets) else {
        return Ok(RawTable::default());
    };
    debug!(sheet = %sheets[best].name, rows = sheets[best].rows.len(), "selected worksheet");

    let rows: Vec<Vec<String>> = sheets
        .swap_remove(best)
        .rows
        .into_iter()
        .filter(|row| !row.iter().all(|cell| cell.is_empty()))
        .collect();
    if rows.len() < 2 {
        return Ok(RawTable::default());
    }
    Ok(RawTable { rows })
}
