//! Header-row detection.
//!
//! Vendor sheets routinely open with a logo banner, contact block, or order
//! metadata before the real column headers. Each of the first few rows is
//! scored by how header-like it looks and the best one wins.

use ordersheet_map::map_column;

/// Rows probed from the top of the table.
const MAX_PROBE_ROWS: usize = 10;
/// Weak credit for any cell that is not purely numeric.
const TEXT_CELL_WEIGHT: f64 = 0.1;

/// Scores the first [`MAX_PROBE_ROWS`] rows and returns the index of the
/// best candidate header row.
///
/// A cell that maps to a canonical field scores 1.0; any other non-numeric
/// cell scores [`TEXT_CELL_WEIGHT`]. The earliest row with the strictly
/// highest score wins, and a table with no recognizable header at all falls
/// back to row 0.
#[must_use]
pub fn locate_header_row(rows: &[Vec<String>]) -> usize {
    let mut best_row = 0;
    let mut best_score = 0.0;
    for (index, row) in rows.iter().take(MAX_PROBE_ROWS).enumerate() {
        let score = score_row(row);
        if score > best_score {
            best_score = score;
            best_row = index;
        }
    }
    best_row
}

fn score_row(row: &[String]) -> f64 {
    let mut score = 0.0;
    for cell in row {
        if map_column(cell).is_some() {
            score += 1.0;
        } else if !has_numeric_prefix(cell) {
            score += TEXT_CELL_WEIGHT;
        }
    }
    score
}

/// A cell counts as numeric when it opens with a parsable number, even with
/// trailing text: dates ("2026-08-01") and suffixed amounts ("18.50 USD")
/// earn no label credit.
fn has_numeric_prefix(cell: &str) -> bool {
    let cell = cell.trim();
    if !cell.starts_with(|ch: char| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.')) {
        return false;
    }
    (1..=cell.len())
        .filter(|end| cell.is_char_boundary(*end))
        .any(|end| cell[..end].parse::<f64>().is_ok())
}
