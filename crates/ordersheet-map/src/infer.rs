//! Role inference for numeric columns that match no alias.
//!
//! Used only to backfill `qty`/`unit_cost` when the canonical columns are
//! absent: a column of mostly whole numbers in quantity range is qty-like, a
//! column with decimals or in price range is cost-like.

/// Inferred role for an unmapped numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericRole {
    Qty,
    Cost,
}

/// Classifies a column's non-empty values, or `None` when the column looks
/// textual or falls outside both ranges.
///
/// A column qualifies when at least half its values parse as positive
/// numbers (currency symbols and thousands separators stripped).
#[must_use]
pub fn infer_numeric_role(values: &[String]) -> Option<NumericRole> {
    if values.is_empty() {
        return None;
    }
    let numeric: Vec<f64> = values
        .iter()
        .filter_map(|value| parse_loose(value))
        .filter(|number| *number > 0.0)
        .collect();
    if (numeric.len() as f64) < values.len() as f64 * 0.5 {
        return None;
    }
    let mean = numeric.iter().sum::<f64>() / numeric.len() as f64;
    let has_decimals = numeric.iter().any(|number| number.fract() != 0.0);

    // Quantities are usually whole numbers; costs have decimals or sit in a
    // typical price range.
    if !has_decimals && mean > 0.5 && mean < 10_000.0 {
        return Some(NumericRole::Qty);
    }
    if has_decimals || (mean > 1.0 && mean < 100_000.0) {
        return Some(NumericRole::Cost);
    }
    None
}

fn parse_loose(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|ch| !matches!(ch, '$' | '€' | '£' | '¥' | ',') && !ch.is_whitespace())
        .collect();
    cleaned.parse().ok()
}
