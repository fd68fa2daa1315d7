//! Header text normalization shared by alias lookup and fuzzy scoring.

/// Normalizes a header for comparison: lowercase, separators to spaces,
/// quote/bracket characters removed, whitespace collapsed.
///
/// Both the incoming header and every alias go through this before any
/// comparison, so `"Unit_Cost (USD)"` and `"unit cost usd"` are equal.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|ch| match ch {
            '_' | '-' | '.' | '/' | '\\' => ' ',
            other => other,
        })
        .filter(|ch| !matches!(ch, '\'' | '"' | '(' | ')' | '[' | ']' | '{' | '}'))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
