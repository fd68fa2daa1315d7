//! Header-to-field mapping: exact alias lookup, then fuzzy scoring.

use ordersheet_model::CanonicalField;

use crate::aliases::FIELD_ALIASES;
use crate::normalize::normalize_header;
use crate::score::{MATCH_THRESHOLD, similarity};

/// Maps one header cell's text to a canonical field, or `None`.
///
/// Exact normalized equality against any alias wins immediately; otherwise
/// every alias is fuzzy-scored and the best field at or above
/// [`MATCH_THRESHOLD`] is taken. Score ties keep the first field in canonical
/// enumeration order, so the result is stable across calls for any input.
#[must_use]
pub fn map_column(header: &str) -> Option<CanonicalField> {
    let normalized = normalize_header(header);
    if normalized.is_empty() {
        return None;
    }

    for (field, aliases) in FIELD_ALIASES {
        for alias in *aliases {
            if normalize_header(alias) == normalized {
                return Some(*field);
            }
        }
    }

    let mut best: Option<(CanonicalField, f64)> = None;
    for (field, aliases) in FIELD_ALIASES {
        for alias in *aliases {
            let score = similarity(alias, header);
            if score >= MATCH_THRESHOLD && best.is_none_or(|(_, current)| score > current) {
                best = Some((*field, score));
            }
        }
    }
    best.map(|(field, _)| field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_alias_beats_fuzzy() {
        assert_eq!(map_column("Style #"), Some(CanonicalField::Sku));
        assert_eq!(map_column("MSRP"), Some(CanonicalField::UnitRetail));
        assert_eq!(map_column("Item Description"), Some(CanonicalField::ProductName));
    }

    #[test]
    fn fuzzy_containment_maps_decorated_headers() {
        assert_eq!(
            map_column("Wholesale Price (USD)"),
            Some(CanonicalField::UnitCost)
        );
        assert_eq!(map_column("Total Qty Ordered"), Some(CanonicalField::Qty));
    }

    #[test]
    fn below_threshold_is_no_match() {
        // one of two words shared scores 0.7, under the 0.8 threshold
        assert_eq!(map_column("internal notes"), None);
        assert_eq!(map_column("zzz"), None);
    }

    #[test]
    fn empty_header_is_no_match() {
        assert_eq!(map_column(""), None);
        assert_eq!(map_column("   "), None);
    }
}
