//! Numeric cell parsing and wholesale/retail disambiguation.

/// Parses a spreadsheet cell as a number, tolerating currency symbols,
/// thousands separators, and stray whitespace. Unparsable cells become 0.
#[must_use]
pub fn parse_number(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | '¥' | ',') && !c.is_whitespace())
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Final per-row price assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPrices {
    pub cost: f64,
    pub retail: Option<f64>,
}

/// Resolves a row's cost and retail prices.
///
/// When both prices are present and positive, the smaller is taken as the
/// wholesale cost and the larger as retail, regardless of which column each
/// came from. Vendors label price columns inconsistently enough that the
/// magnitudes are more trustworthy than the headers.
#[must_use]
pub fn resolve_prices(cost: f64, retail: Option<f64>) -> ResolvedPrices {
    let cost = cost.max(0.0);
    let retail = retail.filter(|value| *value > 0.0);
    match retail {
        Some(retail) if cost > 0.0 => ResolvedPrices {
            cost: cost.min(retail),
            retail: Some(cost.max(retail)),
        },
        _ => ResolvedPrices { cost, retail },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_symbols_and_separators_are_stripped() {
        assert_eq!(parse_number("$1,234.50"), 1234.5);
        assert_eq!(parse_number("€ 99"), 99.0);
        assert_eq!(parse_number("£12.00"), 12.0);
        assert_eq!(parse_number("¥1,000"), 1000.0);
    }

    #[test]
    fn junk_parses_to_zero() {
        assert_eq!(parse_number("n/a"), 0.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("TBD"), 0.0);
    }

    #[test]
    fn negative_numbers_survive_parsing() {
        assert_eq!(parse_number("-5"), -5.0);
    }

    #[test]
    fn swapped_columns_are_corrected_by_magnitude() {
        let resolved = resolve_prices(24.99, Some(10.0));
        assert_eq!(resolved.cost, 10.0);
        assert_eq!(resolved.retail, Some(24.99));
    }

    #[test]
    fn correctly_ordered_prices_pass_through() {
        let resolved = resolve_prices(10.0, Some(24.99));
        assert_eq!(resolved.cost, 10.0);
        assert_eq!(resolved.retail, Some(24.99));
    }

    #[test]
    fn zero_retail_is_dropped() {
        let resolved = resolve_prices(10.0, Some(0.0));
        assert_eq!(resolved.cost, 10.0);
        assert_eq!(resolved.retail, None);
    }

    #[test]
    fn negative_cost_clamps_to_zero() {
        let resolved = resolve_prices(-3.0, None);
        assert_eq!(resolved.cost, 0.0);
        assert_eq!(resolved.retail, None);
    }

    #[test]
    fn cost_only_rows_keep_their_cost() {
        let resolved = resolve_prices(7.5, None);
        assert_eq!(resolved.cost, 7.5);
        assert_eq!(resolved.retail, None);
    }
}
