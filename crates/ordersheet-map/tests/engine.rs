//! Integration tests for the column mapper.

use ordersheet_map::{FIELD_ALIASES, map_column};
use ordersheet_model::CanonicalField;

#[test]
fn every_alias_maps_to_its_own_field() {
    for (field, aliases) in FIELD_ALIASES {
        for alias in *aliases {
            assert_eq!(
                map_column(alias),
                Some(*field),
                "alias {alias:?} should map to {field}"
            );
        }
    }
}

#[test]
fn alias_matching_ignores_case_and_whitespace() {
    assert_eq!(map_column("  WHOLESALE PRICE  "), Some(CanonicalField::UnitCost));
    assert_eq!(map_column("Country Of Origin"), Some(CanonicalField::CountryOfOrigin));
    assert_eq!(map_column("hs_code"), Some(CanonicalField::HsCode));
}

#[test]
fn mapping_is_idempotent() {
    let headers = [
        "Style #",
        "Item Description",
        "Qty",
        "Wholesale Price",
        "Colourway",
        "made_in",
        "mystery column",
    ];
    for header in headers {
        let first = map_column(header);
        for _ in 0..3 {
            assert_eq!(map_column(header), first, "unstable mapping for {header:?}");
        }
    }
}

#[test]
fn separators_inside_headers_do_not_block_matches() {
    assert_eq!(map_column("unit-cost"), Some(CanonicalField::UnitCost));
    assert_eq!(map_column("vendor.sku"), Some(CanonicalField::VendorSku));
    assert_eq!(map_column("variant/title"), Some(CanonicalField::VariantTitle));
}

#[test]
fn unrelated_headers_stay_unmapped() {
    for header in ["comments", "approved by", "delivery window", "zzz"] {
        assert_eq!(map_column(header), None, "{header:?} should not map");
    }
}
