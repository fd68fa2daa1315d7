//! The closed set of canonical line-item fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A canonical line-item attribute that vendor spreadsheet columns map onto.
///
/// The set is closed: headers that map to none of these are either discarded
/// or, when their values look numeric, considered for qty/cost inference.
/// Enumeration order doubles as the tie-break order when two fields score
/// equally in fuzzy matching, so the ordering here is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Sku,
    VendorSku,
    ProductName,
    VariantTitle,
    Size,
    Color,
    Material,
    Qty,
    UnitCost,
    UnitRetail,
    Barcode,
    Weight,
    HsCode,
    CountryOfOrigin,
}

impl CanonicalField {
    /// Every canonical field, in enumeration (tie-break) order.
    pub const ALL: [CanonicalField; 14] = [
        CanonicalField::Sku,
        CanonicalField::VendorSku,
        CanonicalField::ProductName,
        CanonicalField::VariantTitle,
        CanonicalField::Size,
        CanonicalField::Color,
        CanonicalField::Material,
        CanonicalField::Qty,
        CanonicalField::UnitCost,
        CanonicalField::UnitRetail,
        CanonicalField::Barcode,
        CanonicalField::Weight,
        CanonicalField::HsCode,
        CanonicalField::CountryOfOrigin,
    ];

    /// Snake-case name as it appears in serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sku => "sku",
            Self::VendorSku => "vendor_sku",
            Self::ProductName => "product_name",
            Self::VariantTitle => "variant_title",
            Self::Size => "size",
            Self::Color => "color",
            Self::Material => "material",
            Self::Qty => "qty",
            Self::UnitCost => "unit_cost",
            Self::UnitRetail => "unit_retail",
            Self::Barcode => "barcode",
            Self::Weight => "weight",
            Self::HsCode => "hs_code",
            Self::CountryOfOrigin => "country_of_origin",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
