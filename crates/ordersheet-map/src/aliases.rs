//! Known vendor spellings for each canonical field.
//!
//! Pure read-only configuration, collected from real apparel/footwear
//! purchase-order sheets. Entries are compared after normalization, so the
//! casing and separators used here are purely cosmetic.

use ordersheet_model::CanonicalField;

/// Alias lists per canonical field, in canonical enumeration order.
pub static FIELD_ALIASES: &[(CanonicalField, &[&str])] = &[
    (
        CanonicalField::Sku,
        &[
            "sku",
            "our sku",
            "internal sku",
            "item sku",
            "product sku",
            "style number",
            "style #",
            "style",
            "style code",
            "style no",
            "article number",
            "article #",
            "article",
            "art no",
            "art #",
            "item number",
            "item #",
            "item no",
            "item code",
            "product code",
            "prod code",
            "code",
            "reference",
            "ref",
            "model",
            "model number",
            "model #",
            "part number",
            "part #",
        ],
    ),
    (
        CanonicalField::VendorSku,
        &[
            "vendor sku",
            "vendor_sku",
            "supplier sku",
            "factory sku",
            "manufacturer sku",
            "mfr sku",
            "mfg sku",
            "supplier code",
            "vendor code",
            "vendor item",
            "vendor ref",
            "supplier ref",
            "factory code",
            "factory ref",
            "external sku",
        ],
    ),
    (
        CanonicalField::ProductName,
        &[
            "product name",
            "product_name",
            "product",
            "name",
            "description",
            "title",
            "item",
            "item name",
            "item description",
            "product description",
            "style name",
            "style description",
            "article name",
            "article description",
            "product title",
            "item title",
            "goods",
            "goods description",
            "merchandise",
            "merch",
            "desc",
            "product desc",
        ],
    ),
    (
        CanonicalField::VariantTitle,
        &[
            "variant",
            "variant title",
            "variant_title",
            "option",
            "variation",
            "variant name",
            "variant description",
            "option value",
        ],
    ),
    (
        CanonicalField::Size,
        &[
            "size",
            "sz",
            "sizes",
            "sizing",
            "size code",
            "size value",
            "dimension",
            "dimensions",
            "product size",
            "item size",
            "s/m/l",
            "xs-xl",
            "size range",
        ],
    ),
    (
        CanonicalField::Color,
        &[
            "color",
            "colour",
            "col",
            "colors",
            "colours",
            "color code",
            "colour code",
            "color name",
            "colour name",
            "colorway",
            "colourway",
            "shade",
            "hue",
            "tint",
            "color/colour",
        ],
    ),
    (
        CanonicalField::Material,
        &[
            "material",
            "fabric",
            "composition",
            "materials",
            "fabrics",
            "content",
            "fabric content",
            "material content",
            "fabric composition",
            "textile",
            "cloth",
            "fiber",
            "fibre",
        ],
    ),
    (
        CanonicalField::Qty,
        &[
            "qty",
            "quantity",
            "units",
            "order qty",
            "order quantity",
            "amount",
            "count",
            "pcs",
            "pieces",
            "total qty",
            "total quantity",
            "ordered",
            "ordered qty",
            "order units",
            "unit count",
            "no of units",
            "number of units",
            "# of units",
            "num units",
            "pack qty",
            "case qty",
            "carton qty",
            "stock",
            "inventory",
            "qty ordered",
            "quantity ordered",
            "order amount",
        ],
    ),
    (
        CanonicalField::UnitCost,
        &[
            "unit cost",
            "unit_cost",
            "cost",
            "price",
            "unit price",
            "wholesale",
            "wholesale price",
            "cost price",
            "fob",
            "fob price",
            "purchase price",
            "buy price",
            "buying price",
            "landed cost",
            "cost per unit",
            "price per unit",
            "ex-factory",
            "exw",
            "exw price",
            "factory price",
            "vendor price",
            "supplier price",
            "net price",
            "cost each",
            "each cost",
            "unit $",
            "$ per unit",
            "cogs",
            "first cost",
            "1st cost",
        ],
    ),
    (
        CanonicalField::UnitRetail,
        &[
            "unit retail",
            "unit_retail",
            "retail",
            "rrp",
            "msrp",
            "retail price",
            "srp",
            "selling price",
            "sell price",
            "recommended retail",
            "suggested retail",
            "list price",
            "sales price",
            "retail $",
            "price retail",
            "consumer price",
            "ticket price",
            "tag price",
            "sticker price",
            "full price",
            "compare at",
            "compare at price",
            "original price",
        ],
    ),
    (
        CanonicalField::Barcode,
        &[
            "barcode",
            "upc",
            "ean",
            "gtin",
            "upc code",
            "ean code",
            "upc-a",
            "ean-13",
            "ean13",
            "upc a",
            "bar code",
            "scan code",
            "gtin-14",
            "gtin14",
            "isbn",
            "asin",
        ],
    ),
    (
        CanonicalField::Weight,
        &[
            "weight",
            "wt",
            "wgt",
            "gross weight",
            "net weight",
            "item weight",
            "product weight",
            "unit weight",
            "weight (kg)",
            "weight (lb)",
            "weight kg",
            "weight lb",
            "kg",
            "lbs",
            "grams",
            "g",
        ],
    ),
    (
        CanonicalField::HsCode,
        &[
            "hs code",
            "hs_code",
            "tariff code",
            "hts",
            "hts code",
            "harmonized code",
            "customs code",
            "tariff",
            "hs number",
            "commodity code",
            "schedule b",
            "hts number",
        ],
    ),
    (
        CanonicalField::CountryOfOrigin,
        &[
            "country of origin",
            "origin",
            "coo",
            "made in",
            "country",
            "manufacturing country",
            "source country",
            "produced in",
            "manufactured in",
            "origin country",
            "mfg country",
        ],
    ),
];

/// Alias list for one canonical field.
#[must_use]
pub fn aliases_for(field: CanonicalField) -> &'static [&'static str] {
    FIELD_ALIASES
        .iter()
        .find(|(candidate, _)| *candidate == field)
        .map(|(_, aliases)| *aliases)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_field_in_order() {
        let fields: Vec<CanonicalField> = FIELD_ALIASES.iter().map(|(field, _)| *field).collect();
        assert_eq!(fields, CanonicalField::ALL);
    }

    #[test]
    fn aliases_for_unlisted_lookup_is_safe() {
        for field in CanonicalField::ALL {
            assert!(!aliases_for(field).is_empty());
        }
    }
}
