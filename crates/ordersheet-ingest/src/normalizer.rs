//! Raw rows into normalized line items.
//!
//! This is where column mapping, numeric-role inference, price resolution,
//! and the validity gate all come together.

use ordersheet_map::{NumericRole, infer_numeric_role, map_column};
use ordersheet_model::{CanonicalField, FileUploadResult, IdSource, IngestSummary, LineItem};
use tracing::{debug, warn};

use crate::error::IngestError;
use crate::header::locate_header_row;
use crate::prices::{parse_number, resolve_prices};
use crate::reader::RawTable;

/// Estimation ratio when a row has retail but no cost: assume a standard
/// wholesale margin.
const COST_FROM_RETAIL_RATIO: f64 = 0.4;

/// Canonical values collected for one data row. First non-empty cell per
/// field wins when duplicate headers map to the same field.
#[derive(Default)]
struct MappedRow {
    sku: Option<String>,
    vendor_sku: Option<String>,
    product_name: Option<String>,
    variant_title: Option<String>,
    size: Option<String>,
    color: Option<String>,
    material: Option<String>,
    qty: Option<String>,
    unit_cost: Option<String>,
    unit_retail: Option<String>,
    barcode: Option<String>,
    weight: Option<String>,
    hs_code: Option<String>,
    country_of_origin: Option<String>,
}

impl MappedRow {
    fn slot(&mut self, field: CanonicalField) -> &mut Option<String> {
        match field {
            CanonicalField::Sku => &mut self.sku,
            CanonicalField::VendorSku => &mut self.vendor_sku,
            CanonicalField::ProductName => &mut self.product_name,
            CanonicalField::VariantTitle => &mut self.variant_title,
            CanonicalField::Size => &mut self.size,
            CanonicalField::Color => &mut self.color,
            CanonicalField::Material => &mut self.material,
            CanonicalField::Qty => &mut self.qty,
            CanonicalField::UnitCost => &mut self.unit_cost,
            CanonicalField::UnitRetail => &mut self.unit_retail,
            CanonicalField::Barcode => &mut self.barcode,
            CanonicalField::Weight => &mut self.weight,
            CanonicalField::HsCode => &mut self.hs_code,
            CanonicalField::CountryOfOrigin => &mut self.country_of_origin,
        }
    }

    fn set(&mut self, field: CanonicalField, value: &str) {
        let slot = self.slot(field);
        if slot.is_none() && !value.is_empty() {
            *slot = Some(value.to_string());
        }
    }
}

/// Normalizes a raw table into line items.
///
/// Locates the header row, maps headers to canonical fields, infers the role
/// of unmapped numeric columns, and validates each data row. Rows with no
/// product name or a non-positive quantity are skipped; a named row skipped
/// for quantity produces a warning. The result is a failure only when no
/// row at all survives.
pub fn normalize_table(table: &RawTable, ids: &mut dyn IdSource) -> FileUploadResult {
    if !table.has_data() {
        return FileUploadResult::failure(IngestError::EmptyTable.to_string());
    }

    let header_index = locate_header_row(&table.rows);
    let headers = &table.rows[header_index];
    let data_rows = &table.rows[header_index + 1..];

    let column_fields: Vec<Option<CanonicalField>> =
        headers.iter().map(|header| map_column(header)).collect();
    let inferred = infer_unmapped_columns(&column_fields, data_rows);
    debug!(
        header_row = header_index,
        mapped = column_fields.iter().flatten().count(),
        inferred = inferred.len(),
        "resolved column layout"
    );

    let mut items = Vec::new();
    let mut warnings = Vec::new();
    let mut skipped = 0usize;

    for (index, row) in data_rows.iter().enumerate() {
        let mut mapped = MappedRow::default();
        for (column, cell) in row.iter().enumerate() {
            if let Some(field) = column_fields.get(column).copied().flatten() {
                mapped.set(field, cell);
            }
        }
        for (column, role) in &inferred {
            let cell = row.get(*column).map(String::as_str).unwrap_or_default();
            match role {
                NumericRole::Qty => mapped.set(CanonicalField::Qty, cell),
                NumericRole::Cost => mapped.set(CanonicalField::UnitCost, cell),
            }
        }

        let product_name = mapped.product_name.clone().unwrap_or_else(|| {
            let parts: Vec<&str> = [&mapped.vendor_sku, &mapped.sku, &mapped.variant_title]
                .into_iter()
                .filter_map(|part| part.as_deref())
                .collect();
            parts.join(" - ")
        });

        let qty = parse_number(mapped.qty.as_deref().unwrap_or("0"));
        let resolved = resolve_prices(
            parse_number(mapped.unit_cost.as_deref().unwrap_or("0")),
            mapped.unit_retail.as_deref().map(parse_number),
        );

        if product_name.is_empty() || qty <= 0.0 {
            skipped += 1;
            if !product_name.is_empty() {
                // Row numbers are 1-based and account for the header row.
                warnings.push(format!(
                    "Row {}: Skipped \"{product_name}\" - invalid quantity",
                    index + 2
                ));
            }
            continue;
        }

        let unit_cost = if resolved.cost > 0.0 {
            resolved.cost
        } else {
            resolved
                .retail
                .map_or(0.0, |retail| retail * COST_FROM_RETAIL_RATIO)
        };

        items.push(LineItem {
            id: ids.next_id(),
            sku: mapped.sku,
            vendor_sku: mapped.vendor_sku,
            product_name,
            variant_title: mapped.variant_title,
            size: mapped.size,
            color: mapped.color,
            material: mapped.material,
            qty,
            unit_cost,
            unit_retail: resolved.retail,
            barcode: mapped.barcode,
            weight: mapped.weight.as_deref().map(parse_number),
            hs_code: mapped.hs_code,
            country_of_origin: mapped.country_of_origin,
        });
    }

    if skipped > 0 {
        warn!(skipped, valid = items.len(), "rows skipped during normalization");
    }

    let summary = IngestSummary {
        total_rows: data_rows.len(),
        valid_rows: items.len(),
        skipped_rows: skipped,
        total_units: items.iter().map(|item| item.qty).sum(),
        total_cost: items.iter().map(LineItem::extended_cost).sum(),
    };

    if items.is_empty() {
        FileUploadResult {
            success: false,
            data: None,
            error: Some(IngestError::NoValidRows.to_string()),
            warnings: (!warnings.is_empty()).then_some(warnings),
            summary: Some(summary),
        }
    } else {
        FileUploadResult {
            success: true,
            data: Some(items),
            error: None,
            warnings: (!warnings.is_empty()).then_some(warnings),
            summary: Some(summary),
        }
    }
}

/// Assigns a numeric role to each column that matched no alias, based on the
/// shape of its values. Mapped qty/cost columns always take precedence; the
/// inferred value only fills a hole.
fn infer_unmapped_columns(
    column_fields: &[Option<CanonicalField>],
    data_rows: &[Vec<String>],
) -> Vec<(usize, NumericRole)> {
    let mut inferred = Vec::new();
    for (column, field) in column_fields.iter().enumerate() {
        if field.is_some() {
            continue;
        }
        let values: Vec<String> = data_rows
            .iter()
            .filter_map(|row| row.get(column))
            .filter(|cell| !cell.is_empty())
            .cloned()
            .collect();
        if let Some(role) = infer_numeric_role(&values) {
            inferred.push((column, role));
        }
    }
    inferred
}

#[cfg(test)]
mod tests {
    use ordersheet_model::SequentialIdSource;

    use super::*;

    fn table(raw: &[&[&str]]) -> RawTable {
        RawTable {
            rows: raw
                .iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
        }
    }

    fn normalize(raw: &[&[&str]]) -> FileUploadResult {
        let mut ids = SequentialIdSource::default();
        normalize_table(&table(raw), &mut ids)
    }

    #[test]
    fn straightforward_sheet_parses() {
        let result = normalize(&[
            &["SKU", "Product Name", "Qty", "Unit Cost"],
            &["A1", "Blue Shirt", "5", "10.00"],
            &["A2", "Red Shirt", "3", "12.50"],
        ]);
        assert!(result.success);
        let items = result.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product_name, "Blue Shirt");
        assert_eq!(items[0].qty, 5.0);
        assert_eq!(items[0].unit_cost, 10.0);
        assert_eq!(items[0].id, "li-000001");
        assert_eq!(items[1].id, "li-000002");
    }

    #[test]
    fn product_name_is_synthesized_from_identifiers() {
        let result = normalize(&[
            &["Vendor SKU", "SKU", "Variant", "Qty", "Cost"],
            &["VS-9", "A1", "Large", "2", "8"],
        ]);
        assert_eq!(result.items()[0].product_name, "VS-9 - A1 - Large");
    }

    #[test]
    fn nameless_rows_are_skipped_silently() {
        // no identifier columns, so nothing to synthesize a name from
        let result = normalize(&[
            &["Product Name", "Qty", "Cost"],
            &["", "5", "10"],
            &["Real Item", "1", "10"],
        ]);
        assert!(result.success);
        assert_eq!(result.items().len(), 1);
        assert!(result.warnings.is_none());
        let summary = result.summary.unwrap();
        assert_eq!(summary.skipped_rows, 1);
    }

    #[test]
    fn zero_quantity_rows_warn_with_their_row_number() {
        let result = normalize(&[
            &["Product Name", "Qty", "Cost"],
            &["Good Item", "5", "10"],
            &["Out Of Stock", "0", "10"],
        ]);
        assert!(result.success);
        let warnings = result.warnings.expect("warning expected");
        assert_eq!(
            warnings,
            vec!["Row 3: Skipped \"Out Of Stock\" - invalid quantity".to_string()]
        );
    }

    #[test]
    fn missing_cost_is_estimated_from_retail() {
        let result = normalize(&[
            &["Product Name", "Qty", "MSRP"],
            &["Candle", "4", "25.00"],
        ]);
        let item = &result.items()[0];
        assert_eq!(item.unit_cost, 10.0);
        assert_eq!(item.unit_retail, Some(25.0));
    }

    #[test]
    fn swapped_price_columns_are_reordered() {
        let result = normalize(&[
            &["Product Name", "Qty", "Cost", "Retail"],
            &["Mug", "6", "24.99", "10.00"],
        ]);
        let item = &result.items()[0];
        assert_eq!(item.unit_cost, 10.0);
        assert_eq!(item.unit_retail, Some(24.99));
    }

    #[test]
    fn unlabeled_numeric_columns_fill_qty_and_cost() {
        let result = normalize(&[
            &["Product Name", "Misc 1", "Misc 2"],
            &["Desk Pad", "5", "12.50"],
            &["Card Holder", "3", "8.75"],
            &["Pen Tray", "10", "22.00"],
        ]);
        assert!(result.success);
        let items = result.items();
        assert_eq!(items[0].qty, 5.0);
        assert_eq!(items[0].unit_cost, 12.5);
        assert_eq!(items[2].qty, 10.0);
        assert_eq!(items[2].unit_cost, 22.0);
    }

    #[test]
    fn inference_never_overrides_a_mapped_column() {
        // "mystery" holds decimals but qty/cost are already mapped
        let result = normalize(&[
            &["Product Name", "Qty", "Cost", "mystery"],
            &["Widget", "5", "10.00", "99.99"],
            &["Gadget", "2", "11.00", "44.44"],
        ]);
        let item = &result.items()[0];
        assert_eq!(item.qty, 5.0);
        assert_eq!(item.unit_cost, 10.0);
    }

    #[test]
    fn duplicate_headers_take_the_first_nonempty_value() {
        let result = normalize(&[
            &["Product Name", "SKU", "Item Number", "Qty", "Cost"],
            &["Widget", "", "FALLBACK-1", "2", "5"],
            &["Gadget", "PRIMARY-2", "IGNORED-2", "2", "5"],
        ]);
        let items = result.items();
        assert_eq!(items[0].sku.as_deref(), Some("FALLBACK-1"));
        assert_eq!(items[1].sku.as_deref(), Some("PRIMARY-2"));
    }

    #[test]
    fn all_rows_invalid_is_a_failure_with_summary() {
        let result = normalize(&[
            &["Product Name", "Qty", "Cost"],
            &["Ghost Item", "0", "10"],
        ]);
        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(
            result.error.as_deref(),
            Some("No valid line items found. Please check that your file has product names and quantities.")
        );
        let summary = result.summary.expect("summary present");
        assert_eq!(summary.total_rows, 1);
        assert_eq!(summary.skipped_rows, 1);
    }

    #[test]
    fn summary_totals_add_up() {
        let result = normalize(&[
            &["Product Name", "Qty", "Cost"],
            &["A", "2", "3.00"],
            &["B", "4", "1.50"],
        ]);
        let summary = result.summary.unwrap();
        assert_eq!(summary.total_units, 6.0);
        assert_eq!(summary.total_cost, 12.0);
        assert_eq!(summary.valid_rows, 2);
    }

    #[test]
    fn preamble_rows_do_not_shift_warning_numbers() {
        // banner rows sit above the header; warnings still count from the
        // header row
        let result = normalize(&[
            &["ACME Trading Co.", "", ""],
            &["Order #4821", "", ""],
            &["Product Name", "Qty", "Cost"],
            &["Good", "1", "2"],
            &["Bad", "0", "2"],
        ]);
        let warnings = result.warnings.expect("warning expected");
        assert_eq!(warnings[0], "Row 3: Skipped \"Bad\" - invalid quantity");
    }

    #[test]
    fn weight_and_optional_fields_carry_through() {
        let result = normalize(&[
            &["Product Name", "Qty", "Cost", "Weight", "HS Code", "Country of Origin"],
            &["Boots", "2", "40", "1.2", "6403.99", "Vietnam"],
        ]);
        let item = &result.items()[0];
        assert_eq!(item.weight, Some(1.2));
        assert_eq!(item.hs_code.as_deref(), Some("6403.99"));
        assert_eq!(item.country_of_origin.as_deref(), Some("Vietnam"));
    }

    #[test]
    fn empty_table_is_the_no_data_failure() {
        let result = normalize(&[&["only", "headers"]]);
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("No data found in file. Please check the file format.")
        );
    }
}
