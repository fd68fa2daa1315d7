//! Serialization-shape tests for the model types.

use ordersheet_model::{CanonicalField, FileUploadResult, IngestSummary, LineItem};

fn minimal_item(id: &str, name: &str, qty: f64, cost: f64) -> LineItem {
    LineItem {
        id: id.to_string(),
        sku: None,
        vendor_sku: None,
        product_name: name.to_string(),
        variant_title: None,
        size: None,
        color: None,
        material: None,
        qty,
        unit_cost: cost,
        unit_retail: None,
        barcode: None,
        weight: None,
        hs_code: None,
        country_of_origin: None,
    }
}

#[test]
fn line_item_omits_absent_fields() {
    let item = minimal_item("li-000001", "Blue Shirt", 10.0, 5.0);
    let json = serde_json::to_value(&item).expect("serialize item");
    let object = json.as_object().expect("object");
    assert_eq!(
        object.keys().collect::<Vec<_>>(),
        vec!["id", "product_name", "qty", "unit_cost"]
    );
}

#[test]
fn canonical_field_serializes_snake_case() {
    let json = serde_json::to_string(&CanonicalField::UnitCost).expect("serialize field");
    assert_eq!(json, "\"unit_cost\"");
    for field in CanonicalField::ALL {
        let json = serde_json::to_string(&field).expect("serialize field");
        assert_eq!(json, format!("\"{field}\""));
    }
}

#[test]
fn success_result_round_trips() {
    let result = FileUploadResult {
        success: true,
        data: Some(vec![minimal_item("li-000001", "Widget", 3.0, 2.5)]),
        error: None,
        warnings: Some(vec!["Row 3: Skipped \"Gadget\" - invalid quantity".to_string()]),
        summary: Some(IngestSummary {
            total_rows: 2,
            valid_rows: 1,
            skipped_rows: 1,
            total_units: 3.0,
            total_cost: 7.5,
        }),
    };
    let json = serde_json::to_string(&result).expect("serialize result");
    let round: FileUploadResult = serde_json::from_str(&json).expect("deserialize result");
    assert_eq!(round, result);
    assert_eq!(round.items().len(), 1);
    assert!(!json.contains("\"error\""));
}

#[test]
fn extended_cost_multiplies_qty_and_cost() {
    let item = minimal_item("li-000001", "Widget", 4.0, 2.5);
    assert!((item.extended_cost() - 10.0).abs() < f64::EPSILON);
}
