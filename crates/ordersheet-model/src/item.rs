//! The normalized output unit of ingestion.

use serde::{Deserialize, Serialize};

/// One normalized product/variant record with quantity and cost.
///
/// Only constructed when `product_name` is non-empty and `qty > 0`;
/// everything else is best-effort and absent when the source file did not
/// carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Batch-unique identifier minted by the caller's `IdSource`.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_sku: Option<String>,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    pub qty: f64,
    /// Non-negative; may be estimated from retail when no cost column exists.
    pub unit_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_retail: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hs_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
}

impl LineItem {
    /// Extended cost of the line: quantity times unit cost.
    #[must_use]
    pub fn extended_cost(&self) -> f64 {
        self.qty * self.unit_cost
    }
}
