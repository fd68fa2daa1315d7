//! The facade's uniform success/failure return value.

use serde::{Deserialize, Serialize};

use crate::item::LineItem;

/// Row counts and totals for one ingested file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestSummary {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub skipped_rows: usize,
    pub total_units: f64,
    pub total_cost: f64,
}

/// Result of one upload, constructed once and handed to the caller.
///
/// `data` is present iff at least one line item parsed; `error` is present
/// iff `success` is false; `warnings` carries one entry per row skipped for
/// an invalid quantity. Warnings co-exist with `success: true` when other
/// rows validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileUploadResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<IngestSummary>,
}

impl FileUploadResult {
    /// Terminal failure with no parsed rows (unsupported format, read error,
    /// empty table).
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            warnings: None,
            summary: None,
        }
    }

    /// Parsed items, or an empty slice when none were emitted.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.data.as_deref().unwrap_or_default()
    }
}
