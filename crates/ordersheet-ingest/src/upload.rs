//! Upload facade: one call from raw file bytes to a [`FileUploadResult`].
//!
//! Nothing here returns `Err`; every failure mode is folded into the
//! result's `error` field so callers have a single shape to handle.

use std::path::Path;

use ordersheet_model::{FileUploadResult, IdSource, UuidIdSource};
use tracing::info;

use crate::error::{IngestError, Result};
use crate::normalizer::normalize_table;
use crate::reader::{RawTable, read_csv_text, read_workbook_bytes};

/// File format recognized from the uploaded file's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadKind {
    Csv,
    Workbook,
    Pdf,
    Unknown,
}

fn classify(file_name: &str) -> UploadKind {
    let lower = file_name.to_lowercase();
    match Path::new(&lower).extension().and_then(|ext| ext.to_str()) {
        Some("csv" | "txt") => UploadKind::Csv,
        Some("xlsx" | "xls") => UploadKind::Workbook,
        Some("pdf") => UploadKind::Pdf,
        _ => UploadKind::Unknown,
    }
}

fn read_table(file_name: &str, bytes: &[u8]) -> Result<RawTable> {
    match classify(file_name) {
        UploadKind::Csv => read_csv_text(&String::from_utf8_lossy(bytes)),
        UploadKind::Workbook => read_workbook_bytes(bytes),
        UploadKind::Pdf => Err(IngestError::NotYetSupported),
        UploadKind::Unknown => Err(IngestError::UnsupportedFormat),
    }
}

/// Processes an uploaded file with a caller-supplied [`IdSource`].
pub fn process_upload_with_ids(
    file_name: &str,
    bytes: &[u8],
    ids: &mut dyn IdSource,
) -> FileUploadResult {
    let table = match read_table(file_name, bytes) {
        Ok(table) => table,
        Err(error) => return FileUploadResult::failure(error.to_string()),
    };
    if !table.has_data() {
        return FileUploadResult::failure(IngestError::EmptyTable.to_string());
    }
    let result = normalize_table(&table, ids);
    info!(
        file = file_name,
        success = result.success,
        items = result.items().len(),
        "processed upload"
    );
    result
}

/// Processes an uploaded file, minting random line-item ids.
///
/// The returned result never carries an `Err`-like panic path: unsupported
/// formats, unreadable files, and empty tables all come back as
/// `success: false` with a user-facing message.
pub fn process_upload(file_name: &str, bytes: &[u8]) -> FileUploadResult {
    let mut ids = UuidIdSource;
    process_upload_with_ids(file_name, bytes, &mut ids)
}

/// Reads a file from disk and processes it as an upload.
pub fn process_upload_path(path: &Path, ids: &mut dyn IdSource) -> FileUploadResult {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    match std::fs::read(path) {
        Ok(bytes) => process_upload_with_ids(file_name, &bytes, ids),
        Err(error) => FileUploadResult::failure(IngestError::Read(error.to_string()).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_classify_case_insensitively() {
        assert_eq!(classify("Order.CSV"), UploadKind::Csv);
        assert_eq!(classify("notes.txt"), UploadKind::Csv);
        assert_eq!(classify("book.XLSX"), UploadKind::Workbook);
        assert_eq!(classify("legacy.xls"), UploadKind::Workbook);
        assert_eq!(classify("scan.pdf"), UploadKind::Pdf);
        assert_eq!(classify("image.png"), UploadKind::Unknown);
        assert_eq!(classify("no_extension"), UploadKind::Unknown);
    }

    #[test]
    fn pdf_uploads_get_the_conversion_hint() {
        let result = process_upload("order.pdf", b"%PDF-1.4");
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("PDF parsing is not yet supported. Please convert to CSV or Excel format.")
        );
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        let result = process_upload("photo.png", &[0x89, 0x50]);
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Unsupported file type. Please upload CSV or Excel (.xlsx, .xls) files.")
        );
    }

    #[test]
    fn header_only_csv_reports_no_data() {
        let result = process_upload("empty.csv", b"sku,qty\n");
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("No data found in file. Please check the file format.")
        );
    }
}
