//! Failure taxonomy for ingestion.
//!
//! Every variant is terminal for the current upload; the display strings are
//! user-facing and surface verbatim in `FileUploadResult::error`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Extension not recognized; the user must re-export the file.
    #[error("Unsupported file type. Please upload CSV or Excel (.xlsx, .xls) files.")]
    UnsupportedFormat,
    /// PDF is recognized but deliberately unsupported.
    #[error("PDF parsing is not yet supported. Please convert to CSV or Excel format.")]
    NotYetSupported,
    /// Fewer than two parsable rows (no header plus data).
    #[error("No data found in file. Please check the file format.")]
    EmptyTable,
    /// Table parsed but every row failed the product-name/quantity check.
    #[error("No valid line items found. Please check that your file has product names and quantities.")]
    NoValidRows,
    /// Underlying I/O or workbook-decoding error.
    #[error("Error processing file: {0}")]
    Read(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
