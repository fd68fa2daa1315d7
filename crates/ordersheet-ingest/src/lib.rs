//! Spreadsheet ingestion for vendor order sheets.
//!
//! Takes an arbitrary vendor-supplied CSV or Excel file (unknown column
//! names, unknown header-row position, mixed delimiters, ambiguous price
//! semantics) and produces normalized line items with quantities and costs.
//!
//! [`upload::process_upload`] is the single entry point; everything below it
//! (reader, header locator, price resolution, normalizer) is exposed for
//! direct use and testing but owns no state between calls.

pub mod error;
pub mod header;
pub mod normalizer;
pub mod prices;
pub mod reader;
pub mod upload;

pub use error::{IngestError, Result};
pub use header::locate_header_row;
pub use normalizer::normalize_table;
pub use prices::{ResolvedPrices, parse_number, resolve_prices};
pub use reader::{RawTable, read_csv_text, read_workbook_bytes};
pub use upload::{process_upload, process_upload_path, process_upload_with_ids};
