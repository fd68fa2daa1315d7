//! Maps arbitrary vendor column headers onto canonical line-item fields.
//!
//! Matching is alias-driven with a fuzzy fallback; columns that match no
//! alias can still be classified as quantity or cost by value shape.

pub mod aliases;
pub mod engine;
pub mod infer;
pub mod normalize;
pub mod score;

pub use aliases::{FIELD_ALIASES, aliases_for};
pub use engine::map_column;
pub use infer::{NumericRole, infer_numeric_role};
pub use normalize::normalize_header;
pub use score::{MATCH_THRESHOLD, similarity};
