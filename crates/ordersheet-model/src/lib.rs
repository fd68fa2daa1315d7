//! Shared data model: canonical fields, line items, and upload results.

pub mod fields;
pub mod ids;
pub mod item;
pub mod result;

pub use fields::CanonicalField;
pub use ids::{IdSource, SequentialIdSource, UuidIdSource};
pub use item::LineItem;
pub use result::{FileUploadResult, IngestSummary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_stable() {
        assert_eq!(CanonicalField::ALL[0], CanonicalField::Sku);
        assert_eq!(
            CanonicalField::ALL[CanonicalField::ALL.len() - 1],
            CanonicalField::CountryOfOrigin
        );
    }

    #[test]
    fn failure_result_has_no_data() {
        let result = FileUploadResult::failure("bad file");
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("bad file"));
        assert!(result.data.is_none());
        assert!(result.warnings.is_none());
        assert!(result.summary.is_none());
    }
}
