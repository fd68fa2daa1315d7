//! Line-item identifier sources.
//!
//! The normalizer never mints ids itself; it is handed an [`IdSource`] so
//! callers choose between collision-free random ids and reproducible
//! sequential ids for tests and diffable output.

use uuid::Uuid;

/// Supplies the identifier for each emitted line item.
pub trait IdSource {
    /// Returns the next identifier, unique within the batch.
    fn next_id(&mut self) -> String;
}

/// Counter-backed ids: `li-000001`, `li-000002`, ...
///
/// Deterministic across runs; ids repeat between batches, so this is for
/// tests and `--stable-ids` output, not for persisted records.
#[derive(Debug, Default)]
pub struct SequentialIdSource {
    next: u64,
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("li-{:06}", self.next)
    }
}

/// Random UUIDv4 ids, unique across batches.
#[derive(Debug, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> String {
        format!("li-{}", Uuid::new_v4())
    }
}
