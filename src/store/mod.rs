//! # Storage Layer
//!
//! One store holds the ordered list of records for one entity type,
//! persisted as a single JSON array file. The [`RecordStore`] trait lets
//! the rest of the crate work against different backends:
//!
//! - [`fs::JsonFileStore`]: production file-based storage
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! data/
//! ├── orders.json     # JSON array of order records
//! ├── bookings.json   # JSON array of booking records
//! └── contacts.json   # JSON array of contact records
//! ```
//!
//! Every write rewrites the file in full: load the array, mutate it in
//! memory, serialize it back. There is no incremental append.
//!
//! ## Single-Writer Discipline
//!
//! Ids are assigned as `current record count + 1` with no separate
//! counter, and a field update is a read-modify-write of the whole array.
//! Both are only correct if writes against one store never interleave, so
//! `JsonFileStore` holds an internal mutex across each load-mutate-save
//! cycle (reads take it too, so they never see a half-written file). Keep
//! that invariant in mind before adding a second process pointing at the
//! same files.
//!
//! ## Degrade-to-Empty Reads
//!
//! A store whose file is missing, unreadable, or corrupt reads as an
//! empty list instead of erroring. The website must keep taking orders
//! even if an admin fat-fingers a data file; the trade-off is that a
//! truncated write silently drops history.

use crate::error::Result;
use crate::model::{Fields, Record};
use serde_json::Value;

pub mod fs;
pub mod memory;

/// Durable list-of-records persistence for one entity type.
pub trait RecordStore: Send + Sync {
    /// All records, in append order. Never fails: unreadable or corrupt
    /// backing data reads as an empty list.
    fn load_all(&self) -> Vec<Record>;

    /// Stamp the derived fields onto `fields` and persist the new record
    /// at the end of the list. Returns the stored record, id included.
    fn append(&self, fields: Fields) -> Result<Record>;

    /// Set `field` to `value` on the first record with a matching id.
    /// The list is persisted whether or not a match was found; the
    /// returned bool says whether one was.
    fn update_field(&self, id: u64, field: &str, value: Value) -> Result<bool>;
}
