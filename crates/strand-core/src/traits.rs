//! Core traits for strand abstractions.
//!
//! These traits define the interfaces that storage backends must satisfy,
//! so the HTTP layer can hold an injected store and tests can run against
//! an isolated instance.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::StringRecord;

// =============================================================================
// STRING REPOSITORY
// =============================================================================

/// Repository for stored string records, keyed by content hash.
///
/// Records are created and removed but never updated in place.
#[async_trait]
pub trait StringRepository: Send + Sync {
    /// Insert a record. Fails with `Error::Conflict` if its id is present.
    async fn put(&self, record: StringRecord) -> Result<StringRecord>;

    /// Fetch a record by id.
    async fn get(&self, id: &str) -> Result<Option<StringRecord>>;

    /// Remove a record. Fails with `Error::NotFound` if absent.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Snapshot of all records, ordered by creation time then id.
    async fn list(&self) -> Result<Vec<StringRecord>>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize>;
}
