// Record Store Port (Interface)

use crate::domain::{EntityDescriptor, RecordKey, RecordRow};
use crate::error::Result;
use async_trait::async_trait;

/// Single-table row storage, addressed through an entity descriptor
///
/// Each call is one statement against `entity.table`; nothing spans tables.
/// Implementations must be safe to share across concurrent calls.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert one row, stamping `created_at` and `updated_at`
    ///
    /// # Returns
    /// Rows affected
    async fn insert(
        &self,
        entity: &'static EntityDescriptor,
        row: &RecordRow,
        created_at: i64,
    ) -> Result<u64>;

    /// Find the row with the given key (first match)
    async fn find_by_key(
        &self,
        entity: &'static EntityDescriptor,
        key: &RecordKey,
    ) -> Result<Option<RecordRow>>;

    /// All rows, in the store's natural scan order
    async fn list(&self, entity: &'static EntityDescriptor) -> Result<Vec<RecordRow>>;

    /// Overwrite the given columns of the row matching `key`
    ///
    /// `updated_at` is always written, so an empty change set still
    /// reports whether the row exists.
    ///
    /// # Returns
    /// Rows affected
    async fn update(
        &self,
        entity: &'static EntityDescriptor,
        key: &RecordKey,
        changes: &[(&'static str, String)],
        updated_at: i64,
    ) -> Result<u64>;

    /// Hard-delete the row matching `key`
    ///
    /// # Returns
    /// Rows affected
    async fn delete(&self, entity: &'static EntityDescriptor, key: &RecordKey) -> Result<u64>;

    /// Row count of the entity's table
    async fn count(&self, entity: &'static EntityDescriptor) -> Result<i64>;
}
