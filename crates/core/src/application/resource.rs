// Resource Service - Generic CRUD engine for one entity type

use crate::domain::{EntityDescriptor, KeyPolicy, RecordKey, Resource, ResourceKey};
use crate::error::{AppError, Result};
use crate::port::{IdProvider, RecordStore, TimeProvider};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

/// CRUD contract for the records described by `R::descriptor()`
///
/// Holds no mutable state of its own; concurrent calls only meet in the
/// store. Errors from the store are returned unmodified except where the
/// contract reclassifies them: any insert failure other than a lost store
/// becomes `CreationFailed`.
pub struct ResourceService<R: Resource> {
    store: Arc<dyn RecordStore>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceService<R> {
    pub fn new(
        store: Arc<dyn RecordStore>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            store,
            id_provider,
            time_provider,
            _record: PhantomData,
        }
    }

    pub fn descriptor(&self) -> &'static EntityDescriptor {
        R::descriptor()
    }

    /// Insert a new record
    ///
    /// Generated-key entities get a fresh key (any caller value is
    /// discarded); caller-supplied-key entities must carry one.
    pub async fn create(&self, mut record: R) -> Result<R> {
        let entity = R::descriptor();

        match entity.key_policy {
            KeyPolicy::Generated => {
                let id = self.id_provider.generate_id();
                record.set_key(R::Key::from_record_key(RecordKey::Text(id))?);
            }
            KeyPolicy::CallerSupplied => {
                if !record.key().is_supplied() {
                    return Err(AppError::Validation(format!(
                        "{} requires a caller-supplied {}",
                        entity.name, entity.key_column
                    )));
                }
            }
        }

        let row = record.to_row();
        let now = self.time_provider.now_millis();

        let affected = self
            .store
            .insert(entity, &row, now)
            .await
            .map_err(|e| match e {
                unavailable @ AppError::StoreUnavailable(_) => unavailable,
                AppError::Conflict(msg) | AppError::Database(msg) => AppError::CreationFailed(msg),
                other => AppError::CreationFailed(other.to_string()),
            })?;

        if affected == 0 {
            return Err(AppError::CreationFailed(format!(
                "{} creation unsuccessful",
                entity.name
            )));
        }

        info!(entity = entity.name, key = %row.key, "Record created");
        Ok(record)
    }

    /// Fetch one record by primary key
    pub async fn get(&self, key: R::Key) -> Result<R> {
        let entity = R::descriptor();
        let key = key.into_record_key();

        debug!(entity = entity.name, key = %key, "Reading record");

        let row = self
            .store
            .find_by_key(entity, &key)
            .await?
            .ok_or_else(|| not_found(entity, &key))?;

        R::from_row(row)
    }

    /// Every record of this type; an empty table yields an empty list
    pub async fn list(&self) -> Result<Vec<R>> {
        let entity = R::descriptor();
        let rows = self.store.list(entity).await?;

        debug!(entity = entity.name, count = rows.len(), "Listing records");

        rows.into_iter().map(R::from_row).collect()
    }

    /// Sparse merge: only the non-empty fields of `partial` are written
    ///
    /// Returns the record as stored after the update.
    pub async fn update(&self, partial: R) -> Result<R> {
        let entity = R::descriptor();

        if !partial.key().is_supplied() {
            return Err(AppError::Validation(format!(
                "{} update requires {}",
                entity.name, entity.key_column
            )));
        }

        let key = partial.key().clone().into_record_key();
        let changes = partial.changes();
        let now = self.time_provider.now_millis();

        let affected = self.store.update(entity, &key, &changes, now).await?;
        if affected == 0 {
            return Err(not_found(entity, &key));
        }

        info!(
            entity = entity.name,
            key = %key,
            fields = changes.len(),
            "Record updated"
        );

        // Row may vanish between the update and the re-read
        let row = self
            .store
            .find_by_key(entity, &key)
            .await?
            .ok_or_else(|| not_found(entity, &key))?;

        R::from_row(row)
    }

    /// Hard-delete one record
    pub async fn delete(&self, key: R::Key) -> Result<bool> {
        let entity = R::descriptor();
        let key = key.into_record_key();

        let affected = self.store.delete(entity, &key).await?;
        if affected == 0 {
            return Err(not_found(entity, &key));
        }

        info!(entity = entity.name, key = %key, "Record deleted");
        Ok(true)
    }
}

fn not_found(entity: &EntityDescriptor, key: &RecordKey) -> AppError {
    AppError::NotFound(format!("{} {} not found", entity.name, key))
}
