//! RPC Method Handlers
//!
//! Translates JSON-RPC params into resource-service calls.

use crate::error::to_rpc_error;
use crate::types::{DeleteResponse, StatsRequest, StatsResponse};
use jsonrpsee::types::ErrorObjectOwned;
use rms_core::application::{ResourceService, StatsService};
use rms_core::domain::{RecordKey, Resource, ResourceKey};
use rms_core::error::AppError;
use serde_json::Value;
use std::sync::Arc;

/// Handler for the five methods of one resource
pub struct ResourceHandler<R: Resource> {
    service: Arc<ResourceService<R>>,
}

impl<R: Resource> ResourceHandler<R> {
    pub fn new(service: Arc<ResourceService<R>>) -> Self {
        Self { service }
    }

    /// <entity>.create.v1
    pub async fn create(&self, record: R) -> Result<R, ErrorObjectOwned> {
        self.service.create(record).await.map_err(to_rpc_error)
    }

    /// <entity>.get.v1
    pub async fn get(&self, params: Value) -> Result<R, ErrorObjectOwned> {
        let key = parse_key::<R>(params)?;
        self.service.get(key).await.map_err(to_rpc_error)
    }

    /// <entity>.list.v1
    pub async fn list(&self) -> Result<Vec<R>, ErrorObjectOwned> {
        self.service.list().await.map_err(to_rpc_error)
    }

    /// <entity>.update.v1
    pub async fn update(&self, partial: R) -> Result<R, ErrorObjectOwned> {
        self.service.update(partial).await.map_err(to_rpc_error)
    }

    /// <entity>.delete.v1
    pub async fn delete(&self, params: Value) -> Result<DeleteResponse, ErrorObjectOwned> {
        let key = parse_key::<R>(params)?;
        let success = self.service.delete(key).await.map_err(to_rpc_error)?;
        Ok(DeleteResponse { success })
    }
}

/// Extract the primary key from `{ "<key_column>": value }` or a bare value
pub fn parse_key<R: Resource>(params: Value) -> Result<R::Key, ErrorObjectOwned> {
    let entity = R::descriptor();

    let raw = match params {
        Value::Object(mut map) => map.remove(entity.key_column),
        Value::Null => None,
        other => Some(other),
    }
    .ok_or_else(|| {
        to_rpc_error(AppError::Validation(format!(
            "Missing {} in request",
            entity.key_column
        )))
    })?;

    let key: RecordKey = serde_json::from_value(raw).map_err(|e| {
        to_rpc_error(AppError::Validation(format!(
            "Invalid {}: {}",
            entity.key_column, e
        )))
    })?;

    R::Key::from_record_key(key).map_err(to_rpc_error)
}

/// Handler for admin.* methods
pub struct AdminHandler {
    stats: Arc<StatsService>,
    start_time: std::time::Instant,
}

impl AdminHandler {
    pub fn new(stats: Arc<StatsService>) -> Self {
        Self {
            stats,
            start_time: std::time::Instant::now(),
        }
    }

    /// admin.stats.v1
    pub async fn stats(&self, _params: StatsRequest) -> Result<StatsResponse, ErrorObjectOwned> {
        let entities = self.stats.entity_counts().await.map_err(to_rpc_error)?;

        Ok(StatsResponse {
            version: rms_core::VERSION.to_string(),
            entities,
            uptime_seconds: self.start_time.elapsed().as_secs() as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;
    use rms_core::domain::{Author, User};
    use serde_json::json;

    #[test]
    fn test_parse_key_from_object() {
        let key = parse_key::<Author>(json!({ "author_id": "a-1" })).unwrap();
        assert_eq!(key, "a-1");

        let key = parse_key::<User>(json!({ "user_id": 42 })).unwrap();
        assert_eq!(key, 42);
    }

    #[test]
    fn test_parse_key_bare_value() {
        assert_eq!(parse_key::<User>(json!("17")).unwrap(), 17);
        assert_eq!(parse_key::<Author>(json!("a-2")).unwrap(), "a-2");
    }

    #[test]
    fn test_parse_key_missing_field() {
        let err = parse_key::<Author>(json!({ "registration_number": "x" })).unwrap_err();
        assert_eq!(err.code(), code::VALIDATION_ERROR);

        let err = parse_key::<User>(json!({ "user_id": "not-a-number" })).unwrap_err();
        assert_eq!(err.code(), code::VALIDATION_ERROR);
    }
}
