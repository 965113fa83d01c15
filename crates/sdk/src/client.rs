//! RMS Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{DeleteResponse, StatsResponse};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use rms_core::domain::Resource;
use serde_json::{Map, Value};
use std::time::Duration;

/// RMS Client
///
/// Cheap to clone; clones share the underlying HTTP connection pool.
///
/// # Example
///
/// ```no_run
/// use rms_sdk::{RmsClient, User};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = RmsClient::connect("http://127.0.0.1:50051").await?;
/// let users: Vec<User> = client.list().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RmsClient {
    client: HttpClient,
}

impl RmsClient {
    /// Connect to the RMS daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:50051`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create a record; returns it with its key populated
    pub async fn create<R: Resource>(&self, record: R) -> Result<R> {
        let created: R = self
            .client
            .request(R::descriptor().methods.create, rpc_params![record])
            .await?;

        Ok(created)
    }

    /// Fetch a record by key
    ///
    /// ```no_run
    /// # use rms_sdk::{Author, RmsClient};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = RmsClient::connect("http://127.0.0.1:50051").await?;
    /// let author: Author = client.get::<Author>("a-1".to_string()).await?;
    /// println!("{}", author.author_name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get<R: Resource>(&self, key: R::Key) -> Result<R> {
        let params = key_params::<R>(key)?;
        let record: R = self
            .client
            .request(R::descriptor().methods.get, rpc_params![params])
            .await?;

        Ok(record)
    }

    /// All records of one type
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        let records: Vec<R> = self
            .client
            .request(R::descriptor().methods.list, rpc_params![])
            .await?;

        Ok(records)
    }

    /// Merge the non-empty fields of `partial` into the stored record
    pub async fn update<R: Resource>(&self, partial: R) -> Result<R> {
        let updated: R = self
            .client
            .request(R::descriptor().methods.update, rpc_params![partial])
            .await?;

        Ok(updated)
    }

    /// Delete a record; `Ok(true)` when the store removed it
    pub async fn delete<R: Resource>(&self, key: R::Key) -> Result<bool> {
        let params = key_params::<R>(key)?;
        let response: DeleteResponse = self
            .client
            .request(R::descriptor().methods.delete, rpc_params![params])
            .await?;

        Ok(response.success)
    }

    /// Row counts per entity
    pub async fn stats(&self) -> Result<StatsResponse> {
        let response: StatsResponse = self.client.request("admin.stats.v1", rpc_params![]).await?;

        Ok(response)
    }
}

/// `{ "<key_column>": key }`
fn key_params<R: Resource>(key: R::Key) -> Result<Value> {
    let mut map = Map::new();
    map.insert(
        R::descriptor().key_column.to_string(),
        serde_json::to_value(key)?,
    );
    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rms_core::domain::{Author, User};
    use serde_json::json;

    #[test]
    fn test_key_params_use_key_column() {
        assert_eq!(
            key_params::<Author>("a-1".to_string()).unwrap(),
            json!({ "author_id": "a-1" })
        );
        assert_eq!(key_params::<User>(7).unwrap(), json!({ "user_id": 7 }));
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_url() {
        let err = RmsClient::connect("not a url").await.err().unwrap();
        assert!(matches!(err, SdkError::Connection(_)));
    }
}
