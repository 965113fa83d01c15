//! Shared fixtures: SQLite-backed services and a running RPC server

#![allow(dead_code)]

use jsonrpsee::server::ServerHandle;
use rms_api_rpc::{RpcServer, RpcServerConfig};
use rms_core::application::{ResourceServices, StatsService};
use rms_core::domain::Author;
use rms_core::port::id_provider::UuidProvider;
use rms_core::port::time_provider::SystemTimeProvider;
use rms_core::port::RecordStore;
use rms_infra_sqlite::{create_pool, run_migrations, SqliteRecordStore};
use sqlx::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;

pub async fn setup_store() -> (SqlitePool, Arc<dyn RecordStore>) {
    let pool = create_pool(":memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();
    let store: Arc<dyn RecordStore> = Arc::new(SqliteRecordStore::new(pool.clone()));
    (pool, store)
}

pub async fn setup_services() -> (SqlitePool, ResourceServices) {
    let (pool, store) = setup_store().await;
    let services = ResourceServices::new(store, Arc::new(UuidProvider), Arc::new(SystemTimeProvider));
    (pool, services)
}

/// RPC server on an ephemeral port; returns its URL
pub async fn start_rpc_server() -> (SqlitePool, String, ServerHandle) {
    let (pool, store) = setup_store().await;
    let services = ResourceServices::new(
        store.clone(),
        Arc::new(UuidProvider),
        Arc::new(SystemTimeProvider),
    );

    let config = RpcServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let (addr, handle): (SocketAddr, ServerHandle) =
        RpcServer::new(config, services, StatsService::new(store))
            .start()
            .await
            .unwrap();

    (pool, format!("http://{}", addr), handle)
}

pub fn jane_doe() -> Author {
    Author {
        author_id: String::new(),
        author_name: "Jane Doe".to_string(),
        gender: "F".to_string(),
        type_of_author: "Faculty".to_string(),
        affiliation: "CS Dept".to_string(),
        email: "jane@example.edu".to_string(),
    }
}
