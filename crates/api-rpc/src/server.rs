//! JSON-RPC Server
//!
//! Serves the resource façade over HTTP JSON-RPC 2.0.

use crate::handler::{AdminHandler, ResourceHandler};
use crate::types::StatsRequest;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::{ErrorObjectOwned, Params};
use jsonrpsee::RpcModule;
use rms_core::application::{ResourceService, ResourceServices, StatsService};
use rms_core::domain::Resource;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 50051;

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    services: ResourceServices,
    stats: Arc<StatsService>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, services: ResourceServices, stats: StatsService) -> Self {
        Self {
            config,
            services,
            stats: Arc::new(stats),
        }
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (port 0 resolves to the real port) and the
    /// handle used to stop the server.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;

        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let module = rpc_module(&self.services, self.stats)?;
        let method_count = module.method_names().count();

        info!(
            addr = %local_addr,
            methods = method_count,
            "JSON-RPC server started"
        );

        let handle = server.start(module);
        Ok((local_addr, handle))
    }
}

/// Build the module with every resource method plus admin.stats.v1
pub fn rpc_module(
    services: &ResourceServices,
    stats: Arc<StatsService>,
) -> Result<RpcModule<()>, String> {
    let mut module = RpcModule::new(());

    register_resource(&mut module, services.authors.clone())?;
    register_resource(&mut module, services.ip_assets.clone())?;
    register_resource(&mut module, services.publications.clone())?;
    register_resource(&mut module, services.users.clone())?;

    let admin = Arc::new(AdminHandler::new(stats));
    module
        .register_async_method("admin.stats.v1", move |params, _, _| {
            let admin = admin.clone();
            async move {
                let req: StatsRequest = params.parse().unwrap_or_default();
                admin.stats(req).await
            }
        })
        .map_err(|e| e.to_string())?;

    Ok(module)
}

/// Register create/get/list/update/delete for one resource
fn register_resource<R: Resource>(
    module: &mut RpcModule<()>,
    service: Arc<ResourceService<R>>,
) -> Result<(), String> {
    let methods = R::descriptor().methods;
    let handler = Arc::new(ResourceHandler::new(service));

    let h = handler.clone();
    module
        .register_async_method(methods.create, move |params, _, _| {
            let h = h.clone();
            async move {
                let record: R = single_param(params)?;
                h.create(record).await
            }
        })
        .map_err(|e| e.to_string())?;

    let h = handler.clone();
    module
        .register_async_method(methods.get, move |params, _, _| {
            let h = h.clone();
            async move {
                let req: Value = single_param(params)?;
                h.get(req).await
            }
        })
        .map_err(|e| e.to_string())?;

    let h = handler.clone();
    module
        .register_async_method(methods.list, move |_, _, _| {
            let h = h.clone();
            async move { h.list().await }
        })
        .map_err(|e| e.to_string())?;

    let h = handler.clone();
    module
        .register_async_method(methods.update, move |params, _, _| {
            let h = h.clone();
            async move {
                let partial: R = single_param(params)?;
                h.update(partial).await
            }
        })
        .map_err(|e| e.to_string())?;

    let h = handler;
    module
        .register_async_method(methods.delete, move |params, _, _| {
            let h = h.clone();
            async move {
                let req: Value = single_param(params)?;
                h.delete(req).await
            }
        })
        .map_err(|e| e.to_string())?;

    Ok(())
}

/// Accept a request object either by-name (`{...}`) or positionally (`[{...}]`)
fn single_param<T: DeserializeOwned>(params: Params<'_>) -> Result<T, ErrorObjectOwned> {
    if params.is_object() {
        params.parse()
    } else {
        params.one()
    }
}
