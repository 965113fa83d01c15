//! Gateway configuration from environment variables

use anyhow::{bail, Context, Result};
use std::net::SocketAddr;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_RPC_URL: &str = "http://127.0.0.1:50051";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub listen_addr: SocketAddr,
    pub rpc_url: String,
    pub json_logs: bool,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_addr =
            lookup("RMS_GATEWAY_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = raw_addr
            .parse()
            .with_context(|| format!("RMS_GATEWAY_ADDR is not a socket address: {}", raw_addr))?;

        let json_logs = match lookup("RMS_LOG_FORMAT").as_deref() {
            None | Some("pretty") => false,
            Some("json") => true,
            Some(other) => bail!("RMS_LOG_FORMAT must be pretty or json, got {}", other),
        };

        Ok(Self {
            listen_addr,
            rpc_url: lookup("RMS_RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.to_string()),
            json_logs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.listen_addr.port(), 5000);
        assert_eq!(config.rpc_url, "http://127.0.0.1:50051");
        assert!(!config.json_logs);
    }

    #[test]
    fn test_bad_address_is_rejected() {
        let result = GatewayConfig::from_lookup(|key| {
            (key == "RMS_GATEWAY_ADDR").then(|| "localhost".to_string())
        });
        assert!(result.is_err());
    }
}
