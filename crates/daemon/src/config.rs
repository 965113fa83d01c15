//! Daemon configuration from environment variables

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "~/.rms/rms.db";
const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 50051;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub db_path: String,
    pub rpc_host: String,
    pub rpc_port: u16,
    pub log_format: LogFormat,
    /// Daily rolling log files are written here when set
    pub log_dir: Option<PathBuf>,
}

impl DaemonConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let db_path = lookup("RMS_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let rpc_port = match lookup("RMS_RPC_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("RMS_RPC_PORT is not a valid port: {}", raw))?,
            None => DEFAULT_RPC_PORT,
        };

        let log_format = match lookup("RMS_LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("RMS_LOG_FORMAT must be pretty or json, got {}", other),
        };

        Ok(Self {
            db_path: shellexpand::tilde(&db_path).into_owned(),
            rpc_host: lookup("RMS_RPC_HOST").unwrap_or_else(|| DEFAULT_RPC_HOST.to_string()),
            rpc_port,
            log_format,
            log_dir: lookup("RMS_LOG_DIR")
                .map(|dir| PathBuf::from(shellexpand::tilde(&dir).into_owned())),
        })
    }
}
