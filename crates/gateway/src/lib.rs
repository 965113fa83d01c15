//! RMS HTTP Gateway
//!
//! REST-style JSON endpoints for the four record resources, each call
//! translated into one JSON-RPC request against the RMS daemon.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use routes::{router, GatewayState};
