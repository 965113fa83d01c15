//! JSON-RPC API Layer
//!
//! Implements the JSON-RPC 2.0 façade over the four RMS resource services.
//! Every method is a pure translation between wire params and a
//! `ResourceService` call; no business logic lives here.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig};
