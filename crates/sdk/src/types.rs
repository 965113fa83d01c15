//! SDK Response Types
//!
//! Mirrors the envelope types from the api-rpc crate. Records themselves
//! are the `rms_core::domain` structs.

use serde::{Deserialize, Serialize};

pub use rms_core::application::EntityCount;

/// Response from <entity>.delete.v1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Response from admin.stats.v1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub version: String,
    pub entities: Vec<EntityCount>,
    pub uptime_seconds: i64,
}
