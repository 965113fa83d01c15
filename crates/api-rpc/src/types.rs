//! RPC Request/Response Types
//!
//! Record-carrying methods take and return the record structs from
//! `rms_core::domain` directly, so wire field names are the domain field
//! names. Only the envelopes below are specific to the façade.

use rms_core::application::EntityCount;
use serde::{Deserialize, Serialize};

/// <entity>.delete.v1 - result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// admin.stats.v1 - Get row counts per entity
#[derive(Debug, Default, Deserialize)]
pub struct StatsRequest {
    // No parameters needed
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub version: String,
    pub entities: Vec<EntityCount>,
    pub uptime_seconds: i64,
}
