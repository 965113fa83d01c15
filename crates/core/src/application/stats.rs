// Stats Use Case - Row counts per managed table

use crate::domain::entities;
use crate::error::Result;
use crate::port::RecordStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Row count of one entity table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCount {
    pub entity: String,
    pub table: String,
    pub rows: i64,
}

pub struct StatsService {
    store: Arc<dyn RecordStore>,
}

impl StatsService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Count rows of every entity table
    pub async fn entity_counts(&self) -> Result<Vec<EntityCount>> {
        let mut counts = Vec::with_capacity(4);
        for entity in entities() {
            counts.push(EntityCount {
                entity: entity.name.to_string(),
                table: entity.table.to_string(),
                rows: self.store.count(entity).await?,
            });
        }
        Ok(counts)
    }
}
