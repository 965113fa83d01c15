// Application Layer - Use Cases and Business Logic

pub mod resource;
pub mod stats;

// Re-exports
pub use resource::ResourceService;
pub use stats::{EntityCount, StatsService};

use crate::domain::{Author, IpAsset, Publication, User};
use crate::port::{IdProvider, RecordStore, TimeProvider};
use std::sync::Arc;

/// The four resource services, sharing one store
pub struct ResourceServices {
    pub authors: Arc<ResourceService<Author>>,
    pub ip_assets: Arc<ResourceService<IpAsset>>,
    pub publications: Arc<ResourceService<Publication>>,
    pub users: Arc<ResourceService<User>>,
}

impl ResourceServices {
    pub fn new(
        store: Arc<dyn RecordStore>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            authors: Arc::new(ResourceService::new(
                store.clone(),
                id_provider.clone(),
                time_provider.clone(),
            )),
            ip_assets: Arc::new(ResourceService::new(
                store.clone(),
                id_provider.clone(),
                time_provider.clone(),
            )),
            publications: Arc::new(ResourceService::new(
                store.clone(),
                id_provider.clone(),
                time_provider.clone(),
            )),
            users: Arc::new(ResourceService::new(store, id_provider, time_provider)),
        }
    }
}
