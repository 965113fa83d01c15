// Domain Layer - Managed records and their schema descriptors

pub mod author;
pub mod ip_asset;
pub mod publication;
pub mod record;
pub mod user;

// Re-exports
pub use author::{Author, AUTHOR};
pub use ip_asset::{IpAsset, IP_ASSET};
pub use publication::{Publication, PUBLICATION};
pub use record::{
    EntityDescriptor, KeyKind, KeyPolicy, RecordKey, RecordRow, Resource, ResourceKey, RpcMethods,
    WireNames,
};
pub use user::{User, USER};

/// Every managed entity, in a fixed order
pub fn entities() -> [&'static EntityDescriptor; 4] {
    [&AUTHOR, &IP_ASSET, &PUBLICATION, &USER]
}
