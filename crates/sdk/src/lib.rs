//! RMS SDK - Rust Client Library
//!
//! Typed client for the RMS JSON-RPC façade. Every record type from
//! `rms_core::domain` can be passed to the generic CRUD calls.
//!
//! # Example
//!
//! ```no_run
//! use rms_sdk::{Author, RmsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RmsClient::connect("http://127.0.0.1:50051").await?;
//!
//!     let author = client
//!         .create(Author {
//!             author_name: "Jane Doe".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!
//!     println!("Author created: {}", author.author_id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::RmsClient;
pub use error::{Result, SdkError};
pub use rms_core::domain::{Author, IpAsset, Publication, Resource, User};
pub use types::{DeleteResponse, EntityCount, StatsResponse};
