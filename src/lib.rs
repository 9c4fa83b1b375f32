//! ML Playground Client SDK
//!
//! A Rust HTTP client for the ML Playground dataset REST API, with an
//! optional caching store for UI-style consumers.
//!
//! # Features
//!
//! - **Transport layer**: JSON requests and multipart file uploads against
//!   a single configured origin, with uniform error normalization
//! - **Dataset operations**: list/get/upload/delete/preview/stats over
//!   `/api/datasets`
//! - **Caching store**: (Optional) read-through LRU cache with TTL and
//!   invalidate-on-mutate semantics
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use playground_client::{ClientConfig, PlaygroundClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PlaygroundClient::new(
//!         ClientConfig::builder("http://localhost:8000")
//!             .timeout(Duration::from_secs(30))
//!             .build()?,
//!     )?;
//!
//!     // Upload a CSV and list the collection
//!     let uploaded = client
//!         .upload_dataset("iris.csv", std::fs::read("iris.csv")?, Some("iris"))
//!         .await?;
//!     println!("uploaded {} ({})", uploaded.name, uploaded.id);
//!
//!     let page = client.list_datasets(None, None).await?;
//!     for ds in page.items {
//!         println!("{}: {} rows", ds.name, ds.num_rows);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Caching
//!
//! The client itself never caches; wrap it in a
//! [`DatasetStore`](store::DatasetStore) to get read-through caching with
//! TTL expiration and automatic invalidation after uploads and deletes:
//!
//! ```rust,ignore
//! use playground_client::{ClientConfig, DatasetStore, PlaygroundClient};
//! use std::time::Duration;
//!
//! let client = PlaygroundClient::new(ClientConfig::from_env()?)?;
//! let store = DatasetStore::new(client, 100, Duration::from_secs(300));
//!
//! let page = store.list(None, None).await?;   // fetches
//! let same = store.list(None, None).await?;   // served from cache
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T, ClientError>`. A non-2xx response
//! becomes [`ClientError::Api`] carrying the HTTP status, the decoded
//! error body, and the server's `detail` message (or a generic default).
//! Connection-level failures pass through as [`ClientError::Http`]
//! untranslated. Response bodies that are not valid JSON are treated as
//! the empty object on both the success and error paths; this mirrors the
//! server contract, where a malformed 2xx body is not an error.

pub mod config;
pub mod datasets;
pub mod error;
pub mod format;
pub mod store;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use config::{ClientConfig, ClientConfigBuilder};
pub use datasets::{PlaygroundClient, SharedClient};
pub use error::{ClientError, Result, GENERIC_ERROR_MESSAGE};
pub use format::format_file_size;
pub use store::{DatasetStore, StoreStats};
pub use transport::Transport;
pub use types::{Dataset, DatasetPage, DatasetUploadResponse};
