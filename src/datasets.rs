//! Typed dataset operations over the `/api/datasets` collection.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::transport::Transport;
use crate::types::{Dataset, DatasetPage, DatasetUploadResponse};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

/// Default page number for list calls (pages are 1-indexed).
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for list calls.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default row limit for preview calls.
pub const DEFAULT_PREVIEW_LIMIT: u32 = 10;

/// Playground API client for dataset operations.
///
/// A plain facade over [`Transport`]: every call is one independent HTTP
/// exchange with no local validation, retries, or caching. Callers that
/// want caching should wrap this client in a
/// [`DatasetStore`](crate::store::DatasetStore).
pub struct PlaygroundClient {
    transport: Transport,
}

impl PlaygroundClient {
    /// Create a new client builder with the given base URL.
    pub fn builder(base_url: impl Into<String>) -> crate::config::ClientConfigBuilder {
        crate::config::ClientConfigBuilder::new(base_url)
    }

    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// List datasets, one page at a time.
    ///
    /// `page` defaults to 1 and `page_size` to 10 when not supplied.
    pub async fn list_datasets(
        &self,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<DatasetPage> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        let url = format!("/api/datasets?page={}&page_size={}", page, page_size);
        let data = self
            .transport
            .request(Method::GET, &url, Option::<&()>::None)
            .await?;
        typed(data, "dataset page")
    }

    /// Get a dataset by id.
    pub async fn get_dataset(&self, id: &str) -> Result<Dataset> {
        let url = format!("/api/datasets/{}", urlencoding::encode(id));
        let data = self
            .transport
            .request(Method::GET, &url, Option::<&()>::None)
            .await?;
        typed(data, "dataset")
    }

    /// Upload a new dataset from raw file bytes.
    ///
    /// When `name` is supplied it is sent in the upload's metadata part;
    /// when it is `None` the metadata part is omitted entirely (rather
    /// than sending an empty name).
    pub async fn upload_dataset(
        &self,
        file_name: &str,
        contents: Vec<u8>,
        name: Option<&str>,
    ) -> Result<DatasetUploadResponse> {
        let mut metadata = serde_json::Map::new();
        if let Some(name) = name {
            metadata.insert("name".to_string(), Value::String(name.to_string()));
        }
        let data = self
            .transport
            .upload("/api/datasets", file_name, contents, metadata)
            .await?;
        typed(data, "upload response")
    }

    /// Delete a dataset by id.
    ///
    /// The success body (if any) is discarded. Idempotency is
    /// server-defined; the client does not retry.
    pub async fn delete_dataset(&self, id: &str) -> Result<()> {
        let url = format!("/api/datasets/{}", urlencoding::encode(id));
        self.transport
            .request(Method::DELETE, &url, Option::<&()>::None)
            .await?;
        Ok(())
    }

    /// Preview the first rows of a dataset.
    ///
    /// Returns row records in whatever shape the server produced.
    /// `limit` defaults to 10.
    pub async fn preview_dataset(&self, id: &str, limit: Option<u32>) -> Result<Vec<Value>> {
        let limit = limit.unwrap_or(DEFAULT_PREVIEW_LIMIT);
        let url = format!(
            "/api/datasets/{}/preview?limit={}",
            urlencoding::encode(id),
            limit
        );
        let data = self
            .transport
            .request(Method::GET, &url, Option::<&()>::None)
            .await?;
        typed(data, "preview rows")
    }

    /// Get summary statistics for a dataset.
    ///
    /// The shape of the summary is server-defined; no structure is
    /// enforced client-side.
    pub async fn dataset_stats(&self, id: &str) -> Result<Value> {
        let url = format!("/api/datasets/{}/stats", urlencoding::encode(id));
        self.transport
            .request(Method::GET, &url, Option::<&()>::None)
            .await
    }
}

/// Convert a leniently-decoded body into the operation's typed result.
fn typed<T: serde::de::DeserializeOwned>(data: Value, what: &str) -> Result<T> {
    serde_json::from_value(data)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
}

/// Arc-wrapped client for shared ownership.
pub type SharedClient = Arc<PlaygroundClient>;
