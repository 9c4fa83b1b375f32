//! Read-through dataset store with LRU eviction and TTL expiration.
//!
//! [`DatasetStore`] wraps a [`PlaygroundClient`] and owns all caching
//! policy, keeping the client itself a plain function surface. It mirrors
//! the query-cache behavior of the Playground front end:
//!
//! - `list` and `get` are read-through cached
//! - `upload` and `delete` pass straight through and, on success,
//!   invalidate every cached page (mutations change pagination globally)
//!
//! # Staleness Behavior
//!
//! Cache entries are lazily evicted on access when their TTL expires.
//! Stale entries remain in the store until accessed or evicted by LRU
//! pressure. Datasets mutated outside this store (another client, the web
//! UI) may be served stale until the TTL expires or `invalidate()` /
//! `clear()` is called.

use crate::datasets::{PlaygroundClient, SharedClient};
use crate::error::Result;
use crate::types::{Dataset, DatasetPage, DatasetUploadResponse};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cached entry with timestamp for TTL-based expiration.
#[derive(Debug, Clone)]
struct CachedEntry<T> {
    value: T,
    cached_at: Instant,
}

impl<T> CachedEntry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            cached_at: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() >= ttl
    }
}

/// Caching wrapper around [`PlaygroundClient`].
pub struct DatasetStore {
    client: SharedClient,
    /// (page, page_size) -> cached page
    pages: Arc<RwLock<LruCache<(u32, u32), CachedEntry<DatasetPage>>>>,
    /// dataset id -> cached dataset
    datasets: Arc<RwLock<LruCache<String, CachedEntry<Dataset>>>>,
    ttl: Duration,
}

impl DatasetStore {
    /// Create a new store over the given client.
    ///
    /// Set `ttl` to `Duration::ZERO` to effectively disable caching
    /// (entries will always be considered expired). The capacity applies
    /// separately to pages and datasets.
    pub fn new(client: PlaygroundClient, capacity: usize, ttl: Duration) -> Self {
        Self::with_shared(Arc::new(client), capacity, ttl)
    }

    /// Create a new store over an already-shared client.
    pub fn with_shared(client: SharedClient, capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            client,
            pages: Arc::new(RwLock::new(LruCache::new(capacity))),
            datasets: Arc::new(RwLock::new(LruCache::new(capacity))),
            ttl,
        }
    }

    /// Access the underlying client directly (bypassing the cache).
    pub fn client(&self) -> &PlaygroundClient {
        &self.client
    }

    /// List datasets, serving from cache when possible.
    pub async fn list(&self, page: Option<u32>, page_size: Option<u32>) -> Result<DatasetPage> {
        let key = (
            page.unwrap_or(crate::datasets::DEFAULT_PAGE),
            page_size.unwrap_or(crate::datasets::DEFAULT_PAGE_SIZE),
        );

        if !self.ttl.is_zero() {
            let cache = self.pages.read().await;
            if let Some(entry) = cache.peek(&key) {
                if !entry.is_expired(self.ttl) {
                    tracing::debug!(page = key.0, page_size = key.1, "Page cache hit");
                    return Ok(entry.value.clone());
                }
                tracing::debug!(page = key.0, page_size = key.1, "Page cache entry expired");
            }
        }

        let result = self.client.list_datasets(page, page_size).await?;

        if !self.ttl.is_zero() {
            let mut cache = self.pages.write().await;
            cache.put(key, CachedEntry::new(result.clone()));
        }

        Ok(result)
    }

    /// Get a dataset by id, serving from cache when possible.
    pub async fn get(&self, id: &str) -> Result<Dataset> {
        if !self.ttl.is_zero() {
            let cache = self.datasets.read().await;
            if let Some(entry) = cache.peek(id) {
                if !entry.is_expired(self.ttl) {
                    tracing::debug!(dataset = %id, "Dataset cache hit");
                    return Ok(entry.value.clone());
                }
                tracing::debug!(dataset = %id, "Dataset cache entry expired");
            }
        }

        let dataset = self.client.get_dataset(id).await?;

        if !self.ttl.is_zero() {
            let mut cache = self.datasets.write().await;
            cache.put(id.to_string(), CachedEntry::new(dataset.clone()));
        }

        Ok(dataset)
    }

    /// Upload a new dataset, invalidating all cached pages on success.
    pub async fn upload(
        &self,
        file_name: &str,
        contents: Vec<u8>,
        name: Option<&str>,
    ) -> Result<DatasetUploadResponse> {
        let response = self.client.upload_dataset(file_name, contents, name).await?;
        self.invalidate_pages().await;
        Ok(response)
    }

    /// Delete a dataset, invalidating its cache entry and all cached
    /// pages on success.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete_dataset(id).await?;
        self.invalidate(id).await;
        self.invalidate_pages().await;
        Ok(())
    }

    /// Invalidate a specific dataset cache entry.
    pub async fn invalidate(&self, id: &str) {
        let mut cache = self.datasets.write().await;
        if cache.pop(id).is_some() {
            tracing::debug!(dataset = %id, "Dataset cache entry invalidated");
        }
    }

    /// Invalidate all cached pages.
    pub async fn invalidate_pages(&self) {
        let mut cache = self.pages.write().await;
        if !cache.is_empty() {
            cache.clear();
            tracing::debug!("Page cache invalidated");
        }
    }

    /// Clear all cached data (datasets and pages).
    pub async fn clear(&self) {
        {
            let mut cache = self.datasets.write().await;
            cache.clear();
        }
        {
            let mut cache = self.pages.write().await;
            cache.clear();
        }
        tracing::debug!("Store caches cleared");
    }

    /// Returns store statistics.
    ///
    /// Entry counts include potentially expired entries that haven't been
    /// lazily evicted yet.
    pub async fn stats(&self) -> StoreStats {
        let now = Instant::now();

        let dataset_cache = self.datasets.read().await;
        let dataset_entries = dataset_cache.len();
        let dataset_expired = dataset_cache
            .iter()
            .filter(|(_, e)| now.duration_since(e.cached_at) >= self.ttl)
            .count();
        drop(dataset_cache);

        let page_cache = self.pages.read().await;
        let page_entries = page_cache.len();
        let page_expired = page_cache
            .iter()
            .filter(|(_, e)| now.duration_since(e.cached_at) >= self.ttl)
            .count();

        StoreStats {
            dataset_entries,
            dataset_expired,
            page_entries,
            page_expired,
            ttl: self.ttl,
        }
    }
}

/// Store statistics for monitoring.
#[derive(Debug, Clone)]
pub struct StoreStats {
    /// Total number of dataset entries in the store
    pub dataset_entries: usize,
    /// Number of expired dataset entries (not yet evicted)
    pub dataset_expired: usize,
    /// Total number of cached pages
    pub page_entries: usize,
    /// Number of expired page entries (not yet evicted)
    pub page_expired: usize,
    /// Current TTL setting
    pub ttl: Duration,
}
