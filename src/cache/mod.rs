// ABOUTME: Offline asset cache abstraction for serving the page shell without a network
// ABOUTME: Pluggable asset fetchers (HTTP, in-memory) behind the AssetFetcher trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cache-first offline asset store
pub mod offline;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppResult;

pub use offline::{
    AssetResponse, HttpAssetFetcher, OfflineAssetCache, ResponseOrigin, StaticAssetFetcher,
};

/// Fetched page asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedAsset {
    /// Request path, e.g. `/recipes.js`
    pub path: String,
    /// `Content-Type` reported by the origin, if any
    pub content_type: Option<String>,
    /// Raw body
    pub body: Bytes,
}

impl CachedAsset {
    /// Asset with no content type
    #[must_use]
    pub fn new(path: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            path: path.into(),
            content_type: None,
            body: body.into(),
        }
    }

    /// Set the content type
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Network side of the offline cache
///
/// # Examples
///
/// ```rust,no_run
/// use recipe_browser::cache::{OfflineAssetCache, StaticAssetFetcher};
/// # async fn example() -> Result<(), recipe_browser::errors::AppError> {
/// let fetcher = StaticAssetFetcher::default().with_asset("/", "<html></html>");
/// let cache = OfflineAssetCache::new("demo-v1", vec!["/".to_owned()]);
/// cache.install(&fetcher).await?;
/// let response = cache.respond("/", &fetcher).await?;
/// assert!(response.origin.is_cache());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetch one asset from the network
    ///
    /// # Errors
    ///
    /// Returns an error when the asset cannot be retrieved
    async fn fetch(&self, path: &str) -> AppResult<CachedAsset>;
}
