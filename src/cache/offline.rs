// ABOUTME: Named offline cache pre-populated with the page assets at install time
// ABOUTME: Cache-first responses with plain network pass-through on a miss
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Offline Asset Cache
//!
//! `install` fetches every manifest entry and commits them together: if any
//! fetch fails, nothing is stored. `respond` serves a stored asset without
//! touching the network; on a miss it forwards to the fetcher and returns
//! the result without storing it. Entries never expire; a new cache name is
//! the only invalidation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use url::Url;

use super::{AssetFetcher, CachedAsset};
use crate::constants::offline::{CACHE_NAME, PRECACHE_MANIFEST};
use crate::errors::{AppError, AppResult};

/// Where a response came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseOrigin {
    /// Served from the offline cache
    Cache,
    /// Forwarded to the network
    Network,
}

impl ResponseOrigin {
    /// Whether the response was a cache hit
    #[must_use]
    pub const fn is_cache(self) -> bool {
        matches!(self, Self::Cache)
    }
}

/// Asset plus its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResponse {
    /// The asset
    pub asset: CachedAsset,
    /// Cache hit or network pass-through
    pub origin: ResponseOrigin,
}

/// Named, install-once asset cache
#[derive(Clone)]
pub struct OfflineAssetCache {
    name: String,
    manifest: Vec<String>,
    store: Arc<RwLock<HashMap<String, CachedAsset>>>,
}

impl Default for OfflineAssetCache {
    fn default() -> Self {
        Self::new(
            CACHE_NAME,
            PRECACHE_MANIFEST.iter().map(|&path| path.to_owned()).collect(),
        )
    }
}

impl OfflineAssetCache {
    /// Empty cache called `name` that will hold `manifest` once installed
    #[must_use]
    pub fn new(name: impl Into<String>, manifest: Vec<String>) -> Self {
        Self {
            name: name.into(),
            manifest,
            store: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Cache name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Paths stored at install time
    #[must_use]
    pub fn manifest(&self) -> &[String] {
        &self.manifest
    }

    /// Fetch and store every manifest entry, all or nothing
    ///
    /// Returns the number of stored assets.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error; the cache is left untouched
    pub async fn install<F>(&self, fetcher: &F) -> AppResult<usize>
    where
        F: AssetFetcher + ?Sized,
    {
        info!(cache = %self.name, assets = self.manifest.len(), "Installing offline cache");

        let mut staged = HashMap::with_capacity(self.manifest.len());
        for path in &self.manifest {
            let asset = fetcher.fetch(path).await.inspect_err(|e| {
                warn!(cache = %self.name, path, error = %e, "Offline cache install aborted");
            })?;
            staged.insert(path.clone(), asset);
        }

        let count = staged.len();
        self.store.write().await.extend(staged);
        info!(cache = %self.name, count, "Offline cache installed");
        Ok(count)
    }

    /// Serve `path` from the cache, falling back to the network
    ///
    /// Network responses are not stored.
    ///
    /// # Errors
    ///
    /// Returns the fetch error on a cache miss when the network fails
    pub async fn respond<F>(&self, path: &str, fetcher: &F) -> AppResult<AssetResponse>
    where
        F: AssetFetcher + ?Sized,
    {
        if let Some(asset) = self.get(path).await {
            debug!(cache = %self.name, path, "Offline cache hit");
            return Ok(AssetResponse {
                asset,
                origin: ResponseOrigin::Cache,
            });
        }

        debug!(cache = %self.name, path, "Offline cache miss, forwarding to network");
        let asset = fetcher.fetch(path).await?;
        Ok(AssetResponse {
            asset,
            origin: ResponseOrigin::Network,
        })
    }

    /// Stored asset for `path`, if installed
    pub async fn get(&self, path: &str) -> Option<CachedAsset> {
        self.store.read().await.get(path).cloned()
    }

    /// Whether `path` is stored
    pub async fn contains(&self, path: &str) -> bool {
        self.store.read().await.contains_key(path)
    }

    /// Number of stored assets
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Whether nothing has been installed
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

/// Fetches assets relative to a base URL with reqwest
pub struct HttpAssetFetcher {
    base_url: Url,
    http_client: reqwest::Client,
}

impl HttpAssetFetcher {
    /// Fetcher resolving paths against `base_url`
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    /// Base URL paths are resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    async fn fetch(&self, path: &str) -> AppResult<CachedAsset> {
        let url = self.base_url.join(path).map_err(|e| {
            AppError::invalid_input(format!("Invalid asset path '{path}': {e}")).with_source(e)
        })?;

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AppError::external_service("asset origin", format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                "asset origin",
                format!("{url} returned status {}", status.as_u16()),
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::external_service("asset origin", format!("{url}: {e}")))?;

        debug!(%url, bytes = body.len(), "Fetched page asset");
        Ok(CachedAsset {
            path: path.to_owned(),
            content_type,
            body,
        })
    }
}

/// In-memory [`AssetFetcher`] that counts the requests it serves
#[derive(Debug, Default)]
pub struct StaticAssetFetcher {
    assets: HashMap<String, CachedAsset>,
    requests: AtomicUsize,
}

impl StaticAssetFetcher {
    /// Add an asset served at `path`
    #[must_use]
    pub fn with_asset(mut self, path: &str, body: &'static str) -> Self {
        self.assets.insert(path.to_owned(), CachedAsset::new(path, body));
        self
    }

    /// Number of fetches performed so far
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetFetcher for StaticAssetFetcher {
    async fn fetch(&self, path: &str) -> AppResult<CachedAsset> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.assets
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("asset {path}")))
    }
}
