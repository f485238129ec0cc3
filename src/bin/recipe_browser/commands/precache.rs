// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Offline cache installation command for recipe-browser
// ABOUTME: Fetches the page asset manifest and reports what was stored

use recipe_browser::cache::{HttpAssetFetcher, OfflineAssetCache};
use recipe_browser::config::BrowserConfig;
use recipe_browser::errors::{AppError, AppResult};
use url::Url;

/// Run the `precache` command
pub async fn run(config: &BrowserConfig, base_url: Option<Url>) -> AppResult<()> {
    let base_url = base_url
        .or_else(|| config.offline_asset_base_url.clone())
        .ok_or_else(|| AppError::config("Set OFFLINE_ASSET_BASE_URL or pass --base-url"))?;

    let fetcher = HttpAssetFetcher::new(base_url);
    let cache = OfflineAssetCache::default();
    let count = cache.install(&fetcher).await?;

    println!(
        "\nCache '{}' installed from {} ({count} assets)",
        cache.name(),
        fetcher.base_url()
    );
    for path in cache.manifest() {
        if let Some(asset) = cache.get(path).await {
            println!(
                "  {path:<16} {:>8} bytes  {}",
                asset.body.len(),
                asset.content_type.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}
