// ABOUTME: Integration tests for the offline asset cache
// ABOUTME: All-or-nothing install, cache-first responses and uncached network pass-through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::http::header;
use axum::routing::get;
use axum::Router;
use common::init_test_logging;
use recipe_browser::cache::{
    HttpAssetFetcher, OfflineAssetCache, ResponseOrigin, StaticAssetFetcher,
};
use recipe_browser::constants::offline::{CACHE_NAME, PRECACHE_MANIFEST};
use recipe_browser::errors::ErrorCode;
use tokio::net::TcpListener;
use url::Url;

fn shell_fetcher() -> StaticAssetFetcher {
    StaticAssetFetcher::default()
        .with_asset("/", "<html>home</html>")
        .with_asset("/recipes.html", "<html>recipes</html>")
        .with_asset("/recipes.js", "console.log('recipes')")
        .with_asset("/styles.css", "body {}")
}

fn shell_cache() -> OfflineAssetCache {
    OfflineAssetCache::new(
        "test-cache-v1",
        vec![
            "/".to_owned(),
            "/recipes.html".to_owned(),
            "/recipes.js".to_owned(),
        ],
    )
}

#[test]
fn test_default_cache_uses_page_manifest() {
    let cache = OfflineAssetCache::default();
    assert_eq!(cache.name(), CACHE_NAME);
    assert_eq!(cache.manifest().len(), PRECACHE_MANIFEST.len());
    assert!(cache.manifest().iter().any(|path| path == "/recipes.js"));
}

#[tokio::test]
async fn test_install_stores_every_manifest_entry() {
    init_test_logging();
    let fetcher = shell_fetcher();
    let cache = shell_cache();

    assert!(cache.is_empty().await);
    assert_eq!(cache.install(&fetcher).await.unwrap(), 3);
    assert_eq!(cache.len().await, 3);
    assert!(cache.contains("/recipes.html").await);
    assert!(!cache.contains("/styles.css").await);
}

#[tokio::test]
async fn test_install_is_all_or_nothing() {
    let fetcher = StaticAssetFetcher::default()
        .with_asset("/", "<html>home</html>")
        .with_asset("/recipes.html", "<html>recipes</html>");
    let cache = shell_cache();

    let err = cache.install(&fetcher).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_hits_do_not_touch_the_network() {
    let fetcher = shell_fetcher();
    let cache = shell_cache();
    cache.install(&fetcher).await.unwrap();
    let after_install = fetcher.requests();

    let response = cache.respond("/recipes.js", &fetcher).await.unwrap();
    assert_eq!(response.origin, ResponseOrigin::Cache);
    assert_eq!(&response.asset.body[..], b"console.log('recipes')");
    assert_eq!(fetcher.requests(), after_install);
}

#[tokio::test]
async fn test_misses_pass_through_without_being_stored() {
    let fetcher = shell_fetcher();
    let cache = shell_cache();
    cache.install(&fetcher).await.unwrap();

    let response = cache.respond("/styles.css", &fetcher).await.unwrap();
    assert_eq!(response.origin, ResponseOrigin::Network);
    assert!(!cache.contains("/styles.css").await);

    let again = cache.respond("/styles.css", &fetcher).await.unwrap();
    assert!(!again.origin.is_cache());
}

#[tokio::test]
async fn test_miss_with_network_failure_is_an_error() {
    let fetcher = shell_fetcher();
    let cache = shell_cache();
    assert!(cache.respond("/missing.png", &fetcher).await.is_err());
}

#[tokio::test]
async fn test_http_fetcher_installs_from_a_live_origin() {
    init_test_logging();
    let app = Router::new()
        .route(
            "/",
            get(|| async { ([(header::CONTENT_TYPE, "text/html")], "<html>home</html>") }),
        )
        .route("/recipes.html", get(|| async { "<html>recipes</html>" }))
        .route("/recipes.js", get(|| async { "console.log('recipes')" }));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    let fetcher = HttpAssetFetcher::new(Url::parse(&format!("http://{addr}/")).unwrap());
    let cache = shell_cache();
    cache.install(&fetcher).await.unwrap();

    let home = cache.get("/").await.unwrap();
    assert_eq!(home.content_type.as_deref(), Some("text/html"));
    assert_eq!(&home.body[..], b"<html>home</html>");

    // 404 from the origin on a miss surfaces as an error
    let err = cache.respond("/form.png", &fetcher).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}
