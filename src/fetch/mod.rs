//! Remote image fetching.
//!
//! This module provides:
//! - The [`ImageFetcher`] trait the downloader fetches through
//! - [`HttpFetcher`], the reqwest-backed implementation

pub mod client;

use async_trait::async_trait;
use url::Url;

use crate::error::Result;

pub use client::HttpFetcher;

/// Source of remote image bytes.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch the full body behind `url`.
    ///
    /// An empty body is returned as-is; the caller decides what it means.
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}
