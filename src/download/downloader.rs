//! Downloader state: storage, allow-list, URL queue and error log.

use std::path::{Path, PathBuf};

use crate::config::{
    parse_allowed_formats, validate_remote_url, validate_storage_path, DownloaderOptions,
};
use crate::error::{Error, Result};
use crate::fetch::{HttpFetcher, ImageFetcher};
use crate::fs::scan_stored_images;

/// Downloads queued remote images into a local storage directory.
///
/// Only content whose sniffed type is in the allowed list is kept. Batch
/// operations never stop on a single failure; they append its message to
/// [`errors`](Self::errors) instead.
pub struct ImageDownloader {
    pub(crate) storage_path: PathBuf,
    pub(crate) allowed_mime_types: Vec<&'static str>,
    pub(crate) remote_urls: Vec<String>,
    pub(crate) errors: Vec<String>,
    pub(crate) fetcher: Box<dyn ImageFetcher>,
}

impl ImageDownloader {
    /// Create a downloader storing into `storage_path`, fetching over HTTP.
    ///
    /// Never fails. An invalid storage path is recorded in the error log and
    /// reported again by the next operation that touches disk.
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self::with_fetcher(storage_path, HttpFetcher::new())
    }

    /// Create a downloader with a custom image source.
    pub fn with_fetcher(
        storage_path: impl Into<PathBuf>,
        fetcher: impl ImageFetcher + 'static,
    ) -> Self {
        let mut downloader = Self {
            storage_path: storage_path.into(),
            allowed_mime_types: Vec::new(),
            remote_urls: Vec::new(),
            errors: Vec::new(),
            fetcher: Box::new(fetcher),
        };

        if let Err(e) = validate_storage_path(&downloader.storage_path) {
            downloader.record_error(&e);
        }

        downloader
    }

    /// Build a downloader from options.
    ///
    /// Fails only when the HTTP client cannot be built.
    pub fn from_options(options: &DownloaderOptions) -> Result<Self> {
        let fetcher = match &options.user_agent {
            Some(user_agent) => HttpFetcher::with_user_agent(user_agent)?,
            None => HttpFetcher::new(),
        };

        let mut downloader = Self::with_fetcher(options.storage_path.clone(), fetcher);
        if !options.allowed_formats.is_empty() {
            downloader.set_allowed_formats(&options.allowed_formats)?;
        }

        Ok(downloader)
    }

    /// Every error message recorded so far, oldest first.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Add formats to the allow-list.
    ///
    /// Entries may be MIME types (`image/png`) or tokens (`png`), in any case.
    /// Unrecognised entries are skipped and entries already allowed are not
    /// repeated. Fails only when `formats` is empty.
    pub fn set_allowed_formats<S: AsRef<str>, I: IntoIterator<Item = S>>(
        &mut self,
        formats: I,
    ) -> Result<()> {
        for mime in parse_allowed_formats(formats)? {
            if !self.allowed_mime_types.contains(&mime) {
                self.allowed_mime_types.push(mime);
            }
        }

        tracing::debug!("Allowed image types: {:?}", self.allowed_mime_types);
        Ok(())
    }

    /// Allowed MIME types in the order they were added.
    pub fn allowed_formats(&self) -> &[&'static str] {
        &self.allowed_mime_types
    }

    /// Replace the storage path without validating it.
    pub fn set_storage_path(&mut self, path: impl Into<PathBuf>) {
        self.storage_path = path.into();
    }

    /// The configured storage path.
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Queue a single remote URL.
    ///
    /// A validation failure is returned to the caller and not recorded.
    pub fn add_remote_url(&mut self, url: &str) -> Result<()> {
        validate_remote_url(url)?;
        self.remote_urls.push(url.to_string());
        Ok(())
    }

    /// Queue several remote URLs.
    ///
    /// Every valid URL is queued. Each invalid one is recorded in the error
    /// log. Returns `false` if any URL of this call was rejected.
    pub fn add_remote_urls<S: AsRef<str>, I: IntoIterator<Item = S>>(&mut self, urls: I) -> bool {
        let mut all_queued = true;

        for url in urls {
            if let Err(e) = self.add_remote_url(url.as_ref()) {
                self.record_error(&e);
                all_queued = false;
            }
        }

        all_queued
    }

    /// Queued URLs in insertion order.
    pub fn remote_urls(&self) -> &[String] {
        &self.remote_urls
    }

    /// List stored files whose content is any supported image format.
    ///
    /// This checks against every supported format, not only the allowed ones.
    pub fn list_stored_images(&self) -> Result<Vec<PathBuf>> {
        validate_storage_path(&self.storage_path)?;
        scan_stored_images(&self.storage_path)
    }

    pub(crate) fn record_error(&mut self, err: &Error) {
        tracing::warn!("{}", err);
        self.errors.push(err.to_string());
    }
}

impl std::fmt::Debug for ImageDownloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageDownloader")
            .field("storage_path", &self.storage_path)
            .field("allowed_mime_types", &self.allowed_mime_types)
            .field("remote_urls", &self.remote_urls)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}
