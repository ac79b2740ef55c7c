//! Image Downloader - fetch remote images into a local directory
//!
//! This library downloads images over HTTP(S) and keeps only those whose
//! actual content type, sniffed from the downloaded bytes, is on an
//! allow-list.
//!
//! # Features
//!
//! - Allow-listing of png, jpeg, gif and bmp content
//! - Temp-file-then-rename storage, nothing left behind on failure
//! - Batch queue downloads that record failures instead of aborting
//! - Listing of stored images by sniffed content type
//!
//! # Example
//!
//! ```no_run
//! use image_downloader::ImageDownloader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut downloader = ImageDownloader::new("/var/images");
//!     downloader.set_allowed_formats(["png", "jpeg"])?;
//!     downloader.add_remote_urls(["https://example.com/a.png", "https://example.com/b.jpg"]);
//!
//!     downloader.download_all().await?;
//!
//!     for error in downloader.errors() {
//!         eprintln!("{}", error);
//!     }
//!     println!("{:?}", downloader.list_stored_images()?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod download;
pub mod error;
pub mod fetch;
pub mod fs;
pub mod media;

// Re-exports for convenience
pub use config::{validate_remote_url, validate_storage_path, DownloaderOptions};
pub use download::ImageDownloader;
pub use error::{Error, Result};
pub use fetch::{HttpFetcher, ImageFetcher};
pub use media::{SupportedFormat, SUPPORTED_FORMATS};
