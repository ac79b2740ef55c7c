//! Configuration module for the image downloader.
//!
//! This module handles:
//! - Storage path validation
//! - Remote URL validation
//! - Allowed format resolution
//! - Downloader options parsed from TOML

pub mod options;
pub mod validation;

pub use options::DownloaderOptions;
pub use validation::{parse_allowed_formats, validate_remote_url, validate_storage_path};
