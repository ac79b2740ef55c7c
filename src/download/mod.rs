//! Download module.
//!
//! This module provides:
//! - The [`ImageDownloader`] with its allow-list, URL queue and error log
//! - Single image downloading
//! - Queue downloading

pub mod batch;
pub mod downloader;
pub mod single;

pub use downloader::ImageDownloader;
