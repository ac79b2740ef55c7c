//! Queue download logic.

use crate::download::ImageDownloader;
use crate::error::{Error, Result};

impl ImageDownloader {
    /// Download every queued URL, one after another.
    ///
    /// A failing URL is recorded in the error log and the next one is
    /// attempted. Only an empty queue is an error.
    pub async fn download_all(&mut self) -> Result<()> {
        if self.remote_urls.is_empty() {
            return Err(Error::QueueEmpty);
        }

        let urls = self.remote_urls.clone();
        let mut stored = 0;

        tracing::info!("Downloading {} queued images", urls.len());

        for url in &urls {
            match self.download_one(url).await {
                Ok(_) => stored += 1,
                Err(e) => self.record_error(&e),
            }
        }

        tracing::info!(
            "Queue download complete: {} stored, {} failed",
            stored,
            urls.len() - stored
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::testing::{file_names, StaticFetcher};
    use crate::media::sniff::samples;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_download_all_empty_queue() {
        let dir = TempDir::new().unwrap();
        let mut downloader = ImageDownloader::with_fetcher(dir.path(), StaticFetcher::default());
        downloader.set_allowed_formats(["png"]).unwrap();

        let err = downloader.download_all().await.unwrap_err();

        assert!(matches!(err, Error::QueueEmpty));
        assert!(downloader.errors().is_empty());
        assert!(file_names(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_download_all_continues_past_failures() {
        let dir = TempDir::new().unwrap();
        let fetcher = StaticFetcher::default()
            .with("https://example.com/1.png", samples::PNG)
            .with("https://example.com/2.webp", samples::WEBP)
            .with("https://example.com/3.bmp", samples::BMP)
            .with("https://example.com/4.png", b"");

        let mut downloader = ImageDownloader::with_fetcher(dir.path(), fetcher);
        downloader.set_allowed_formats(["png", "bmp"]).unwrap();
        assert!(downloader.add_remote_urls([
            "https://example.com/1.png",
            "https://example.com/2.webp",
            "https://example.com/missing.png",
            "https://example.com/3.bmp",
            "https://example.com/4.png",
        ]));

        downloader.download_all().await.unwrap();

        assert_eq!(downloader.errors().len(), 3);
        let names = file_names(dir.path());
        assert_eq!(names.len(), 2);
        assert!(names.iter().any(|name| name.ends_with(".png")));
        assert!(names.iter().any(|name| name.ends_with(".bmp")));
        assert!(names.iter().all(|name| !name.ends_with(".tmp")));
        assert_eq!(downloader.list_stored_images().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_download_all_keeps_previous_errors() {
        let dir = TempDir::new().unwrap();
        let fetcher = StaticFetcher::default().with("https://example.com/a.gif", samples::GIF);

        let mut downloader = ImageDownloader::with_fetcher(dir.path(), fetcher);
        downloader.set_allowed_formats(["png"]).unwrap();
        assert!(!downloader.add_remote_urls(["https://example.com/a.gif", ""]));
        assert_eq!(downloader.errors().len(), 1);

        downloader.download_all().await.unwrap();
        downloader.download_all().await.unwrap();

        assert_eq!(downloader.errors().len(), 3);
        assert!(file_names(dir.path()).is_empty());
    }
}
