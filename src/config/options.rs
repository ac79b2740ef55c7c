//! Downloader options.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::Result;

/// Options used to build an [`ImageDownloader`](crate::ImageDownloader).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloaderOptions {
    /// Directory images are stored in. Must already exist.
    pub storage_path: PathBuf,

    /// Allowed formats, as tokens (`png`) or MIME types (`image/png`).
    #[serde(default)]
    pub allowed_formats: Vec<String>,

    /// User agent sent with image requests.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl DownloaderOptions {
    /// Create options for a storage directory with nothing allowed yet.
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path.into(),
            allowed_formats: Vec::new(),
            user_agent: None,
        }
    }

    /// Parse options from a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let options: DownloaderOptions = toml::from_str(content)?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_from_toml_full() {
        let options = DownloaderOptions::from_toml(
            r#"
            storage_path = "/var/images"
            allowed_formats = ["png", "image/jpeg"]
            user_agent = "image-downloader/0.1"
            "#,
        )
        .unwrap();

        assert_eq!(options.storage_path, PathBuf::from("/var/images"));
        assert_eq!(options.allowed_formats, vec!["png", "image/jpeg"]);
        assert_eq!(options.user_agent.as_deref(), Some("image-downloader/0.1"));
    }

    #[test]
    fn test_from_toml_defaults() {
        let options = DownloaderOptions::from_toml(r#"storage_path = "images""#).unwrap();
        assert!(options.allowed_formats.is_empty());
        assert!(options.user_agent.is_none());
    }

    #[test]
    fn test_from_toml_missing_storage_path() {
        let result = DownloaderOptions::from_toml(r#"allowed_formats = ["png"]"#);
        assert!(matches!(result, Err(Error::TomlParse(_))));
    }
}
