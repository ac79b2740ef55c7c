//! Error types for the image-downloader library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // URL validation errors
    #[error("Invalid remote URL: {0}")]
    Validation(String),

    // Network errors
    #[error("Failed to get the remote file '{url}': {reason}")]
    Fetch { url: String, reason: String },

    // File system errors
    #[error("Unable to persist image: {0}")]
    Persist(String),

    // Allow-list errors
    #[error("Remote image file is a forbidden format to download: {mime}")]
    Policy { mime: String },

    #[error("Remote images list is empty, please add at least one remote image URL")]
    QueueEmpty,

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a fetch error for the given URL.
    pub(crate) fn fetch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Fetch {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_message_names_url() {
        let err = Error::fetch("https://example.com/a.png", "empty response body");
        assert_eq!(
            err.to_string(),
            "Failed to get the remote file 'https://example.com/a.png': empty response body"
        );
    }

    #[test]
    fn test_policy_message_names_mime() {
        let err = Error::Policy {
            mime: "image/webp".to_string(),
        };
        assert!(err.to_string().contains("image/webp"));
    }
}
