//! Storage path, remote URL and allow-list validation.

use std::io::ErrorKind;
use std::path::Path;

use url::Url;

use crate::error::{Error, Result};
use crate::media::resolve_mime;

/// Validate the image storage directory.
///
/// The directory must exist, be a directory and be writable by the current
/// user. Writability is checked by creating an unnamed temporary file, so
/// nothing is left behind.
pub fn validate_storage_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::Config(
            "Images storage path can't be empty".to_string(),
        ));
    }

    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::Config(format!(
                "Images storage path '{}' does not exist",
                path.display()
            ))
        } else {
            Error::Config(format!(
                "Unable to inspect images storage path '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    if !metadata.is_dir() {
        return Err(Error::Config(format!(
            "The path to images storage must be a directory: '{}'",
            path.display()
        )));
    }

    // An unnamed file is removed by the OS as soon as it is dropped.
    tempfile::tempfile_in(path).map_err(|e| {
        Error::Config(format!(
            "Images storage '{}' must be writable: {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Validate a remote image URL.
///
/// Only syntax is checked: the URL must parse and carry a host. Reachability
/// is discovered at download time.
pub fn validate_remote_url(url: &str) -> Result<Url> {
    if url.trim().is_empty() {
        return Err(Error::Validation(
            "Image remote URL can't be empty".to_string(),
        ));
    }

    if url.chars().any(char::is_whitespace) {
        return Err(Error::Validation(format!(
            "Wrong format of image remote URL '{}': contains whitespace",
            url
        )));
    }

    let parsed = Url::parse(url).map_err(|e| {
        Error::Validation(format!("Wrong format of image remote URL '{}': {}", url, e))
    })?;

    if !parsed.has_host() {
        return Err(Error::Validation(format!(
            "Wrong format of image remote URL '{}': missing host",
            url
        )));
    }

    Ok(parsed)
}

/// Resolve allow-list input into supported MIME types.
///
/// Each entry may be a MIME type (`image/png`) or a format token (`png`).
/// Unrecognised entries are dropped silently. Only an empty input is an error.
pub fn parse_allowed_formats<S: AsRef<str>, I: IntoIterator<Item = S>>(
    formats: I,
) -> Result<Vec<&'static str>> {
    let formats: Vec<_> = formats.into_iter().collect();

    if formats.is_empty() {
        return Err(Error::Config(
            "Allowed image formats can't be empty".to_string(),
        ));
    }

    Ok(formats
        .iter()
        .filter_map(|format| resolve_mime(format.as_ref()))
        .collect())
}
