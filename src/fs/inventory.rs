//! Stored image enumeration.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::media::{is_supported_mime, sniff_file};

/// List every file in `dir` whose sniffed content type is a supported format.
///
/// Directories and unreadable entries are skipped. The file extension plays no
/// part. Results are sorted by file name.
pub fn scan_stored_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        Error::Config(format!(
            "Unable to read images storage '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut images = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();

        match sniff_file(&path) {
            Some(mime) if is_supported_mime(mime) => images.push(path),
            Some(mime) => {
                tracing::debug!("Skipping {} ({})", path.display(), mime);
            }
            None => {}
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}
