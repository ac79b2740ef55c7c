//! Single image download: fetch, stage, sniff, check and store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::config::{validate_remote_url, validate_storage_path};
use crate::download::ImageDownloader;
use crate::error::{Error, Result};
use crate::fs::{image_path, reserve_image_stem, temp_path};
use crate::media::{sniff_bytes, token_for_mime};

impl ImageDownloader {
    /// Download one remote image into the storage directory.
    ///
    /// The body is written to `image_<ts>.tmp`, its content type is sniffed
    /// from those bytes and, when allowed, the file is renamed to
    /// `image_<ts>.<ext>`. On success exactly one file is left behind and its
    /// path returned; on failure the temporary file is removed.
    pub async fn download_one(&self, url: &str) -> Result<PathBuf> {
        let parsed = validate_remote_url(url)?;

        let bytes = self.fetcher.fetch(&parsed).await?;
        if bytes.is_empty() {
            return Err(Error::fetch(url, "empty response body"));
        }

        validate_storage_path(&self.storage_path)?;

        let stem = reserve_image_stem(&self.storage_path, Utc::now().timestamp())?;
        let final_path =
            store_image(&self.storage_path, &stem, &bytes, &self.allowed_mime_types).await?;

        tracing::info!("Downloaded: {} -> {}", url, final_path.display());
        Ok(final_path)
    }
}

/// Stage `bytes` as `<stem>.tmp` in `dir`, then keep it as `<stem>.<ext>` if
/// its content type is allowed.
async fn store_image(
    dir: &Path,
    stem: &str,
    bytes: &[u8],
    allowed_mime_types: &[&'static str],
) -> Result<PathBuf> {
    let tmp_path = temp_path(dir, stem);

    if let Err(e) = tokio::fs::write(&tmp_path, bytes).await {
        discard_temp(&tmp_path).await;
        return Err(Error::Persist(format!(
            "Unable to save the remote image file '{}': {}",
            tmp_path.display(),
            e
        )));
    }

    // Same bytes as the staged file.
    let mime = sniff_bytes(bytes);
    tracing::debug!("Sniffed {} for {}", mime, tmp_path.display());

    let token = token_for_mime(mime).filter(|_| allowed_mime_types.contains(&mime));
    let Some(token) = token else {
        discard_temp(&tmp_path).await;
        return Err(Error::Policy {
            mime: mime.to_string(),
        });
    };

    let final_path = image_path(dir, stem, token);
    if let Err(e) = tokio::fs::rename(&tmp_path, &final_path).await {
        discard_temp(&tmp_path).await;
        return Err(Error::Persist(format!(
            "Unable to rename image file '{}', please check the rights of the images storage: {}",
            tmp_path.display(),
            e
        )));
    }

    Ok(final_path)
}

/// Remove a temporary file, tolerating its absence.
async fn discard_temp(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != ErrorKind::NotFound {
            tracing::warn!("Failed to remove temporary file {}: {}", path.display(), e);
        }
    }
}
