//! Stored image file naming.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::media::format::stored_extensions;

/// Prefix shared by every stored image.
const IMAGE_PREFIX: &str = "image";

/// Extension of an in-flight download.
pub const TEMP_EXTENSION: &str = "tmp";

/// Upper bound on the collision counter.
const MAX_COLLISIONS: u32 = 1000;

/// Build the base stem for a download started at `timestamp` (unix seconds).
pub fn image_stem(timestamp: i64) -> String {
    format!("{}_{}", IMAGE_PREFIX, timestamp)
}

/// Path of the temporary file for a stem.
pub fn temp_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{}.{}", stem, TEMP_EXTENSION))
}

/// Path of the final image file for a stem and format token.
pub fn image_path(dir: &Path, stem: &str, token: &str) -> PathBuf {
    dir.join(format!("{}.{}", stem, token))
}

/// Find a stem for `timestamp` that collides with nothing in `dir`.
///
/// `image_<ts>` is used when free. Otherwise a counter is appended
/// (`image_<ts>_1`, `image_<ts>_2`, ...). A stem is free when neither its temp
/// file nor a stored image with any supported extension exists. Fails once the
/// counter passes its limit, so existing images are never overwritten.
pub fn reserve_image_stem(dir: &Path, timestamp: i64) -> Result<String> {
    let base = image_stem(timestamp);
    if is_stem_free(dir, &base) {
        return Ok(base);
    }

    for counter in 1..=MAX_COLLISIONS {
        let candidate = format!("{}_{}", base, counter);
        if is_stem_free(dir, &candidate) {
            return Ok(candidate);
        }
    }

    Err(Error::Persist(format!(
        "No free file name left for '{}' in '{}'",
        base,
        dir.display()
    )))
}

fn is_stem_free(dir: &Path, stem: &str) -> bool {
    !temp_path(dir, stem).exists()
        && stored_extensions().all(|token| !image_path(dir, stem, token).exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths() {
        let dir = Path::new("/images");
        assert_eq!(image_stem(1700000000), "image_1700000000");
        assert_eq!(
            temp_path(dir, "image_1700000000"),
            PathBuf::from("/images/image_1700000000.tmp")
        );
        assert_eq!(
            image_path(dir, "image_1700000000", "png"),
            PathBuf::from("/images/image_1700000000.png")
        );
    }

    #[test]
    fn test_reserve_free_stem() {
        let dir = TempDir::new().unwrap();
        assert_eq!(reserve_image_stem(dir.path(), 42).unwrap(), "image_42");
    }

    #[test]
    fn test_reserve_stem_skips_stored_image() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("image_42.gif"), b"x").unwrap();
        std::fs::write(dir.path().join("image_42_1.tmp"), b"x").unwrap();

        assert_eq!(reserve_image_stem(dir.path(), 42).unwrap(), "image_42_2");
    }

    #[test]
    fn test_reserve_stem_ignores_other_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("image_42.txt"), b"x").unwrap();

        assert_eq!(reserve_image_stem(dir.path(), 42).unwrap(), "image_42");
    }

    #[test]
    fn test_reserve_stem_fails_when_exhausted() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("image_7.png"), b"x").unwrap();
        for counter in 1..=MAX_COLLISIONS {
            std::fs::write(dir.path().join(format!("image_7_{}.png", counter)), b"x").unwrap();
        }

        let err = reserve_image_stem(dir.path(), 7).unwrap_err();
        assert!(matches!(err, Error::Persist(_)));
    }
}
