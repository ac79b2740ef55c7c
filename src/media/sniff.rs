//! Content type sniffing from file bytes.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// MIME type reported for content that matches no known signature.
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// Number of leading bytes inspected when sniffing a file.
const SNIFF_LEN: u64 = 64;

/// Detect the MIME type of a byte buffer from its magic bytes.
///
/// The declared HTTP content type and the URL extension are never consulted.
pub fn sniff_bytes(bytes: &[u8]) -> &'static str {
    match image::guess_format(bytes) {
        Ok(format) => format.to_mime_type(),
        Err(_) => UNKNOWN_MIME,
    }
}

/// Detect the MIME type of a file on disk.
///
/// Returns `None` for directories and entries that cannot be read.
pub fn sniff_file(path: &Path) -> Option<&'static str> {
    if !path.is_file() {
        return None;
    }

    let file = File::open(path).ok()?;
    let mut header = Vec::with_capacity(SNIFF_LEN as usize);
    file.take(SNIFF_LEN).read_to_end(&mut header).ok()?;

    Some(sniff_bytes(&header))
}

#[cfg(test)]
pub(crate) mod samples {
    //! Minimal byte signatures for each format, shared by tests.

    pub const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    pub const JPEG: &[u8] = b"\xFF\xD8\xFF\xE0\0\x10JFIF\0";
    pub const GIF: &[u8] = b"GIF89a\x01\0\x01\0";
    pub const BMP: &[u8] = b"BM\x3a\0\0\0\0\0\0\0\x36\0\0\0";
    pub const WEBP: &[u8] = b"RIFF\x24\0\0\0WEBPVP8 ";
    pub const TEXT: &[u8] = b"hello, this is not an image";
}
