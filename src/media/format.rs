//! Supported image formats.

/// A recognised image format: the short token used as file extension and its
/// canonical MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedFormat {
    pub token: &'static str,
    pub mime: &'static str,
}

/// Every format the downloader can recognise, independent of what a given
/// downloader instance allows.
///
/// Order matters for [`token_for_mime`]: the first token wins when several
/// tokens share a MIME type.
pub const SUPPORTED_FORMATS: &[SupportedFormat] = &[
    SupportedFormat {
        token: "png",
        mime: "image/png",
    },
    SupportedFormat {
        token: "jpeg",
        mime: "image/jpeg",
    },
    SupportedFormat {
        token: "jpg",
        mime: "image/jpeg",
    },
    SupportedFormat {
        token: "gif",
        mime: "image/gif",
    },
    SupportedFormat {
        token: "bmp",
        mime: "image/bmp",
    },
];

/// Look up the MIME type for a format token (`"png"`) or a MIME string
/// (`"image/png"`). Matching is case-insensitive.
pub fn resolve_mime(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();

    SUPPORTED_FORMATS
        .iter()
        .find(|format| format.mime == input || format.token == input)
        .map(|format| format.mime)
}

/// Reverse lookup: the first format token registered for a MIME type.
pub fn token_for_mime(mime: &str) -> Option<&'static str> {
    SUPPORTED_FORMATS
        .iter()
        .find(|format| format.mime == mime)
        .map(|format| format.token)
}

/// Check if a MIME type belongs to the supported set.
pub fn is_supported_mime(mime: &str) -> bool {
    SUPPORTED_FORMATS.iter().any(|format| format.mime == mime)
}

/// Every file extension a stored image can end up with.
pub fn stored_extensions() -> impl Iterator<Item = &'static str> {
    SUPPORTED_FORMATS.iter().map(|format| format.token)
}
