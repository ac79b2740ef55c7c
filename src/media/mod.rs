//! Media module for format recognition and content sniffing.

pub mod format;
pub mod sniff;

pub use format::{
    is_supported_mime, resolve_mime, token_for_mime, SupportedFormat, SUPPORTED_FORMATS,
};
pub use sniff::{sniff_bytes, sniff_file, UNKNOWN_MIME};
