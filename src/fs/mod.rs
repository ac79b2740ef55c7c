//! Filesystem module.
//!
//! Provides:
//! - Stored image naming and collision handling
//! - Stored image enumeration

pub mod inventory;
pub mod naming;

pub use inventory::scan_stored_images;
pub use naming::{image_path, reserve_image_stem, temp_path, TEMP_EXTENSION};
