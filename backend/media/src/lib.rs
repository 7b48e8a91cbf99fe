//! Image payload handling for the scan endpoints.
//!
//! Browsers send images as base64 data URLs; the CLI reads files from disk.
//! Both paths converge on raw bytes plus a MIME label before the vision call.

pub mod mime_detect;
pub mod payload;

pub use mime_detect::{detect_mime_type, is_image, sniff_image_mime};
pub use payload::{decode_data_url, ImagePayload};
