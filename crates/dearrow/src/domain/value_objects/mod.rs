//! Value Objects
//!
//! Immutable value types used by the replacement policy.

mod embed_scan;
mod endpoints;

pub use embed_scan::EmbedScan;
pub use endpoints::{DearrowEndpoints, DEFAULT_BRANDING_URL, DEFAULT_THUMBNAIL_URL};
