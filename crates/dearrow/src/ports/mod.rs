//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the replacement policy
//! interacts with external systems.
//!
//! Implementations of these traits live in the adapter crates.

pub mod branding;
pub mod platform;

// Re-exports
pub use branding::BrandingService;
pub use platform::ChatPlatform;
