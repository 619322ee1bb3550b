//! Infrastructure Adapters
//!
//! Implementations of the dearrow ports.

mod branding;

pub use branding::HttpBrandingService;
