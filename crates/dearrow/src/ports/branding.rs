//! Branding Service Port
//!
//! Abstract interface for fetching crowd-sourced title and
//! thumbnail corrections.

use async_trait::async_trait;

use crate::domain::entities::BrandingRecord;
use crate::domain::errors::DomainError;

/// Service interface for branding lookups
///
/// # Example
///
/// ```rust,ignore
/// use dearrow::ports::BrandingService;
///
/// struct HttpBrandingService { /* reqwest client */ }
///
/// #[async_trait]
/// impl BrandingService for HttpBrandingService {
///     async fn fetch_branding(&self, video_id: &str) -> Result<BrandingRecord, DomainError> {
///         // GET <branding-endpoint>?videoID=<id>
///     }
/// }
/// ```
#[async_trait]
pub trait BrandingService: Send + Sync {
    /// Fetch the branding record for a video
    ///
    /// Transport failures map to `DomainError::ExternalService`,
    /// undecodable bodies to `DomainError::Decode`.
    async fn fetch_branding(&self, video_id: &str) -> Result<BrandingRecord, DomainError>;
}
