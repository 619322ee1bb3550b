//! DearrowEndpoints - where branding data and rendered thumbnails live

use url::Url;

use crate::domain::errors::DomainError;

/// Default branding API endpoint
pub const DEFAULT_BRANDING_URL: &str = "https://sponsor.ajay.app/api/branding";

/// Default thumbnail rendering endpoint
pub const DEFAULT_THUMBNAIL_URL: &str = "https://dearrow-thumb.ajay.app/api/v1/getThumbnail";

/// Base URLs of the DeArrow services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DearrowEndpoints {
    branding_url: String,
    thumbnail_url: String,
}

impl DearrowEndpoints {
    /// Create endpoints from base URLs (without query string)
    pub fn new(
        branding_url: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let branding_url = branding_url.into();
        let thumbnail_url = thumbnail_url.into();

        for (name, value) in [("branding", &branding_url), ("thumbnail", &thumbnail_url)] {
            Url::parse(value).map_err(|e| {
                DomainError::Validation(format!("Invalid {} URL '{}': {}", name, value, e))
            })?;
        }

        Ok(Self {
            branding_url,
            thumbnail_url,
        })
    }

    /// URL of the branding lookup for a video.
    ///
    /// The ID is inserted verbatim.
    pub fn branding_request_url(&self, video_id: &str) -> String {
        format!("{}?videoID={}", self.branding_url, video_id)
    }

    /// URL of a thumbnail rendered at `time` seconds into the video
    pub fn thumbnail_image_url(&self, video_id: &str, time: f64) -> String {
        format!(
            "{}?videoID={}&time={:.6}&generateNow=true",
            self.thumbnail_url, video_id, time
        )
    }
}

impl Default for DearrowEndpoints {
    fn default() -> Self {
        Self {
            branding_url: DEFAULT_BRANDING_URL.to_string(),
            thumbnail_url: DEFAULT_THUMBNAIL_URL.to_string(),
        }
    }
}
