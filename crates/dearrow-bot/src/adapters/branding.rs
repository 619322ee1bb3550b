//! HTTP Branding Implementation
//!
//! Looks up DeArrow branding records using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use dearrow::{BrandingRecord, BrandingService, DearrowEndpoints, DomainError};

const USER_AGENT: &str = concat!("dearrow-bot/", env!("CARGO_PKG_VERSION"));

/// Longest slice of an error response body kept in the error message
const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP implementation of BrandingService
pub struct HttpBrandingService {
    client: Client,
    endpoints: DearrowEndpoints,
}

impl HttpBrandingService {
    pub fn new(endpoints: DearrowEndpoints, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                DomainError::ExternalService(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, endpoints })
    }
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_string();
    }
    let mut truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    truncated.push_str("...");
    truncated
}

#[async_trait]
impl BrandingService for HttpBrandingService {
    async fn fetch_branding(&self, video_id: &str) -> Result<BrandingRecord, DomainError> {
        let url = self.endpoints.branding_request_url(video_id);
        tracing::debug!(video_id = %video_id, "Fetching branding");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(format!("Branding request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::ExternalService(format!(
                "Branding API returned {}: {}",
                status,
                truncate_body(&body)
            )));
        }

        response.json::<BrandingRecord>().await.map_err(|e| {
            if e.is_decode() {
                DomainError::Decode(format!("Invalid branding response: {e}"))
            } else {
                DomainError::ExternalService(format!("Failed to read branding response: {e}"))
            }
        })
    }
}
