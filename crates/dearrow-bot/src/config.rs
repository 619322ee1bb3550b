//! Process configuration
//!
//! Read from the environment (a `.env` file is loaded first if present).

use std::time::Duration;

use dearrow::domain::{DEFAULT_BRANDING_URL, DEFAULT_THUMBNAIL_URL};
use dearrow::{DearrowEndpoints, EmbedScan, ReplacerConfig};
use dearrow_integration_discord::DiscordConfig;
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Bot configuration
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    pub user_id: u64,
    /// Presence text; `None` disables the presence
    pub activity: Option<String>,
    pub endpoints: DearrowEndpoints,
    pub request_timeout: Duration,
    pub embed_scan: EmbedScan,
    pub suppress_on_failed_reply: bool,
    pub log_level: String,
}

impl BotConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = get("DEARROW_BOT_TOKEN").ok_or(ConfigError::MissingEnvVar("DEARROW_BOT_TOKEN"))?;

        let user_id = get("DEARROW_USER_ID")
            .ok_or(ConfigError::MissingEnvVar("DEARROW_USER_ID"))?
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "DEARROW_USER_ID",
                message: "expected a nonzero numeric user ID".to_string(),
            })?;

        let activity = match lookup("DEARROW_ACTIVITY") {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(value),
            None => DiscordConfig::default().activity,
        };

        let endpoints = DearrowEndpoints::new(
            get("DEARROW_BRANDING_URL").unwrap_or_else(|| DEFAULT_BRANDING_URL.to_string()),
            get("DEARROW_THUMBNAIL_URL").unwrap_or_else(|| DEFAULT_THUMBNAIL_URL.to_string()),
        )
        .map_err(|e| ConfigError::InvalidValue {
            key: "DEARROW_BRANDING_URL/DEARROW_THUMBNAIL_URL",
            message: e.to_string(),
        })?;

        let request_timeout = match get("DEARROW_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|s| *s > 0)
                    .ok_or_else(|| ConfigError::InvalidValue {
                        key: "DEARROW_REQUEST_TIMEOUT_SECS",
                        message: format!("expected a positive number of seconds, got '{}'", raw),
                    })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let embed_scan = match get("DEARROW_EMBED_SCAN") {
            Some(raw) => raw.parse::<EmbedScan>().map_err(|message| ConfigError::InvalidValue {
                key: "DEARROW_EMBED_SCAN",
                message,
            })?,
            None => EmbedScan::default(),
        };

        let suppress_on_failed_reply = match get("DEARROW_SUPPRESS_ON_FAILED_REPLY") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::InvalidValue {
                key: "DEARROW_SUPPRESS_ON_FAILED_REPLY",
                message: format!("expected true or false, got '{}'", raw),
            })?,
            None => false,
        };

        let log_level = get("DEARROW_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            token,
            user_id,
            activity,
            endpoints,
            request_timeout,
            embed_scan,
            suppress_on_failed_reply,
            log_level,
        })
    }

    pub fn discord_config(&self) -> DiscordConfig {
        let config = DiscordConfig::new(&self.token).with_user_id(self.user_id);
        match &self.activity {
            Some(activity) => config.with_activity(activity),
            None => config.without_activity(),
        }
    }

    pub fn replacer_config(&self) -> ReplacerConfig {
        ReplacerConfig {
            embed_scan: self.embed_scan,
            suppress_on_failed_reply: self.suppress_on_failed_reply,
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
