//! Discord configuration

use serde::{Deserialize, Serialize};

/// Default presence text ("Watching YouTube embeds")
pub const DEFAULT_ACTIVITY: &str = "YouTube embeds";

/// Configuration for Discord integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token
    pub token: String,
    /// The bot's own user ID, used to find its membership in the cache
    pub user_id: u64,
    /// "Watching ..." presence text, if any
    pub activity: Option<String>,
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    /// Set the bot's user ID
    pub fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Set the presence text
    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = Some(activity.into());
        self
    }

    /// Clear the presence
    pub fn without_activity(mut self) -> Self {
        self.activity = None;
        self
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            user_id: 0,
            activity: Some(DEFAULT_ACTIVITY.to_string()),
        }
    }
}
