//! Discord Integration for DeArrow
//!
//! This crate connects the embed-replacement policy to Discord through
//! serenity: gateway events in, cache-backed permission checks and REST
//! calls out.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dearrow_integration_discord::{DiscordBot, DiscordConfig};
//!
//! let config = DiscordConfig::new("your-bot-token").with_user_id(1234);
//! let mut bot = DiscordBot::new(config, replacer).await?;
//! bot.start().await?;
//! ```

mod client;
mod config;
mod convert;
mod handler;
mod platform;

pub use client::DiscordBot;
pub use config::DiscordConfig;
pub use handler::DiscordHandler;
pub use platform::SerenityPlatform;
