//! Discord gateway client wrapper

use std::sync::Arc;

use dearrow::EmbedReplacer;
use serenity::cache::Settings as CacheSettings;
use serenity::gateway::{ActivityData, ShardManager};
use serenity::model::gateway::GatewayIntents;
use serenity::model::id::UserId;
use serenity::Client;
use tracing::{debug, info};

use crate::config::DiscordConfig;
use crate::handler::DiscordHandler;

/// Discord bot: gateway connection plus the replacement handler
pub struct DiscordBot {
    client: Client,
}

impl DiscordBot {
    /// Build the serenity client. Does not connect yet.
    pub async fn new(
        config: DiscordConfig,
        replacer: Arc<EmbedReplacer>,
    ) -> Result<Self, serenity::Error> {
        if config.user_id == 0 {
            return Err(serenity::Error::Other("Discord user ID is not configured"));
        }

        let intents = Self::intents();

        // Messages are never looked up again; users come with members.
        let mut cache_settings = CacheSettings::default();
        cache_settings.max_messages = 0;
        cache_settings.cache_users = false;

        let handler = DiscordHandler::new(replacer, UserId::new(config.user_id));

        let mut builder = Client::builder(&config.token, intents)
            .event_handler(handler)
            .cache_settings(cache_settings);

        if let Some(activity) = &config.activity {
            debug!(activity = %activity, "Setting presence");
            builder = builder.activity(ActivityData::watching(activity));
        }

        let client = builder.await?;
        Ok(Self { client })
    }

    /// Gateway intents the bot needs to see guild messages and their embeds
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
    }

    /// Handle for shutting the gateway down from another task
    pub fn shard_manager(&self) -> Arc<ShardManager> {
        self.client.shard_manager.clone()
    }

    /// Connect and process events until the shards are shut down
    pub async fn start(&mut self) -> Result<(), serenity::Error> {
        info!("Opening Discord gateway connection");
        self.client.start().await
    }
}
