//! Gateway event handler
//!
//! Feeds message create/update events into the embed replacer.

use std::sync::Arc;

use dearrow::{EmbedReplacer, IncomingMessage};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::channel::Message;
use serenity::model::event::MessageUpdateEvent;
use serenity::model::gateway::Ready;
use serenity::model::id::UserId;
use tracing::{info, warn};

use crate::convert::{incoming_from_message, incoming_from_update};
use crate::platform::SerenityPlatform;

/// serenity event handler driving the replacement policy
pub struct DiscordHandler {
    replacer: Arc<EmbedReplacer>,
    user_id: UserId,
}

impl DiscordHandler {
    /// Create a handler acting as the given bot user
    pub fn new(replacer: Arc<EmbedReplacer>, user_id: UserId) -> Self {
        Self { replacer, user_id }
    }

    async fn replace(&self, ctx: &Context, incoming: IncomingMessage) {
        let platform = SerenityPlatform::new(ctx, self.user_id);
        self.replacer.handle(&platform, &incoming).await;
    }
}

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            guilds = %ready.guilds.len(),
            "Connected to Discord"
        );

        if ready.user.id != self.user_id {
            warn!(
                configured = %self.user_id,
                actual = %ready.user.id,
                "Configured user ID does not match the logged-in bot; permission checks will fail"
            );
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if let Some(incoming) = incoming_from_message(&msg) {
            self.replace(&ctx, incoming).await;
        }
    }

    async fn message_update(
        &self,
        ctx: Context,
        _old_if_available: Option<Message>,
        new: Option<Message>,
        event: MessageUpdateEvent,
    ) {
        let incoming = match &new {
            Some(msg) => incoming_from_message(msg),
            None => incoming_from_update(&event),
        };

        if let Some(incoming) = incoming {
            self.replace(&ctx, incoming).await;
        }
    }
}
