//! ChatPlatform implementation over a serenity `Context`

use async_trait::async_trait;
use dearrow::{ChatPlatform, DomainError, ReplacementEmbed};
use serenity::builder::{CreateAllowedMentions, CreateMessage, EditMessage};
use serenity::client::Context;
use serenity::model::id::{ChannelId, GuildId, MessageId, UserId};
use serenity::model::permissions::Permissions;
use tracing::debug;

use crate::convert::create_embed;

/// Per-event view of the Discord client
pub struct SerenityPlatform<'a> {
    ctx: &'a Context,
    user_id: UserId,
}

impl<'a> SerenityPlatform<'a> {
    pub fn new(ctx: &'a Context, user_id: UserId) -> Self {
        Self { ctx, user_id }
    }
}

#[async_trait]
impl<'a> ChatPlatform for SerenityPlatform<'a> {
    fn self_user_id(&self) -> u64 {
        self.user_id.get()
    }

    fn can_send_messages(&self, guild_id: u64, channel_id: u64) -> bool {
        let Some(guild) = self.ctx.cache.guild(GuildId::new(guild_id)) else {
            debug!(guild_id = %guild_id, "Guild not in cache");
            return false;
        };
        let Some(member) = guild.members.get(&self.user_id) else {
            debug!(guild_id = %guild_id, "Own member not in cache");
            return false;
        };

        let channel_id = ChannelId::new(channel_id);
        if let Some(channel) = guild.channels.get(&channel_id) {
            return guild
                .user_permissions_in(channel, member)
                .contains(Permissions::SEND_MESSAGES);
        }

        // Threads are not in the channel map; check the parent instead.
        guild
            .threads
            .iter()
            .find(|thread| thread.id == channel_id)
            .and_then(|thread| thread.parent_id)
            .and_then(|parent_id| guild.channels.get(&parent_id))
            .is_some_and(|parent| {
                guild
                    .user_permissions_in(parent, member)
                    .contains(Permissions::SEND_MESSAGES_IN_THREADS)
            })
    }

    async fn post_reply(
        &self,
        channel_id: u64,
        message_id: u64,
        embed: &ReplacementEmbed,
    ) -> Result<(), DomainError> {
        let channel = ChannelId::new(channel_id);
        debug!(
            channel_id = %channel_id,
            message_id = %message_id,
            "Replying with replacement embed"
        );

        channel
            .send_message(
                &self.ctx.http,
                CreateMessage::new()
                    .embed(create_embed(embed))
                    .reference_message((channel, MessageId::new(message_id)))
                    .allowed_mentions(CreateAllowedMentions::new().replied_user(false)),
            )
            .await
            .map_err(|e| DomainError::Platform(format!("Discord API error: {}", e)))?;

        Ok(())
    }

    async fn suppress_embeds(&self, channel_id: u64, message_id: u64) -> Result<(), DomainError> {
        debug!(
            channel_id = %channel_id,
            message_id = %message_id,
            "Suppressing original embeds"
        );

        ChannelId::new(channel_id)
            .edit_message(
                &self.ctx.http,
                MessageId::new(message_id),
                EditMessage::new().suppress_embeds(true),
            )
            .await
            .map_err(|e| DomainError::Platform(format!("Discord API error: {}", e)))?;

        Ok(())
    }
}
