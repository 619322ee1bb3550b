//! Chat Platform Port
//!
//! The slice of the chat platform the replacement policy needs:
//! one cache-backed permission check and two outbound message actions.
//!
//! Implementations are expected to be cheap, per-event views over the
//! platform client (e.g. a serenity `Context`).

use async_trait::async_trait;

use crate::domain::entities::ReplacementEmbed;
use crate::domain::errors::DomainError;

/// Platform capabilities used while handling one event
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// ID of the bot's own account
    fn self_user_id(&self) -> u64;

    /// Whether the bot may send messages in the channel
    ///
    /// Resolved from the platform cache. Returns `false` when the bot's
    /// membership, the guild or the channel cannot be resolved.
    fn can_send_messages(&self, guild_id: u64, channel_id: u64) -> bool;

    /// Post `embed` as a reply to a message
    ///
    /// Mentions of every kind are suppressed on the reply.
    async fn post_reply(
        &self,
        channel_id: u64,
        message_id: u64,
        embed: &ReplacementEmbed,
    ) -> Result<(), DomainError>;

    /// Set the "suppress embeds" flag on a message
    async fn suppress_embeds(&self, channel_id: u64, message_id: u64) -> Result<(), DomainError>;
}
