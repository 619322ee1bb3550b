//! Incoming Message Entity
//!
//! A created or edited guild message, reduced to what the replacement
//! policy reads.

use super::embed::SourceEmbed;

/// A guild message delivered by the platform
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    /// Guild the message was posted in
    pub guild_id: u64,
    /// Channel (or thread) the message lives in
    pub channel_id: u64,
    /// Platform message ID
    pub message_id: u64,
    /// Author of the message, when the platform reported it
    pub author_id: Option<u64>,
    /// Platform-generated preview embeds, in display order
    pub embeds: Vec<SourceEmbed>,
}

impl IncomingMessage {
    /// Create a new message without embeds
    pub fn new(guild_id: u64, channel_id: u64, message_id: u64) -> Self {
        Self {
            guild_id,
            channel_id,
            message_id,
            author_id: None,
            embeds: Vec::new(),
        }
    }

    /// Set the author
    pub fn with_author(mut self, author_id: u64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    /// Attach embeds
    pub fn with_embeds(mut self, embeds: Vec<SourceEmbed>) -> Self {
        self.embeds = embeds;
        self
    }

    /// Check whether the message was written by the given user
    pub fn is_authored_by(&self, user_id: u64) -> bool {
        self.author_id == Some(user_id)
    }
}
