//! Conversions between serenity models and domain types

use dearrow::{EmbedAuthor, IncomingMessage, ReplacementEmbed, SourceEmbed};
use serenity::builder::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};
use serenity::model::channel::{Embed, Message};
use serenity::model::event::MessageUpdateEvent;

/// Convert a serenity embed to a domain `SourceEmbed`
pub(crate) fn source_embed(embed: &Embed) -> SourceEmbed {
    SourceEmbed {
        provider_name: embed.provider.as_ref().and_then(|p| p.name.clone()),
        url: embed.url.clone(),
        title: embed.title.clone(),
        thumbnail_url: embed.thumbnail.as_ref().map(|t| t.url.clone()),
        color: embed.colour.map(|c| c.0),
        author: embed.author.as_ref().map(|a| EmbedAuthor {
            name: a.name.clone(),
            url: a.url.clone(),
            icon_url: a.icon_url.clone(),
        }),
    }
}

/// Build the domain message for a newly created guild message.
///
/// DMs (no guild) yield `None`.
pub(crate) fn incoming_from_message(msg: &Message) -> Option<IncomingMessage> {
    let guild_id = msg.guild_id?;

    Some(
        IncomingMessage::new(guild_id.get(), msg.channel_id.get(), msg.id.get())
            .with_author(msg.author.id.get())
            .with_embeds(msg.embeds.iter().map(source_embed).collect()),
    )
}

/// Build the domain message from a partial update.
///
/// Updates that do not carry embeds produce a message without embeds.
pub(crate) fn incoming_from_update(event: &MessageUpdateEvent) -> Option<IncomingMessage> {
    let guild_id = event.guild_id?;

    let mut incoming =
        IncomingMessage::new(guild_id.get(), event.channel_id.get(), event.id.get()).with_embeds(
            event
                .embeds
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(source_embed)
                .collect(),
        );

    if let Some(author) = &event.author {
        incoming = incoming.with_author(author.id.get());
    }

    Some(incoming)
}

/// Build the serenity embed for a replacement
pub(crate) fn create_embed(embed: &ReplacementEmbed) -> CreateEmbed {
    let mut builder = CreateEmbed::new();

    if let Some(color) = embed.color {
        builder = builder.colour(color);
    }
    if let Some(author) = &embed.author {
        let mut create_author = CreateEmbedAuthor::new(&author.name);
        if let Some(url) = &author.url {
            create_author = create_author.url(url);
        }
        if let Some(icon_url) = &author.icon_url {
            create_author = create_author.icon_url(icon_url);
        }
        builder = builder.author(create_author);
    }
    if let Some(url) = &embed.url {
        builder = builder.url(url);
    }
    if let Some(title) = &embed.title {
        builder = builder.title(title);
    }
    if let Some(footer) = &embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }
    if let Some(image_url) = &embed.image_url {
        builder = builder.image(image_url);
    }

    builder
}
