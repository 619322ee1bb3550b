//! Embed Entities
//!
//! The platform-generated preview we read (`SourceEmbed`) and the
//! corrected preview we post in its place (`ReplacementEmbed`).

use serde::{Deserialize, Serialize};
use url::Url;

use super::branding::BrandingRecord;
use crate::domain::value_objects::DearrowEndpoints;

/// Provider name the platform puts on YouTube link previews
pub const YOUTUBE_PROVIDER: &str = "YouTube";

/// Footer prefix shown when the title was replaced
const ORIGINAL_TITLE_PREFIX: &str = "Original title: ";

/// Author block of an embed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    pub name: String,
    pub url: Option<String>,
    pub icon_url: Option<String>,
}

/// A link preview attached to a message by the platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEmbed {
    /// Provider name ("YouTube", "Twitch", ...)
    pub provider_name: Option<String>,
    /// Canonical URL of the previewed page
    pub url: Option<String>,
    pub title: Option<String>,
    pub thumbnail_url: Option<String>,
    /// RGB color of the embed's side bar
    pub color: Option<u32>,
    pub author: Option<EmbedAuthor>,
}

impl SourceEmbed {
    /// Check the provider name against an exact, case-sensitive name
    pub fn is_from_provider(&self, provider: &str) -> bool {
        self.provider_name.as_deref() == Some(provider)
    }

    /// Video ID taken from the `v` query parameter of the embed URL.
    ///
    /// Not validated: a missing URL, unparsable URL or absent parameter
    /// all yield an empty string.
    pub fn video_id(&self) -> String {
        self.url
            .as_deref()
            .and_then(|raw| Url::parse(raw).ok())
            .and_then(|url| {
                url.query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned())
            })
            .unwrap_or_default()
    }
}

/// The corrected preview posted as a reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplacementEmbed {
    pub url: Option<String>,
    pub title: Option<String>,
    pub footer: Option<String>,
    pub image_url: Option<String>,
    pub color: Option<u32>,
    pub author: Option<EmbedAuthor>,
}

impl ReplacementEmbed {
    /// Build the replacement for `source` from a branding record.
    ///
    /// Color, author and URL are carried over. The first submitted title
    /// replaces the original one, which moves to the footer. The image is a
    /// DeArrow-rendered frame when the record yields a timestamp, otherwise
    /// the platform thumbnail.
    pub fn synthesize(
        source: &SourceEmbed,
        video_id: &str,
        record: &BrandingRecord,
        endpoints: &DearrowEndpoints,
    ) -> Self {
        let (title, footer) = match record.preferred_title() {
            Some(title) => (
                Some(title.to_string()),
                Some(format!(
                    "{}{}",
                    ORIGINAL_TITLE_PREFIX,
                    source.title.as_deref().unwrap_or_default()
                )),
            ),
            None => (source.title.clone(), None),
        };

        let image_url = match record.thumbnail_time() {
            Some(time) => Some(endpoints.thumbnail_image_url(video_id, time)),
            None => source.thumbnail_url.clone(),
        };

        Self {
            url: source.url.clone(),
            title,
            footer,
            image_url,
            color: source.color,
            author: source.author.clone(),
        }
    }
}
