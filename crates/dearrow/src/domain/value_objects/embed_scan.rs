//! EmbedScan - how the source embed is picked out of a message

use crate::domain::entities::SourceEmbed;

/// Strategy for locating the embed to replace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmbedScan {
    /// Only the first embed is considered. If it is from another
    /// provider the whole message is left alone.
    #[default]
    FirstOnly,
    /// The first embed from the provider wins, wherever it sits.
    FirstMatching,
}

impl EmbedScan {
    /// Pick the source embed for `provider`
    pub fn select<'a>(&self, embeds: &'a [SourceEmbed], provider: &str) -> Option<&'a SourceEmbed> {
        match self {
            Self::FirstOnly => embeds.first().filter(|e| e.is_from_provider(provider)),
            Self::FirstMatching => embeds.iter().find(|e| e.is_from_provider(provider)),
        }
    }
}

impl std::fmt::Display for EmbedScan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbedScan::FirstOnly => write!(f, "first"),
            EmbedScan::FirstMatching => write!(f, "any"),
        }
    }
}

impl std::str::FromStr for EmbedScan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" | "first_only" => Ok(EmbedScan::FirstOnly),
            "any" | "first_matching" => Ok(EmbedScan::FirstMatching),
            _ => Err(format!("Unknown embed scan mode: {}", s)),
        }
    }
}
