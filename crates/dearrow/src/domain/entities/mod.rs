//! Domain Entities
//!
//! Request-scoped data handled by the replacement policy.
//! Nothing here outlives a single event.

mod branding;
mod embed;
mod message;

pub use branding::{BrandingRecord, BrandingThumbnail, BrandingTitle};
pub use embed::{EmbedAuthor, ReplacementEmbed, SourceEmbed, YOUTUBE_PROVIDER};
pub use message::IncomingMessage;
