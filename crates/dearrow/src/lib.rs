//! DeArrow Domain Library
//!
//! Core types and the embed-replacement policy for the DeArrow chat bot.
//!
//! # Architecture
//!
//! The crate follows the same Hexagonal layout as the rest of the workspace:
//!
//! - **Domain Layer** (`domain/`): Pure types and synthesis logic
//!   - `entities/`: Incoming messages, source/replacement embeds, branding records
//!   - `value_objects/`: Service endpoints and the embed scan policy
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces to the outside world
//!   - `BrandingService`: fetches crowd-sourced corrections
//!   - `ChatPlatform`: permission lookups and outbound message actions
//!
//! - **Application** (`application/`): The `EmbedReplacer` use case
//!
//! # Usage
//!
//! ```rust,ignore
//! use dearrow::{EmbedReplacer, IncomingMessage};
//!
//! let replacer = EmbedReplacer::new(branding, endpoints);
//! let outcome = replacer.handle(&platform, &message).await;
//! ```

pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use application::{EmbedReplacer, ReplacementOutcome, ReplacerConfig, SkipReason};
pub use domain::{
    BrandingRecord, BrandingThumbnail, BrandingTitle, DearrowEndpoints, DomainError, EmbedAuthor,
    EmbedScan, IncomingMessage, ReplacementEmbed, SourceEmbed, YOUTUBE_PROVIDER,
};
pub use ports::{BrandingService, ChatPlatform};
