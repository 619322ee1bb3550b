//! Application Layer (Use Cases)
//!
//! Orchestrates domain logic across the ports.

mod embed_replacer;

pub use embed_replacer::{EmbedReplacer, ReplacementOutcome, ReplacerConfig, SkipReason};
