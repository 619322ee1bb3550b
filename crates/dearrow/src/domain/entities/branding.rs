//! Branding Record Entity
//!
//! Crowd-sourced title and thumbnail corrections for one video,
//! as returned by the DeArrow branding API.

use serde::{Deserialize, Serialize};

/// Corrections submitted for a single video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingRecord {
    /// Candidate titles, best first
    #[serde(default)]
    pub titles: Vec<BrandingTitle>,
    /// Candidate thumbnails, best first
    #[serde(default)]
    pub thumbnails: Vec<BrandingThumbnail>,
    /// Fraction of the video in [0, 1) used when no thumbnail candidate applies
    #[serde(default)]
    pub random_time: f64,
    /// Video length in seconds, if the service knows it
    #[serde(default)]
    pub video_duration: Option<f64>,
}

/// A submitted title
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandingTitle {
    pub title: String,
    /// True when this entry is the uploader's own title
    #[serde(default)]
    pub original: bool,
    #[serde(default)]
    pub votes: i64,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, rename = "UUID", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// A submitted thumbnail (a timestamp into the video)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandingThumbnail {
    /// Offset in seconds; null for the original thumbnail
    #[serde(default)]
    pub timestamp: Option<f64>,
    /// True when this entry is the uploader's own thumbnail
    #[serde(default)]
    pub original: bool,
    #[serde(default)]
    pub votes: i64,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, rename = "UUID", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

impl BrandingRecord {
    /// The winning title, if any title was submitted
    pub fn preferred_title(&self) -> Option<&str> {
        self.titles.first().map(|t| t.title.as_str())
    }

    /// Timestamp (seconds) to render the replacement thumbnail at.
    ///
    /// The first thumbnail candidate wins unless it is the original one.
    /// Otherwise a frame at `random_time * video_duration` is used, but only
    /// when a nonzero duration is known. `None` keeps the platform thumbnail.
    pub fn thumbnail_time(&self) -> Option<f64> {
        if let Some(first) = self.thumbnails.first() {
            if !first.original {
                return Some(first.timestamp.unwrap_or_default());
            }
        }

        match self.video_duration {
            Some(duration) if duration != 0.0 => Some(self.random_time * duration),
            _ => None,
        }
    }
}
