use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::text::{RecoveredText, UnknownKeys, Unvalidated};

/// Fields shared by every media attachment kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaBase {
    pub uri: RecoveredText,
    #[serde(default, rename = "media_path_INTERNAL")]
    pub media_path_internal: Option<RecoveredText>,
    #[serde(default, rename = "type_INTERNAL")]
    pub type_internal: Option<RecoveredText>,
}

/// Converts a `creation_timestamp` (Unix seconds) to an instant.
fn creation_instant(seconds: Option<i64>) -> Option<DateTime<Utc>> {
    seconds.and_then(|s| DateTime::from_timestamp(s, 0))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Audio {
    #[serde(flatten)]
    pub base: MediaBase,
    #[serde(default)]
    pub creation_timestamp: Option<i64>,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}

impl Audio {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        creation_instant(self.creation_timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photo {
    #[serde(flatten)]
    pub base: MediaBase,
    #[serde(default)]
    pub creation_timestamp: Option<i64>,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}

impl Photo {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        creation_instant(self.creation_timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Video {
    #[serde(flatten)]
    pub base: MediaBase,
    #[serde(default)]
    pub creation_timestamp: Option<i64>,
    #[serde(default, alias = "Thumbnail")]
    pub thumbnail: Option<VideoThumbnail>,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}

impl Video {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        creation_instant(self.creation_timestamp)
    }
}

/// Preview image owned by a [`Video`]. Does not nest further.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoThumbnail {
    #[serde(flatten)]
    pub base: MediaBase,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Gif {
    #[serde(flatten)]
    pub base: MediaBase,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sticker {
    #[serde(flatten)]
    pub base: MediaBase,
    /// Element structure is unknown, so any element fails validation.
    #[serde(default)]
    pub ai_stickers: Option<Vec<Unvalidated>>,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}

/// A generic file sent in a message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileAttachment {
    #[serde(flatten)]
    pub base: MediaBase,
    #[serde(default)]
    pub creation_timestamp: Option<i64>,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}

impl FileAttachment {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        creation_instant(self.creation_timestamp)
    }
}
