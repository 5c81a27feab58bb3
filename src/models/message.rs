use std::borrow::Cow;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::encoding::{EncodingError, decode_reaction, try_decode_reaction};
use crate::models::media::{Audio, FileAttachment, Gif, Photo, Sticker, Video};
use crate::models::text::{RecoveredText, UnknownKeys};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    pub sender_name: RecoveredText,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp_ms")]
    pub timestamp_ms: i64,
    #[serde(skip)]
    sent_at: OnceLock<DateTime<Utc>>,
    #[serde(default)]
    pub content: Option<RecoveredText>,
    #[serde(default)]
    pub audio_files: Vec<Audio>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub gifs: Vec<Gif>,
    #[serde(default)]
    pub sticker: Option<Sticker>,
    #[serde(default)]
    pub files: Vec<FileAttachment>,
    #[serde(default)]
    pub share: Option<Share>,
    /// People mentioned in the message
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub call_duration: Option<i64>,
    #[serde(default)]
    pub missed: Option<bool>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    #[serde(default, rename = "type")]
    pub message_type: Option<RecoveredText>,
    #[serde(default)]
    pub is_unsent: bool,
    #[serde(default, rename = "IP")]
    pub ip: Option<RecoveredText>,
    #[serde(default, rename = "sender_id_INTERNAL")]
    pub sender_id_internal: Option<i64>,
    #[serde(default)]
    pub is_taken_down: bool,
    #[serde(default)]
    pub is_geoblocked_for_viewer: Option<bool>,
    #[serde(default)]
    pub bumped_message_metadata: Option<BumpedMetadata>,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}

impl Message {
    /// Creates a bare message, mostly useful for building threads by hand.
    pub fn new(sender_name: impl Into<String>, timestamp_ms: i64) -> Self {
        Self { sender_name: RecoveredText::new(sender_name), timestamp_ms, ..Self::default() }
    }

    /// UTC instant of `timestamp_ms`, computed on first use and cached.
    ///
    /// Deserialized timestamps are range-checked, so the epoch fallback is only
    /// reachable for hand-built messages.
    pub fn sent_at(&self) -> DateTime<Utc> {
        *self
            .sent_at
            .get_or_init(|| DateTime::from_timestamp_millis(self.timestamp_ms).unwrap_or_default())
    }

    /// Whether the message carries any media attachment.
    pub fn has_media(&self) -> bool {
        !self.audio_files.is_empty()
            || !self.photos.is_empty()
            || !self.videos.is_empty()
            || !self.gifs.is_empty()
            || !self.files.is_empty()
            || self.sticker.is_some()
    }
}

/// An external link shared in a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Share {
    #[serde(default)]
    pub link: Option<RecoveredText>,
    #[serde(default)]
    pub share_text: Option<RecoveredText>,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}

/// A person mentioned inside a message.
///
/// Same shape as [`crate::models::Participant`] but a different record in the
/// export, so it stays a separate type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub name: RecoveredText,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reaction {
    /// Token after the ordinary single recovery pass. Still mangled for
    /// anything outside ASCII; see [`Reaction::emoji`].
    pub reaction: RecoveredText,
    pub actor: RecoveredText,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}

impl Reaction {
    pub fn raw(&self) -> &str {
        &self.reaction
    }

    /// The reaction as it was sent, after the second recovery pass.
    pub fn emoji(&self) -> Cow<'_, str> {
        decode_reaction(&self.reaction)
    }

    pub fn try_emoji(&self) -> Result<Cow<'_, str>, EncodingError> {
        try_decode_reaction(&self.reaction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BumpedMetadata {
    #[serde(default)]
    pub bumped_message: Option<RecoveredText>,
    #[serde(default)]
    pub is_bumped: bool,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}
