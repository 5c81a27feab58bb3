use std::fmt;

use thiserror::Error;

/// Record types of the export, as named in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Conversation,
    Participant,
    Message,
    Audio,
    Photo,
    Video,
    VideoThumbnail,
    Gif,
    Sticker,
    File,
    Share,
    User,
    Reaction,
    BumpedMetadata,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Conversation => "conversation",
            RecordKind::Participant => "participant",
            RecordKind::Message => "message",
            RecordKind::Audio => "audio file",
            RecordKind::Photo => "photo",
            RecordKind::Video => "video",
            RecordKind::VideoThumbnail => "video thumbnail",
            RecordKind::Gif => "gif",
            RecordKind::Sticker => "sticker",
            RecordKind::File => "file",
            RecordKind::Share => "share",
            RecordKind::User => "user",
            RecordKind::Reaction => "reaction",
            RecordKind::BumpedMetadata => "bumped message metadata",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The record carries keys its schema does not declare.
    #[error("{record} has unexpected fields: {}", .fields.join(", "))]
    UnexpectedFields { record: RecordKind, fields: Vec<String> },

    /// A declared field holds data whose structure is not modeled yet.
    #[error("{record} field `{field}` holds data that is not supported yet")]
    Unsupported { record: RecordKind, field: &'static str },
}

impl SchemaError {
    pub fn record(&self) -> RecordKind {
        match self {
            SchemaError::UnexpectedFields { record, .. } | SchemaError::Unsupported { record, .. } => {
                *record
            }
        }
    }
}
