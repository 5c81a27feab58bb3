use crate::models::{
    Audio, BumpedMetadata, Conversation, FileAttachment, Gif, Message, Participant, Photo,
    Reaction, Share, Sticker, UnknownKeys, User, Video, VideoThumbnail,
};
use crate::schema::error::{RecordKind, SchemaError};

/// Closed-world check of a record and everything it owns.
pub trait Validate {
    fn validate(&self) -> Result<(), SchemaError>;
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<(), SchemaError> {
        self.iter().try_for_each(Validate::validate)
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), SchemaError> {
        self.as_slice().validate()
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), SchemaError> {
        self.as_ref().map_or(Ok(()), Validate::validate)
    }
}

fn reject_unknown(record: RecordKind, unknown: &UnknownKeys) -> Result<(), SchemaError> {
    if unknown.is_empty() {
        return Ok(());
    }
    Err(SchemaError::UnexpectedFields { record, fields: unknown.names().to_vec() })
}

/// Records with no nested records of their own.
macro_rules! leaf_records {
    ($($ty:ty => $kind:expr),* $(,)?) => {
        $(
            impl Validate for $ty {
                fn validate(&self) -> Result<(), SchemaError> {
                    reject_unknown($kind, &self.unknown)
                }
            }
        )*
    };
}

leaf_records! {
    Participant => RecordKind::Participant,
    User => RecordKind::User,
    Audio => RecordKind::Audio,
    Photo => RecordKind::Photo,
    VideoThumbnail => RecordKind::VideoThumbnail,
    Gif => RecordKind::Gif,
    FileAttachment => RecordKind::File,
    Share => RecordKind::Share,
    Reaction => RecordKind::Reaction,
    BumpedMetadata => RecordKind::BumpedMetadata,
}

impl Validate for Video {
    fn validate(&self) -> Result<(), SchemaError> {
        reject_unknown(RecordKind::Video, &self.unknown)?;
        self.thumbnail.validate()
    }
}

impl Validate for Sticker {
    fn validate(&self) -> Result<(), SchemaError> {
        reject_unknown(RecordKind::Sticker, &self.unknown)?;
        match &self.ai_stickers {
            Some(items) if !items.is_empty() => {
                Err(SchemaError::Unsupported { record: RecordKind::Sticker, field: "ai_stickers" })
            }
            _ => Ok(()),
        }
    }
}

impl Validate for Message {
    fn validate(&self) -> Result<(), SchemaError> {
        reject_unknown(RecordKind::Message, &self.unknown)?;
        self.audio_files.validate()?;
        self.photos.validate()?;
        self.videos.validate()?;
        self.gifs.validate()?;
        self.sticker.validate()?;
        self.files.validate()?;
        self.share.validate()?;
        self.users.validate()?;
        self.reactions.validate()?;
        self.bumped_message_metadata.validate()
    }
}

impl Validate for Conversation {
    /// `joinable_mode` is opaque and is not checked.
    fn validate(&self) -> Result<(), SchemaError> {
        reject_unknown(RecordKind::Conversation, &self.unknown)?;
        self.thumbnail.validate()?;
        self.participants.validate()?;
        self.messages.validate()
    }
}
