//! Record types of a chat-history export.
//!
//! - [`Conversation`] - one chunk file, or a whole assembled thread
//! - [`Participant`] / [`User`] - conversation members and in-message mentions
//! - [`Message`] with its attachments ([`Audio`], [`Photo`], [`Video`], [`Gif`],
//!   [`Sticker`], [`FileAttachment`]), [`Share`], [`Reaction`] and [`BumpedMetadata`]
//!
//! Every string leaf is a [`RecoveredText`], decoded while parsing. Keys a
//! record does not declare are remembered in its `unknown` field so that
//! [`crate::schema::Validate`] can reject them.

pub mod conversation;
pub mod media;
pub mod message;
pub mod text;

pub use conversation::{Conversation, Origin, Participant};
pub use media::{Audio, FileAttachment, Gif, MediaBase, Photo, Sticker, Video, VideoThumbnail};
pub use message::{BumpedMetadata, Message, Reaction, Share, User};
pub use text::{RecoveredText, UnknownKeys, Unvalidated};
