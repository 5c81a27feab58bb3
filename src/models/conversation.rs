use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::media::Photo;
use crate::models::message::Message;
use crate::models::text::{RecoveredText, UnknownKeys, Unvalidated};
use crate::utils::file_name_lossy;

/// Where a [`Conversation`] came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Origin {
    /// Built in memory rather than loaded from disk
    #[default]
    Detached,
    /// A single chunk file
    Chunk(PathBuf),
    /// A whole conversation directory, after assembly
    Thread(PathBuf),
}

impl Origin {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Origin::Detached => None,
            Origin::Chunk(path) | Origin::Thread(path) => Some(path),
        }
    }

    /// Last path component: the chunk's file name, or the thread's directory
    /// name. Empty when detached.
    pub fn identifier(&self) -> String {
        self.path().map(file_name_lossy).unwrap_or_default()
    }
}

/// One chunk of a conversation, or the whole conversation once assembled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Conversation {
    #[serde(skip)]
    pub origin: Origin,
    /// Display order, not join order
    pub participants: Vec<Participant>,
    pub messages: Vec<Message>,
    #[serde(default)]
    pub title: Option<RecoveredText>,
    #[serde(default)]
    pub is_still_participant: bool,
    #[serde(default)]
    pub thread_type: Option<RecoveredText>,
    #[serde(default)]
    pub thread_path: Option<RecoveredText>,
    #[serde(default, rename = "image")]
    pub thumbnail: Option<Photo>,
    #[serde(default)]
    pub magic_words: Vec<bool>,
    #[serde(default)]
    pub joinable_mode: Option<Unvalidated>,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}

impl Conversation {
    /// File name while this is a chunk, directory name once assembled.
    pub fn path_identifier(&self) -> String {
        self.origin.identifier()
    }

    pub fn participant_names(&self) -> impl Iterator<Item = &str> {
        self.participants.iter().map(|p| p.name.as_str())
    }

    /// Earliest message time. Only meaningful once messages are sorted.
    pub fn first_message_at(&self) -> Option<DateTime<Utc>> {
        self.messages.first().map(Message::sent_at)
    }

    /// Latest message time. Only meaningful once messages are sorted.
    pub fn last_message_at(&self) -> Option<DateTime<Utc>> {
        self.messages.last().map(Message::sent_at)
    }
}

/// A member of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Participant {
    pub name: RecoveredText,
    #[serde(flatten)]
    pub unknown: UnknownKeys,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: RecoveredText::new(name), unknown: UnknownKeys::default() }
    }
}
