//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Corrupts text the way the exporter does: one code unit per UTF-8 byte
pub fn corrupt(text: &str) -> String {
    text.bytes().map(char::from).collect()
}

/// Escapes text for embedding in a JSON string literal
pub fn json_string(text: &str) -> String {
    serde_json::to_string(text).expect("strings always serialize")
}

/// Builder for an export directory holding conversation directories
pub struct ExportBuilder {
    temp_dir: TempDir,
}

impl ExportBuilder {
    /// Create a new builder with an empty export root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the export root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a conversation directory at `relative` with the given chunks
    pub fn with_thread(self, relative: &str, chunks: &[ChunkBuilder]) -> Self {
        let dir = self.temp_dir.path().join(relative);
        fs::create_dir_all(&dir).expect("Failed to create thread dir");
        for (i, chunk) in chunks.iter().enumerate() {
            chunk.create_in(&dir, &format!("message_{}.json", i + 1));
        }
        self
    }

    /// Add a raw file at `relative`
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write file");
        self
    }

    /// Absolute path of a directory inside the export
    pub fn thread_path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one `message_<n>.json` chunk
pub struct ChunkBuilder {
    title: String,
    participants: Vec<String>,
    messages: Vec<MessageBuilder>,
    extra_fields: Vec<(String, String)>,
}

impl ChunkBuilder {
    /// Create a chunk for a two-person conversation with no messages
    pub fn new() -> Self {
        Self {
            title: "Alice".to_string(),
            participants: vec!["Alice".to_string(), "Bob".to_string()],
            messages: Vec::new(),
            extra_fields: Vec::new(),
        }
    }

    /// Set the title (plain text, corrupted on write)
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Set the participants (plain text, corrupted on write)
    pub fn participants(mut self, names: &[&str]) -> Self {
        self.participants = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Add a message
    pub fn with_message(mut self, message: MessageBuilder) -> Self {
        self.messages.push(message);
        self
    }

    /// Add messages with the given timestamps
    pub fn with_timestamps(mut self, timestamps: &[i64]) -> Self {
        for &ts in timestamps {
            self.messages.push(MessageBuilder::new().timestamp(ts));
        }
        self
    }

    /// Add an undeclared top-level field with a raw JSON value
    pub fn extra_field(mut self, key: &str, raw_json: &str) -> Self {
        self.extra_fields.push((key.to_string(), raw_json.to_string()));
        self
    }

    /// Convert to JSON string, corrupting text the way the exporter does
    pub fn to_json(&self) -> String {
        let participants = self
            .participants
            .iter()
            .map(|n| format!(r#"{{"name":{}}}"#, json_string(&corrupt(n))))
            .collect::<Vec<_>>()
            .join(",");
        let messages = self.messages.iter().map(|m| m.to_json()).collect::<Vec<_>>().join(",");
        let extra = self
            .extra_fields
            .iter()
            .map(|(k, v)| format!(r#","{}":{}"#, k, v))
            .collect::<String>();

        format!(
            r#"{{"participants":[{}],"messages":[{}],"title":{},"is_still_participant":true,"thread_type":"Regular","thread_path":"inbox/test"{}}}"#,
            participants,
            messages,
            json_string(&corrupt(&self.title)),
            extra
        )
    }

    /// Write the chunk as `dir/name`
    pub fn create_in(&self, dir: &Path, name: &str) {
        fs::write(dir.join(name), self.to_json()).expect("Failed to write chunk file");
    }
}

impl Default for ChunkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for messages inside a chunk
pub struct MessageBuilder {
    sender: String,
    timestamp: i64,
    content: Option<String>,
    reactions: Vec<(String, String)>,
    extra_fields: Vec<(String, String)>,
}

impl MessageBuilder {
    /// Create a text-less message from Alice
    pub fn new() -> Self {
        Self {
            sender: "Alice".to_string(),
            timestamp: 1_600_000_000_000,
            content: None,
            reactions: Vec::new(),
            extra_fields: Vec::new(),
        }
    }

    /// Set the sender (plain text, corrupted on write)
    pub fn sender(mut self, sender: &str) -> Self {
        self.sender = sender.to_string();
        self
    }

    /// Set the timestamp in milliseconds
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the content (plain text, corrupted on write)
    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    /// Add a reaction (emoji corrupted twice on write, like the exporter does)
    pub fn reaction(mut self, emoji: &str, actor: &str) -> Self {
        self.reactions.push((emoji.to_string(), actor.to_string()));
        self
    }

    /// Add an undeclared field with a raw JSON value
    pub fn extra_field(mut self, key: &str, raw_json: &str) -> Self {
        self.extra_fields.push((key.to_string(), raw_json.to_string()));
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let content = self
            .content
            .as_ref()
            .map(|c| format!(r#","content":{}"#, json_string(&corrupt(c))))
            .unwrap_or_default();
        let reactions = if self.reactions.is_empty() {
            String::new()
        } else {
            let items = self
                .reactions
                .iter()
                .map(|(emoji, actor)| {
                    format!(
                        r#"{{"reaction":{},"actor":{}}}"#,
                        json_string(&corrupt(&corrupt(emoji))),
                        json_string(&corrupt(actor))
                    )
                })
                .collect::<Vec<_>>()
                .join(",");
            format!(r#","reactions":[{}]"#, items)
        };
        let extra = self
            .extra_fields
            .iter()
            .map(|(k, v)| format!(r#","{}":{}"#, k, v))
            .collect::<String>();

        format!(
            r#"{{"sender_name":{},"timestamp_ms":{}{}{}{}}}"#,
            json_string(&corrupt(&self.sender)),
            self.timestamp,
            content,
            reactions,
            extra
        )
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
