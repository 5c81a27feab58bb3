//! Messenger History Parser - load chat-history exports into validated threads
//!
//! An export stores each conversation as a directory of numbered
//! `message_<n>.json` chunks. This library:
//!
//! - Recovers text the exporter mangled by writing each UTF-8 byte as its own
//!   code unit (and reaction tokens, which are mangled twice)
//! - Parses chunks into a strict record model that remembers every key it
//!   does not declare, so validation can reject schema drift
//! - Merges the chunks of a conversation into one time-ordered thread
//!
//! # Example
//!
//! ```no_run
//! use messenger_history_parser::{LoadOptions, load_thread_dir};
//! use std::path::PathBuf;
//!
//! let dir = PathBuf::from("/exports/messages/inbox/alice_1a2b3c");
//! let thread = load_thread_dir(&dir, &LoadOptions::default())?;
//! println!("{}: {} messages", thread.path_identifier(), thread.messages.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod encoding;
pub mod models;
pub mod parsers;
pub mod schema;
pub mod telemetry;
pub mod thread;
pub mod utils;

// Re-export commonly used types
pub use config::LoadOptions;
pub use encoding::{decode_reaction, recode};
pub use models::{Conversation, Message};
pub use parsers::load_chunk;
pub use schema::{SchemaError, Validate};
pub use thread::{assemble_thread, discover_thread_dirs, load_thread_dir};
