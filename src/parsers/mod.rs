//! JSON chunk parsing
//!
//! # Error Handling Strategy
//!
//! Unlike a line-oriented log, a chunk is a single JSON document, so there is
//! nothing to skip past: a syntax error, a field of the wrong type, an
//! unreadable file or a string that does not recover to UTF-8 fails the whole
//! chunk. Errors are `anyhow::Error` with the file path attached as context.
//!
//! Schema validation is a separate step ([`crate::schema::Validate`]) so that
//! callers who trust their input can skip it.

pub mod chunk;
pub mod deserializers;

pub use chunk::{load_chunk, load_chunk_bounded};
