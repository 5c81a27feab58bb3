use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::DEFAULT_MAX_CHUNK_BYTES;
use crate::models::{Conversation, Origin};
use crate::utils::open_bounded;

/// Parse one chunk file into a [`Conversation`]
///
/// Every string leaf is recovered while parsing. The result is tagged with
/// the chunk's own path, so [`Conversation::path_identifier`] is the file
/// name. Schema validation is left to the caller.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is larger than the default
/// limit, is not valid JSON, has a field of the wrong type, or contains a
/// string whose recovered bytes are not UTF-8. There is no partial result.
pub fn load_chunk(path: &Path) -> Result<Conversation> {
    load_chunk_bounded(path, DEFAULT_MAX_CHUNK_BYTES)
}

/// [`load_chunk`] with an explicit size limit.
pub fn load_chunk_bounded(path: &Path, max_bytes: u64) -> Result<Conversation> {
    let file = open_bounded(path, max_bytes)?;
    let reader = BufReader::new(file);

    let mut chunk: Conversation = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse chunk file: {}", path.display()))?;
    chunk.origin = Origin::Chunk(path.to_path_buf());

    debug!(
        path = %path.display(),
        messages = chunk.messages.len(),
        participants = chunk.participants.len(),
        "loaded chunk"
    );

    Ok(chunk)
}
