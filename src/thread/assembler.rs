use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use crate::models::{Conversation, Origin};
use crate::schema::Validate;

/// Merge the chunks of one conversation into a single thread
///
/// Chunks are taken in the order given: the first supplies the title,
/// participants and other conversation-level fields, and every chunk's
/// messages are appended in turn. The merged messages are then stably sorted
/// by `timestamp_ms`, so messages sharing a millisecond keep their relative
/// order. Chunk order itself is never re-derived here.
///
/// The result is a new value tagged with the chunks' enclosing directory, so
/// [`Conversation::path_identifier`] becomes the directory name.
///
/// # Errors
///
/// Returns an error if `chunks` is empty, or if `validate` is set and a chunk
/// fails schema validation. The [`crate::schema::SchemaError`] can be
/// recovered with `downcast_ref`.
pub fn assemble_thread<I>(chunks: I, validate: bool) -> Result<Conversation>
where
    I: IntoIterator<Item = Conversation>,
{
    let mut chunks = chunks.into_iter();
    let Some(mut first) = chunks.next() else {
        bail!("Cannot assemble a thread from zero chunks");
    };
    if validate {
        check_chunk(&first)?;
    }

    let directory = first.origin.path().and_then(Path::parent).map(thread_directory);
    let mut messages = std::mem::take(&mut first.messages);
    let mut chunk_count = 1;

    for chunk in chunks {
        if validate {
            check_chunk(&chunk)?;
        }
        let chunk_directory = chunk.origin.path().and_then(Path::parent).map(thread_directory);
        if chunk_directory != directory {
            warn!(
                chunk = %chunk.path_identifier(),
                "chunk comes from a different directory than the first chunk"
            );
        }
        messages.extend(chunk.messages);
        chunk_count += 1;
    }

    messages.sort_by_key(|message| message.timestamp_ms);

    let origin = directory.map_or(Origin::Detached, Origin::Thread);
    debug!(
        thread = %origin.identifier(),
        chunks = chunk_count,
        messages = messages.len(),
        "assembled thread"
    );

    Ok(Conversation { origin, messages, ..first })
}

/// The chunks' directory, resolved against the working directory when it has
/// no name of its own (`""` for a bare file name, or `.`).
fn thread_directory(parent: &Path) -> PathBuf {
    if parent.file_name().is_some() {
        return parent.to_path_buf();
    }
    let relative = if parent.as_os_str().is_empty() { Path::new(".") } else { parent };
    fs::canonicalize(relative).unwrap_or_else(|_| parent.to_path_buf())
}

fn check_chunk(chunk: &Conversation) -> Result<()> {
    chunk
        .validate()
        .with_context(|| format!("Chunk failed schema validation: {}", chunk.path_identifier()))
}
