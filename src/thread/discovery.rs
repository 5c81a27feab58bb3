use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use regex::Regex;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::LoadOptions;
use crate::models::Conversation;
use crate::parsers::load_chunk_bounded;
use crate::thread::assembler::assemble_thread;
use crate::utils::file_name_lossy;

fn chunk_file_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?i)^message_(\d+)\.json$").expect("chunk file regex should compile")
    })
}

/// Sequence number of a chunk file name like `message_3.json`.
///
/// Returns `None` for names that are not chunk files. Suffixes too long for a
/// `u64` still match and sort last.
pub fn chunk_sequence(file_name: &str) -> Option<u64> {
    let captures = chunk_file_regex().captures(file_name)?;
    Some(captures[1].parse().unwrap_or(u64::MAX))
}

/// List the chunk files directly inside a conversation directory
///
/// Matches regular `message_<digits>.json` files case-insensitively (symlinks
/// are skipped) and returns the paths in ascending sequence-number order
/// (`message_2` before `message_10`). Ties on the number fall back to the
/// file name.
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read.
pub fn discover_chunk_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read conversation directory: {}", dir.display()))?;

    let mut chunks = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let file_type = entry.file_type().context("Failed to read directory entry type")?;
        // Symlinks are skipped, same as in discover_thread_dirs
        if !file_type.is_file() {
            continue;
        }
        let path = entry.path();
        let name = file_name_lossy(&path);
        if let Some(sequence) = chunk_sequence(&name) {
            chunks.push((sequence, name, path));
        }
    }

    chunks.sort();
    Ok(chunks.into_iter().map(|(_, _, path)| path).collect())
}

/// Find every conversation directory under an export root
///
/// A conversation directory is any directory (the root included) that
/// directly holds at least one chunk file. Symlinks are not followed. The
/// result is sorted by path.
///
/// # Errors
///
/// Returns an error if the walk hits an unreadable directory.
pub fn discover_thread_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry =
            entry.with_context(|| format!("Failed to walk export directory: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_chunk = entry.file_name().to_str().and_then(chunk_sequence).is_some();
        if is_chunk && let Some(parent) = entry.path().parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    dirs.sort();
    dirs.dedup();
    debug!(root = %root.display(), threads = dirs.len(), "discovered conversation directories");
    Ok(dirs)
}

/// Load every chunk of one conversation directory and assemble the thread
///
/// With `options.parallel` the chunk files are parsed on the rayon pool;
/// the merge always happens afterwards on the calling thread, in
/// sequence-number order.
///
/// # Errors
///
/// Returns an error if the directory holds no chunk files, if any chunk fails
/// to load, or if validation is enabled and any chunk fails it.
pub fn load_thread_dir(dir: &Path, options: &LoadOptions) -> Result<Conversation> {
    // `.` and other relative paths have no usable last component
    let dir = &fs::canonicalize(dir)
        .with_context(|| format!("Failed to resolve conversation directory: {}", dir.display()))?;
    let files = discover_chunk_files(dir)?;
    if files.is_empty() {
        bail!("No message_<n>.json chunk files found in {}", dir.display());
    }

    let load = |path: &PathBuf| load_chunk_bounded(path, options.max_chunk_bytes);
    let chunks: Vec<Conversation> = if options.parallel {
        files.par_iter().map(load).collect::<Result<_>>()?
    } else {
        files.iter().map(load).collect::<Result<_>>()?
    };

    assemble_thread(chunks, options.validate)
        .with_context(|| format!("Failed to assemble thread: {}", dir.display()))
}
