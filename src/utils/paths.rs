use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Opens a file for reading and checks its size against `max_bytes`.
///
/// The size is read from the open handle rather than the path, so the file
/// cannot be swapped between the check and the read.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file metadata cannot be read
/// - The file is larger than `max_bytes`
pub fn open_bounded(path: &Path, max_bytes: u64) -> Result<File> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    validate_file_size(&file, path, max_bytes)?;
    Ok(file)
}

/// Validates that an open file is no larger than `max_bytes`.
pub fn validate_file_size(file: &File, path: &Path, max_bytes: u64) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > max_bytes {
        bail!("File too large: {} ({} bytes, max {} bytes)", path.display(), file_size, max_bytes);
    }

    Ok(())
}

/// Name of the last path component, lossily converted.
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default()
}
