//! Options controlling how chunks and threads are loaded.

/// Largest chunk file accepted by default: 64MB
pub const DEFAULT_MAX_CHUNK_BYTES: u64 = 64 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Run schema validation on every chunk before merging it
    pub validate: bool,
    /// Load the chunks of a thread in parallel before the merge
    pub parallel: bool,
    /// Chunk files larger than this are refused without being parsed
    pub max_chunk_bytes: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { validate: true, parallel: false, max_chunk_bytes: DEFAULT_MAX_CHUNK_BYTES }
    }
}

impl LoadOptions {
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn max_chunk_bytes(mut self, max_chunk_bytes: u64) -> Self {
        self.max_chunk_bytes = max_chunk_bytes;
        self
    }
}
