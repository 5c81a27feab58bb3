//! Assembly of multi-chunk conversations
//!
//! An export stores each conversation as a directory of `message_<n>.json`
//! chunks. [`discovery`] finds conversation directories and their chunk
//! files; [`assembler`] merges loaded chunks into one time-ordered thread.
//!
//! Chunks are independent until the merge, so they may be parsed in parallel
//! ([`crate::config::LoadOptions::parallel`]). The merge itself is always
//! sequential.

pub mod assembler;
pub mod discovery;

pub use assembler::assemble_thread;
pub use discovery::{chunk_sequence, discover_chunk_files, discover_thread_dirs, load_thread_dir};
