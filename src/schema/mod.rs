//! Strict schema validation.
//!
//! The model is closed-world: a key the export adds that no record declares
//! is a hard error rather than something to skip, so a stale model can never
//! silently misread newer data. Validation walks the record graph depth-first
//! and stops at the first offending record.

pub mod error;
pub mod validate;

pub use error::{RecordKind, SchemaError};
pub use validate::Validate;
