//! Recovery of text mangled by the export format.
//!
//! The exporter writes every byte of a UTF-8 string as its own JSON code unit,
//! so `é` (bytes `C3 A9`) arrives as the two characters `Ã©`. [`recode`]
//! reverses that for ordinary string fields. Reaction tokens are corrupted a
//! second time on top of that and need the extra pass in [`decode_reaction`].

pub mod reaction;
pub mod recode;

pub use reaction::{decode_reaction, try_decode_reaction};
pub use recode::{EncodingError, recode, try_recode};
