//! Codec for the HELLCARD demo's `demons.save` files.
//!
//! The format is undocumented and length-prefixed; large stretches of it are
//! reserved bytes whose meaning is unknown. The decoder is a pure forward
//! scan; the name patcher is a copy-through splice that re-derives only
//! lengths and never re-serializes fields it does not understand.

pub mod catalog;
pub mod class;
pub mod decode;
pub mod error;
pub mod patch;
pub mod reader;
pub mod types;

pub use class::ClassTag;
pub use error::{DecodeError, PatchError};
pub use patch::rename;
pub use types::{
    CharacterRecord, CompanionRecord, DecodeOptions, HpOrder, RecordIssue, SaveFile, SaveFormat,
    TagPolicy,
};
