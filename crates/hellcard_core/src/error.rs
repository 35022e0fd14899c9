use std::error::Error;
use std::fmt;

/// Decode failures. All of these are returned as values; the surrounding
/// application decides whether to surface them or fall back to an empty
/// save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A read ran past the end of the buffer, or a length prefix was
    /// negative and can never be satisfied. The cursor position is
    /// unrecoverable, so the scan aborts.
    Truncated,
    /// A name field contained bytes that do not decode as UTF-8.
    InvalidEncoding,
    /// A class tag outside {mag, war, rog}, under `TagPolicy::Fail`.
    UnrecognizedClassTag(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Truncated => f.write_str("save data is truncated"),
            Self::InvalidEncoding => f.write_str("name field is not valid UTF-8"),
            Self::UnrecognizedClassTag(ref tag) => {
                write!(f, "unrecognized class tag {:?}", tag)
            }
        }
    }
}

impl Error for DecodeError {}

/// Rename-patch failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The target position is outside 1..=3.
    NoSuchRecord(u8),
    /// The input ended mid-scan.
    Truncated,
    /// The replacement name contains non-ASCII characters; the format
    /// stores names as ASCII with a byte-count prefix.
    InvalidEncoding,
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NoSuchRecord(position) => {
                write!(f, "no character record at position {position}")
            }
            Self::Truncated => f.write_str("save data is truncated"),
            Self::InvalidEncoding => f.write_str("replacement name must be ASCII"),
        }
    }
}

impl Error for PatchError {}
