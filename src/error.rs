use crate::encoding::Encoding;
use thiserror::Error;

/// Broad category of a codec failure.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display)]
pub enum ErrorKind {
    /// The input is not lexically a member of the declared format.
    #[strum(serialize = "format")]
    Format,

    /// The input was well-formed but its bytes failed a downstream check.
    #[strum(serialize = "decode")]
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid {encoding} character {character:?} at offset {offset}")]
    InvalidCharacter {
        encoding: Encoding,
        character: char,
        offset: usize,
    },

    #[error("Invalid {encoding} length: {length}")]
    InvalidLength { encoding: Encoding, length: usize },

    #[error("Misplaced {encoding} padding at offset {offset}")]
    MisplacedPadding { encoding: Encoding, offset: usize },

    #[error("Final {encoding} symbol at offset {offset} has non-zero trailing bits")]
    NonCanonicalTrailingBits { encoding: Encoding, offset: usize },

    #[error("Base64 decoder rejected input: {0}")]
    Rejected(#[from] base64::DecodeError),
}

impl FormatError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Format
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl DecodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Format(_) => ErrorKind::Format,
            DecodeError::InvalidUtf8(_) => ErrorKind::Decode,
        }
    }
}

/// Errors raised at the JavaScript boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Unable to parse codec configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Input of {length} bytes exceeds the configured limit of {limit} bytes")]
    InputTooLong { length: usize, limit: usize },
}
