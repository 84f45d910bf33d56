//! Collection document codec.
//!
//! # Responsibility
//! - Serialize the full record collection into one JSON document.
//! - Reject malformed persisted state instead of masking it.
//!
//! # Invariants
//! - `decode_collection(encode_collection(c)) == c` field-for-field for
//!   every valid collection.
//! - Record order in the document is the collection's insertion order.

use crate::model::process::ProcessRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Failure while encoding or decoding the collection document.
#[derive(Debug)]
pub enum CodecError {
    /// The collection could not be serialized.
    Encode(serde_json::Error),
    /// Persisted text is not a valid record-array document.
    Corrupt { message: String },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode collection: {err}"),
            Self::Corrupt { message } => {
                write!(f, "stored collection is not decodable: {message}")
            }
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Corrupt { .. } => None,
        }
    }
}

/// Encodes the collection into the persisted JSON document.
pub fn encode_collection(records: &[ProcessRecord]) -> CodecResult<String> {
    serde_json::to_string(records).map_err(CodecError::Encode)
}

/// Decodes a persisted document back into a collection.
///
/// # Errors
/// - `Corrupt` when the text does not parse as a record array.
pub fn decode_collection(raw: &str) -> CodecResult<Vec<ProcessRecord>> {
    serde_json::from_str(raw).map_err(|err| CodecError::Corrupt {
        message: err.to_string(),
    })
}
