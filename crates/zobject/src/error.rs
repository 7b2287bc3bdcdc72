use thiserror::Error;

pub use zobject_key_path::KeyPathError;

/// Failures of the key-path mutation primitives.
///
/// Shape mismatches met by accessors and normalizers are not errors; they
/// come back as `None`/`false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ZObjectError {
    #[error(transparent)]
    KeyPath(#[from] KeyPathError),

    #[error("TARGET_NOT_ARRAY: {key_path}")]
    TargetNotArray { key_path: String },

    #[error("VALUES_NOT_ARRAY")]
    ValuesNotArray,

    #[error("INVALID_INDEX: {0}")]
    InvalidIndex(String),

    #[error("PROTECTED_INDEX: index 0 holds the list item type")]
    ProtectedIndex,

    #[error("INDEX_OUT_OF_BOUNDS: {0}")]
    IndexOutOfBounds(usize),

    #[error("MOVE_OUT_OF_BOUNDS: {index} by {offset} in list of length {len}")]
    MoveOutOfBounds {
        index: usize,
        offset: isize,
        len: usize,
    },

    #[error("TARGET_NOT_OBJECT: {key_path}")]
    TargetNotObject { key_path: String },

    #[error("SLOT_NOT_FOUND: {key_path}")]
    SlotNotFound { key_path: String },
}

pub type ZObjectResult<T> = Result<T, ZObjectError>;
