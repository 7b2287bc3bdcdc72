//! Key-path addressing for ZObject trees.
//!
//! A key path is an ordered sequence of object field identifiers and decimal
//! array indices, written dot-joined (`"main.Z2K2.Z7K1"`) when it has to be
//! a string. [`resolve`] and [`resolve_mut`] walk a path and hand back the
//! last container plus the final key, so callers read and write
//! `target[final_key]` inside their own tree.
//!
//! # Example
//!
//! ```
//! use zobject_key_path::{parse_key_path, resolve_mut};
//! use serde_json::json;
//!
//! let mut doc = json!({"a": {"b": {"c": 1}}});
//! let path = parse_key_path("a.b.c");
//!
//! let mut slot = resolve_mut(&mut doc, &path).unwrap();
//! assert_eq!(slot.final_key, "c");
//! slot.set(json!(2)).unwrap();
//!
//! assert_eq!(doc, json!({"a": {"b": {"c": 2}}}));
//! ```

use thiserror::Error;

pub mod get;
pub mod resolve;
pub mod types;
pub mod util;

pub use get::get;
pub use resolve::{resolve, resolve_mut};
pub use types::{KeyPath, PathStep, Resolved, ResolvedMut};
pub use util::{format_key_path, is_valid_index, join, parse_index, parse_key_path, SEPARATOR};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyPathError {
    #[error("EMPTY_KEY_PATH")]
    EmptyKeyPath,
    #[error("KEY_PATH_NOT_OBJECT: {key}")]
    NotObject { key: String },
    #[error("INVALID_INDEX: {key}")]
    InvalidIndex { key: String },
}
