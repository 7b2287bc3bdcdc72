//! Shape-based decoding of ZObject values.
//!
//! [`decode`] classifies a value in either representation into one closed
//! [`ZObjectKind`]; every accessor reads through it instead of probing the
//! JSON shape on its own.

use serde_json::{Map, Value};

use crate::normalize::{is_reference_id, terminal_reference, terminal_string};

/// The shape of a ZObject value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZObjectKind<'a> {
    /// A string, bare (`"hello"`) or wrapped (`{Z1K1: Z6, Z6K1: "hello"}`).
    String(&'a str),
    /// A reference, bare (`"Z11"`) or wrapped (`{Z1K1: Z9, Z9K1: "Z11"}`).
    Reference(&'a str),
    /// A typed list: index 0 declares the item type, the rest are items.
    TypedList {
        item_type: Option<&'a Value>,
        items: &'a [Value],
    },
    /// Any other object.
    Composite(&'a Map<String, Value>),
    /// `null`.
    Empty,
    /// Numbers and booleans, which are not part of the ZObject grammar.
    Other,
}

/// Classify `value`.
pub fn decode(value: &Value) -> ZObjectKind<'_> {
    match value {
        Value::String(s) if is_reference_id(s) => ZObjectKind::Reference(s),
        Value::String(s) => ZObjectKind::String(s),
        Value::Array(items) => ZObjectKind::TypedList {
            item_type: items.first(),
            items: items.get(1..).unwrap_or(&[]),
        },
        Value::Object(map) => {
            if let Some(s) = terminal_string(map) {
                ZObjectKind::String(s)
            } else if let Some(id) = terminal_reference(map) {
                ZObjectKind::Reference(id)
            } else {
                ZObjectKind::Composite(map)
            }
        }
        Value::Null => ZObjectKind::Empty,
        _ => ZObjectKind::Other,
    }
}

impl<'a> ZObjectKind<'a> {
    pub fn as_composite(&self) -> Option<&'a Map<String, Value>> {
        match *self {
            ZObjectKind::Composite(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ZObjectKind::String(_) | ZObjectKind::Reference(_))
    }
}
