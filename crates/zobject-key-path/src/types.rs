//! Type definitions for key paths and resolved locations.

use serde_json::Value;

use crate::util::parse_index;
use crate::KeyPathError;

/// A step in a key path.
///
/// Either an object field identifier or a decimal array index.
pub type PathStep = String;

/// A root-relative route through a ZObject tree.
pub type KeyPath = Vec<PathStep>;

/// Shared-borrow view of a resolved location: the last container on the path
/// and the key that addresses the terminal slot inside it.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    /// The object or array holding the terminal slot.
    pub target: &'a Value,
    /// The key (field name or decimal index) of the terminal slot.
    pub final_key: &'a str,
}

impl<'a> Resolved<'a> {
    /// Read `target[final_key]`, `None` when the slot is absent.
    pub fn get(&self) -> Option<&'a Value> {
        slot(self.target, self.final_key)
    }
}

/// Exclusive-borrow view of a resolved location.
///
/// Writes go straight into the caller's tree; nothing is copied.
#[derive(Debug)]
pub struct ResolvedMut<'a> {
    /// The object or array holding the terminal slot.
    pub target: &'a mut Value,
    /// The key (field name or decimal index) of the terminal slot.
    pub final_key: String,
}

impl<'a> ResolvedMut<'a> {
    /// Read `target[final_key]`.
    pub fn get(&self) -> Option<&Value> {
        slot(self.target, &self.final_key)
    }

    /// Mutable access to `target[final_key]`.
    pub fn get_mut(&mut self) -> Option<&mut Value> {
        slot_mut(self.target, &self.final_key)
    }

    /// Assign `target[final_key] = value`, returning the previous value.
    ///
    /// On arrays the index may address an existing item or the slot just
    /// past the end (append).
    pub fn set(&mut self, value: Value) -> Result<Option<Value>, KeyPathError> {
        match &mut *self.target {
            Value::Object(map) => Ok(map.insert(self.final_key.clone(), value)),
            Value::Array(arr) => {
                let idx = parse_index(&self.final_key).ok_or_else(|| KeyPathError::InvalidIndex {
                    key: self.final_key.clone(),
                })?;
                if idx < arr.len() {
                    Ok(Some(std::mem::replace(&mut arr[idx], value)))
                } else if idx == arr.len() {
                    arr.push(value);
                    Ok(None)
                } else {
                    Err(KeyPathError::InvalidIndex {
                        key: self.final_key.clone(),
                    })
                }
            }
            _ => Err(KeyPathError::NotObject {
                key: self.final_key.clone(),
            }),
        }
    }
}

pub(crate) fn slot<'v>(container: &'v Value, key: &str) -> Option<&'v Value> {
    match container {
        Value::Object(map) => map.get(key),
        Value::Array(arr) => arr.get(parse_index(key)?),
        _ => None,
    }
}

pub(crate) fn slot_mut<'v>(container: &'v mut Value, key: &str) -> Option<&'v mut Value> {
    match container {
        Value::Object(map) => map.get_mut(key),
        Value::Array(arr) => {
            let idx = parse_index(key)?;
            arr.get_mut(idx)
        }
        _ => None,
    }
}
