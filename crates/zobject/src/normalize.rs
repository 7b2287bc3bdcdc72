//! Conversion between the canonical and hybrid representations.
//!
//! Canonical form is the minimal encoding used for storage: references and
//! strings may appear as bare JSON strings. Hybrid form wraps every terminal
//! in an explicit `{Z1K1, Z6K1}` / `{Z1K1, Z9K1}` node so that an editor always
//! has a type slot to bind to, even when the value is still empty.
//!
//! Both directions are total and idempotent, and
//! `hybrid_to_canonical(canonical_to_hybrid(v)) == v` for canonical `v`.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::constants::{Z1K1, Z6, Z6K1, Z9, Z9K1};

fn reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Z[1-9][0-9]*$").unwrap())
}

fn global_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(Z[1-9][0-9]*)K[1-9][0-9]*$").unwrap())
}

fn local_key_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^K[1-9][0-9]*$").unwrap())
}

/// Check if `s` has reference-identifier syntax (`Z` followed by a number).
pub fn is_reference_id(s: &str) -> bool {
    reference_regex().is_match(s)
}

/// Check if `s` is a global key such as `Z11K1`.
pub fn is_global_key(s: &str) -> bool {
    global_key_regex().is_match(s)
}

/// Check if `s` is a local key such as `K1`.
pub fn is_local_key(s: &str) -> bool {
    local_key_regex().is_match(s)
}

/// The identifier owning a global key: `Z11K1` gives `Z11`.
pub fn zid_of_global_key(key: &str) -> Option<&str> {
    global_key_regex()
        .captures(key)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A hybrid string node.
pub fn string_node(s: &str) -> Value {
    let mut map = Map::new();
    map.insert(Z1K1.to_string(), Value::String(Z6.to_string()));
    map.insert(Z6K1.to_string(), Value::String(s.to_string()));
    Value::Object(map)
}

/// A hybrid reference node.
pub fn reference_node(id: &str) -> Value {
    let mut map = Map::new();
    map.insert(Z1K1.to_string(), Value::String(Z9.to_string()));
    map.insert(Z9K1.to_string(), Value::String(id.to_string()));
    Value::Object(map)
}

/// The type tag of a node: `Z1K1` as a bare id or as a `{Z1K1: Z9, Z9K1: id}`
/// reference node.
fn type_tag(map: &Map<String, Value>) -> Option<&str> {
    match map.get(Z1K1)? {
        Value::String(tag) => Some(tag.as_str()),
        Value::Object(inner) if inner.len() == 2 => {
            if inner.get(Z1K1).and_then(Value::as_str) != Some(Z9) {
                return None;
            }
            inner.get(Z9K1).and_then(Value::as_str)
        }
        _ => None,
    }
}

/// The wrapped value of an explicit `{Z1K1: tag, <value_key>: "..."}` node.
///
/// The tag may itself be a reference node, which is the shape a cleared
/// `Z6`/`Z9` node has once an editor fills its value slot again.
fn terminal<'a>(map: &'a Map<String, Value>, tag: &str, value_key: &str) -> Option<&'a str> {
    if map.len() != 2 || type_tag(map) != Some(tag) {
        return None;
    }
    map.get(value_key).and_then(Value::as_str)
}

// `Z1K1` of a `Z6`/`Z9` node stays a bare id in both forms.
fn is_terminal_tag(key: &str, field: &Value) -> bool {
    key == Z1K1 && matches!(field.as_str(), Some(Z6) | Some(Z9))
}

pub(crate) fn terminal_string(map: &Map<String, Value>) -> Option<&str> {
    terminal(map, Z6, Z6K1)
}

pub(crate) fn terminal_reference(map: &Map<String, Value>) -> Option<&str> {
    terminal(map, Z9, Z9K1)
}

/// Expand a ZObject into hybrid form.
pub fn canonical_to_hybrid(value: &Value) -> Value {
    match value {
        Value::String(s) if is_reference_id(s) => reference_node(s),
        Value::String(s) => string_node(s),
        Value::Array(items) => Value::Array(items.iter().map(canonical_to_hybrid).collect()),
        Value::Object(map) => {
            if let Some(s) = terminal_string(map) {
                return string_node(s);
            }
            if let Some(id) = terminal_reference(map) {
                return reference_node(id);
            }
            Value::Object(
                map.iter()
                    .map(|(key, field)| {
                        let field = if is_terminal_tag(key, field) {
                            field.clone()
                        } else {
                            canonical_to_hybrid(field)
                        };
                        (key.clone(), field)
                    })
                    .collect(),
            )
        }
        _ => value.clone(),
    }
}

/// Collapse a ZObject into canonical form.
///
/// A string that looks like a reference keeps its explicit `Z6` wrapper, and
/// a reference whose id is empty or malformed keeps its `Z9` wrapper; both
/// would otherwise decode as something else.
pub fn hybrid_to_canonical(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(hybrid_to_canonical).collect()),
        Value::Object(map) => {
            if let Some(s) = terminal_string(map) {
                return if is_reference_id(s) {
                    string_node(s)
                } else {
                    Value::String(s.to_string())
                };
            }
            if let Some(id) = terminal_reference(map) {
                return if is_reference_id(id) {
                    Value::String(id.to_string())
                } else {
                    reference_node(id)
                };
            }
            Value::Object(
                map.iter()
                    .map(|(key, field)| (key.clone(), hybrid_to_canonical(field)))
                    .collect(),
            )
        }
        _ => value.clone(),
    }
}
