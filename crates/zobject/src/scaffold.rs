//! Blank hybrid nodes used to start a fresh editing session.

use serde_json::{json, Value};

use crate::constants::{
    Z11, Z11K1, Z11K2, Z12, Z12K1, Z18, Z18K1, Z1K1, Z2, Z2K1, Z2K2, Z2K3, Z7, Z7K1, Z881,
    Z881K1,
};
use crate::normalize::{canonical_to_hybrid, reference_node, string_node};

/// An empty string node.
pub fn blank_string() -> Value {
    string_node("")
}

/// An empty reference node.
pub fn blank_reference() -> Value {
    reference_node("")
}

/// A composite node carrying only its discriminator.
///
/// `Z6` and `Z9` keep a bare tag, so filling the value slot later yields a
/// plain terminal node.
pub fn blank_object(type_id: &str) -> Value {
    canonical_to_hybrid(&json!({ Z1K1: type_id }))
}

/// A function call with its function slot set and no arguments yet.
pub fn blank_function_call(function_id: &str) -> Value {
    json!({
        Z1K1: reference_node(Z7),
        Z7K1: reference_node(function_id),
    })
}

/// An argument reference to `key`.
pub fn blank_argument_reference(key: &str) -> Value {
    json!({
        Z1K1: reference_node(Z18),
        Z18K1: string_node(key),
    })
}

/// A monolingual text in the referenced language.
pub fn blank_monolingual_text(lang: &str, text: &str) -> Value {
    json!({
        Z1K1: reference_node(Z11),
        Z11K1: reference_node(lang),
        Z11K2: string_node(text),
    })
}

/// The canonical type of a list of `item_type`.
pub fn typed_list_type(item_type: Value) -> Value {
    json!({
        Z1K1: Z7,
        Z7K1: Z881,
        Z881K1: item_type,
    })
}

/// An empty typed list: just the hybrid type marker.
pub fn blank_typed_list(item_type: &Value) -> Value {
    Value::Array(vec![canonical_to_hybrid(item_type)])
}

/// A persistent object wrapping `inner`, with an empty label set.
pub fn blank_persistent_object(zid: &str, inner: &Value) -> Value {
    json!({
        Z1K1: reference_node(Z2),
        Z2K1: string_node(zid),
        Z2K2: canonical_to_hybrid(inner),
        Z2K3: {
            Z1K1: reference_node(Z12),
            Z12K1: [reference_node(Z11)],
        },
    })
}
