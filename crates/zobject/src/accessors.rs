//! Terminal-value accessors.
//!
//! Every accessor accepts canonical or hybrid input and returns the same
//! result for both. Values of the wrong shape yield `None` (or `false`),
//! never an error: half-filled forms are the normal state while editing.

use serde_json::{Map, Value};

use crate::constants::{
    Z11K1, Z11K2, Z16K1, Z16K2, Z18K1, Z1, Z1K1, Z2K1, Z31K1, Z31K2, Z3K4, Z40K1, Z41,
    Z42, Z60K1, Z61K1, Z6, Z7K1, Z9,
};
use crate::normalize::hybrid_to_canonical;
use crate::scaffold::typed_list_type;
use crate::types::{decode, ZObjectKind};

/// The fields of a composite node.
pub fn composite(value: &Value) -> Option<&Map<String, Value>> {
    decode(value).as_composite()
}

fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    composite(value)?.get(key)
}

/// The string held by a string node.
///
/// Reference-shaped bare strings decode as references and give `None`, so
/// `string_value(v) == string_value(canonical_to_hybrid(v))` for every `v`.
pub fn string_value(value: &Value) -> Option<&str> {
    match decode(value) {
        ZObjectKind::String(s) => Some(s),
        _ => None,
    }
}

/// The identifier held by a reference node.
pub fn reference_value(value: &Value) -> Option<&str> {
    if value.is_null() {
        return None;
    }
    match decode(value) {
        ZObjectKind::Reference(id) => Some(id),
        _ => None,
    }
}

/// The type identifier of a composite node, when its `Z1K1` is a reference.
pub fn type_id(value: &Value) -> Option<&str> {
    field(value, Z1K1).and_then(reference_value)
}

/// The text of a monolingual text (`Z11`).
pub fn monolingual_text(value: &Value) -> Option<&str> {
    field(value, Z11K2).and_then(string_value)
}

/// Language of a monolingual text: the ISO code of a `Z60` literal, or the
/// identifier of a referenced language.
pub fn monolingual_lang(value: &Value) -> Option<&str> {
    language_code(field(value, Z11K1)?)
}

/// Language of a monolingual stringset (`Z31`).
pub fn monolingual_stringset_lang(value: &Value) -> Option<&str> {
    language_code(field(value, Z31K1)?)
}

/// The strings of a monolingual stringset, skipping the item type.
pub fn monolingual_stringset_values(value: &Value) -> Vec<&str> {
    field(value, Z31K2)
        .map(typed_list_items)
        .unwrap_or_default()
        .iter()
        .filter_map(string_value)
        .collect()
}

// A literal is recognized by its ISO-code field, not by its type tag.
fn language_code(lang: &Value) -> Option<&str> {
    match composite(lang).and_then(|map| map.get(Z60K1)) {
        Some(code) => string_value(code),
        None => reference_value(lang),
    }
}

/// The function identifier of a function call (`Z7`).
///
/// Only a direct reference in `Z7K1` is returned unless `nested` is set. With
/// `nested`, an argument reference in the function slot yields its key and a
/// nested function call is followed down to its innermost function.
pub fn function_call_function_id(value: &Value, nested: bool) -> Option<&str> {
    let function = field(value, Z7K1)?;
    if let Some(id) = reference_value(function) {
        return Some(id);
    }
    if !nested {
        return None;
    }
    let map = composite(function)?;
    if map.contains_key(Z18K1) {
        return argument_reference_key(function);
    }
    if map.contains_key(Z7K1) {
        return function_call_function_id(function, true);
    }
    None
}

/// Argument keys of a function call, in field order.
pub fn function_call_argument_keys(value: &Value) -> Vec<&str> {
    composite(value)
        .map(|map| {
            map.keys()
                .map(String::as_str)
                .filter(|key| *key != Z1K1 && *key != Z7K1)
                .collect()
        })
        .unwrap_or_default()
}

/// The key named by an argument reference (`Z18`).
pub fn argument_reference_key(value: &Value) -> Option<&str> {
    let key = field(value, Z18K1)?;
    string_value(key).or_else(|| reference_value(key))
}

/// The value of a boolean, given as a `Z40` literal or a bare `Z41`/`Z42`.
pub fn boolean_value(value: &Value) -> Option<bool> {
    let id = match field(value, Z40K1) {
        Some(inner) => reference_value(inner)?,
        None => reference_value(value)?,
    };
    match id {
        Z41 => Some(true),
        Z42 => Some(false),
        _ => None,
    }
}

/// Whether a key declaration (`Z3`) is flagged as an identity key.
///
/// Absent, empty and false flags all read as `false`.
pub fn key_is_identity(value: &Value) -> bool {
    field(value, Z3K4)
        .and_then(boolean_value)
        .unwrap_or(false)
}

/// The source of a code object (`Z16`).
pub fn code_string(value: &Value) -> Option<&str> {
    field(value, Z16K2).and_then(string_value)
}

/// The programming language of a code object, either the code of a `Z61`
/// literal or a reference.
pub fn code_programming_language(value: &Value) -> Option<&str> {
    let lang = field(value, Z16K1)?;
    match composite(lang).and_then(|map| map.get(Z61K1)) {
        Some(code) => string_value(code),
        None => reference_value(lang).or_else(|| string_value(lang)),
    }
}

/// The identifier of a persistent object (`Z2K1`).
pub fn persistent_object_id(value: &Value) -> Option<&str> {
    let id = field(value, Z2K1)?;
    string_value(id).or_else(|| reference_value(id))
}

/// The items of a typed list, without the type marker at index 0.
pub fn typed_list_items(value: &Value) -> &[Value] {
    match decode(value) {
        ZObjectKind::TypedList { items, .. } => items,
        _ => &[],
    }
}

/// The canonical type of a value.
///
/// Strings are `Z6`, references `Z9`, lists the typed list of their declared
/// item type (`Z1` for `[]`), and composite nodes their `Z1K1`.
pub fn zobject_type(value: &Value) -> Option<Value> {
    match decode(value) {
        ZObjectKind::String(_) => Some(Value::String(Z6.to_string())),
        ZObjectKind::Reference(_) => Some(Value::String(Z9.to_string())),
        ZObjectKind::TypedList { item_type, .. } => {
            let item_type = item_type
                .map(hybrid_to_canonical)
                .unwrap_or_else(|| Value::String(Z1.to_string()));
            Some(typed_list_type(item_type))
        }
        ZObjectKind::Composite(map) => map.get(Z1K1).map(hybrid_to_canonical),
        ZObjectKind::Empty | ZObjectKind::Other => None,
    }
}

/// Render a type as a compact label: `Z6`, `Z881(Z6)`, `Z882(Z6,Z40)`.
pub fn type_to_string(value: &Value) -> Option<String> {
    if let Some(id) = reference_value(value) {
        return Some(id.to_string());
    }
    let map = composite(value)?;
    let function = function_call_function_id(value, true)?;
    let args = map
        .iter()
        .filter(|(key, _)| key.as_str() != Z1K1 && key.as_str() != Z7K1)
        .map(|(_, arg)| type_to_string(arg).unwrap_or_else(|| Z1.to_string()))
        .collect::<Vec<_>>();
    Some(format!("{}({})", function, args.join(",")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::canonical_to_hybrid;
    use serde_json::json;

    fn both(canonical: Value) -> [Value; 2] {
        let hybrid = canonical_to_hybrid(&canonical);
        [canonical, hybrid]
    }

    #[test]
    fn test_string_value() {
        for v in both(json!("hello")) {
            assert_eq!(string_value(&v), Some("hello"));
        }
        for v in both(json!({"Z1K1": "Z6", "Z6K1": "Z1"})) {
            assert_eq!(string_value(&v), Some("Z1"));
        }
        for v in both(json!("Z1")) {
            assert_eq!(string_value(&v), None);
        }
        assert_eq!(string_value(&json!({"Z1K1": "Z11"})), None);
    }

    #[test]
    fn test_reference_value() {
        for v in both(json!("Z1002")) {
            assert_eq!(reference_value(&v), Some("Z1002"));
        }
        assert_eq!(reference_value(&Value::Null), None);
        assert_eq!(reference_value(&json!("hello")), None);
        assert_eq!(reference_value(&json!({"Z1K1": "Z9", "Z9K1": ""})), Some(""));
    }

    #[test]
    fn test_monolingual() {
        for v in both(json!({"Z1K1": "Z11", "Z11K1": "Z1002", "Z11K2": "label"})) {
            assert_eq!(monolingual_text(&v), Some("label"));
            assert_eq!(monolingual_lang(&v), Some("Z1002"));
        }
        let literal = json!({
            "Z1K1": "Z11",
            "Z11K1": {"Z1K1": "Z60", "Z60K1": "en"},
            "Z11K2": "label"
        });
        for v in both(literal) {
            assert_eq!(monolingual_lang(&v), Some("en"));
        }
    }

    #[test]
    fn test_monolingual_stringset() {
        let set = json!({"Z1K1": "Z31", "Z31K1": "Z1003", "Z31K2": ["Z6", "uno", "dos"]});
        for v in both(set) {
            assert_eq!(monolingual_stringset_lang(&v), Some("Z1003"));
            assert_eq!(monolingual_stringset_values(&v), vec!["uno", "dos"]);
        }
    }

    #[test]
    fn test_function_call_function_id_direct() {
        for v in both(json!({"Z1K1": "Z7", "Z7K1": "Z801", "Z801K1": "x"})) {
            assert_eq!(function_call_function_id(&v, false), Some("Z801"));
            assert_eq!(function_call_function_id(&v, true), Some("Z801"));
            assert_eq!(function_call_argument_keys(&v), vec!["Z801K1"]);
        }
    }

    #[test]
    fn test_function_call_function_id_nested() {
        let call = json!({
            "Z1K1": "Z7",
            "Z7K1": {
                "Z1K1": "Z7",
                "Z7K1": {"Z1K1": "Z7", "Z7K1": "Z10001", "Z10001K1": "Z6"},
                "Z10001K1": "Z6"
            }
        });
        for v in both(call) {
            assert_eq!(function_call_function_id(&v, false), None);
            assert_eq!(function_call_function_id(&v, true), Some("Z10001"));
        }

        let arg_ref = json!({"Z1K1": "Z7", "Z7K1": {"Z1K1": "Z18", "Z18K1": "Z10001K1"}});
        for v in both(arg_ref) {
            assert_eq!(function_call_function_id(&v, false), None);
            assert_eq!(function_call_function_id(&v, true), Some("Z10001K1"));
        }

        assert_eq!(function_call_function_id(&json!({"Z1K1": "Z7"}), true), None);
        assert_eq!(function_call_function_id(&json!("Z7"), true), None);
    }

    #[test]
    fn test_key_is_identity() {
        let literal_true = json!({"Z1K1": "Z3", "Z3K4": {"Z1K1": "Z40", "Z40K1": "Z41"}});
        let literal_false = json!({"Z1K1": "Z3", "Z3K4": {"Z1K1": "Z40", "Z40K1": "Z42"}});
        let reference_true = json!({"Z1K1": "Z3", "Z3K4": "Z41"});
        let empty = json!({"Z1K1": "Z3", "Z3K4": {"Z1K1": "Z40", "Z40K1": {"Z1K1": "Z9", "Z9K1": ""}}});
        let absent = json!({"Z1K1": "Z3"});

        for v in both(literal_true) {
            assert!(key_is_identity(&v));
        }
        for v in both(reference_true) {
            assert!(key_is_identity(&v));
        }
        for v in both(literal_false).into_iter().chain(both(empty)).chain(both(absent)) {
            assert!(!key_is_identity(&v));
        }
    }

    #[test]
    fn test_code() {
        let code = json!({
            "Z1K1": "Z16",
            "Z16K1": {"Z1K1": "Z61", "Z61K1": "python"},
            "Z16K2": "def Z10001(Z10001K1):\n\treturn Z10001K1"
        });
        for v in both(code) {
            assert_eq!(code_programming_language(&v), Some("python"));
            assert_eq!(
                code_string(&v),
                Some("def Z10001(Z10001K1):\n\treturn Z10001K1")
            );
        }
        for v in both(json!({"Z1K1": "Z16", "Z16K1": "Z600"})) {
            assert_eq!(code_programming_language(&v), Some("Z600"));
            assert_eq!(code_string(&v), None);
        }
    }

    #[test]
    fn test_persistent_object_id() {
        let persistent = json!({
            "Z1K1": "Z2",
            "Z2K1": {"Z1K1": "Z6", "Z6K1": "Z10001"},
            "Z2K2": "hello"
        });
        for v in both(persistent) {
            assert_eq!(persistent_object_id(&v), Some("Z10001"));
            assert_eq!(type_id(&v), Some("Z2"));
        }
    }

    #[test]
    fn test_zobject_type() {
        for v in both(json!("Z123")) {
            assert_eq!(zobject_type(&v), Some(json!("Z9")));
        }
        for v in both(json!("hello")) {
            assert_eq!(zobject_type(&v), Some(json!("Z6")));
        }
        for v in both(json!([])) {
            assert_eq!(
                zobject_type(&v),
                Some(json!({"Z1K1": "Z7", "Z7K1": "Z881", "Z881K1": "Z1"}))
            );
        }
        for v in both(json!(["Z6", "x"])) {
            assert_eq!(
                zobject_type(&v),
                Some(json!({"Z1K1": "Z7", "Z7K1": "Z881", "Z881K1": "Z6"}))
            );
        }
        for v in both(json!({"Z1K1": "Z11", "Z11K1": "Z1002", "Z11K2": "x"})) {
            assert_eq!(zobject_type(&v), Some(json!("Z11")));
        }
        assert_eq!(zobject_type(&Value::Null), None);
        assert_eq!(zobject_type(&json!({"Z2K2": "x"})), None);
    }

    #[test]
    fn test_type_to_string() {
        for v in both(json!("Z6")) {
            assert_eq!(type_to_string(&v).as_deref(), Some("Z6"));
        }
        let pair = json!({"Z1K1": "Z7", "Z7K1": "Z882", "Z882K1": "Z6", "Z882K2": "Z40"});
        for v in both(pair) {
            assert_eq!(type_to_string(&v).as_deref(), Some("Z882(Z6,Z40)"));
        }
        let list = json!({
            "Z1K1": "Z7",
            "Z7K1": "Z881",
            "Z881K1": {"Z1K1": "Z7", "Z7K1": "Z881", "Z881K1": "Z6"}
        });
        for v in both(list) {
            assert_eq!(type_to_string(&v).as_deref(), Some("Z881(Z881(Z6))"));
        }
    }

    #[test]
    fn test_boolean_value() {
        for v in both(json!({"Z1K1": "Z40", "Z40K1": "Z41"})) {
            assert_eq!(boolean_value(&v), Some(true));
        }
        for v in both(json!("Z42")) {
            assert_eq!(boolean_value(&v), Some(false));
        }
        assert_eq!(boolean_value(&json!("Z6")), None);
    }
}
