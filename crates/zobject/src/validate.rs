//! Structural validators for function calls and generic types.
//!
//! Both walkers return a flat, ordered list of [`ValidationRecord`]s, one per
//! terminal they reach, so a form can mark every unset slot at once. An
//! invalid record is data, not an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use zobject_key_path::{format_key_path, join};

use crate::accessors::{
    argument_reference_key, function_call_function_id, reference_value, type_id,
};
use crate::constants::{Z18K1, Z1K1, Z7K1, Z9};
use crate::normalize::canonical_to_hybrid;

/// Validity of the slot at `key_path` (dot-joined).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRecord {
    pub key_path: String,
    pub is_valid: bool,
}

impl ValidationRecord {
    fn new(path: &[String], is_valid: bool) -> Self {
        Self {
            key_path: format_key_path(path),
            is_valid,
        }
    }
}

/// Whether every record is valid.
pub fn all_valid(records: &[ValidationRecord]) -> bool {
    records.iter().all(|r| r.is_valid)
}

fn non_empty(terminal: Option<&str>) -> bool {
    terminal.is_some_and(|t| !t.is_empty())
}

/// Validate a generic type expression: a reference, or a function call
/// (possibly nested) that returns a type.
///
/// Emits a record for the node itself, at `path` for a reference or at
/// `path.Z7K1` for a call, then one subtree of records per argument of a
/// call, in field order.
pub fn validate_generic_type(path: &[String], value: Option<&Value>) -> Vec<ValidationRecord> {
    let hybrid = value.map(canonical_to_hybrid);
    let mut out = Vec::new();
    generic_type_records(path, hybrid.as_ref(), &mut out);
    tracing::trace!(
        key_path = %format_key_path(path),
        records = out.len(),
        "validated generic type"
    );
    out
}

fn generic_type_records(path: &[String], value: Option<&Value>, out: &mut Vec<ValidationRecord>) {
    let Some((value, map)) = value.and_then(|v| Some((v, v.as_object()?))) else {
        out.push(ValidationRecord::new(path, false));
        return;
    };

    if !map.contains_key(Z7K1) {
        out.push(ValidationRecord::new(path, non_empty(reference_value(value))));
        return;
    }

    let terminal = function_call_function_id(value, true);
    out.push(ValidationRecord::new(&join(path, Z7K1), non_empty(terminal)));
    for (key, arg) in map {
        if key == Z1K1 || key == Z7K1 {
            continue;
        }
        generic_type_records(&join(path, key.as_str()), Some(arg), out);
    }
}

/// Validate a function call used as a composition or tester body.
///
/// - An argument reference yields one record at `path.Z18K1`.
/// - A call whose function slot is a reference yields one record at
///   `path.Z7K1`.
/// - A call whose function slot is itself a call or argument reference yields
///   a summary record at `path.Z7K1` (the AND of its children) followed by
///   the records of the nested node.
/// - Anything else yields one invalid record at `path`.
///
/// An argument reference wins when a node carries both `Z18K1` and `Z7K1`.
pub fn validate_function_call(path: &[String], value: Option<&Value>) -> Vec<ValidationRecord> {
    let hybrid = value.map(canonical_to_hybrid);
    let out = function_call_records(path, hybrid.as_ref());
    tracing::trace!(
        key_path = %format_key_path(path),
        records = out.len(),
        valid = all_valid(&out),
        "validated function call"
    );
    out
}

fn function_call_records(path: &[String], value: Option<&Value>) -> Vec<ValidationRecord> {
    let Some((value, map)) = value.and_then(|v| Some((v, v.as_object()?))) else {
        return vec![ValidationRecord::new(path, false)];
    };

    if map.contains_key(Z18K1) {
        let valid = non_empty(argument_reference_key(value));
        return vec![ValidationRecord::new(&join(path, Z18K1), valid)];
    }

    let Some(function) = map.get(Z7K1) else {
        return vec![ValidationRecord::new(path, false)];
    };
    let function_path = join(path, Z7K1);

    if !function.is_object() || type_id(function) == Some(Z9) {
        return vec![ValidationRecord::new(&function_path, false)];
    }
    if let Some(id) = reference_value(function) {
        return vec![ValidationRecord::new(&function_path, !id.is_empty())];
    }

    let children = function_call_records(&function_path, Some(function));
    let mut out = Vec::with_capacity(children.len() + 1);
    out.push(ValidationRecord::new(&function_path, all_valid(&children)));
    out.extend(children);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use zobject_key_path::parse_key_path;

    fn records(pairs: &[(&str, bool)]) -> Vec<ValidationRecord> {
        pairs
            .iter()
            .map(|(key_path, is_valid)| ValidationRecord {
                key_path: key_path.to_string(),
                is_valid: *is_valid,
            })
            .collect()
    }

    #[test]
    fn test_generic_type_missing() {
        let path = parse_key_path("main.Z1K1");
        assert_eq!(
            validate_generic_type(&path, None),
            records(&[("main.Z1K1", false)])
        );
    }

    #[test]
    fn test_generic_type_reference() {
        let path = parse_key_path("t");
        assert_eq!(
            validate_generic_type(&path, Some(&json!("Z6"))),
            records(&[("t", true)])
        );
        assert_eq!(
            validate_generic_type(&path, Some(&json!({"Z1K1": "Z9", "Z9K1": ""}))),
            records(&[("t", false)])
        );
    }

    #[test]
    fn test_generic_type_visits_every_argument() {
        let path = parse_key_path("t");
        let value = json!({
            "Z1K1": "Z7",
            "Z7K1": "Z882",
            "Z882K1": {"Z1K1": "Z7", "Z7K1": "Z881", "Z881K1": {"Z1K1": "Z9", "Z9K1": ""}},
            "Z882K2": "Z40"
        });
        assert_eq!(
            validate_generic_type(&path, Some(&value)),
            records(&[
                ("t.Z7K1", true),
                ("t.Z882K1.Z7K1", true),
                ("t.Z882K1.Z881K1", false),
                ("t.Z882K2", true),
            ])
        );
    }

    #[test]
    fn test_generic_type_no_early_exit() {
        let path = parse_key_path("t");
        let value = json!({
            "Z1K1": "Z7",
            "Z7K1": {"Z1K1": "Z9", "Z9K1": ""},
            "K1": {"Z1K1": "Z9", "Z9K1": ""},
            "K2": "Z6"
        });
        assert_eq!(
            validate_generic_type(&path, Some(&value)),
            records(&[("t.Z7K1", false), ("t.K1", false), ("t.K2", true)])
        );
    }

    #[test]
    fn test_function_call_argument_reference_inside_function_slot() {
        let path = parse_key_path("p");
        let value = json!({"Z7K1": {"Z18K1": "K1"}});
        assert_eq!(
            validate_function_call(&path, Some(&value)),
            records(&[("p.Z7K1", true), ("p.Z7K1.Z18K1", true)])
        );
    }

    #[test]
    fn test_function_call_direct_reference() {
        let path = parse_key_path("p");
        assert_eq!(
            validate_function_call(&path, Some(&json!({"Z1K1": "Z7", "Z7K1": "Z801"}))),
            records(&[("p.Z7K1", true)])
        );
        assert_eq!(
            validate_function_call(
                &path,
                Some(&json!({"Z1K1": "Z7", "Z7K1": {"Z1K1": "Z9", "Z9K1": ""}}))
            ),
            records(&[("p.Z7K1", false)])
        );
    }

    #[test]
    fn test_function_call_nested_summary() {
        let path = parse_key_path("main.Z2K2.Z14K2");
        let value = json!({
            "Z1K1": "Z7",
            "Z7K1": {
                "Z1K1": "Z7",
                "Z7K1": {"Z1K1": "Z7", "Z7K1": {"Z1K1": "Z9", "Z9K1": ""}}
            }
        });
        assert_eq!(
            validate_function_call(&path, Some(&value)),
            records(&[
                ("main.Z2K2.Z14K2.Z7K1", false),
                ("main.Z2K2.Z14K2.Z7K1.Z7K1", false),
                ("main.Z2K2.Z14K2.Z7K1.Z7K1.Z7K1", false),
            ])
        );
    }

    #[test]
    fn test_function_call_argument_reference_precedence() {
        let path = parse_key_path("p");
        let value = json!({"Z1K1": "Z18", "Z18K1": "", "Z7K1": "Z801"});
        assert_eq!(
            validate_function_call(&path, Some(&value)),
            records(&[("p.Z18K1", false)])
        );
    }

    #[test]
    fn test_function_call_invalid_shapes() {
        let path = parse_key_path("p");
        assert_eq!(validate_function_call(&path, None), records(&[("p", false)]));
        assert_eq!(
            validate_function_call(&path, Some(&json!({"Z1K1": "Z7"}))),
            records(&[("p", false)])
        );
        assert_eq!(
            validate_function_call(&path, Some(&json!("Z801"))),
            records(&[("p", false)])
        );
    }

    #[test]
    fn test_record_serialization() {
        let record = ValidationRecord {
            key_path: "p.Z7K1".to_string(),
            is_valid: true,
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"keyPath": "p.Z7K1", "isValid": true})
        );
    }
}
