//! Key-path addressed mutation of ZObject trees.
//!
//! Every primitive resolves its key path through
//! [`resolve_mut`](zobject_key_path::resolve_mut) first and fails with the
//! resolver's error when the path is bad, so a typo in a path never turns
//! into a silent no-op. The tree is edited in place.

use std::collections::{BTreeSet, HashMap};
use std::fmt::Display;

use serde_json::Value;
use zobject_key_path::{format_key_path, parse_index, resolve, resolve_mut};

use crate::accessors::string_value;
use crate::constants::{Z18K1, Z1K1, Z6K1, Z9K1};
use crate::error::{ZObjectError, ZObjectResult};
use crate::normalize::{canonical_to_hybrid, is_reference_id, string_node};
use crate::scaffold::{blank_reference, blank_string};

// `Z6K1`/`Z9K1` hold the raw string of a terminal node.
fn is_terminal_value_key(key: &str) -> bool {
    key == Z6K1 || key == Z9K1
}

/// Read the value at `path`.
///
/// Resolution failures and absent slots both give `None`.
pub fn value_by_key_path<'a>(root: &'a Value, path: &'a [String]) -> Option<&'a Value> {
    resolve(root, path).ok()?.get()
}

/// Assign `value` at `path`.
///
/// The value is expanded to hybrid form, except for a raw string written to
/// the value slot of a terminal node (`...Z6K1`, `...Z9K1`).
pub fn set_value_by_key_path(root: &mut Value, path: &[String], value: &Value) -> ZObjectResult<()> {
    let mut slot = resolve_mut(root, path)?;
    let value = if is_terminal_value_key(&slot.final_key) && value.is_string() {
        value.clone()
    } else {
        canonical_to_hybrid(value)
    };
    slot.set(value)?;
    tracing::debug!(key_path = %format_key_path(path), "set value");
    Ok(())
}

/// Reset the slot at `path` to its cleared shape.
///
/// An object keeps only `Z1K1`, a list keeps only its type marker, and a
/// scalar (or missing) slot receives an empty placeholder: `""` in a terminal
/// value slot, otherwise an empty reference or string node depending on what
/// it held.
pub fn unset_value_by_key_path(root: &mut Value, path: &[String]) -> ZObjectResult<()> {
    let mut slot = resolve_mut(root, path)?;
    let value_slot = is_terminal_value_key(&slot.final_key);
    let cleared = match slot.get_mut() {
        Some(Value::Object(map)) => {
            map.retain(|key, _| key == Z1K1);
            true
        }
        Some(Value::Array(items)) => {
            items.truncate(1);
            true
        }
        _ => false,
    };
    if !cleared {
        let held_reference = slot
            .get()
            .and_then(Value::as_str)
            .is_some_and(is_reference_id);
        let placeholder = if value_slot {
            Value::String(String::new())
        } else if held_reference {
            blank_reference()
        } else {
            blank_string()
        };
        slot.set(placeholder)?;
    }
    tracing::debug!(key_path = %format_key_path(path), "unset value");
    Ok(())
}

/// Append `values` to the list at `path`.
///
/// Items are appended as given; callers pass them already normalized.
///
/// # Errors
///
/// - [`ZObjectError::TargetNotArray`] when `path` does not address a list.
/// - [`ZObjectError::ValuesNotArray`] when `values` is not an array.
pub fn push_items_by_key_path(root: &mut Value, path: &[String], values: Value) -> ZObjectResult<()> {
    let mut slot = resolve_mut(root, path)?;
    let Some(Value::Array(items)) = slot.get_mut() else {
        return Err(ZObjectError::TargetNotArray {
            key_path: format_key_path(path),
        });
    };
    let Value::Array(values) = values else {
        return Err(ZObjectError::ValuesNotArray);
    };
    let count = values.len();
    items.extend(values);
    tracing::debug!(key_path = %format_key_path(path), count, "pushed list items");
    Ok(())
}

/// Remove the items at `indexes` from the list at `path` in one pass.
///
/// Indexes may be numbers or decimal strings in key-path index syntax (no
/// sign, no leading zeros). All of them are checked before
/// anything is removed; the remaining items keep their relative order.
///
/// # Errors
///
/// - [`ZObjectError::TargetNotArray`] when `path` does not address a list.
/// - [`ZObjectError::InvalidIndex`] for an index that is not a non-negative
///   integer.
/// - [`ZObjectError::ProtectedIndex`] for index 0, the item type.
/// - [`ZObjectError::IndexOutOfBounds`] for an index past the end.
pub fn delete_list_items_by_key_path<I: Display>(
    root: &mut Value,
    path: &[String],
    indexes: &[I],
) -> ZObjectResult<()> {
    let mut slot = resolve_mut(root, path)?;
    let Some(Value::Array(items)) = slot.get_mut() else {
        return Err(ZObjectError::TargetNotArray {
            key_path: format_key_path(path),
        });
    };

    let mut doomed = BTreeSet::new();
    for index in indexes {
        let raw = index.to_string();
        let idx = parse_index(&raw).ok_or_else(|| ZObjectError::InvalidIndex(raw.clone()))?;
        if idx == 0 {
            return Err(ZObjectError::ProtectedIndex);
        }
        if idx >= items.len() {
            return Err(ZObjectError::IndexOutOfBounds(idx));
        }
        doomed.insert(idx);
    }

    let mut position = 0;
    items.retain(|_| {
        let keep = !doomed.contains(&position);
        position += 1;
        keep
    });
    tracing::debug!(key_path = %format_key_path(path), ?doomed, "deleted list items");
    Ok(())
}

/// Move the list item at `index` by `offset` positions.
///
/// Source and destination must both lie in `[1, len - 1]`.
pub fn move_list_item_by_key_path(
    root: &mut Value,
    path: &[String],
    index: usize,
    offset: isize,
) -> ZObjectResult<()> {
    let mut slot = resolve_mut(root, path)?;
    let Some(Value::Array(items)) = slot.get_mut() else {
        return Err(ZObjectError::TargetNotArray {
            key_path: format_key_path(path),
        });
    };

    let len = items.len();
    let destination = index
        .checked_add_signed(offset)
        .filter(|&to| index >= 1 && index < len && to >= 1 && to < len)
        .ok_or(ZObjectError::MoveOutOfBounds { index, offset, len })?;
    let item = items.remove(index);
    items.insert(destination, item);
    tracing::debug!(key_path = %format_key_path(path), index, offset, "moved list item");
    Ok(())
}

/// Delete every field of the object at `path` except `Z1K1`.
pub fn clear_type_by_key_path(root: &mut Value, path: &[String]) -> ZObjectResult<()> {
    let mut slot = resolve_mut(root, path)?;
    match slot.get_mut() {
        Some(Value::Object(map)) => map.retain(|key, _| key == Z1K1),
        Some(_) => {
            return Err(ZObjectError::TargetNotObject {
                key_path: format_key_path(path),
            })
        }
        None => {
            return Err(ZObjectError::SlotNotFound {
                key_path: format_key_path(path),
            })
        }
    }
    tracing::debug!(key_path = %format_key_path(path), "cleared type");
    Ok(())
}

/// Renumber the identity keys of the declarations listed at `path`.
///
/// Item `i` (from 1) gets `key_field` set to `<zid>K<i>`. Argument references
/// anywhere under `root` that named a renumbered key are rewritten to the new
/// key. Returns the `(old, new)` pairs that changed.
pub fn recalculate_keys_by_key_path(
    root: &mut Value,
    path: &[String],
    key_field: &str,
    zid: &str,
) -> ZObjectResult<Vec<(String, String)>> {
    let mut renames = Vec::new();
    {
        let mut slot = resolve_mut(root, path)?;
        let Some(Value::Array(items)) = slot.get_mut() else {
            return Err(ZObjectError::TargetNotArray {
                key_path: format_key_path(path),
            });
        };
        for (i, item) in items.iter_mut().enumerate().skip(1) {
            let Some(map) = item.as_object_mut() else {
                continue;
            };
            let new_key = format!("{zid}K{i}");
            let old_key = map.get(key_field).and_then(string_value).map(str::to_string);
            if old_key.as_deref() == Some(new_key.as_str()) {
                continue;
            }
            map.insert(key_field.to_string(), string_node(&new_key));
            if let Some(old_key) = old_key.filter(|k| !k.is_empty()) {
                renames.push((old_key, new_key));
            }
        }
    }

    if !renames.is_empty() {
        let lookup: HashMap<String, String> = renames.iter().cloned().collect();
        rewrite_argument_references(root, &lookup);
    }
    tracing::debug!(
        key_path = %format_key_path(path),
        renamed = renames.len(),
        "recalculated keys"
    );
    Ok(renames)
}

fn rewrite_argument_references(value: &mut Value, renames: &HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            if let Some(arg) = map.get_mut(Z18K1) {
                let renamed = string_value(arg).and_then(|old| renames.get(old)).cloned();
                if let Some(new_key) = renamed {
                    *arg = if arg.is_string() {
                        Value::String(new_key)
                    } else {
                        string_node(&new_key)
                    };
                }
            }
            for field in map.values_mut() {
                rewrite_argument_references(field, renames);
            }
        }
        Value::Array(items) => {
            for item in items {
                rewrite_argument_references(item, renames);
            }
        }
        _ => {}
    }
}
