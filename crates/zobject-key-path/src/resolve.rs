use serde_json::Value;

use crate::types::{slot, slot_mut, Resolved, ResolvedMut};
use crate::KeyPathError;

fn is_container(val: &Value) -> bool {
    matches!(val, Value::Object(_) | Value::Array(_))
}

/// Resolve `path` to its last container and final key.
///
/// Every step but the last must name an existing object field or array item
/// whose value is itself an object or array. The final step is not required
/// to exist, so the result can address a slot that is about to be written.
///
/// # Errors
///
/// - [`KeyPathError::EmptyKeyPath`] when `path` is empty.
/// - [`KeyPathError::NotObject`] naming the first step that is missing or
///   addresses a scalar.
pub fn resolve<'a>(root: &'a Value, path: &'a [String]) -> Result<Resolved<'a>, KeyPathError> {
    let (final_key, walk) = path.split_last().ok_or(KeyPathError::EmptyKeyPath)?;
    let mut current = root;
    for step in walk {
        current = slot(current, step)
            .filter(|next| is_container(next))
            .ok_or_else(|| KeyPathError::NotObject { key: step.clone() })?;
    }
    if !is_container(current) {
        return Err(KeyPathError::NotObject {
            key: final_key.clone(),
        });
    }
    Ok(Resolved {
        target: current,
        final_key,
    })
}

/// Mutable counterpart of [`resolve`].
///
/// The returned handle borrows the caller's tree; writes through it are
/// visible to every later read of `root`.
pub fn resolve_mut<'a>(
    root: &'a mut Value,
    path: &[String],
) -> Result<ResolvedMut<'a>, KeyPathError> {
    let (final_key, walk) = path.split_last().ok_or(KeyPathError::EmptyKeyPath)?;
    let mut current = root;
    for step in walk {
        current = match slot_mut(current, step) {
            Some(next) if is_container(next) => next,
            _ => return Err(KeyPathError::NotObject { key: step.clone() }),
        };
    }
    if !is_container(current) {
        return Err(KeyPathError::NotObject {
            key: final_key.clone(),
        });
    }
    Ok(ResolvedMut {
        target: current,
        final_key: final_key.clone(),
    })
}
