use serde_json::Value;

use crate::types::slot;

/// Read the value at `path`, `None` if any step is missing.
///
/// Unlike [`resolve`](crate::resolve) this never fails; read-oriented call
/// sites use it where an absent node is an ordinary outcome.
pub fn get<'a, S: AsRef<str>>(val: &'a Value, path: &[S]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = slot(current, step.as_ref())?;
    }
    Some(current)
}
