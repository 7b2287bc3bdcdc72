//! Pre-order traversal of ZObject trees.

use serde_json::Value;
use zobject_key_path::format_key_path;

use crate::types::{decode, ZObjectKind};

/// Visit every object node under `node` in pre-order and collect what the
/// visitor returns.
///
/// The visitor sees each object with its path (`path` extended by field keys
/// and list indices). Arrays are walked item by item with the index appended
/// but are not themselves handed to the visitor, and scalars are never
/// visited. Results keep the left-to-right traversal order.
pub fn walk_zobject<T, I, F>(node: &Value, path: &[String], mut visitor: F) -> Vec<T>
where
    F: FnMut(&Value, &[String]) -> I,
    I: IntoIterator<Item = T>,
{
    let mut out = Vec::new();
    let mut path = path.to_vec();
    walk_into(node, &mut path, &mut visitor, &mut out);
    out
}

fn walk_into<T, I, F>(node: &Value, path: &mut Vec<String>, visitor: &mut F, out: &mut Vec<T>)
where
    F: FnMut(&Value, &[String]) -> I,
    I: IntoIterator<Item = T>,
{
    match node {
        Value::Object(map) => {
            out.extend(visitor(node, &path[..]));
            for (key, field) in map {
                path.push(key.clone());
                walk_into(field, path, visitor, out);
                path.pop();
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                path.push(i.to_string());
                walk_into(item, path, visitor, out);
                path.pop();
            }
        }
        _ => {}
    }
}

/// Dot-joined paths of every reference whose identifier is still empty.
pub fn collect_empty_references(root: &Value) -> Vec<String> {
    walk_zobject(root, &[], |node, path| match decode(node) {
        ZObjectKind::Reference("") => Some(format_key_path(path)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_walk_preorder() {
        let doc = json!({
            "Z1K1": "Z2",
            "Z2K2": {
                "Z1K1": "Z7",
                "Z7K1": "Z801",
                "Z801K1": ["Z6", {"Z1K1": "Z6", "Z6K1": "a"}, "b"]
            },
            "Z2K3": {"Z1K1": "Z12"}
        });
        let paths = walk_zobject(&doc, &["main".to_string()], |_, path| {
            Some(format_key_path(path))
        });
        assert_eq!(
            paths,
            vec!["main", "main.Z2K2", "main.Z2K2.Z801K1.1", "main.Z2K3"]
        );
    }

    #[test]
    fn test_walk_many_results_per_node() {
        let doc = json!({"a": {"b": {}}, "c": {}});
        let keys: Vec<String> = walk_zobject(&doc, &[], |node, _| {
            node.as_object()
                .map(|map| map.keys().cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        });
        assert_eq!(keys, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_walk_scalar_root() {
        let visited = walk_zobject(&json!("Z6"), &[], |_, _| Some(()));
        assert!(visited.is_empty());
    }

    #[test]
    fn test_collect_empty_references() {
        let doc = json!({
            "Z1K1": {"Z1K1": "Z9", "Z9K1": "Z2"},
            "Z2K2": {
                "Z1K1": {"Z1K1": "Z9", "Z9K1": "Z7"},
                "Z7K1": {"Z1K1": "Z9", "Z9K1": ""},
                "Z801K1": [
                    {"Z1K1": "Z9", "Z9K1": "Z6"},
                    {"Z1K1": "Z9", "Z9K1": ""}
                ]
            }
        });
        assert_eq!(
            collect_empty_references(&doc),
            vec!["Z2K2.Z7K1", "Z2K2.Z801K1.1"]
        );
    }
}
