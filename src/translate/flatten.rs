//! Flattening a JSON tree into a path → string map
//!
//! [`extract_strings`] walks an arbitrary JSON value depth-first and collects
//! every string leaf under its serialized [`TreePath`]. The resulting flat
//! map is the payload sent to the translation service: one entry per string
//! leaf, nothing for numbers, booleans, nulls or empty containers.

use crate::translate::path::TreePath;
use indexmap::IndexMap;
use serde_json::Value;

/// Flat mapping from serialized path to the string found at that path
///
/// Insertion order follows the depth-first, pre-order walk: ascending indices
/// within arrays, the object's own key order within objects.
pub type FlatStringMap = IndexMap<String, String>;

/// Collect every string leaf of `value` into a flat path → string map
///
/// # Example
///
/// ```ignore
/// let value = json!({ "greeting": "Hello", "count": 3 });
/// let flat = extract_strings(&value);
/// assert_eq!(flat.get("greeting"), Some(&"Hello".to_string()));
/// assert!(!flat.contains_key("count"));
/// ```
pub fn extract_strings(value: &Value) -> FlatStringMap {
    let mut map = FlatStringMap::new();
    collect(value, &TreePath::root(), &mut map);
    map
}

fn collect(value: &Value, path: &TreePath, map: &mut FlatStringMap) {
    match value {
        Value::String(text) => {
            map.insert(path.serialize(), text.clone());
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect(item, &path.child_index(index), map);
            }
        }
        Value::Object(members) => {
            for (key, member) in members {
                collect(member, &path.child_key(key), map);
            }
        }
        // Non-string scalars carry nothing to translate
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
