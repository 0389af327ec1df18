//! Rebuilding a JSON tree with translated strings substituted back
//!
//! [`rebuild_object`] is the inverse half of the pipeline: it walks the
//! original value in the same depth-first, pre-order fashion as
//! [`extract_strings`](crate::translate::flatten::extract_strings) and emits
//! a fresh, structurally identical tree where each string leaf is replaced by
//! the translation found under its serialized path. A path missing from the
//! translated map is not an error: the original string is kept unchanged, so
//! a partial response from the translation service degrades gracefully.

use crate::translate::path::TreePath;
use serde_json::Value;
use std::collections::HashMap;

/// Translations keyed by serialized path, as returned by a provider
///
/// May cover any subset of the paths produced by flattening; only lookup is
/// performed, never iteration, so the output order depends solely on the
/// original tree.
pub type TranslatedMap = HashMap<String, String>;

/// Produce a structurally identical copy of `value` with string leaves
/// substituted from `translations`
///
/// Container shapes, key order, sequence lengths and non-string scalars are
/// preserved exactly. The input is never mutated.
pub fn rebuild_object(value: &Value, translations: &TranslatedMap) -> Value {
    rebuild(value, &TreePath::root(), translations)
}

fn rebuild(value: &Value, path: &TreePath, translations: &TranslatedMap) -> Value {
    match value {
        Value::String(original) => match translations.get(&path.serialize()) {
            Some(translated) => Value::String(translated.clone()),
            None => Value::String(original.clone()),
        },
        Value::Array(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| rebuild(item, &path.child_index(index), translations))
                .collect(),
        ),
        Value::Object(members) => {
            let mut rebuilt = serde_json::Map::with_capacity(members.len());
            for (key, member) in members {
                rebuilt.insert(key.clone(), rebuild(member, &path.child_key(key), translations));
            }
            Value::Object(rebuilt)
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn translations(entries: &[(&str, &str)]) -> TranslatedMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_map_is_identity() {
        let value = json!({
            "greeting": "Hello",
            "nested": { "tags": ["a", "b"], "count": 7 },
            "flag": false,
            "nothing": null
        });
        let rebuilt = rebuild_object(&value, &TranslatedMap::new());
        assert_eq!(rebuilt, value);
    }

    #[test]
    fn test_substitutes_by_path() {
        let value = json!({ "greeting": "Hello" });
        let map = translations(&[("greeting", "Bonjour")]);
        assert_eq!(rebuild_object(&value, &map), json!({ "greeting": "Bonjour" }));
    }

    #[test]
    fn test_missing_key_falls_back_to_original() {
        let value = json!({ "greeting": "Hello", "weather": { "summary": "Sunny" }, "count": 3 });
        let map = translations(&[("greeting", "Bonjour")]);
        assert_eq!(
            rebuild_object(&value, &map),
            json!({ "greeting": "Bonjour", "weather": { "summary": "Sunny" }, "count": 3 })
        );
    }

    #[test]
    fn test_array_substitution() {
        let value = json!({ "tags": ["new", "organic"] });
        let map = translations(&[("tags.0", "nouveau"), ("tags.1", "biologique")]);
        assert_eq!(
            rebuild_object(&value, &map),
            json!({ "tags": ["nouveau", "biologique"] })
        );
    }

    #[test]
    fn test_non_string_scalars_never_touched() {
        let value = json!({ "count": 3, "ratio": 0.5, "on": true, "off": null });
        // Entries that happen to share paths with non-string leaves are ignored
        let map = translations(&[("count", "trois"), ("on", "oui")]);
        assert_eq!(rebuild_object(&value, &map), value);
    }

    #[test]
    fn test_key_order_preserved() {
        let value = json!({ "z": "last letter", "a": "first letter", "m": "middle" });
        let map = translations(&[("m", "milieu")]);
        let rebuilt = rebuild_object(&value, &map);
        let keys: Vec<&String> = rebuilt.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_original_not_mutated() {
        let value = json!({ "greeting": "Hello" });
        let map = translations(&[("greeting", "Bonjour")]);
        let _ = rebuild_object(&value, &map);
        assert_eq!(value, json!({ "greeting": "Hello" }));
    }

    #[test]
    fn test_root_string_substitution() {
        let value = json!("Hello");
        let map = translations(&[("", "Bonjour")]);
        assert_eq!(rebuild_object(&value, &map), json!("Bonjour"));
    }

    #[test]
    fn test_empty_containers_survive() {
        let value = json!({ "list": [], "map": {} });
        let rebuilt = rebuild_object(&value, &translations(&[("list", "liste")]));
        assert_eq!(rebuilt, value);
    }
}
