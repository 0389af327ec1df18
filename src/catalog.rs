//! Locale catalogs of pre-translated messages
//!
//! Besides on-the-fly translation through the service, the portal ships
//! static per-locale message files (`<locales_dir>/<locale>/complete.json`,
//! a flat JSON object of key → string). [`TranslationCatalog`] loads those
//! files lazily, caches them in-process, and resolves keys with a fallback
//! chain: requested locale → default locale → the key itself.

use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// File name of a locale's message catalog inside its directory
const CATALOG_FILE: &str = "complete.json";

/// Lazily loaded, cached per-locale message catalogs
pub struct TranslationCatalog {
    locales_dir: PathBuf,
    default_locale: String,
    cache: Mutex<HashMap<String, Arc<HashMap<String, String>>>>,
}

impl TranslationCatalog {
    /// Create a catalog rooted at `locales_dir`, with `"en"` as the default
    /// (fallback) locale
    pub fn new(locales_dir: impl Into<PathBuf>) -> Self {
        TranslationCatalog {
            locales_dir: locales_dir.into(),
            default_locale: "en".to_string(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Override the fallback locale
    pub fn with_default_locale(mut self, locale: &str) -> Self {
        self.default_locale = locale.to_lowercase();
        self
    }

    /// Resolve `key` in `locale`
    ///
    /// Falls back to the default locale when the key is missing (or the
    /// locale's file cannot be read), and finally to the key itself, so this
    /// never fails — at worst the caller displays the untranslated key.
    pub fn translate(&self, key: &str, locale: &str) -> String {
        let messages = self.load(locale);
        if let Some(message) = messages.get(key) {
            return message.clone();
        }
        let normalized = locale.to_lowercase();
        if normalized != self.default_locale {
            let fallback = self.load(&self.default_locale);
            if let Some(message) = fallback.get(key) {
                return message.clone();
            }
        }
        key.to_string()
    }

    /// Whether `key` resolves to something other than itself in `locale`
    pub fn has_translation(&self, key: &str, locale: &str) -> bool {
        self.translate(key, locale) != key
    }

    /// Translate every string leaf of a JSON value through the catalog
    ///
    /// Mirrors the structural rules of the service-backed pipeline: the
    /// output is a fresh tree with identical shape and key order, non-string
    /// scalars untouched, and strings without a catalog entry left as-is.
    pub fn translate_value(&self, value: &Value, locale: &str) -> Value {
        match value {
            Value::String(text) => Value::String(self.translate(text, locale)),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.translate_value(item, locale))
                    .collect(),
            ),
            Value::Object(members) => {
                let mut translated = serde_json::Map::with_capacity(members.len());
                for (key, member) in members {
                    translated.insert(key.clone(), self.translate_value(member, locale));
                }
                Value::Object(translated)
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
        }
    }

    /// Load (or fetch from cache) the catalog for `locale`
    ///
    /// A locale whose file is missing or malformed falls back to the default
    /// locale's catalog; a broken default locale yields an empty catalog.
    fn load(&self, locale: &str) -> Arc<HashMap<String, String>> {
        let normalized = locale.to_lowercase();
        {
            let cache = self.cache.lock().expect("catalog cache poisoned");
            if let Some(messages) = cache.get(&normalized) {
                return Arc::clone(messages);
            }
        }

        let messages = match self.read_catalog_file(&normalized) {
            Ok(messages) => Arc::new(messages),
            Err(_) if normalized != self.default_locale => {
                // Broken or missing locale file: serve the default locale,
                // without caching under the requested locale
                return self.load(&self.default_locale);
            }
            Err(_) => Arc::new(HashMap::new()),
        };

        let mut cache = self.cache.lock().expect("catalog cache poisoned");
        cache.insert(normalized, Arc::clone(&messages));
        messages
    }

    fn read_catalog_file(&self, locale: &str) -> Result<HashMap<String, String>, String> {
        let path = self.locales_dir.join(locale).join(CATALOG_FILE);

        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e))?;

        let json: Value = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse JSON from '{}': {}", path.display(), e))?;

        let obj = json.as_object().ok_or_else(|| {
            format!(
                "Invalid JSON in '{}': root must be an object",
                path.display()
            )
        })?;

        let mut messages = HashMap::new();
        for (key, value) in obj {
            if let Some(message) = value.as_str() {
                messages.insert(key.clone(), message.to_string());
            } else {
                eprintln!("Warning: Message '{}' is not a string, skipping", key);
            }
        }

        Ok(messages)
    }
}
