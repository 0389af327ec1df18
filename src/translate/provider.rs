//! Translation provider trait and locale utilities
//!
//! This module defines the `TranslationProvider` trait for backend
//! abstraction, enabling support for different translation services (the
//! HTTP microservice, mock, etc.) without coupling the tree-walk pipeline to
//! any specific transport.
//!
//! # Example
//!
//! ```ignore
//! use agri_translate::translate::{TranslationProvider, HttpTranslateProvider, extract_strings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = HttpTranslateProvider::from_env()?;
//!     let flat = extract_strings(&serde_json::json!({ "greeting": "Hello" }));
//!     let translated = provider.translate_strings(&flat, "hi").await?;
//!     println!("{:?}", translated);
//!     Ok(())
//! }
//! ```

use crate::translate::error::{TranslateError, TranslateResult};
use crate::translate::flatten::FlatStringMap;
use crate::translate::rebuild::TranslatedMap;
use async_trait::async_trait;

/// Generic trait for translation backends
///
/// Implementations handle the actual translation of a flat path → string map,
/// whether through a network service or deterministic logic (Mock).
///
/// The method is async to support I/O-bound implementations; this is the only
/// suspension point in the whole translate-and-rebuild pipeline.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate every value of `strings` into `target_locale`
    ///
    /// # Arguments
    ///
    /// * `strings` - Flat map of opaque keys to source-language strings
    /// * `target_locale` - Target language code (e.g., "hi", "fr")
    ///
    /// # Returns
    ///
    /// * `Ok(TranslatedMap)` - Translations keyed like the input; a backend
    ///   may return a subset of the keys, and callers must treat missing keys
    ///   as "keep the original string"
    /// * `Err(TranslateError)` - If the backend call fails as a whole
    async fn translate_strings(
        &self,
        strings: &FlatStringMap,
        target_locale: &str,
    ) -> TranslateResult<TranslatedMap>;

    /// Get the name of this translation provider
    ///
    /// Used for logging and debugging to identify which backend handled a
    /// translation.
    fn provider_name(&self) -> &str;
}

/// Normalize a locale code by stripping region information
///
/// Converts locale codes from BCP 47 format to ISO 639-1 format:
/// - `en-US` → `en`
/// - `zh-Hans` → `zh`
/// - `hi` → `hi` (unchanged)
pub fn normalize_locale(locale: &str) -> String {
    // Split on hyphen and take the first part (language code)
    locale.split('-').next().unwrap_or(locale).to_lowercase()
}

/// Validate that a locale code is in acceptable format
///
/// Checks that the locale code is non-empty and contains only alphanumeric
/// characters, hyphens, and underscores (following ISO 639 conventions).
pub fn validate_locale(locale: &str) -> TranslateResult<()> {
    if locale.is_empty() {
        return Err(TranslateError::InvalidLocale(
            "Locale code is empty".to_string(),
        ));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TranslateError::InvalidLocale(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}
