//! Mock translation provider for testing
//!
//! This module provides a deterministic, network-free provider for testing
//! the translate-and-rebuild pipeline without a running translation service.
//!
//! # Example
//!
//! ```ignore
//! use agri_translate::translate::{MockMode, MockTranslator, TranslationProvider};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let flat = FlatStringMap::from_iter([("greeting".to_string(), "Hello".to_string())]);
//!     let result = mock.translate_strings(&flat, "hi").await.unwrap();
//!     assert_eq!(result["greeting"], "Hello_hi");
//! }
//! ```

use crate::translate::error::{TranslateError, TranslateResult};
use crate::translate::flatten::FlatStringMap;
use crate::translate::provider::TranslationProvider;
use crate::translate::rebuild::TranslatedMap;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append locale suffix to each value: "Hello" → "Hello_hi"
    Suffix,

    /// Use predefined mappings for realistic translations,
    /// (text, target_locale) → translation, falling back to the suffix form
    Mappings(HashMap<(String, String), String>),

    /// Drop the listed keys from the response,
    /// simulating a service that only translated part of the payload
    Omit(Vec<String>),

    /// Fail every call, simulating an unreachable service
    Error(String),

    /// Return the input values unchanged
    NoOp,
}

/// Mock provider that simulates various translation-service behaviors
///
/// Useful for testing the pipeline without external dependencies. Each mode
/// simulates a different service behavior, including partial responses and
/// outages.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
}

impl MockTranslator {
    /// Create a new MockTranslator with the given mode
    pub fn new(mode: MockMode) -> Self {
        Self { mode, delay_ms: 0 }
    }

    /// Create a MockTranslator with simulated network delay
    ///
    /// # Arguments
    ///
    /// * `mode` - The translation mode
    /// * `delay_ms` - Simulated delay in milliseconds, applied once per call
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self { mode, delay_ms }
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, key: &str, text: &str, target: &str) -> Option<TranslateResult<String>> {
        match &self.mode {
            MockMode::Suffix => Some(Ok(format!("{}_{}", text, target))),
            MockMode::Mappings(map) => {
                let lookup = (text.to_string(), target.to_string());
                Some(Ok(map
                    .get(&lookup)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target))))
            }
            MockMode::Omit(keys) => {
                if keys.iter().any(|k| k == key) {
                    None
                } else {
                    Some(Ok(format!("{}_{}", text, target)))
                }
            }
            MockMode::Error(msg) => Some(Err(TranslateError::TranslationUnavailable(msg.clone()))),
            MockMode::NoOp => Some(Ok(text.to_string())),
        }
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    async fn translate_strings(
        &self,
        strings: &FlatStringMap,
        target_locale: &str,
    ) -> TranslateResult<TranslatedMap> {
        // Apply simulated delay (per call, not per string)
        self.apply_delay().await;

        let mut translated = TranslatedMap::new();
        for (key, text) in strings {
            if let Some(result) = self.apply_translation(key, text, target_locale) {
                translated.insert(key.clone(), result?);
            }
        }
        Ok(translated)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
