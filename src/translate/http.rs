//! HTTP provider for the translation microservice
//!
//! This module talks to the standalone translation service (an Argos-backed
//! HTTP endpoint) that accepts a flat map of strings and returns the same
//! map translated.
//!
//! # Wire format
//!
//! Request: `POST <endpoint>` with body
//! `{"targetLang": "hi", "strings": {"greeting": "Hello", ...}}`
//!
//! Response: `{"translated": {"greeting": "नमस्ते", ...}}` — possibly a
//! subset of the request keys if the service skipped some entries.
//!
//! # Configuration
//!
//! The endpoint is read from the `TRANSLATE_SERVICE_URL` environment
//! variable, falling back to the local development default.
//!
//! # Example
//!
//! ```ignore
//! use agri_translate::translate::{HttpTranslateProvider, TranslationProvider};
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
use crate::translate::provider::{TranslationProvider, normalize_locale, validate_locale};
use crate::translate::rebuild::TranslatedMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request body for the translation service
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    #[serde(rename = "targetLang")]
    target_lang: String,
    strings: &'a FlatStringMap,
}

/// Response body from the translation service
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translated: TranslatedMap,
}

/// Response body from the service's status probe
#[derive(Debug, Deserialize)]
struct StatusResponse {
    ok: bool,
}

/// HTTP client for the flat-map translation service
///
/// Sends the whole flat map in a single request and maps any transport or
/// non-success failure to `TranslateError::TranslationUnavailable`.
#[derive(Debug, Clone)]
pub struct HttpTranslateProvider {
    /// Endpoint accepting POSTed translation requests
    endpoint: String,
    /// HTTP client for async requests
    client: reqwest::Client,
}

impl HttpTranslateProvider {
    /// Default endpoint of a locally running translation service
    pub const DEFAULT_ENDPOINT: &'static str = "http://localhost:5000/api/translate";

    /// Request timeout for translation calls
    const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Create a new provider pointing at an explicit endpoint
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full URL of the translation route
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(TranslateError)` - If the endpoint is empty or HTTP client
    ///   creation fails
    pub fn new(endpoint: String) -> TranslateResult<Self> {
        if endpoint.trim().is_empty() {
            return Err(TranslateError::ConfigError(
                "Translation service endpoint cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(Self::REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                TranslateError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { endpoint, client })
    }

    /// Create a provider from the `TRANSLATE_SERVICE_URL` environment
    /// variable, falling back to [`Self::DEFAULT_ENDPOINT`]
    pub fn from_env() -> TranslateResult<Self> {
        let endpoint = std::env::var("TRANSLATE_SERVICE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    /// The endpoint this provider posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Probe the service's `/status` route
    ///
    /// Returns `Ok(true)` when the service reports itself up. A transport
    /// failure surfaces as `TranslationUnavailable` like any other call.
    pub async fn status(&self) -> TranslateResult<bool> {
        let url = format!("{}/status", self.endpoint.trim_end_matches('/'));
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let status: StatusResponse = response.json().await.map_err(|e| {
            TranslateError::TranslationUnavailable(format!(
                "Failed to parse status response: {}",
                e
            ))
        })?;
        Ok(status.ok)
    }
}

#[async_trait]
impl TranslationProvider for HttpTranslateProvider {
    async fn translate_strings(
        &self,
        strings: &FlatStringMap,
        target_locale: &str,
    ) -> TranslateResult<TranslatedMap> {
        validate_locale(target_locale)?;

        if strings.is_empty() {
            return Ok(TranslatedMap::new());
        }

        let body = TranslateRequest {
            target_lang: normalize_locale(target_locale),
            strings,
        };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TranslateError::TranslationUnavailable(format!(
                "Translation service error ({}): {}",
                status, error_text
            )));
        }

        let parsed: TranslateResponse = response.json().await.map_err(|e| {
            TranslateError::TranslationUnavailable(format!(
                "Failed to parse translation response: {}",
                e
            ))
        })?;

        Ok(parsed.translated)
    }

    fn provider_name(&self) -> &str {
        "Translation Service"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Initialization Tests ==========

    #[test]
    fn test_new_with_valid_endpoint() {
        let provider = HttpTranslateProvider::new("http://localhost:5000/api/translate".to_string());
        assert!(provider.is_ok());
        assert_eq!(provider.unwrap().provider_name(), "Translation Service");
    }

    #[test]
    fn test_new_with_empty_endpoint() {
        let result = HttpTranslateProvider::new("".to_string());
        match result {
            Err(TranslateError::ConfigError(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected ConfigError"),
        }
    }

    #[test]
    fn test_new_with_whitespace_endpoint() {
        assert!(HttpTranslateProvider::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_from_env_falls_back_to_default() {
        unsafe {
            std::env::remove_var("TRANSLATE_SERVICE_URL");
        }
        let provider = HttpTranslateProvider::from_env().unwrap();
        assert_eq!(provider.endpoint(), HttpTranslateProvider::DEFAULT_ENDPOINT);
    }

    // ========== Validation Tests ==========

    #[tokio::test]
    async fn test_translate_invalid_target_locale() {
        let provider = HttpTranslateProvider::from_env().unwrap();
        let mut strings = FlatStringMap::new();
        strings.insert("k".to_string(), "hello".to_string());
        let result = provider.translate_strings(&strings, "invalid@code").await;
        assert!(matches!(result, Err(TranslateError::InvalidLocale(_))));
    }

    #[tokio::test]
    async fn test_translate_empty_map_skips_request() {
        // An empty payload returns without touching the network
        let provider =
            HttpTranslateProvider::new("http://invalid.localhost:1/api/translate".to_string())
                .unwrap();
        let result = provider
            .translate_strings(&FlatStringMap::new(), "hi")
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    // ========== Serialization Tests ==========

    #[test]
    fn test_request_wire_format() {
        let mut strings = FlatStringMap::new();
        strings.insert("greeting".to_string(), "Hello".to_string());
        let body = TranslateRequest {
            target_lang: "hi".to_string(),
            strings: &strings,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "targetLang": "hi", "strings": { "greeting": "Hello" } })
        );
    }

    #[test]
    fn test_response_wire_format() {
        let parsed: TranslateResponse =
            serde_json::from_str(r#"{"translated": {"greeting": "Bonjour"}}"#).unwrap();
        assert_eq!(parsed.translated["greeting"], "Bonjour");
    }

    #[test]
    fn test_response_allows_subset() {
        let parsed: TranslateResponse = serde_json::from_str(r#"{"translated": {}}"#).unwrap();
        assert!(parsed.translated.is_empty());
    }

    // ========== Integration Tests (require a running service) ==========

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_service_translation() {
        let provider = HttpTranslateProvider::from_env().unwrap();
        let mut strings = FlatStringMap::new();
        strings.insert("greeting".to_string(), "Hello".to_string());

        let result = provider.translate_strings(&strings, "hi").await.unwrap();
        println!("Translation: Hello → {:?}", result.get("greeting"));
        assert!(result.contains_key("greeting"));
    }

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_service_status() {
        let provider = HttpTranslateProvider::from_env().unwrap();
        let up = provider.status().await.unwrap();
        assert!(up);
    }
}
