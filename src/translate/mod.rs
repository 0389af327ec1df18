/// Tree String Translation Module
///
/// This module translates arbitrary JSON payloads (API responses, reference
/// data, chatbot replies) into a target language while leaving their shape
/// untouched. It works in three steps:
///
/// 1. **Flatten** - Walk the tree depth-first and collect every string leaf
///    into a flat path → string map (`extract_strings`)
/// 2. **Translate** - Submit the flat map to a `TranslationProvider` backend
///    (the HTTP microservice, or a mock in tests)
/// 3. **Rebuild** - Reconstruct a structurally identical tree with the
///    translated strings substituted back at their paths (`rebuild_object`)
///
/// Numbers, booleans, nulls, key order and container shapes all survive the
/// round trip unchanged, and any path the backend fails to translate falls
/// back to its original string.
///
/// # Example
///
/// ```ignore
/// use agri_translate::translate::{MockMode, MockTranslator, translate_data};
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let provider = MockTranslator::new(MockMode::Suffix);
///     let data = json!({ "greeting": "Hello", "weather": { "summary": "Sunny" }, "count": 3 });
///
///     let translated = translate_data(&provider, "hi", &data).await?;
///     assert_eq!(translated["count"], 3);
///     Ok(())
/// }
/// ```
pub mod error;
pub mod flatten;
pub mod http;
pub mod mock;
pub mod path;
pub mod pipeline;
pub mod provider;
pub mod rebuild;


pub use error::{TranslateError, TranslateResult};
pub use flatten::{FlatStringMap, extract_strings};
pub use http::HttpTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use path::{PATH_DELIMITER, PathSegment, TreePath};
pub use pipeline::translate_data;
pub use provider::{TranslationProvider, normalize_locale, validate_locale};
pub use rebuild::{TranslatedMap, rebuild_object};
