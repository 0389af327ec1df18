//! Translate-and-rebuild orchestration
//!
//! [`translate_data`] glues the two tree walks together: flatten the input,
//! ship the flat map to a [`TranslationProvider`], and rebuild a parallel
//! tree from the response. Inputs with no string leaves at all are returned
//! as-is without contacting the provider, so a payload of pure numbers or an
//! empty object never costs a network round trip.

use crate::translate::error::TranslateResult;
use crate::translate::flatten::extract_strings;
use crate::translate::provider::TranslationProvider;
use crate::translate::rebuild::rebuild_object;
use serde_json::Value;

/// Translate every string leaf of `data` into `target_locale`
///
/// The input is never mutated; the result is a freshly built tree with the
/// same shape, key order and non-string scalars. If the provider returns
/// translations for only some paths, the remaining strings keep their
/// original text.
///
/// # Errors
///
/// Propagates `TranslateError::TranslationUnavailable` (or a validation
/// error) from the provider unchanged. No retry and no partial result: the
/// caller decides whether to fall back to the untranslated payload.
///
/// # Example
///
/// ```ignore
/// let mock = MockTranslator::new(MockMode::Suffix);
/// let data = json!({ "greeting": "Hello", "count": 3 });
/// let translated = translate_data(&mock, "hi", &data).await?;
/// assert_eq!(translated, json!({ "greeting": "Hello_hi", "count": 3 }));
/// ```
pub async fn translate_data(
    provider: &dyn TranslationProvider,
    target_locale: &str,
    data: &Value,
) -> TranslateResult<Value> {
    let flat = extract_strings(data);
    if flat.is_empty() {
        // Nothing to translate
        return Ok(data.clone());
    }

    let translated = provider.translate_strings(&flat, target_locale).await?;
    Ok(rebuild_object(data, &translated))
}
