pub mod catalog;
pub mod translate;

// Re-export the translation pipeline for convenient access
pub use catalog::TranslationCatalog;
pub use translate::{
    FlatStringMap, HttpTranslateProvider, MockMode, MockTranslator, TranslateError,
    TranslateResult, TranslatedMap, TranslationProvider, extract_strings, rebuild_object,
    translate_data,
};
