/// Error types for the translation module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The external translation service could not be reached or returned a failure
    TranslationUnavailable(String),
    /// Provider misconfiguration (empty endpoint, malformed URL, ...)
    ConfigError(String),
    /// A locale code failed validation
    InvalidLocale(String),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::TranslationUnavailable(msg) => {
                write!(f, "Translation unavailable: {}", msg)
            }
            TranslateError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            TranslateError::InvalidLocale(msg) => write!(f, "Invalid locale: {}", msg),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        TranslateError::TranslationUnavailable(err.to_string())
    }
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;
