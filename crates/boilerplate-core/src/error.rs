//! Error types for boilerplate generation.
//!
//! This module provides the error hierarchy shared by every crate in the
//! workspace.
//!
//! # Examples
//!
//! ```
//! use boilerplate_core::{Error, Language, Result};
//!
//! fn pick(value: &str) -> Result<Language> {
//!     value.parse()
//! }
//!
//! let err = pick("ruby").unwrap_err();
//! assert!(err.is_unsupported_language());
//! ```

use thiserror::Error;

/// Main error type for boilerplate generation.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested target language has no template.
    ///
    /// Raised when a language identifier outside the supported set is parsed,
    /// both by the front end and by the generator itself.
    #[error("Unsupported language: {language} (supported: python, javascript)")]
    UnsupportedLanguage {
        /// Language identifier exactly as supplied
        language: String,
    },

    /// Validation error for domain types.
    ///
    /// Raised when creating a domain type such as `FunctionName` from a value
    /// that does not meet its format requirements.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error.
    ///
    /// Raised when the configuration file cannot be read, parsed, or contains
    /// invalid values.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Template registration or rendering failed.
    #[error("Template '{template}' failed: {message}")]
    TemplateError {
        /// Name of the template involved
        template: String,
        /// Description of the failure
        message: String,
    },
}

impl Error {
    /// Returns `true` if this is an unsupported language error.
    ///
    /// # Examples
    ///
    /// ```
    /// use boilerplate_core::Error;
    ///
    /// let err = Error::UnsupportedLanguage {
    ///     language: "ruby".to_string(),
    /// };
    /// assert!(err.is_unsupported_language());
    /// ```
    #[must_use]
    pub const fn is_unsupported_language(&self) -> bool {
        matches!(self, Self::UnsupportedLanguage { .. })
    }

    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use boilerplate_core::Error;
    ///
    /// let err = Error::ValidationError {
    ///     field: "function name".to_string(),
    ///     reason: "must not be empty".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }
}

/// Result type alias for boilerplate operations.
///
/// # Examples
///
/// ```
/// use boilerplate_core::{Error, Result};
///
/// fn non_empty(value: &str) -> Result<&str> {
///     if value.is_empty() {
///         return Err(Error::InvalidArgument("empty value".to_string()));
///     }
///     Ok(value)
/// }
///
/// assert!(non_empty("add").is_ok());
/// assert!(non_empty("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_detection() {
        let err = Error::UnsupportedLanguage {
            language: "ruby".to_string(),
        };
        assert!(err.is_unsupported_language());
        assert!(!err.is_validation_error());
    }

    #[test]
    fn test_validation_error_detection() {
        let err = Error::ValidationError {
            field: "function name".to_string(),
            reason: "must not be empty".to_string(),
        };
        assert!(err.is_validation_error());
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_template_error_detection() {
        let err = Error::TemplateError {
            template: "python".to_string(),
            message: "unclosed tag".to_string(),
        };
        assert!(err.is_template_error());
        assert!(!err.is_unsupported_language());
    }

    #[test]
    fn test_unsupported_language_display() {
        let err = Error::UnsupportedLanguage {
            language: "Ruby".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("Unsupported language: Ruby"));
        assert!(display.contains("python, javascript"));
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::ConfigError {
            message: "bad log level".to_string(),
        };
        assert_eq!(err.to_string(), "Configuration error: bad log level");
        assert!(err.is_config_error());
    }
}
