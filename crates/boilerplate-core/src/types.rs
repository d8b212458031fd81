//! Strong domain types for boilerplate generation.
//!
//! The supported languages form a closed enum, so code inside the workspace
//! can never ask for a language without a template. String input from the
//! command line goes through [`Language::from_str`], which is the single
//! validated entry point.
//!
//! # Examples
//!
//! ```
//! use boilerplate_core::{FunctionName, GenerationRequest, Language};
//!
//! let request = GenerationRequest::new(
//!     FunctionName::new("add").unwrap(),
//!     "Python".parse::<Language>().unwrap(),
//!     vec!["a".to_string(), "b".to_string()],
//! );
//!
//! assert_eq!(request.parameters, vec!["a", "b"]);
//! assert_eq!(request.file_name(), "add.py");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target language of a generated stub.
///
/// # Examples
///
/// ```
/// use boilerplate_core::Language;
///
/// let lang: Language = "JavaScript".parse().unwrap();
/// assert_eq!(lang, Language::JavaScript);
/// assert_eq!(lang.extension(), ".js");
///
/// assert!("ruby".parse::<Language>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python (`.py`)
    Python,
    /// JavaScript (`.js`)
    JavaScript,
}

impl Language {
    /// All supported languages in declaration order.
    pub const ALL: [Self; 2] = [Self::Python, Self::JavaScript];

    /// Returns the lowercase identifier, which is also the template name.
    ///
    /// # Examples
    ///
    /// ```
    /// use boilerplate_core::Language;
    ///
    /// assert_eq!(Language::Python.as_str(), "python");
    /// assert_eq!(Language::JavaScript.as_str(), "javascript");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
        }
    }

    /// Returns the file extension, including the leading dot.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Python => ".py",
            Self::JavaScript => ".js",
        }
    }

    /// Returns the supported identifiers joined for user-facing messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use boilerplate_core::Language;
    ///
    /// assert_eq!(Language::supported_list(), "python, javascript");
    /// ```
    #[must_use]
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "python" => Ok(Self::Python),
            "javascript" => Ok(Self::JavaScript),
            _ => Err(Error::UnsupportedLanguage {
                language: s.to_string(),
            }),
        }
    }
}

/// Name of the function to generate (validated newtype over String).
///
/// The name is also used as the output file stem, so it must be a single
/// path component.
///
/// # Examples
///
/// ```
/// use boilerplate_core::FunctionName;
///
/// let name = FunctionName::new("two_sum").unwrap();
/// assert_eq!(name.as_str(), "two_sum");
///
/// assert!(FunctionName::new("").is_err());
/// assert!(FunctionName::new("../escape").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FunctionName(String);

impl FunctionName {
    /// Creates a validated function name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the name is empty, contains a
    /// path separator, or is `.`/`..`.
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();

        if name.is_empty() {
            return Err(Self::invalid("must not be empty"));
        }

        if name.contains(['/', '\\']) {
            return Err(Self::invalid("must not contain path separators"));
        }

        if name == "." || name == ".." {
            return Err(Self::invalid("must not be a relative path component"));
        }

        Ok(Self(name.to_string()))
    }

    fn invalid(reason: &str) -> Error {
        Error::ValidationError {
            field: "function name".to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns the function name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for FunctionName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<FunctionName> for String {
    fn from(name: FunctionName) -> Self {
        name.0
    }
}

/// Splits a comma-separated parameter list, trimming each entry.
///
/// Empty entries are kept: `""` yields `[""]`, which joins back to an empty
/// parameter list.
///
/// # Examples
///
/// ```
/// use boilerplate_core::split_inputs;
///
/// assert_eq!(split_inputs("a, b ,c"), vec!["a", "b", "c"]);
/// assert_eq!(split_inputs(""), vec![""]);
/// ```
#[must_use]
pub fn split_inputs(inputs: &str) -> Vec<String> {
    inputs.split(',').map(|s| s.trim().to_string()).collect()
}

/// A single, validated request to generate one stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Function name (also the output file stem)
    pub function_name: FunctionName,
    /// Target language
    pub language: Language,
    /// Ordered parameter names
    pub parameters: Vec<String>,
}

impl GenerationRequest {
    /// Creates a new generation request.
    #[must_use]
    pub const fn new(
        function_name: FunctionName,
        language: Language,
        parameters: Vec<String>,
    ) -> Self {
        Self {
            function_name,
            language,
            parameters,
        }
    }

    /// Returns the output file name: `<function_name><extension>`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}{}", self.function_name, self.language.extension())
    }
}
