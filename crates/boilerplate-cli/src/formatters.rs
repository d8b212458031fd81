//! Output formatters for command results.
//!
//! JSON and text modes serialize the result; pretty mode uses its
//! human-readable `Display` form.

use anyhow::Result;
use boilerplate_core::cli::OutputFormat;
use serde::Serialize;
use std::fmt::Display;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use boilerplate_core::cli::OutputFormat;
/// use code_cli::formatters::format_output;
/// use serde::Serialize;
/// use std::fmt;
///
/// #[derive(Serialize)]
/// struct Saved {
///     path: String,
/// }
///
/// impl fmt::Display for Saved {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "saved {}", self.path)
///     }
/// }
///
/// let saved = Saved { path: "add.py".to_string() };
/// assert!(format_output(&saved, OutputFormat::Json)?.contains("\"path\""));
/// assert_eq!(format_output(&saved, OutputFormat::Pretty)?, "saved add.py");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize + Display>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => Ok(data.to_string()),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON.
    ///
    /// Uses pretty-printing with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let json = serde_json::to_string_pretty(data)?;
        Ok(json)
    }

    /// Format data as compact JSON (no formatting).
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        let json = serde_json::to_string(data)?;
        Ok(json)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Format data as plain text.
    ///
    /// Single-line JSON without colors, suitable for piping into scripts.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Serialize)]
    struct Sample {
        name: String,
        count: usize,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} x{}", self.name, self.count)
        }
    }

    fn sample() -> Sample {
        Sample {
            name: "add".to_string(),
            count: 2,
        }
    }

    #[test]
    fn test_json_format_is_indented() {
        let output = format_output(&sample(), OutputFormat::Json).unwrap();
        assert!(output.contains("\n  \"name\": \"add\""));
    }

    #[test]
    fn test_text_format_is_single_line() {
        let output = format_output(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(output, r#"{"name":"add","count":2}"#);
    }

    #[test]
    fn test_pretty_format_uses_display() {
        let output = format_output(&sample(), OutputFormat::Pretty).unwrap();
        assert_eq!(output, "add x2");
    }
}
