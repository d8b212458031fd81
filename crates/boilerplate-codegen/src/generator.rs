//! Stub generator.
//!
//! Turns a function name, a language, and an ordered parameter list into
//! the source text of an empty function.
//!
//! # Examples
//!
//! ```
//! use boilerplate_codegen::generate;
//!
//! let code = generate("add", "python", &["a", "b"]).unwrap();
//! assert_eq!(code, "def add(a, b):\n    # Your code here\n    return");
//!
//! assert!(generate("add", "ruby", &["a"]).is_err());
//! ```

use crate::template_engine::TemplateEngine;
use boilerplate_core::{Language, Result};
use serde::Serialize;
use tracing::debug;

/// Values substituted into a stub template.
#[derive(Debug, Serialize)]
struct StubContext<'a> {
    name: &'a str,
    params: String,
}

/// Renders function stubs from the built-in language templates.
///
/// Rendering has no side effects: identical inputs always produce identical
/// output.
#[derive(Debug)]
pub struct BoilerplateGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl BoilerplateGenerator<'_> {
    /// Creates a generator with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::new()?,
        })
    }

    /// Renders the stub for `function_name` in `language`.
    ///
    /// Parameters are joined with `", "` in the order given.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn render<S: AsRef<str>>(
        &self,
        language: Language,
        function_name: &str,
        parameters: &[S],
    ) -> Result<String> {
        let context = StubContext {
            name: function_name,
            params: parameters
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(", "),
        };

        debug!(
            "Rendering {} stub for '{}' with {} parameter(s)",
            language,
            function_name,
            parameters.len()
        );

        let rendered = self.engine.render(language.as_str(), &context)?;

        // Template files end with a newline; stubs do not.
        Ok(match rendered.strip_suffix('\n') {
            Some(stripped) => stripped.to_string(),
            None => rendered,
        })
    }
}

/// Generates stub source text for a function.
///
/// `language` is matched case-insensitively against the supported set.
///
/// # Errors
///
/// Returns [`boilerplate_core::Error::UnsupportedLanguage`] if `language`
/// is not `python` or `javascript`.
pub fn generate<S: AsRef<str>>(
    function_name: &str,
    language: &str,
    parameters: &[S],
) -> Result<String> {
    let language: Language = language.parse()?;
    BoilerplateGenerator::new()?.render(language, function_name, parameters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_python() {
        let generator = BoilerplateGenerator::new().unwrap();
        let code = generator
            .render(Language::Python, "add", &["a", "b"])
            .unwrap();
        assert_eq!(code, "def add(a, b):\n    # Your code here\n    return");
    }

    #[test]
    fn test_render_javascript_without_parameters() {
        let generator = BoilerplateGenerator::new().unwrap();
        let code = generator
            .render::<&str>(Language::JavaScript, "sum", &[])
            .unwrap();
        assert_eq!(
            code,
            "function sum() {\n    // Your code here\n    return;\n}"
        );
    }

    #[test]
    fn test_render_keeps_parameter_order() {
        let generator = BoilerplateGenerator::new().unwrap();
        let code = generator
            .render(Language::JavaScript, "f", &["z", "a", "m"])
            .unwrap();
        assert!(code.starts_with("function f(z, a, m) {"));
    }

    #[test]
    fn test_generate_rejects_unsupported_language() {
        let err = generate("add", "ruby", &["a"]).unwrap_err();
        assert!(err.is_unsupported_language());
    }

    #[test]
    fn test_generate_accepts_mixed_case() {
        let lower = generate("f", "javascript", &["x"]).unwrap();
        let mixed = generate("f", "JavaScript", &["x"]).unwrap();
        assert_eq!(lower, mixed);
    }
}
