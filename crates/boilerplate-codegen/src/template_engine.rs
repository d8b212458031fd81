//! Template engine for stub generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in stub templates
//! pre-registered, one per supported language.
//!
//! # Examples
//!
//! ```
//! use boilerplate_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let context = json!({"name": "add", "params": "a, b"});
//! let rendered = engine.render("python", &context).unwrap();
//! assert!(rendered.starts_with("def add(a, b):"));
//! ```

use boilerplate_core::{Error, Language, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine for stub generation.
///
/// Templates are rendered in strict mode (a missing variable is an error)
/// and without HTML escaping, since the output is source code.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_builtin_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    /// Registers one template per [`Language`], keyed by its identifier.
    fn register_builtin_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        for language in Language::ALL {
            handlebars
                .register_template_string(
                    language.as_str(),
                    unix_line_endings(builtin_source(language)),
                )
                .map_err(|e| Error::TemplateError {
                    template: language.as_str().to_string(),
                    message: format!("failed to register built-in template: {e}"),
                })?;
        }

        Ok(())
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A variable used by the template is missing from the context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                template: template_name.to_string(),
                message: format!("rendering failed: {e}"),
            })
    }

    /// Registers a custom template, replacing any template with the same name.
    ///
    /// # Errors
    ///
    /// Returns error if the template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use boilerplate_codegen::template_engine::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine
    ///     .register_template_string("ruby", "def {{name}}({{params}})\nend")
    ///     .unwrap();
    /// assert!(engine.has_template("ruby"));
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                template: name.to_string(),
                message: format!("failed to register template: {e}"),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}

/// Returns the built-in template source for a language.
const fn builtin_source(language: Language) -> &'static str {
    match language {
        Language::Python => include_str!("../templates/python.py.hbs"),
        Language::JavaScript => include_str!("../templates/javascript.js.hbs"),
    }
}

/// Converts CRLF line endings to LF, so stubs are identical however the
/// template files were checked out.
fn unix_line_endings(source: &str) -> String {
    source.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unix_line_endings() {
        assert_eq!(
            unix_line_endings("def {{name}}():\r\n    return\r\n"),
            "def {{name}}():\n    return\n"
        );
        assert_eq!(unix_line_endings("a\nb"), "a\nb");
    }

    #[test]
    fn test_builtin_stubs_have_no_carriage_returns() {
        let engine = TemplateEngine::new().unwrap();
        for language in Language::ALL {
            let rendered = engine
                .render(language.as_str(), &json!({"name": "f", "params": "x"}))
                .unwrap();
            assert!(!rendered.contains('\r'), "{language} stub contains CR");
        }
    }

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new();
        assert!(engine.is_ok());
    }

    #[test]
    fn test_builtin_templates_registered() {
        let engine = TemplateEngine::new().unwrap();
        for language in Language::ALL {
            assert!(engine.has_template(language.as_str()));
        }
        assert!(!engine.has_template("ruby"));
    }

    #[test]
    fn test_render_python_template() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine
            .render("python", &json!({"name": "add", "params": "a, b"}))
            .unwrap();
        assert!(rendered.starts_with("def add(a, b):\n"));
        assert!(rendered.contains("# Your code here"));
    }

    #[test]
    fn test_render_does_not_html_escape() {
        let engine = TemplateEngine::new().unwrap();
        let rendered = engine
            .render("javascript", &json!({"name": "f", "params": "a = \"<b>\""}))
            .unwrap();
        assert!(rendered.contains("function f(a = \"<b>\") {"));
    }

    #[test]
    fn test_render_missing_variable_fails() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("python", &json!({"name": "add"})).unwrap_err();
        assert!(err.is_template_error());
    }

    #[test]
    fn test_render_unknown_template_fails() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine
            .render("ruby", &json!({"name": "add", "params": ""}))
            .unwrap_err();
        assert!(err.to_string().contains("ruby"));
    }

    #[test]
    fn test_register_invalid_template_fails() {
        let mut engine = TemplateEngine::new().unwrap();
        let result = engine.register_template_string("broken", "{{#if name}}unclosed");
        assert!(result.is_err());
    }
}
