//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the Go enum templates
//! pre-registered.
//!
//! # Examples
//!
//! ```
//! use enumgen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let context = json!({"package": "auth", "imports": ["fmt"]});
//! let header = engine.render(TemplateEngine::HEADER, &context).unwrap();
//! assert!(header.starts_with("package auth"));
//! ```

use enumgen_core::{Error, Result};
use handlebars::Handlebars;
use serde::Serialize;
use std::io::Write;

/// Template engine for code generation.
///
/// Wraps Handlebars in strict mode with HTML escaping disabled, since the
/// output is Go source and not markup.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Name of the file header template (package clause and imports).
    pub const HEADER: &'static str = "go/header";

    /// Name of the per-declaration enum template.
    pub const ENUM: &'static str = "go/enum";

    /// Creates a new template engine with registered templates.
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

        Self::register_go_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    /// Registers the Go enum templates.
    fn register_go_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        handlebars
            .register_template_string(Self::HEADER, include_str!("../templates/header.go.hbs"))
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register header template: {e}"),
                source: Some(Box::new(e)),
            })?;

        handlebars
            .register_template_string(Self::ENUM, include_str!("../templates/enum.go.hbs"))
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register enum template: {e}"),
                source: Some(Box::new(e)),
            })?;

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
                message: format!("Template rendering failed: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Renders a template straight into a writer.
    ///
    /// # Errors
    ///
    /// Returns error if rendering fails or the writer rejects output.
    pub fn render_to_write<T: Serialize, W: Write>(
        &self,
        template_name: &str,
        context: &T,
        writer: W,
    ) -> Result<()> {
        self.handlebars
            .render_to_write(template_name, context, writer)
            .map_err(|e| Error::TemplateError {
                message: format!("Template rendering failed: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Registers a custom template.
    ///
    /// Registering under an existing name replaces that template.
    ///
    /// # Errors
    ///
    /// Returns error if template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumgen_codegen::template_engine::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine
    ///     .register_template_string("custom", "// {{name}} is generated")
    ///     .unwrap();
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register template '{name}': {e}"),
                source: Some(Box::new(e)),
            })
    }
}
