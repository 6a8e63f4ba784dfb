//! Go enum code generator.
//!
//! Runs the whole pipeline for one input: package clause, declaration scan,
//! header, then one rendered unit per declaration in source order.
//!
//! # Examples
//!
//! ```
//! use enumgen_codegen::EnumGenerator;
//! use enumgen_core::GeneratorConfig;
//!
//! let source = "package net\n// ENUM Status (200-OK, 404-not-found, 500-error)\n";
//! let generator = EnumGenerator::new().unwrap();
//! let generated = generator
//!     .generate(source, &GeneratorConfig::new("status.go"))
//!     .unwrap();
//!
//! assert_eq!(generated.enum_names, ["Status"]);
//! assert!(generated.content.contains("Status_404NotFound"));
//! ```

use crate::package::package_name;
use crate::scanner::DeclarationScanner;
use crate::template_engine::TemplateEngine;
use crate::types::{EnumContext, GeneratedSource, HeaderContext};
use enumgen_core::{EnumDeclaration, GeneratorConfig, Result};
use std::io::Write;

/// Generator for Go enum types.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct EnumGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl EnumGenerator<'_> {
    /// Creates a new generator.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { engine })
    }

    /// Generates the Go file for an input.
    ///
    /// Everything is rendered in memory, so on failure no partial output
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The package name cannot be derived and none is configured
    /// - The input has no declarations, or a declaration has no values
    /// - Template rendering fails
    pub fn generate(&self, source: &str, config: &GeneratorConfig) -> Result<GeneratedSource> {
        let package = match &config.package {
            Some(package) => package.clone(),
            None => package_name(source)?,
        };

        tracing::info!(
            "Generating enums for {} (package {})",
            config.input_name,
            package
        );

        let declarations = DeclarationScanner::new(config.emit_yaml)
            .scan(source.as_bytes(), &config.input_name)?;

        let generated = self.generate_declarations(&package, &declarations, config.emit_yaml)?;

        tracing::info!(
            "Successfully generated {} enums for {}",
            generated.enum_count(),
            config.input_name
        );

        Ok(generated)
    }

    /// Generates a Go file from already scanned declarations.
    ///
    /// # Errors
    ///
    /// Returns error if a declaration has no values or rendering fails.
    pub fn generate_declarations(
        &self,
        package: &str,
        declarations: &[EnumDeclaration],
        emit_yaml: bool,
    ) -> Result<GeneratedSource> {
        let mut content = self.render_header(package, emit_yaml)?;
        let mut enum_names = Vec::with_capacity(declarations.len());

        for decl in declarations {
            content.push_str(&self.render_enum(decl)?);
            enum_names.push(decl.name().to_string());
        }

        Ok(GeneratedSource {
            package: package.to_string(),
            enum_names,
            content,
        })
    }

    /// Renders the package clause and import block.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails.
    pub fn render_header(&self, package: &str, emit_yaml: bool) -> Result<String> {
        let context = HeaderContext::new(package, emit_yaml);
        self.engine.render(TemplateEngine::HEADER, &context)
    }

    /// Renders the unit for one declaration.
    ///
    /// # Errors
    ///
    /// Returns error if the declaration has no values or rendering fails.
    pub fn render_enum(&self, decl: &EnumDeclaration) -> Result<String> {
        let context = EnumContext::from_declaration(decl)?;
        let code = self.engine.render(TemplateEngine::ENUM, &context)?;

        tracing::debug!("Generated enum {} ({} values)", decl.name(), decl.len());

        Ok(code)
    }

    /// Appends the unit for one declaration to a writer.
    ///
    /// # Errors
    ///
    /// Returns error if the declaration has no values, rendering fails, or
    /// the writer rejects output.
    pub fn emit<W: Write>(&self, decl: &EnumDeclaration, out: &mut W) -> Result<()> {
        let context = EnumContext::from_declaration(decl)?;
        self.engine.render_to_write(TemplateEngine::ENUM, &context, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumgen_core::ValueRecord;

    fn color() -> EnumDeclaration {
        EnumDeclaration::new(
            "Color",
            vec![ValueRecord::new("red"), ValueRecord::new("dark-blue")],
            false,
        )
    }

    #[test]
    fn test_generator_creation() {
        assert!(EnumGenerator::new().is_ok());
    }

    #[test]
    fn test_render_header_without_yaml() {
        let generator = EnumGenerator::new().unwrap();
        let header = generator.render_header("paint", false).unwrap();

        assert!(header.starts_with("package paint\n"));
        assert!(header.contains("\"database/sql/driver\""));
        assert!(header.contains("\"reflect\""));
        assert!(!header.contains("yaml"));
    }

    #[test]
    fn test_render_header_with_yaml() {
        let generator = EnumGenerator::new().unwrap();
        let header = generator.render_header("paint", true).unwrap();
        assert!(header.contains("\"gopkg.in/yaml.v3\""));
    }

    #[test]
    fn test_render_enum_names_constants() {
        let generator = EnumGenerator::new().unwrap();
        let code = generator.render_enum(&color()).unwrap();

        assert!(code.contains("type Color struct {"));
        assert!(code.contains("ColorRed = Color{\"red\"}"));
        assert!(code.contains("ColorDarkBlue = Color{\"dark-blue\"}"));
        assert!(code.contains("colorValues = []Color{ColorRed, ColorDarkBlue}"));
        assert!(code.contains("0: ColorRed,"));
        assert!(code.contains("1: ColorDarkBlue,"));
    }

    #[test]
    fn test_emit_matches_render() {
        let generator = EnumGenerator::new().unwrap();
        let decl = color();

        let mut out = Vec::new();
        generator.emit(&decl, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            generator.render_enum(&decl).unwrap()
        );
    }

    #[test]
    fn test_emit_appends_to_existing_output() {
        let generator = EnumGenerator::new().unwrap();
        let mut out = b"// prefix\n".to_vec();
        generator.emit(&color(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("// prefix\n"));
        assert!(text.contains("type Color struct"));
    }

    #[test]
    fn test_render_empty_declaration_fails() {
        let generator = EnumGenerator::new().unwrap();
        let decl = EnumDeclaration::new("Nothing", vec![], false);
        assert!(generator.render_enum(&decl).unwrap_err().is_empty_declaration());
    }

    #[test]
    fn test_package_override_skips_clause() {
        let generator = EnumGenerator::new().unwrap();
        let config = GeneratorConfig::default().with_package(Some("custom".to_string()));
        let generated = generator
            .generate("// ENUM Color (red)\n", &config)
            .unwrap();

        assert_eq!(generated.package, "custom");
        assert!(generated.content.starts_with("package custom\n"));
    }
}
