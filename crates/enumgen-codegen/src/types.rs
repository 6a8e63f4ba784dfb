//! Types for Go enum generation.
//!
//! Template contexts are plain serializable records built from the enum
//! model. All naming and quoting is done while building them, so the
//! templates never compute anything.
//!
//! # Examples
//!
//! ```
//! use enumgen_codegen::types::EnumContext;
//! use enumgen_core::{EnumDeclaration, ValueRecord};
//!
//! let decl = EnumDeclaration::new(
//!     "Status",
//!     vec![ValueRecord::new("200-OK"), ValueRecord::new("404-not-found")],
//!     false,
//! );
//! let context = EnumContext::from_declaration(&decl).unwrap();
//!
//! assert_eq!(context.default_const, "Status_200Ok");
//! assert_eq!(context.values[1].const_name, "Status_404NotFound");
//! ```

use crate::go;
use enumgen_core::{EnumDeclaration, Error, Result};
use serde::Serialize;

/// Context for the file header template.
#[derive(Debug, Clone, Serialize)]
pub struct HeaderContext {
    /// Go package name
    pub package: String,
    /// Import paths in output order
    pub imports: Vec<String>,
}

impl HeaderContext {
    /// Creates the header context for a package.
    #[must_use]
    pub fn new(package: &str, emit_yaml: bool) -> Self {
        Self {
            package: package.to_string(),
            imports: go::imports(emit_yaml)
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Context for rendering one enum unit.
#[derive(Debug, Clone, Serialize)]
pub struct EnumContext {
    /// Declared type name
    pub name: String,
    /// Lower-cased prefix of the backing tables
    pub table_prefix: String,
    /// Constant holding the first declared member
    pub default_const: String,
    /// Comma-separated constant names, for the values slice literal
    pub values_list: String,
    /// Whether to emit the YAML marshal/unmarshal pair
    pub yaml: bool,
    /// Members in declaration order
    pub values: Vec<ValueContext>,
}

/// One member as seen by the enum template.
#[derive(Debug, Clone, Serialize)]
pub struct ValueContext {
    /// Label as written in the declaration
    pub original: String,
    /// Label as a Go string literal
    pub literal: String,
    /// Sanitized identifier fragment
    pub identifier: String,
    /// Go constant name for the member
    pub const_name: String,
    /// 0-based position, the member's integer mapping
    pub index: usize,
}

impl EnumContext {
    /// Builds the template context for a declaration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDeclaration`] if the declaration has no values,
    /// since the generated parser needs a first member to fall back to.
    pub fn from_declaration(decl: &EnumDeclaration) -> Result<Self> {
        let name = decl.name();
        let default = decl.default_value().ok_or_else(|| Error::EmptyDeclaration {
            name: name.to_string(),
            line: decl.line(),
        })?;

        let values: Vec<ValueContext> = decl
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| ValueContext {
                original: value.original().to_string(),
                literal: go::quote_string(value.original()),
                identifier: value.identifier().to_string(),
                const_name: go::constant_name(name, value.identifier()),
                index,
            })
            .collect();

        let values_list = values
            .iter()
            .map(|value| value.const_name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Self {
            name: name.to_string(),
            table_prefix: go::table_prefix(name),
            default_const: go::constant_name(name, default.identifier()),
            values_list,
            yaml: decl.emit_yaml(),
            values,
        })
    }
}

/// Result of a generator run: one Go source file.
///
/// # Examples
///
/// ```
/// use enumgen_codegen::GeneratedSource;
///
/// let generated = GeneratedSource {
///     package: "models".to_string(),
///     enum_names: vec!["Color".to_string()],
///     content: "package models\n".to_string(),
/// };
///
/// assert_eq!(generated.enum_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Package clause of the output
    pub package: String,
    /// Generated enum names in declaration order
    pub enum_names: Vec<String>,
    /// Full file content
    pub content: String,
}

impl GeneratedSource {
    /// Returns the number of generated enum units.
    #[inline]
    #[must_use]
    pub fn enum_count(&self) -> usize {
        self.enum_names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumgen_core::ValueRecord;

    #[test]
    fn test_header_context_imports() {
        let header = HeaderContext::new("auth", true);
        assert_eq!(header.package, "auth");
        assert_eq!(header.imports.len(), 6);
        assert_eq!(header.imports[0], "database/sql/driver");
    }

    #[test]
    fn test_enum_context_from_declaration() {
        let decl = EnumDeclaration::new(
            "AuthType",
            vec![
                ValueRecord::new("unknown"),
                ValueRecord::new("digest-md5"),
                ValueRecord::new("say \"hi\""),
            ],
            true,
        );
        let context = EnumContext::from_declaration(&decl).unwrap();

        assert_eq!(context.name, "AuthType");
        assert_eq!(context.table_prefix, "authtype");
        assert_eq!(context.default_const, "AuthTypeUnknown");
        assert!(context.yaml);
        assert_eq!(
            context.values_list,
            "AuthTypeUnknown, AuthTypeDigestMd5, AuthTypeSayHi"
        );
        assert_eq!(context.values[1].index, 1);
        assert_eq!(context.values[1].literal, "\"digest-md5\"");
        assert_eq!(context.values[2].literal, r#""say \"hi\"""#);
    }

    #[test]
    fn test_enum_context_rejects_empty_declaration() {
        let decl = EnumDeclaration::new("Foo", vec![], false).at_line(3);
        let err = EnumContext::from_declaration(&decl).unwrap_err();
        assert!(matches!(err, Error::EmptyDeclaration { line: 3, .. }));
    }

    #[test]
    fn test_context_serializes_for_templates() {
        let decl = EnumDeclaration::new("Color", vec![ValueRecord::new("red")], false);
        let context = EnumContext::from_declaration(&decl).unwrap();
        let json = serde_json::to_value(&context).unwrap();

        assert_eq!(json["name"], "Color");
        assert_eq!(json["values"][0]["const_name"], "ColorRed");
        assert_eq!(json["values"][0]["index"], 0);
    }
}
