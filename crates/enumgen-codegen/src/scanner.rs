//! `// ENUM` declaration scanner.
//!
//! Reads source text line by line and turns every declaration comment into
//! an [`EnumDeclaration`]. Lines that do not match are ignored, so ordinary
//! comments coexist with declarations.
//!
//! # Declaration Format
//!
//! ```text
//! // ENUM AuthType (unknown, plain, login, digest-md5, cram-md5)
//! ```
//!
//! Leading whitespace is allowed, as is whitespace between `//` and `ENUM`.
//! The value list ends at the first `)`; anything after it is ignored.
//! Declarations spanning several lines are not recognized.
//!
//! # Examples
//!
//! ```
//! use enumgen_codegen::DeclarationScanner;
//!
//! let scanner = DeclarationScanner::new(false);
//! let decl = scanner
//!     .scan_line("\t// ENUM Color (red, green , , blue)", 1)
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(decl.name(), "Color");
//! assert_eq!(decl.len(), 3);
//! ```

use enumgen_core::{EnumDeclaration, Error, Result, ValueRecord};
use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;
use tracing::{debug, warn};

// Pre-compiled declaration pattern (compiled once, reused).
// Whitespace and word classes are ASCII-only so type names stay valid Go.
static DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\t\n\f\r ]*//[\t\n\f\r ]*ENUM[\t\n\f\r ]+([0-9A-Za-z_]+)[\t\n\f\r ]*\((.*?)\)")
        .expect("valid regex")
});

/// Scanner for `// ENUM` declaration comments.
///
/// Holds the per-run options that are copied into every declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationScanner {
    emit_yaml: bool,
}

impl DeclarationScanner {
    /// Creates a scanner.
    ///
    /// `emit_yaml` is recorded on every declaration it produces.
    #[must_use]
    pub const fn new(emit_yaml: bool) -> Self {
        Self { emit_yaml }
    }

    /// Tests one line against the declaration pattern.
    ///
    /// Returns `Ok(None)` for lines that are not declarations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDeclaration`] when the line matches but the
    /// value list is empty after trimming, e.g. `// ENUM Foo ( , )`.
    pub fn scan_line(&self, line: &str, line_number: usize) -> Result<Option<EnumDeclaration>> {
        let Some(captures) = DECLARATION_REGEX.captures(line) else {
            return Ok(None);
        };

        let name = &captures[1];
        let values: Vec<ValueRecord> = split_values(&captures[2])
            .map(ValueRecord::new)
            .collect();

        if values.is_empty() {
            return Err(Error::EmptyDeclaration {
                name: name.to_string(),
                line: line_number,
            });
        }

        let decl = EnumDeclaration::new(name, values, self.emit_yaml).at_line(line_number);

        let duplicates = decl.duplicate_identifiers();
        if !duplicates.is_empty() {
            warn!(
                "enum {} (line {}) has labels that sanitize to the same identifier: {}",
                decl.name(),
                line_number,
                duplicates.join(", ")
            );
        }

        debug!(
            "Found enum {} with {} values on line {}",
            decl.name(),
            decl.len(),
            line_number
        );

        Ok(Some(decl))
    }

    /// Scans a whole input for declarations, in source order.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Reading a line fails ([`Error::Io`])
    /// - A declaration has no values ([`Error::EmptyDeclaration`])
    /// - The input contains no declaration at all ([`Error::NoDeclarations`])
    ///
    /// # Examples
    ///
    /// ```
    /// use enumgen_codegen::DeclarationScanner;
    ///
    /// let source = "package x\n// just a comment\n";
    /// let err = DeclarationScanner::new(false)
    ///     .scan(source.as_bytes(), "x.go")
    ///     .unwrap_err();
    /// assert!(err.is_no_declarations());
    /// ```
    pub fn scan<R: BufRead>(&self, reader: R, input_name: &str) -> Result<Vec<EnumDeclaration>> {
        let mut declarations = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::Io {
                context: format!("reading {input_name}"),
                source,
            })?;

            if let Some(decl) = self.scan_line(&line, index + 1)? {
                declarations.push(decl);
            }
        }

        if declarations.is_empty() {
            return Err(Error::NoDeclarations {
                input: input_name.to_string(),
            });
        }

        Ok(declarations)
    }
}

/// Splits a captured value list on commas, dropping empty entries.
fn split_values(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|value| !value.is_empty())
}
