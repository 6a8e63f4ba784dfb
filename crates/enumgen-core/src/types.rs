//! In-memory model of `// ENUM` declarations.
//!
//! A declaration is built once by the scanner, handed to the emitter, and
//! never mutated afterwards. Value order is load-bearing: the position of a
//! value is its integer mapping in generated code.
//!
//! # Examples
//!
//! ```
//! use enumgen_core::{EnumDeclaration, ValueRecord};
//!
//! let decl = EnumDeclaration::new(
//!     "AuthType",
//!     vec![ValueRecord::new("plain"), ValueRecord::new("digest-md5")],
//!     false,
//! );
//!
//! assert_eq!(decl.default_value().map(ValueRecord::original), Some("plain"));
//! assert_eq!(decl.lookup("DIGEST-MD5").map(ValueRecord::identifier), Some("digestMd5"));
//! ```

use crate::ident::sanitize_identifier;
use std::collections::HashMap;

/// One enumerated member.
///
/// Keeps the label exactly as written together with the identifier fragment
/// derived from it. The identifier is a pure function of the label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueRecord {
    original: String,
    identifier: String,
}

impl ValueRecord {
    /// Creates a value record, deriving its identifier from the label.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumgen_core::ValueRecord;
    ///
    /// let value = ValueRecord::new("200-OK");
    /// assert_eq!(value.original(), "200-OK");
    /// assert_eq!(value.identifier(), "_200Ok");
    /// ```
    #[must_use]
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        let identifier = sanitize_identifier(&original);
        Self {
            original,
            identifier,
        }
    }

    /// Returns the label as written in the declaration.
    #[inline]
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns the sanitized identifier fragment.
    #[inline]
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// One parsed `// ENUM Name (v1, v2, ...)` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclaration {
    name: String,
    values: Vec<ValueRecord>,
    emit_yaml: bool,
    line: usize,
}

impl EnumDeclaration {
    /// Creates a declaration with no source position.
    ///
    /// The name is taken verbatim; it is not sanitized.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<ValueRecord>, emit_yaml: bool) -> Self {
        Self {
            name: name.into(),
            values,
            emit_yaml,
            line: 0,
        }
    }

    /// Records the 1-based source line the declaration was found on.
    #[must_use]
    pub const fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Returns the declared type name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the members in declaration order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[ValueRecord] {
        &self.values
    }

    /// Returns `true` when YAML marshaling should be emitted.
    #[inline]
    #[must_use]
    pub const fn emit_yaml(&self) -> bool {
        self.emit_yaml
    }

    /// Returns the 1-based source line, or `0` when unknown.
    #[inline]
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the number of members.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the declaration has no members.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the member used when parsing fails or a null is scanned.
    ///
    /// This is always the first declared member.
    #[must_use]
    pub fn default_value(&self) -> Option<&ValueRecord> {
        self.values.first()
    }

    /// Finds the member whose label matches `text`, ignoring case.
    ///
    /// Surrounding whitespace in `text` is ignored. Characters are compared
    /// one by one under simple case folding, so `ſ` matches `s` and the
    /// Kelvin sign matches `k`, the same as Go's `strings.EqualFold`.
    /// Members are compared in declaration order and the first match wins,
    /// mirroring the generated `Parse` method.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumgen_core::{EnumDeclaration, ValueRecord};
    ///
    /// let decl = EnumDeclaration::new("Color", vec![ValueRecord::new("Red")], false);
    /// assert!(decl.lookup("  red ").is_some());
    /// assert!(decl.lookup("blue").is_none());
    /// ```
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<&ValueRecord> {
        let needle = text.trim();
        self.values
            .iter()
            .find(|value| equal_fold(&value.original, needle))
    }

    /// Returns the member at a 0-based position, mirroring `FromInt`.
    #[must_use]
    pub fn from_index(&self, index: i64) -> Option<&ValueRecord> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.values.get(index))
    }

    /// Returns identifiers produced by more than one member.
    ///
    /// Such members would emit colliding constants. The result is sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumgen_core::{EnumDeclaration, ValueRecord};
    ///
    /// let decl = EnumDeclaration::new(
    ///     "Hash",
    ///     vec![ValueRecord::new("sha-1"), ValueRecord::new("sha_1"), ValueRecord::new("md5")],
    ///     false,
    /// );
    /// assert_eq!(decl.duplicate_identifiers(), vec!["sha1"]);
    /// ```
    #[must_use]
    pub fn duplicate_identifiers(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for value in &self.values {
            *counts.entry(value.identifier()).or_default() += 1;
        }

        let mut duplicates: Vec<&str> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(identifier, _)| identifier)
            .collect();
        duplicates.sort_unstable();
        duplicates
    }
}

/// Compares two strings character by character, ignoring case.
fn equal_fold(a: &str, b: &str) -> bool {
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if chars_fold_equal(x, y) => {}
            _ => return false,
        }
    }
}

/// Two characters fold together when either case mapping makes them equal.
fn chars_fold_equal(a: char, b: char) -> bool {
    a == b
        || a.to_lowercase().eq(b.to_lowercase())
        || a.to_uppercase().eq(b.to_uppercase())
}
