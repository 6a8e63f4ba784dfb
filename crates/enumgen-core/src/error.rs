//! Error types for enumgen.
//!
//! A single error hierarchy is shared by every library crate in the
//! workspace. Generator-level failures abort the whole run: either every
//! recognized declaration is emitted or nothing is.
//!
//! # Examples
//!
//! ```
//! use enumgen_core::{Error, Result};
//!
//! fn require_package(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "package name cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_package("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use thiserror::Error;

/// Main error type for enumgen.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised when the namespace context cannot be derived from the input
    /// or the configuration is otherwise unusable.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// I/O failure while reading the input or writing the output.
    #[error("I/O error while {context}")]
    Io {
        /// What was being done when the failure happened
        context: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input contained no `// ENUM` declaration at all.
    #[error("no enum definitions found in {input}")]
    NoDeclarations {
        /// Name of the scanned input
        input: String,
    },

    /// A declaration matched but its value list is empty after trimming.
    #[error("enum {name} declared on line {line} has no values")]
    EmptyDeclaration {
        /// Declared type name
        name: String,
        /// 1-based line number of the declaration
        line: usize,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
        /// Underlying template engine error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumgen_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "missing package clause".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if the scan found no declarations.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumgen_core::Error;
    ///
    /// let err = Error::NoDeclarations {
    ///     input: "types.go".to_string(),
    /// };
    /// assert!(err.is_no_declarations());
    /// assert_eq!(err.to_string(), "no enum definitions found in types.go");
    /// ```
    #[must_use]
    pub const fn is_no_declarations(&self) -> bool {
        matches!(self, Self::NoDeclarations { .. })
    }

    /// Returns `true` if a declaration had an empty value list.
    #[must_use]
    pub const fn is_empty_declaration(&self) -> bool {
        matches!(self, Self::EmptyDeclaration { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }
}

/// Result type alias for enumgen operations.
///
/// # Examples
///
/// ```
/// use enumgen_core::{Error, Result};
///
/// fn first_value(name: &str, values: &[&str]) -> Result<String> {
///     values
///         .first()
///         .map(|v| (*v).to_string())
///         .ok_or_else(|| Error::EmptyDeclaration {
///             name: name.to_string(),
///             line: 1,
///         })
/// }
///
/// assert!(first_value("Color", &["red"]).is_ok());
/// assert!(first_value("Color", &[]).unwrap_err().is_empty_declaration());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_detection() {
        let err = Error::ConfigError {
            message: "Invalid configuration".to_string(),
        };
        assert!(err.is_config_error());
        assert!(!err.is_no_declarations());
    }

    #[test]
    fn test_no_declarations_display() {
        let err = Error::NoDeclarations {
            input: "status.go".to_string(),
        };
        assert!(err.is_no_declarations());
        assert_eq!(format!("{err}"), "no enum definitions found in status.go");
    }

    #[test]
    fn test_empty_declaration_display() {
        let err = Error::EmptyDeclaration {
            name: "Foo".to_string(),
            line: 12,
        };
        assert!(err.is_empty_declaration());
        let display = err.to_string();
        assert!(display.contains("Foo"));
        assert!(display.contains("12"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::Io {
            context: "reading input".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_io_error());
        assert_eq!(err.to_string(), "I/O error while reading input");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_template_error_detection() {
        let err = Error::TemplateError {
            message: "unclosed tag".to_string(),
            source: None,
        };
        assert!(err.is_template_error());
        assert!(!err.is_config_error());
    }
}
