//! Go naming and literal utilities.
//!
//! Everything that decides how a name or literal is spelled in the output
//! lives here; templates only lay the pieces out.
//!
//! # Examples
//!
//! ```
//! use enumgen_codegen::go;
//!
//! assert_eq!(go::constant_name("AuthType", "digestMd5"), "AuthTypeDigestMd5");
//! assert_eq!(go::table_prefix("AuthType"), "authtype");
//! assert_eq!(go::quote_string("say \"hi\""), r#""say \"hi\"""#);
//! ```

use enumgen_core::exported_suffix;

/// Packages every generated file imports.
pub const BASE_IMPORTS: &[&str] = &[
    "database/sql/driver",
    "encoding/json",
    "fmt",
    "reflect",
    "strings",
];

/// Package imported when YAML marshaling is emitted.
pub const YAML_IMPORT: &str = "gopkg.in/yaml.v3";

/// Returns the import paths for a generated file, in output order.
///
/// # Examples
///
/// ```
/// use enumgen_codegen::go;
///
/// assert_eq!(go::imports(false).len(), 5);
/// assert_eq!(go::imports(true).last(), Some(&"gopkg.in/yaml.v3"));
/// ```
#[must_use]
pub fn imports(emit_yaml: bool) -> Vec<&'static str> {
    let mut imports = BASE_IMPORTS.to_vec();
    if emit_yaml {
        imports.push(YAML_IMPORT);
    }
    imports
}

/// Returns the name of the constant holding one member.
#[must_use]
pub fn constant_name(enum_name: &str, identifier: &str) -> String {
    format!("{enum_name}{}", exported_suffix(identifier))
}

/// Returns the lower-cased prefix of the package-level backing tables.
///
/// The tables are named `<prefix>Values` and `<prefix>IntMap`.
#[must_use]
pub fn table_prefix(enum_name: &str) -> String {
    enum_name.to_lowercase()
}

/// Quotes text as a Go interpreted string literal.
///
/// Backslashes, double quotes and control characters are escaped; other
/// characters, including non-ASCII ones, are kept as UTF-8.
#[must_use]
pub fn quote_string(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
