//! Go package clause reader.
//!
//! Generated code is placed in the same package as the file holding the
//! declarations. The package name is read from the first `package` clause;
//! only blank lines and comments may precede it.

use enumgen_core::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static PACKAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^package[\t\n\f\r ]+([0-9A-Za-z_]+)[\t\n\f\r ]*;?[\t\n\f\r ]*$")
        .expect("valid regex")
});

/// Returns the package name declared by Go source text.
///
/// # Errors
///
/// Returns [`Error::ConfigError`] if code appears before the package
/// clause, or there is no package clause at all.
///
/// # Examples
///
/// ```
/// use enumgen_codegen::package_name;
///
/// let source = "// Package auth does things.\n/* build notes */\npackage auth\n";
/// assert_eq!(package_name(source).unwrap(), "auth");
///
/// assert!(package_name("func main() {}").unwrap_err().is_config_error());
/// ```
pub fn package_name(source: &str) -> Result<String> {
    let mut in_block_comment = false;

    for (index, line) in source.lines().enumerate() {
        let code = strip_comments(line, &mut in_block_comment);
        let code = code.trim();
        if code.is_empty() {
            continue;
        }

        return PACKAGE_REGEX
            .captures(code)
            .map(|captures| captures[1].to_string())
            .ok_or_else(|| Error::ConfigError {
                message: format!(
                    "expected package clause, found `{code}` on line {}",
                    index + 1
                ),
            });
    }

    Err(Error::ConfigError {
        message: "missing package clause".to_string(),
    })
}

/// Removes `//` and `/* */` comments from one line.
///
/// `in_block` carries an unterminated block comment across lines.
fn strip_comments(line: &str, in_block: &mut bool) -> String {
    let mut code = String::with_capacity(line.len());
    let mut rest = line;

    loop {
        if *in_block {
            match rest.find("*/") {
                Some(end) => {
                    *in_block = false;
                    rest = &rest[end + 2..];
                }
                None => return code,
            }
        }

        let line_comment = rest.find("//");
        let block_comment = rest.find("/*");
        match (line_comment, block_comment) {
            (Some(line_start), Some(block_start)) if line_start < block_start => {
                code.push_str(&rest[..line_start]);
                return code;
            }
            (_, Some(block_start)) => {
                code.push_str(&rest[..block_start]);
                code.push(' ');
                *in_block = true;
                rest = &rest[block_start + 2..];
            }
            (Some(line_start), None) => {
                code.push_str(&rest[..line_start]);
                return code;
            }
            (None, None) => {
                code.push_str(rest);
                return code;
            }
        }
    }
}
