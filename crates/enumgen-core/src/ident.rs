//! Label to identifier conversion.
//!
//! Value labels in a declaration are free text (`digest-md5`, `200-OK`,
//! `not found`). Generated constants need a legal identifier, so each label
//! is reduced to an identifier fragment while the label itself is kept for
//! the runtime string form.

/// Characters that separate words inside a label.
const WORD_SEPARATORS: [char; 3] = ['-', '_', ' '];

/// Converts a value label into a legal identifier fragment.
///
/// The label is split on hyphens, underscores and spaces. Every fragment
/// loses its non-alphanumeric ASCII characters; all fragments after the
/// first are title-cased (first character upper, rest lower). The result is
/// prefixed with `_` when it is empty or starts with a digit.
///
/// Casing inside non-leading words is discarded, so `a-MD5` and `a-md5`
/// produce the same fragment.
///
/// # Examples
///
/// ```
/// use enumgen_core::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("digest-md5"), "digestMd5");
/// assert_eq!(sanitize_identifier("404-not-found"), "_404NotFound");
/// assert_eq!(sanitize_identifier("!!!"), "_");
/// ```
#[must_use]
pub fn sanitize_identifier(label: &str) -> String {
    let mut safe = String::with_capacity(label.len() + 1);

    for (position, word) in label.split(WORD_SEPARATORS).enumerate() {
        let word: String = word.chars().filter(char::is_ascii_alphanumeric).collect();
        if position == 0 {
            safe.push_str(&word);
        } else {
            push_title_case(&mut safe, &word);
        }
    }

    if safe.is_empty() || safe.starts_with(|c: char| c.is_ascii_digit()) {
        safe.insert(0, '_');
    }

    safe
}

/// Upper-cases the first character of an identifier fragment.
///
/// Used to turn a fragment into the exported suffix of a constant name
/// (`AuthType` + `Unknown`). Leading underscores and digits are unchanged.
///
/// # Examples
///
/// ```
/// use enumgen_core::exported_suffix;
///
/// assert_eq!(exported_suffix("digestMd5"), "DigestMd5");
/// assert_eq!(exported_suffix("_200Ok"), "_200Ok");
/// ```
#[must_use]
pub fn exported_suffix(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}

fn push_title_case(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_word_is_unchanged() {
        assert_eq!(sanitize_identifier("unknown"), "unknown");
        assert_eq!(sanitize_identifier("Plain"), "Plain");
    }

    #[test]
    fn test_non_leading_words_are_title_cased() {
        assert_eq!(sanitize_identifier("cram-md5"), "cramMd5");
        assert_eq!(sanitize_identifier("x-MD5"), "xMd5");
        assert_eq!(sanitize_identifier("not found"), "notFound");
        assert_eq!(sanitize_identifier("snake_case_label"), "snakeCaseLabel");
    }

    #[test]
    fn test_leading_word_keeps_its_case() {
        assert_eq!(sanitize_identifier("HTTP-ok"), "HTTPOk");
    }

    #[test]
    fn test_digit_prefix_gets_underscore() {
        assert_eq!(sanitize_identifier("200-OK"), "_200Ok");
        assert_eq!(sanitize_identifier("404-not-found"), "_404NotFound");
        assert_eq!(sanitize_identifier("500-error"), "_500Error");
    }

    #[test]
    fn test_punctuation_is_stripped() {
        assert_eq!(sanitize_identifier("a.b/c"), "abc");
        assert_eq!(sanitize_identifier("it's-done!"), "itsDone");
    }

    #[test]
    fn test_all_punctuation_becomes_underscore() {
        assert_eq!(sanitize_identifier("!!!"), "_");
        assert_eq!(sanitize_identifier(""), "_");
        assert_eq!(sanitize_identifier("---"), "_");
    }

    #[test]
    fn test_leading_separator_drops_empty_first_word() {
        // The empty first fragment keeps its case rules; the next is titled.
        assert_eq!(sanitize_identifier("-beta"), "Beta");
        assert_eq!(sanitize_identifier(" 7up"), "_7up");
    }

    #[test]
    fn test_non_ascii_letters_are_stripped() {
        assert_eq!(sanitize_identifier("café-crème"), "cafCrme");
        assert_eq!(sanitize_identifier("日本"), "_");
    }

    #[test]
    fn test_result_is_never_empty_nor_digit_led() {
        let labels = [
            "", " ", "0", "1-2-3", "a", "ß", "--x--", "9lives", "__init__", "x y z",
        ];
        for label in labels {
            let id = sanitize_identifier(label);
            assert!(!id.is_empty(), "empty identifier for {label:?}");
            assert!(
                !id.starts_with(|c: char| c.is_ascii_digit()),
                "digit-led identifier {id:?} for {label:?}"
            );
            assert!(
                id.chars().all(|c| c == '_' || c.is_ascii_alphanumeric()),
                "illegal character in {id:?}"
            );
        }
    }

    #[test]
    fn test_equal_labels_give_equal_identifiers() {
        assert_eq!(sanitize_identifier("digest-md5"), sanitize_identifier("digest-md5"));
    }

    #[test]
    fn test_exported_suffix() {
        assert_eq!(exported_suffix("unknown"), "Unknown");
        assert_eq!(exported_suffix("cramMd5"), "CramMd5");
        assert_eq!(exported_suffix("_404NotFound"), "_404NotFound");
        assert_eq!(exported_suffix(""), "");
    }
}
