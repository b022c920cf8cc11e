//! Comparison form for tokens.
//!
//! Normalized text is only ever used to decide whether two tokens are the
//! same word. Display always uses the literal token text.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize a token for equality testing.
///
/// Lowercases, decomposes (NFKD), drops combining marks, replaces anything
/// other than `a-z`, `0-9`, whitespace or `'` with a space, then collapses
/// and trims whitespace. `"Jesús,"` and `"jesus"` normalize identically.
pub fn normalize_for_compare(text: &str) -> String {
    let replaced: String = text
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '\'' {
                c
            } else {
                ' '
            }
        })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True iff `text` contains no letters or digits.
pub fn is_punct(text: &str) -> bool {
    !text.chars().any(char::is_alphanumeric)
}
