//! Whitespace normalization.
//!
//! Whitespace is Unicode whitespace as reported by [`char::is_whitespace`],
//! so tabs, newlines, carriage returns and non-breaking spaces all count.
//!
//! ```rust
//! use canonical::normalize;
//!
//! assert_eq!(normalize("  hello \t\n world  "), "hello world");
//! ```

/// Collapses every whitespace run into a single ASCII space and trims both
/// ends.
///
/// Returns an empty string for empty or whitespace-only input.
///
/// # Examples
///
/// ```rust
/// use canonical::normalize;
///
/// assert_eq!(normalize("hello   world"), "hello world");
/// assert_eq!(normalize("hello\r\nworld"), "hello world");
/// assert_eq!(normalize("hello\u{00A0}world"), "hello world");
/// assert_eq!(normalize("   \n\t   "), "");
/// ```
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(normalize("a \t b\n\n c"), "a b c");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(normalize("\n  edge case \t"), "edge case");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \r\n "), "");
    }

    #[test]
    fn already_normalized_is_unchanged() {
        let text = "the quick brown fox";
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn preserves_case_and_punctuation() {
        assert_eq!(normalize(" Hello,   World! "), "Hello, World!");
    }
}
