use crate::whitespace::normalize;

/// Splits `text` into its word sequence.
///
/// The text is normalized first, then split on whitespace. Empty tokens are
/// never produced and the original word order is kept. Punctuation and case
/// are left untouched: probes are sent to the search provider verbatim.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Returns the longest prefix of `text` holding at most `max_chars`
/// characters.
///
/// Cuts on a `char` boundary, never inside a multi-byte sequence.
pub fn prefix_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
