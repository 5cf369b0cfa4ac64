//! Verbatim phrase matching against search results.

use search::Candidate;

/// Query sent to the search provider for a probe: the probe as a quoted phrase.
pub fn phrase_query(probe: &str) -> String {
    format!("\"{probe}\"")
}

/// First candidate whose snippet or title contains `probe`, ignoring case.
///
/// Provider order is kept; there is no re-ranking. `None` is the normal
/// "not found verbatim" outcome.
pub fn match_exact<'a>(probe: &str, candidates: &'a [Candidate]) -> Option<&'a Candidate> {
    let needle = probe.to_lowercase();
    candidates.iter().find(|c| {
        c.snippet.to_lowercase().contains(&needle) || c.title.to_lowercase().contains(&needle)
    })
}
