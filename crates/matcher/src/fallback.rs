//! Paraphrase fallback for probes that were not found verbatim.
//!
//! The probe is re-queried with its leading words only (unquoted, so the
//! search engine may return reworded pages), then the full probe is compared
//! with each candidate's snippet in embedding space.

use perceptual::Probe;
use search::SearchProvider;
use semantic::{embedding_similarity, Embedder};
use tracing::debug;

use crate::aggregate::round_half_up;
use crate::types::{Match, MatchConfig};

/// Search for a reworded copy of `probe`.
///
/// Returns the first candidate whose cosine similarity with the probe is
/// strictly greater than `cfg.paraphrase_threshold`. Candidates that cannot
/// be embedded, or have neither snippet nor title, are skipped.
pub async fn match_semantic(
    probe: &Probe,
    search: &dyn SearchProvider,
    embedder: &dyn Embedder,
    cfg: &MatchConfig,
) -> Option<Match> {
    let query = probe.leading_words(cfg.fallback_query_words);
    let candidates = search.search(&query, cfg.fallback_results).await;

    for candidate in candidates {
        let Some(text) = candidate.comparison_text() else {
            continue;
        };
        let Some(sim) = embedding_similarity(embedder, &probe.text, text).await else {
            continue;
        };
        if sim > cfg.paraphrase_threshold {
            debug!(probe = %probe.text, link = %candidate.link, sim, "paraphrase match");
            return Some(Match {
                probe: probe.text.clone(),
                paraphrase_score: Some(round_half_up(sim * 1000.0) / 1000.0),
                candidate,
            });
        }
    }
    None
}
