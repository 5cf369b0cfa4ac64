//! Whole-document comparison.

use canonical::prefix_chars;
use perceptual::dice_coefficient;
use semantic::{embedding_similarity, Embedder};

use crate::aggregate::percentage;
use crate::types::{CompareResult, MatchConfig};

/// Bigram Dice similarity of the first `prefix` characters of each text, as
/// a percentage with 2 decimals.
pub fn lexical_similarity(a: &str, b: &str, prefix: usize) -> f64 {
    percentage(dice_coefficient(prefix_chars(a, prefix), prefix_chars(b, prefix)))
}

/// Compare two documents.
///
/// The lexical score is always computed. When an embedder is present and
/// the cosine of the two embedded prefixes is defined, it replaces the
/// lexical score.
pub async fn compare_documents(
    a: &str,
    b: &str,
    embedder: Option<&dyn Embedder>,
    cfg: &MatchConfig,
) -> CompareResult {
    let mut result = CompareResult {
        similarity: lexical_similarity(a, b, cfg.lexical_prefix_chars),
        embed_sim: None,
        len_a: a.chars().count(),
        len_b: b.chars().count(),
    };

    if let Some(embedder) = embedder {
        let prefix = cfg.embedding_prefix_chars;
        if let Some(cos) =
            embedding_similarity(embedder, prefix_chars(a, prefix), prefix_chars(b, prefix)).await
        {
            result.embed_sim = Some(cos);
            result.similarity = percentage(cos);
        }
    }

    result
}
