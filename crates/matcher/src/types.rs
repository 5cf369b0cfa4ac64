use perceptual::PerceptualError;
use search::Candidate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tuning knobs for the matcher.
///
/// The defaults reproduce the production checker: paraphrases must clear a
/// cosine of 0.80, phrase searches ask for 5 results and the shortened
/// fallback query for 3. `MatchConfig` is cheap to clone and serde-friendly
/// so it can be embedded in higher-level configs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    /// A fallback candidate matches only when its cosine is strictly greater.
    pub paraphrase_threshold: f64,
    /// Result limit for the quoted phrase search.
    pub primary_results: usize,
    /// Result limit for the shortened fallback search.
    pub fallback_results: usize,
    /// Number of leading probe words in the fallback query.
    pub fallback_query_words: usize,
    /// Characters of each document fed to the lexical comparison.
    pub lexical_prefix_chars: usize,
    /// Characters of each document sent to the embedder in comparisons.
    pub embedding_prefix_chars: usize,
    /// Number of probes evaluated concurrently. Output order is unaffected.
    pub probe_concurrency: usize,
}

impl MatchConfig {
    pub const DEFAULT_PARAPHRASE_THRESHOLD: f64 = 0.80;
    pub const DEFAULT_PRIMARY_RESULTS: usize = 5;
    pub const DEFAULT_FALLBACK_RESULTS: usize = 3;
    pub const DEFAULT_FALLBACK_QUERY_WORDS: usize = 5;
    pub const DEFAULT_LEXICAL_PREFIX_CHARS: usize = 100_000;
    pub const DEFAULT_EMBEDDING_PREFIX_CHARS: usize = 2_000;

    pub fn with_probe_concurrency(mut self, probe_concurrency: usize) -> Self {
        self.probe_concurrency = probe_concurrency;
        self
    }

    pub fn with_paraphrase_threshold(mut self, threshold: f64) -> Self {
        self.paraphrase_threshold = threshold;
        self
    }

    /// Validate the configuration before any probe is evaluated.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(0.0..=1.0).contains(&self.paraphrase_threshold) {
            return Err(MatchError::InvalidConfig(format!(
                "paraphrase_threshold must be within [0, 1], got {}",
                self.paraphrase_threshold
            )));
        }
        if self.primary_results == 0 {
            return Err(MatchError::InvalidConfig(
                "primary_results must be greater than zero".into(),
            ));
        }
        if self.fallback_results == 0 {
            return Err(MatchError::InvalidConfig(
                "fallback_results must be greater than zero".into(),
            ));
        }
        if self.fallback_query_words == 0 {
            return Err(MatchError::InvalidConfig(
                "fallback_query_words must be greater than zero".into(),
            ));
        }
        if self.lexical_prefix_chars == 0 || self.embedding_prefix_chars == 0 {
            return Err(MatchError::InvalidConfig(
                "comparison prefixes must be greater than zero".into(),
            ));
        }
        if self.probe_concurrency == 0 {
            return Err(MatchError::InvalidConfig(
                "probe_concurrency must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            paraphrase_threshold: Self::DEFAULT_PARAPHRASE_THRESHOLD,
            primary_results: Self::DEFAULT_PRIMARY_RESULTS,
            fallback_results: Self::DEFAULT_FALLBACK_RESULTS,
            fallback_query_words: Self::DEFAULT_FALLBACK_QUERY_WORDS,
            lexical_prefix_chars: Self::DEFAULT_LEXICAL_PREFIX_CHARS,
            embedding_prefix_chars: Self::DEFAULT_EMBEDDING_PREFIX_CHARS,
            probe_concurrency: 1,
        }
    }
}

/// Evidence that one probe was found on the web.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Probe text that matched.
    pub probe: String,
    /// Search result the probe was attributed to.
    pub candidate: Candidate,
    /// Cosine similarity (3 decimals) when the match came from the
    /// paraphrase fallback; `None` for verbatim matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paraphrase_score: Option<f64>,
}

impl Match {
    pub fn is_exact(&self) -> bool {
        self.paraphrase_score.is_none()
    }
}

/// Outcome of checking one document against the web.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckResult {
    /// Share of matched probes as a percentage with 2 decimals.
    pub score: f64,
    /// Evidence, in probe generation order.
    pub matches: Vec<Match>,
    /// Number of probes evaluated.
    pub checked: usize,
    /// Number of probes that matched.
    pub matched: usize,
}

/// Outcome of comparing two documents directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompareResult {
    /// Percentage with 2 decimals. Lexical unless the embedding signal
    /// was available, in which case it replaces the lexical value.
    pub similarity: f64,
    /// Raw cosine of the two embedded prefixes, when computed.
    pub embed_sim: Option<f64>,
    /// Character length of the first input before truncation.
    pub len_a: usize,
    /// Character length of the second input before truncation.
    pub len_b: usize,
}

/// Which entry point produced a check; reported to [`CheckMetrics`](crate::CheckMetrics).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Text,
    File,
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Text => "text",
            CheckKind::File => "file",
        }
    }
}

/// Errors produced by the matching layer.
///
/// External failures never show up here; they are absorbed per probe.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid matcher configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// Invalid probe options.
    #[error("invalid probe options: {0}")]
    InvalidProbes(#[from] PerceptualError),
}
