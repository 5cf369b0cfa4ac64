//! Probe sampling configuration and error types.
//!
//! Pure data, no I/O. A [`ProbeConfig`] fully determines which probes a word
//! sequence yields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a document is sampled into probe queries.
///
/// `max_queries` is a hard budget: it bounds the number of probes, and
/// therefore the number of outbound search calls, regardless of document
/// length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Number of words per probe.
    pub ngram_size: usize,
    /// Distance in words between consecutive probe starts.
    pub step: usize,
    /// Maximum number of probes generated for one document.
    pub max_queries: usize,
}

impl ProbeConfig {
    /// Create a new configuration with the text-check defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset used for pasted text: 8-word probes every 3 words, 60 probes max.
    pub const fn text_check() -> Self {
        Self {
            ngram_size: 8,
            step: 3,
            max_queries: 60,
        }
    }

    /// Preset used for uploaded files, which tend to be longer: 80 probes max.
    pub const fn file_check() -> Self {
        Self {
            ngram_size: 8,
            step: 3,
            max_queries: 80,
        }
    }

    /// Set the probe length in words.
    pub fn with_ngram_size(mut self, ngram_size: usize) -> Self {
        self.ngram_size = ngram_size;
        self
    }

    /// Set the sampling stride in words.
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Set the probe budget.
    pub fn with_max_queries(mut self, max_queries: usize) -> Self {
        self.max_queries = max_queries;
        self
    }

    /// Number of probes a document of `word_count` words yields under this
    /// configuration: `min(max_queries, (word_count - ngram_size) / step + 1)`,
    /// or zero when the document is shorter than one probe.
    pub fn expected_probe_count(&self, word_count: usize) -> usize {
        if self.ngram_size == 0 || self.step == 0 || word_count < self.ngram_size {
            return 0;
        }
        ((word_count - self.ngram_size) / self.step + 1).min(self.max_queries)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), PerceptualError> {
        if self.ngram_size < 1 {
            return Err(PerceptualError::InvalidNgramSize {
                ngram_size: self.ngram_size,
            });
        }
        if self.step < 1 {
            return Err(PerceptualError::InvalidStep { step: self.step });
        }
        if self.max_queries < 1 {
            return Err(PerceptualError::InvalidMaxQueries {
                max_queries: self.max_queries,
            });
        }
        Ok(())
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::text_check()
    }
}

/// Errors returned by probe configuration validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptualError {
    #[error("invalid config: ngram_size must be >= 1 (got {ngram_size})")]
    InvalidNgramSize { ngram_size: usize },

    #[error("invalid config: step must be >= 1 (got {step})")]
    InvalidStep { step: usize },

    #[error("invalid config: max_queries must be >= 1 (got {max_queries})")]
    InvalidMaxQueries { max_queries: usize },
}
