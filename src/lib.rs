//! Workspace umbrella crate for plagscan.
//!
//! This crate wires the pipeline crates together behind one entry point:
//! [`Plagscan`] owns a configured [`Checker`] and a [`TextExtractor`], and
//! exposes the three things the checker is used for: checking pasted text,
//! checking an uploaded file, and comparing two documents.

pub mod config;

pub use canonical::{normalize, tokenize};
pub use ingest::{
    DefaultExtractor, DocumentFormat, DocumentInput, IngestError, TextExtractor, UploadedFile,
};
pub use matcher::{
    CheckKind, CheckMetrics, CheckResult, Checker, CompareResult, Match, MatchConfig, MatchError,
};
pub use perceptual::{PerceptualError, Probe, ProbeConfig, generate_probes};
pub use search::{Candidate, GoogleSearch, NoSearch, SearchConfig, SearchError, SearchProvider};
pub use semantic::{Embedder, SemanticConfig, SemanticError, build_embedder};

pub use crate::config::{ConfigLoadError, PlagscanConfig, ProbePresets};

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

/// Errors that can occur while running a check or comparison end to end.
#[derive(Debug)]
pub enum PipelineError {
    Ingest(IngestError),
    Match(MatchError),
    Semantic(SemanticError),
    Search(SearchError),
    /// A compare input resolved to empty text.
    MissingInput(&'static str),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Ingest(err) => write!(f, "text extraction failed: {err}"),
            PipelineError::Match(err) => write!(f, "check failed: {err}"),
            PipelineError::Semantic(err) => write!(f, "embedder setup failed: {err}"),
            PipelineError::Search(err) => write!(f, "search client setup failed: {err}"),
            PipelineError::MissingInput(which) => {
                write!(f, "{which} is missing or empty")
            }
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Ingest(err) => Some(err),
            PipelineError::Match(err) => Some(err),
            PipelineError::Semantic(err) => Some(err),
            PipelineError::Search(err) => Some(err),
            PipelineError::MissingInput(_) => None,
        }
    }
}

impl From<IngestError> for PipelineError {
    fn from(value: IngestError) -> Self {
        PipelineError::Ingest(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        PipelineError::Match(value)
    }
}

impl From<SemanticError> for PipelineError {
    fn from(value: SemanticError) -> Self {
        PipelineError::Semantic(value)
    }
}

impl From<SearchError> for PipelineError {
    fn from(value: SearchError) -> Self {
        PipelineError::Search(value)
    }
}

/// Configured checker plus text extraction.
#[derive(Clone)]
pub struct Plagscan {
    checker: Checker,
    extractor: Arc<dyn TextExtractor>,
    probes: ProbePresets,
}

impl Plagscan {
    /// Build the Google search client and embedder described by `cfg`.
    ///
    /// Missing search credentials are not an error: every probe then comes
    /// back unmatched. A disabled embedder turns off the paraphrase fallback
    /// and the embedding side of comparisons.
    pub fn from_config(cfg: &PlagscanConfig) -> Result<Self, PipelineError> {
        let search = GoogleSearch::new(cfg.search.clone())?;
        let embedder = build_embedder(&cfg.semantic)?;
        info!(
            search_configured = cfg.search.is_configured(),
            embedder = ?embedder.as_ref().map(|e| e.model_name()),
            "plagscan ready"
        );

        let checker = Checker::new(Arc::new(search))
            .with_embedder(embedder)
            .with_config(cfg.matcher);
        Ok(Self::new(checker, cfg.probes))
    }

    /// Wrap an existing checker. Uses [`DefaultExtractor`] for uploads.
    pub fn new(checker: Checker, probes: ProbePresets) -> Self {
        Self {
            checker,
            extractor: Arc::new(DefaultExtractor),
            probes,
        }
    }

    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn checker(&self) -> &Checker {
        &self.checker
    }

    /// Check pasted text with the text-check preset.
    ///
    /// Blank text is [`PipelineError::MissingInput`]. Text shorter than one
    /// probe is a zero result.
    pub async fn check_text(&self, text: &str) -> Result<CheckResult, PipelineError> {
        if text.trim().is_empty() {
            return Err(PipelineError::MissingInput("text"));
        }
        Ok(self
            .checker
            .check(text, &self.probes.text_check, CheckKind::Text)
            .await?)
    }

    /// Extract an upload's text and check it with the file-check preset.
    ///
    /// A zero-byte upload has no text and scores zero.
    pub async fn check_file(&self, file: &UploadedFile) -> Result<CheckResult, PipelineError> {
        let text = match self.extractor.extract(file) {
            Ok(text) => text,
            Err(IngestError::EmptyUpload(_)) => String::new(),
            Err(err) => return Err(err.into()),
        };
        debug!(name = %file.name, chars = text.chars().count(), "upload extracted");
        Ok(self
            .checker
            .check(&text, &self.probes.file_check, CheckKind::File)
            .await?)
    }

    /// Resolve both inputs to text and compare them.
    pub async fn compare(
        &self,
        a: &DocumentInput,
        b: &DocumentInput,
    ) -> Result<CompareResult, PipelineError> {
        let text_a = self.resolve(a, "first document")?;
        let text_b = self.resolve(b, "second document")?;
        Ok(self.checker.compare_documents(&text_a, &text_b).await)
    }

    fn resolve(&self, input: &DocumentInput, which: &'static str) -> Result<String, PipelineError> {
        let text = match input.resolve(self.extractor.as_ref()) {
            Ok(text) => text,
            Err(IngestError::EmptyUpload(_)) => return Err(PipelineError::MissingInput(which)),
            Err(err) => return Err(err.into()),
        };
        if text.trim().is_empty() {
            return Err(PipelineError::MissingInput(which));
        }
        Ok(text)
    }
}

impl fmt::Debug for Plagscan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plagscan")
            .field("checker", &self.checker)
            .field("probes", &self.probes)
            .finish()
    }
}
