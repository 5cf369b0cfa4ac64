//! # Plagscan Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` is the detection pipeline. It turns a document into strided
//! probe phrases, looks each one up through a [`SearchProvider`], and turns
//! the outcomes into a percentage with evidence. It also compares two
//! documents directly.
//!
//! Per probe:
//!
//! 1. Phrase search for the quoted probe (5 results). A candidate whose
//!    snippet or title contains the probe, ignoring case, is an exact match.
//! 2. Otherwise, when an [`Embedder`] is configured, search again with the
//!    first 5 words unquoted (3 results) and accept the first candidate whose
//!    cosine similarity with the probe is strictly above 0.80.
//!
//! The score is `matched / checked` as a percentage with 2 decimals. A
//! document shorter than one probe yields a zero result, not an error.
//!
//! ## Core Types
//!
//! - [`Checker`]: owns the search provider, optional embedder, [`MatchConfig`]
//!   and optional [`CheckMetrics`] observer.
//! - [`MatchConfig`]: threshold, result limits, comparison prefixes,
//!   probe concurrency.
//! - [`CheckResult`] / [`Match`]: score, counts, and evidence in probe order.
//! - [`CompareResult`]: lexical or embedding similarity plus input lengths.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use matcher::{Checker, MatchConfig};
//! use perceptual::ProbeConfig;
//! use search::{GoogleSearch, SearchConfig};
//! use semantic::{build_embedder, SemanticConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let search = GoogleSearch::new(SearchConfig {
//!     api_key: Some("key".into()),
//!     engine_id: Some("cx".into()),
//!     ..SearchConfig::default()
//! })?;
//! let embedder = build_embedder(&SemanticConfig::openai("sk-..."))?;
//!
//! let checker = Checker::new(Arc::new(search))
//!     .with_embedder(embedder)
//!     .with_config(MatchConfig::default());
//!
//! let result = checker
//!     .check_document("some pasted essay text ...", &ProbeConfig::text_check())
//!     .await?;
//! println!("{}% over {} probes", result.score, result.checked);
//! for m in &result.matches {
//!     println!("{} -> {} ({:?})", m.probe, m.candidate.link, m.paraphrase_score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Observability
//!
//! Each check and comparison logs a `tracing` summary at `info`, with probe
//! outcomes at `debug`. Attach a [`CheckMetrics`] implementation with
//! [`Checker::with_metrics`] to record latency and counts.

pub mod aggregate;
pub mod compare;
pub mod engine;
pub mod exact;
pub mod fallback;
pub mod metrics;
pub mod types;

pub use crate::aggregate::{aggregate, percentage, round_half_up};
pub use crate::compare::lexical_similarity;
pub use crate::engine::Checker;
pub use crate::exact::match_exact;
pub use crate::fallback::match_semantic;
pub use crate::metrics::CheckMetrics;
pub use crate::types::{CheckKind, CheckResult, CompareResult, Match, MatchConfig, MatchError};

pub use search::SearchProvider;
pub use semantic::Embedder;
