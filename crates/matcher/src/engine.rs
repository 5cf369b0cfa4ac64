use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use canonical::tokenize;
use futures::stream::{self, StreamExt};
use perceptual::{probes_for, Probe, ProbeConfig};
use search::SearchProvider;
use semantic::Embedder;
use tracing::{debug, info};

use crate::aggregate::aggregate;
use crate::compare;
use crate::exact::{match_exact, phrase_query};
use crate::fallback::match_semantic;
use crate::metrics::CheckMetrics;
use crate::types::{CheckKind, CheckResult, CompareResult, Match, MatchConfig, MatchError};


/// Checks documents against a search provider and, optionally, an embedder.
///
/// A `Checker` owns its collaborators. It holds no mutable state, so one
/// instance can serve concurrent requests.
#[derive(Clone)]
pub struct Checker {
    search: Arc<dyn SearchProvider>,
    embedder: Option<Arc<dyn Embedder>>,
    config: MatchConfig,
    metrics: Option<Arc<dyn CheckMetrics>>,
}

impl Checker {
    /// Construct a checker with the default [`MatchConfig`] and no embedder.
    pub fn new(search: Arc<dyn SearchProvider>) -> Self {
        Self {
            search,
            embedder: None,
            config: MatchConfig::default(),
            metrics: None,
        }
    }

    /// Enable the paraphrase fallback and embedding-based comparison.
    pub fn with_embedder(mut self, embedder: Option<Arc<dyn Embedder>>) -> Self {
        self.embedder = embedder;
        self
    }

    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn CheckMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn has_embedder(&self) -> bool {
        self.embedder.is_some()
    }

    /// Check pasted text with `probes`.
    pub async fn check_document(
        &self,
        text: &str,
        probes: &ProbeConfig,
    ) -> Result<CheckResult, MatchError> {
        self.check(text, probes, CheckKind::Text).await
    }

    /// Check `text` and report it to the metrics observer as `kind`.
    ///
    /// Each distinct probe text is looked up once; a probe text that occurs
    /// at several offsets shares that outcome, and every occurrence counts
    /// toward `checked`, `matched` and the match list.
    pub async fn check(
        &self,
        text: &str,
        probes: &ProbeConfig,
        kind: CheckKind,
    ) -> Result<CheckResult, MatchError> {
        probes.validate()?;
        self.config.validate()?;

        let start = Instant::now();
        let words = tokenize(text);
        let generated = probes_for(&words, probes);

        let mut seen = HashSet::new();
        let unique: Vec<&Probe> = generated
            .iter()
            .filter(|p| seen.insert(p.text.as_str()))
            .collect();

        let outcomes: Vec<Option<Match>> = stream::iter(unique.iter().map(|p| self.evaluate(p)))
            .buffered(self.config.probe_concurrency)
            .collect()
            .await;

        let by_text: HashMap<&str, Option<Match>> = unique
            .iter()
            .map(|p| p.text.as_str())
            .zip(outcomes)
            .collect();
        let matches: Vec<Match> = generated
            .iter()
            .filter_map(|p| by_text.get(p.text.as_str()).cloned().flatten())
            .collect();

        let result = aggregate(generated.len(), matches);
        let latency = start.elapsed();

        info!(
            kind = kind.as_str(),
            words = words.len(),
            checked = result.checked,
            matched = result.matched,
            score = result.score,
            latency_ms = latency.as_millis() as u64,
            "check finished"
        );
        if let Some(metrics) = &self.metrics {
            metrics.record_check(kind, latency, result.checked, result.matched);
        }

        Ok(result)
    }

    /// Compare two documents directly.
    pub async fn compare_documents(&self, text_a: &str, text_b: &str) -> CompareResult {
        let start = Instant::now();
        let result =
            compare::compare_documents(text_a, text_b, self.embedder.as_deref(), &self.config)
                .await;
        let latency = start.elapsed();

        info!(
            similarity = result.similarity,
            embed_sim = ?result.embed_sim,
            len_a = result.len_a,
            len_b = result.len_b,
            latency_ms = latency.as_millis() as u64,
            "compare finished"
        );
        if let Some(metrics) = &self.metrics {
            metrics.record_compare(latency, result.embed_sim.is_some());
        }

        result
    }

    /// Exact phrase search first, paraphrase fallback on a miss.
    async fn evaluate(&self, probe: &Probe) -> Option<Match> {
        let candidates = self
            .search
            .search(&phrase_query(&probe.text), self.config.primary_results)
            .await;

        if let Some(candidate) = match_exact(&probe.text, &candidates) {
            debug!(probe = %probe.text, link = %candidate.link, "exact match");
            return Some(Match {
                probe: probe.text.clone(),
                candidate: candidate.clone(),
                paraphrase_score: None,
            });
        }

        let Some(embedder) = self.embedder.as_deref() else {
            debug!(probe = %probe.text, "no exact match, fallback disabled");
            return None;
        };
        let found = match_semantic(probe, self.search.as_ref(), embedder, &self.config).await;
        if found.is_none() {
            debug!(probe = %probe.text, "no match");
        }
        found
    }
}

impl std::fmt::Debug for Checker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checker")
            .field("config", &self.config)
            .field(
                "embedder",
                &self.embedder.as_ref().map(|e| e.model_name().to_string()),
            )
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}
