#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use plagscan::{Candidate, Embedder, SearchProvider, SemanticError};

pub const ESSAY: &str = "The industrial revolution transformed the economies of Europe and North America \
    by replacing manual labour with machines powered by steam and later by electricity, \
    which in turn reshaped cities, families and the nature of work itself for generations.";

/// Search fake keyed by exact query string. Records every call.
#[derive(Default)]
pub struct ScriptedSearch {
    responses: HashMap<String, Vec<Candidate>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSearch {
    pub fn respond(mut self, query: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        self.responses.insert(query.into(), candidates);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchProvider for ScriptedSearch {
    async fn search(&self, query: &str, limit: usize) -> Vec<Candidate> {
        self.calls.lock().unwrap().push(query.to_string());
        let mut out = self.responses.get(query).cloned().unwrap_or_default();
        out.truncate(limit);
        out
    }
}

/// Returns a snippet containing the phrase for every quoted query.
#[derive(Default)]
pub struct EchoSearch {
    calls: AtomicUsize,
}

impl EchoSearch {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchProvider for EchoSearch {
    async fn search(&self, query: &str, _limit: usize) -> Vec<Candidate> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match query.strip_prefix('"').and_then(|q| q.strip_suffix('"')) {
            Some(phrase) => vec![Candidate::new(
                "Copied page",
                format!("... {phrase} ..."),
                "https://example.com/copied",
            )],
            None => Vec::new(),
        }
    }
}

/// Embedder that looks vectors up by exact text; unknown text is an error.
#[derive(Default)]
pub struct TableEmbedder {
    vectors: HashMap<String, Vec<f32>>,
}

impl TableEmbedder {
    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }
}

#[async_trait]
impl Embedder for TableEmbedder {
    fn model_name(&self) -> &str {
        "table"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
        self.vectors
            .get(text)
            .cloned()
            .ok_or_else(|| SemanticError::Inference(format!("no vector for {text:?}")))
    }
}

/// Embedder whose every call fails, like an API returning 500.
pub struct FailingEmbedder;

#[async_trait]
impl Embedder for FailingEmbedder {
    fn model_name(&self) -> &str {
        "failing"
    }

    async fn embed(&self, _text: &str) -> Result<Vec<f32>, SemanticError> {
        Err(SemanticError::Http("HTTP error 500".into()))
    }
}
