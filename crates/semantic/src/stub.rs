use async_trait::async_trait;
use fxhash::hash64;

use crate::normalize::l2_normalize_in_place;
use crate::{Embedder, SemanticConfig, SemanticError};

/// Deterministic offline embedder selected by `mode = "fast"`.
///
/// Generates sinusoid values derived from a hash of the input text, so equal
/// texts always map to equal vectors. The vectors carry no meaning beyond
/// identity; use it for demos and wiring tests, not for real scoring.
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    model_name: String,
    dimension: usize,
    normalize: bool,
}

impl StubEmbedder {
    pub fn new(cfg: &SemanticConfig) -> Self {
        Self {
            model_name: format!("stub:{}", cfg.model_name),
            dimension: cfg.stub_dimension.max(1),
            normalize: cfg.normalize,
        }
    }

    pub(crate) fn make_vector(&self, text: &str) -> Vec<f32> {
        let mut v = vec![0f32; self.dimension];
        let h = hash64(text.as_bytes());
        for (idx, value) in v.iter_mut().enumerate() {
            *value = ((h >> (idx % 32)) as f32 * 0.0001).sin();
        }
        if self.normalize {
            l2_normalize_in_place(&mut v);
        }
        v
    }
}

#[async_trait]
impl Embedder for StubEmbedder {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
        Ok(self.make_vector(text))
    }
}
