//! Plagscan semantic layer
//!
//! This crate turns text fragments into embedding vectors and compares them.
//! The matcher uses it for the paraphrase fallback (probe vs. candidate
//! snippet) and for refining whole-document comparisons.
//!
//! We support a few modes:
//!
//! - **API mode** - Call out to an embedding endpoint (OpenAI, Hugging Face,
//!   or a custom service speaking `{"text": ...}`).
//! - **Fast mode** - Deterministic stub vectors. No network, for demos and
//!   wiring tests.
//! - **Disabled** - No embedder at all. The pipeline skips every stage that
//!   needs one; this is not an error.
//!
//! Embedders are plain values behind the [`Embedder`] trait, injected into
//! the matcher. There are no global clients.
//!
//! ## Quick example
//!
//! ```no_run
//! use semantic::{build_embedder, embedding_similarity, SemanticConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let cfg = SemanticConfig::openai("sk-...");
//!     let embedder = build_embedder(&cfg).unwrap().expect("api mode is enabled");
//!     let sim = embedding_similarity(embedder.as_ref(), "a cat sat", "a feline sat").await;
//!     println!("{sim:?}");
//! }
//! ```

pub mod config;
pub mod error;

mod api;
mod normalize;
mod similarity;
mod stub;

use std::sync::Arc;

use async_trait::async_trait;

pub use crate::api::ApiEmbedder;
pub use crate::config::{SemanticConfig, DEFAULT_MODEL_NAME, OPENAI_EMBEDDINGS_URL};
pub use crate::error::SemanticError;
pub use crate::similarity::{cosine_similarity, embedding_similarity};
pub use crate::stub::StubEmbedder;

/// Produces a fixed-dimension vector for a text fragment.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Model label, used in logs.
    fn model_name(&self) -> &str;

    /// Embed `text`. Each call is independent; nothing is cached.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError>;
}

/// Build the embedder described by `cfg`.
///
/// Returns `Ok(None)` when `cfg.mode` is `"disabled"`.
pub fn build_embedder(cfg: &SemanticConfig) -> Result<Option<Arc<dyn Embedder>>, SemanticError> {
    cfg.validate()?;
    match cfg.mode.as_str() {
        "api" => Ok(Some(Arc::new(ApiEmbedder::new(cfg)?))),
        "fast" => Ok(Some(Arc::new(StubEmbedder::new(cfg)))),
        _ => Ok(None),
    }
}
