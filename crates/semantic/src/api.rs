use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::normalize::l2_normalize_in_place;
use crate::{Embedder, SemanticConfig, SemanticError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApiProviderKind {
    HuggingFace,
    OpenAI,
    Custom,
}

/// Embedder backed by a remote HTTP embedding API.
///
/// One request per [`embed`](Embedder::embed) call, no retries. The HTTP
/// client is owned by the embedder rather than shared process-wide.
#[derive(Debug, Clone)]
pub struct ApiEmbedder {
    client: reqwest::Client,
    url: String,
    auth_header: Option<String>,
    provider: ApiProviderKind,
    model_name: String,
    normalize: bool,
}

impl ApiEmbedder {
    pub fn new(cfg: &SemanticConfig) -> Result<Self, SemanticError> {
        let url = cfg
            .api_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| SemanticError::InvalidConfig("api_url is required for api mode".into()))?
            .to_string();

        let timeout = Duration::from_secs(cfg.api_timeout_secs.unwrap_or(30).max(1));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SemanticError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url,
            auth_header: cfg.api_auth_header.clone(),
            provider: api_provider_kind(cfg),
            model_name: cfg.model_name.clone(),
            normalize: cfg.normalize,
        })
    }

    async fn send_api_request(&self, payload: Value) -> Result<Value, SemanticError> {
        let mut request = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json");
        if let Some(header) = self.auth_header.as_deref() {
            request = request.header("Authorization", header);
        }

        let response = request
            .json(&payload)
            .send()
            .await
            .map_err(|e| SemanticError::Http(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SemanticError::Http(format!("HTTP error {status}: {body}")));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SemanticError::Inference(format!("Invalid JSON response: {e}")))
    }
}

#[async_trait]
impl Embedder for ApiEmbedder {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
        let payload = build_api_payload(self.provider, text, &self.model_name);
        let response = self.send_api_request(payload).await?;
        let mut vector = first_embedding(response)?;
        if self.normalize {
            l2_normalize_in_place(&mut vector);
        }
        debug!(model = %self.model_name, dim = vector.len(), "embedding received");
        Ok(vector)
    }
}

fn api_provider_kind(cfg: &SemanticConfig) -> ApiProviderKind {
    let provider = cfg
        .api_provider
        .as_deref()
        .unwrap_or("custom")
        .to_ascii_lowercase();
    match provider.as_str() {
        "hf" | "huggingface" => ApiProviderKind::HuggingFace,
        "openai" | "gpt" => ApiProviderKind::OpenAI,
        _ => ApiProviderKind::Custom,
    }
}

fn build_api_payload(provider: ApiProviderKind, text: &str, model_name: &str) -> Value {
    match provider {
        ApiProviderKind::HuggingFace => json!({ "inputs": text }),
        ApiProviderKind::OpenAI => json!({ "input": text, "model": model_name }),
        ApiProviderKind::Custom => json!({ "text": text }),
    }
}

/// Response bodies accepted from embedding endpoints, tried in order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EmbeddingResponse {
    /// OpenAI: `{"data": [{"embedding": [...]}, ...]}`
    Data { data: Vec<EmbeddingItem> },
    /// `{"embeddings": [[...], ...]}`
    Batch { embeddings: Vec<Vec<f32>> },
    /// `{"embedding": [...]}`
    Single { embedding: Vec<f32> },
    /// Hugging Face feature extraction: `[[...], ...]`
    Nested(Vec<Vec<f32>>),
    /// `[...]`
    Flat(Vec<f32>),
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    embedding: Vec<f32>,
}

impl EmbeddingResponse {
    fn into_first(self) -> Option<Vec<f32>> {
        match self {
            EmbeddingResponse::Data { data } => data.into_iter().next().map(|item| item.embedding),
            EmbeddingResponse::Batch { embeddings } | EmbeddingResponse::Nested(embeddings) => {
                embeddings.into_iter().next()
            }
            EmbeddingResponse::Single { embedding } | EmbeddingResponse::Flat(embedding) => {
                Some(embedding)
            }
        }
    }
}

fn first_embedding(response: Value) -> Result<Vec<f32>, SemanticError> {
    let parsed: EmbeddingResponse = serde_json::from_value(response).map_err(|_| {
        SemanticError::Inference("embedding endpoint returned an unrecognised body".into())
    })?;
    match parsed.into_first() {
        Some(vector) if !vector.is_empty() => Ok(vector),
        _ => Err(SemanticError::Inference(
            "embedding endpoint returned no vector".into(),
        )),
    }
}
