use serde::{Deserialize, Serialize};

use crate::SemanticError;

/// OpenAI embeddings endpoint used by [`SemanticConfig::openai`].
pub const OPENAI_EMBEDDINGS_URL: &str = "https://api.openai.com/v1/embeddings";

/// Model requested from OpenAI unless configured otherwise.
pub const DEFAULT_MODEL_NAME: &str = "text-embedding-3-small";

/// Runtime configuration selecting the embedding backend.
///
/// # Example
/// ```
/// use semantic::SemanticConfig;
///
/// let cfg = SemanticConfig::openai("sk-test");
/// assert_eq!(cfg.mode, "api");
/// assert!(cfg.validate().is_ok());
/// assert!(!SemanticConfig::default().is_enabled());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemanticConfig {
    /// Backend selector: `"disabled"` (no embeddings), `"api"` (remote HTTP),
    /// or `"fast"` (deterministic local stub).
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Model name sent to the API and reported by the embedder.
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// API inference endpoint when [`mode`](Self::mode) is `"api"`.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Authorization header value (e.g., `"Bearer sk-xxx"`).
    #[serde(default)]
    pub api_auth_header: Option<String>,
    /// Request/response shape: `"openai"`, `"hf"`, or `"custom"` (default).
    #[serde(default)]
    pub api_provider: Option<String>,
    /// Overall API timeout in seconds.
    #[serde(default = "default_timeout")]
    pub api_timeout_secs: Option<u64>,
    /// L2-normalize vectors before returning them. Off by default so the
    /// cosine runs in f64 on the provider's raw vectors.
    #[serde(default)]
    pub normalize: bool,
    /// Vector length produced by the `"fast"` stub.
    #[serde(default = "default_stub_dimension")]
    pub stub_dimension: usize,
}

impl SemanticConfig {
    /// API mode against OpenAI with a bearer token.
    pub fn openai(api_key: &str) -> Self {
        Self {
            mode: "api".into(),
            api_url: Some(OPENAI_EMBEDDINGS_URL.into()),
            api_auth_header: Some(format!("Bearer {}", api_key.trim())),
            api_provider: Some("openai".into()),
            ..Self::default()
        }
    }

    /// Deterministic local stub, no network.
    pub fn fast() -> Self {
        Self {
            mode: "fast".into(),
            ..Self::default()
        }
    }

    /// Whether an embedder will be built from this config.
    pub fn is_enabled(&self) -> bool {
        self.mode != "disabled"
    }

    pub fn validate(&self) -> Result<(), SemanticError> {
        match self.mode.as_str() {
            "disabled" | "fast" => {}
            "api" => {
                let url = self.api_url.as_deref().unwrap_or_default();
                if url.trim().is_empty() {
                    return Err(SemanticError::InvalidConfig(
                        "api_url is required for api mode".into(),
                    ));
                }
            }
            other => {
                return Err(SemanticError::InvalidConfig(format!(
                    "unknown mode `{other}`; expected disabled, api, or fast"
                )))
            }
        }
        if self.model_name.trim().is_empty() {
            return Err(SemanticError::InvalidConfig("model_name is empty".into()));
        }
        if self.mode == "fast" && self.stub_dimension == 0 {
            return Err(SemanticError::InvalidConfig(
                "stub_dimension must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            model_name: default_model_name(),
            api_url: None,
            api_auth_header: None,
            api_provider: None,
            api_timeout_secs: default_timeout(),
            normalize: false,
            stub_dimension: default_stub_dimension(),
        }
    }
}

fn default_mode() -> String {
    "disabled".into()
}

fn default_model_name() -> String {
    DEFAULT_MODEL_NAME.into()
}

fn default_timeout() -> Option<u64> {
    Some(30)
}

fn default_stub_dimension() -> usize {
    384
}
