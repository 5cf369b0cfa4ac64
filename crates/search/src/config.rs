use serde::{Deserialize, Serialize};

/// Default Google Custom Search JSON API endpoint.
pub const GOOGLE_CSE_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Largest `num` the Custom Search API accepts per request.
pub const GOOGLE_MAX_RESULTS: usize = 10;

/// Connection settings for the web search provider.
///
/// The provider tolerates missing credentials: without both `api_key` and
/// `engine_id` every search returns an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// API key (`GOOGLE_CSE_API_KEY`).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Programmable search engine id (`GOOGLE_CSE_CX`).
    #[serde(default)]
    pub engine_id: Option<String>,
    /// Endpoint override, mostly for tests and proxies.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SearchConfig {
    /// True when both credentials are present and non-blank.
    pub fn is_configured(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.api_key) && present(&self.engine_id)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            engine_id: None,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    GOOGLE_CSE_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}
