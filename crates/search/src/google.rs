use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{SearchConfig, GOOGLE_MAX_RESULTS};
use crate::{Candidate, SearchError, SearchProvider};

/// Google Custom Search JSON API client.
///
/// Never fails from the caller's point of view: missing credentials and
/// provider errors both produce an empty candidate list, with the cause
/// logged.
#[derive(Debug, Clone)]
pub struct GoogleSearch {
    client: reqwest::Client,
    cfg: SearchConfig,
}

#[derive(Debug, Deserialize)]
struct CseResponse {
    #[serde(default)]
    items: Vec<Candidate>,
}

impl GoogleSearch {
    /// Build a client from `cfg`. Logs a warning when credentials are missing.
    pub fn new(cfg: SearchConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs.max(1)))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SearchError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        if !cfg.is_configured() {
            warn!("GOOGLE_CSE_API_KEY or GOOGLE_CSE_CX not set; web searches will return no results");
        }

        Ok(Self { client, cfg })
    }

    async fn try_search(&self, query: &str, limit: usize) -> Result<Vec<Candidate>, SearchError> {
        let key = self.cfg.api_key.as_deref().unwrap_or_default();
        let cx = self.cfg.engine_id.as_deref().unwrap_or_default();
        let num = limit.clamp(1, GOOGLE_MAX_RESULTS).to_string();

        let response = self
            .client
            .get(&self.cfg.endpoint)
            .query(&[("key", key), ("cx", cx), ("q", query), ("num", num.as_str())])
            .send()
            .await
            .map_err(|e| SearchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(e.to_string()))?;
        parse_items(&body, limit)
    }
}

#[async_trait]
impl SearchProvider for GoogleSearch {
    async fn search(&self, query: &str, limit: usize) -> Vec<Candidate> {
        if !self.cfg.is_configured() || limit == 0 {
            return Vec::new();
        }
        match self.try_search(query, limit).await {
            Ok(items) => {
                debug!(query, results = items.len(), "web search completed");
                items
            }
            Err(err) => {
                warn!(query, error = %err, "web search failed; treating as no results");
                Vec::new()
            }
        }
    }
}

/// Extract `items[].{title, snippet, link}` from a Custom Search response,
/// keeping provider order. A response without `items` means zero hits.
fn parse_items(body: &str, limit: usize) -> Result<Vec<Candidate>, SearchError> {
    let parsed: CseResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;
    let mut items = parsed.items;
    items.truncate(limit);
    Ok(items)
}
