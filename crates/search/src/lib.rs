//! Plagscan web search collaborator.
//!
//! The detection pipeline sends each probe to a [`SearchProvider`] and
//! inspects the returned [`Candidate`]s for overlap. Providers are injected
//! into the matcher as trait objects, so tests substitute scripted fakes and
//! production wires in [`GoogleSearch`].
//!
//! ## Contract
//!
//! - Results come back in the provider's relevance order; nobody re-ranks.
//! - `search` never fails. An unconfigured provider returns an empty list,
//!   and provider-side errors are logged and turned into an empty list.
//!
//! ## Example
//!
//! ```no_run
//! use search::{GoogleSearch, SearchConfig, SearchProvider};
//!
//! #[tokio::main]
//! async fn main() {
//!     let cfg = SearchConfig {
//!         api_key: Some("YOUR_KEY".into()),
//!         engine_id: Some("YOUR_CX".into()),
//!         ..Default::default()
//!     };
//!     let client = GoogleSearch::new(cfg).expect("client");
//!     for hit in client.search("\"to be or not to be\"", 5).await {
//!         println!("{} {}", hit.title, hit.link);
//!     }
//! }
//! ```

mod config;
mod error;
mod google;
mod types;

use async_trait::async_trait;

pub use crate::config::{SearchConfig, GOOGLE_CSE_ENDPOINT, GOOGLE_MAX_RESULTS};
pub use crate::error::SearchError;
pub use crate::google::GoogleSearch;
pub use crate::types::Candidate;

/// Source of candidate snippets for a query.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Return up to `limit` candidates for `query`, best first.
    async fn search(&self, query: &str, limit: usize) -> Vec<Candidate>;
}

/// Provider that never finds anything. Useful when search is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSearch;

#[async_trait]
impl SearchProvider for NoSearch {
    async fn search(&self, _query: &str, _limit: usize) -> Vec<Candidate> {
        Vec::new()
    }
}
