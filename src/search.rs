use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::SearchResult;
use crate::error::SearchError;
use crate::filter::FilterState;

/// Future returned by a search service
pub type SearchFuture =
    Pin<Box<dyn Future<Output = Result<Vec<SearchResult>, SearchError>> + Send>>;

/// A search handed from the page to a service
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Identifies the request when its completion comes back
    pub id: u64,
    pub query: String,
    /// Filter selections at the time of submission. Carried for a real
    /// backend; the mock service does not read them.
    pub filters: FilterState,
}

/// Something that answers search requests (swap point for a real backend)
pub trait SearchService: Send + Sync {
    fn name(&self) -> &str;

    /// Run the search. The returned future owns everything it needs.
    fn search(&self, request: SearchRequest) -> SearchFuture;
}

/// Answers every query with the whole mock collection after a fixed delay.
pub struct MockSearchService {
    delay: Duration,
    results: Arc<Vec<SearchResult>>,
}

impl MockSearchService {
    /// Simulated network latency used when the config does not override it
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(results: Vec<SearchResult>, delay: Duration) -> Self {
        Self {
            delay,
            results: Arc::new(results),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl SearchService for MockSearchService {
    fn name(&self) -> &str {
        "mock"
    }

    fn search(&self, request: SearchRequest) -> SearchFuture {
        let delay = self.delay;
        let results = Arc::clone(&self.results);
        Box::pin(async move {
            tokio::time::sleep(delay).await;
            tracing::info!(
                "Mock search #{} for '{}' returned {} results",
                request.id,
                request.query,
                results.len()
            );
            Ok(results.as_ref().clone())
        })
    }
}
