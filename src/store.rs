use crate::catalog::SearchResult;

/// Query and results shared between the search page and the results view.
///
/// Owned by the application state and handed to pages explicitly.
#[derive(Debug, Default)]
pub struct SearchStore {
    query: String,
    query_revision: u64,
    results: Vec<SearchResult>,
}

impl SearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Bumped on every `update_search_query`, so readers can tell a change
    /// happened even when the text is identical.
    pub fn query_revision(&self) -> u64 {
        self.query_revision
    }

    pub fn update_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.query_revision += 1;
        tracing::debug!("Search query -> '{}' (rev {})", self.query, self.query_revision);
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn update_results(&mut self, results: Vec<SearchResult>) {
        tracing::debug!("Storing {} results", results.len());
        self.results = results;
    }
}
