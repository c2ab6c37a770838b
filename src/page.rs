//! The search page: query input, submission pipeline and filter panel.
//!
//! `SearchPage` is plain state. It never spawns work itself; submissions
//! hand back a [`SearchRequest`] that the application runs, and the result
//! comes back through [`SearchPage::finish`].

use iced::task;

use crate::catalog::{Cuisine, SearchResult};
use crate::error::SearchError;
use crate::filter::{FilterPanel, FilterState};
use crate::route::Route;
use crate::search::SearchRequest;
use crate::store::SearchStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching { request_id: u64 },
}

pub struct SearchPage {
    query: String,
    phase: SearchPhase,
    filters: FilterPanel,
    /// Last store revision copied into `query`
    seen_query_revision: u64,
    next_request_id: u64,
    /// Task running the current request; aborted when replaced or dropped
    in_flight: Option<task::Handle>,
    last_error: Option<String>,
}

impl SearchPage {
    /// Mount the page, taking the initial query from the store.
    pub fn new(store: &SearchStore) -> Self {
        Self {
            query: store.search_query().to_string(),
            phase: SearchPhase::Idle,
            filters: FilterPanel::default(),
            seen_query_revision: store.query_revision(),
            next_request_id: 1,
            in_flight: None,
            last_error: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.phase, SearchPhase::Searching { .. })
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn filters(&self) -> &FilterState {
        self.filters.state()
    }

    pub fn filters_open(&self) -> bool {
        self.filters.is_open()
    }

    // ---- Input ----

    pub fn set_query(&mut self, text: String) {
        self.query = text;
    }

    /// Mirror the store's query if it changed since the last sync.
    pub fn sync_query(&mut self, store: &SearchStore) {
        if store.query_revision() != self.seen_query_revision {
            self.seen_query_revision = store.query_revision();
            self.query = store.search_query().to_string();
        }
    }

    // ---- Submission ----

    /// Submit the typed query.
    ///
    /// Blank input leaves the page and the store untouched and returns
    /// [`SearchError::EmptyQuery`].
    pub fn submit(&mut self, store: &mut SearchStore) -> Result<SearchRequest, SearchError> {
        if self.query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        let query = self.query.clone();
        Ok(self.begin(query, store))
    }

    /// Run a suggestion as if it had been typed and submitted.
    pub fn select_suggestion(&mut self, term: &str, store: &mut SearchStore) -> SearchRequest {
        self.query = term.to_string();
        self.begin(term.to_string(), store)
    }

    fn begin(&mut self, query: String, store: &mut SearchStore) -> SearchRequest {
        store.update_search_query(query.clone());

        let id = self.next_request_id;
        self.next_request_id += 1;
        if let SearchPhase::Searching { request_id } = self.phase {
            tracing::info!("Search #{} superseded by #{}", request_id, id);
        }
        self.in_flight = None;
        self.phase = SearchPhase::Searching { request_id: id };
        self.last_error = None;

        tracing::info!("Search #{} started for '{}'", id, query);
        SearchRequest {
            id,
            query,
            filters: self.filters.state().clone(),
        }
    }

    /// Keep the task running `request_id` alive for as long as it is the
    /// current request and the page exists.
    pub fn track(&mut self, request_id: u64, handle: task::Handle) {
        if self.phase == (SearchPhase::Searching { request_id }) {
            self.in_flight = Some(handle.abort_on_drop());
        } else {
            handle.abort();
        }
    }

    /// Complete a request. Returns the route to navigate to, if any.
    ///
    /// Completions for anything other than the current request are dropped.
    pub fn finish(
        &mut self,
        request_id: u64,
        outcome: Result<Vec<SearchResult>, SearchError>,
        store: &mut SearchStore,
    ) -> Option<Route> {
        if self.phase != (SearchPhase::Searching { request_id }) {
            tracing::debug!("Dropping stale completion for search #{}", request_id);
            return None;
        }
        self.phase = SearchPhase::Idle;
        self.in_flight = None;

        match outcome {
            Ok(results) => {
                store.update_results(results);
                tracing::info!(
                    "Search #{} finished, navigating to {}",
                    request_id,
                    Route::Results.path()
                );
                Some(Route::Results)
            }
            Err(e) => {
                tracing::warn!("Search #{} failed: {}", request_id, e);
                self.last_error = Some(e.to_string());
                None
            }
        }
    }

    /// Abandon the current request, if any.
    pub fn cancel(&mut self) {
        if let SearchPhase::Searching { request_id } = self.phase {
            tracing::info!("Search #{} cancelled", request_id);
            if let Some(handle) = self.in_flight.take() {
                handle.abort();
            }
            self.phase = SearchPhase::Idle;
        }
    }

    // ---- Filters ----

    pub fn toggle_filters(&mut self) {
        self.filters.toggle();
    }

    pub fn close_filters(&mut self) {
        self.filters.close();
    }

    pub fn toggle_cuisine(&mut self, cuisine: Cuisine) {
        self.filters.state_mut().toggle_cuisine(cuisine);
    }

    pub fn set_price_ceiling(&mut self, value: u32) {
        self.filters.state_mut().set_price_ceiling(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use iced::Task;

    fn mock() -> Vec<SearchResult> {
        catalog::bundled_results().unwrap()
    }

    /// Handle of a task that never completes on its own
    fn running_task_handle() -> task::Handle {
        let (_task, handle) = Task::perform(std::future::pending::<()>(), |()| ()).abortable();
        handle
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut store = SearchStore::new();
        let mut page = SearchPage::new(&store);

        for text in ["", "   ", "\t\n"] {
            page.set_query(text.to_string());
            assert_eq!(page.submit(&mut store), Err(SearchError::EmptyQuery));
        }

        assert_eq!(page.phase(), SearchPhase::Idle);
        assert_eq!(store.query_revision(), 0);
        assert!(store.results().is_empty());
    }

    #[test]
    fn submit_searches_then_navigates_once() {
        let mut store = SearchStore::new();
        let mut page = SearchPage::new(&store);
        page.set_query("Pizza".to_string());

        let request = page.submit(&mut store).unwrap();
        assert!(page.is_searching());
        assert_eq!(request.query, "Pizza");
        assert_eq!(store.search_query(), "Pizza");

        let route = page.finish(request.id, Ok(mock()), &mut store);
        assert_eq!(route, Some(Route::Results));
        assert_eq!(page.phase(), SearchPhase::Idle);
        assert_eq!(store.results(), mock().as_slice());

        // a duplicate completion must not navigate again
        assert_eq!(page.finish(request.id, Ok(mock()), &mut store), None);
    }

    #[test]
    fn suggestion_matches_typed_submit() {
        let mut typed_store = SearchStore::new();
        let mut typed = SearchPage::new(&typed_store);
        typed.set_query("Biryani".to_string());
        let request = typed.submit(&mut typed_store).unwrap();
        let typed_route = typed.finish(request.id, Ok(mock()), &mut typed_store);

        let mut clicked_store = SearchStore::new();
        let mut clicked = SearchPage::new(&clicked_store);
        let request = clicked.select_suggestion("Biryani", &mut clicked_store);
        assert_eq!(clicked.query(), "Biryani");
        let clicked_route = clicked.finish(request.id, Ok(mock()), &mut clicked_store);

        assert_eq!(typed_route, clicked_route);
        assert_eq!(typed.query(), clicked.query());
        assert_eq!(typed.phase(), clicked.phase());
        assert_eq!(typed_store.search_query(), clicked_store.search_query());
        assert_eq!(typed_store.results(), clicked_store.results());
    }

    #[test]
    fn newer_request_supersedes_older() {
        let mut store = SearchStore::new();
        let mut page = SearchPage::new(&store);

        let first = page.select_suggestion("Pizza", &mut store);
        let second = page.select_suggestion("Dosa", &mut store);
        assert_ne!(first.id, second.id);

        assert_eq!(page.finish(first.id, Ok(Vec::new()), &mut store), None);
        assert!(page.is_searching());
        assert!(store.results().is_empty());

        assert_eq!(page.finish(second.id, Ok(mock()), &mut store), Some(Route::Results));
        assert_eq!(store.search_query(), "Dosa");
    }

    #[test]
    fn failed_search_returns_to_idle_with_message() {
        let mut store = SearchStore::new();
        let mut page = SearchPage::new(&store);
        let request = page.select_suggestion("Burger", &mut store);

        let route = page.finish(
            request.id,
            Err(SearchError::Unavailable("offline".to_string())),
            &mut store,
        );
        assert_eq!(route, None);
        assert_eq!(page.phase(), SearchPhase::Idle);
        assert_eq!(page.last_error(), Some("search service unavailable: offline"));

        page.select_suggestion("Burger", &mut store);
        assert_eq!(page.last_error(), None);
    }

    #[test]
    fn cancel_discards_the_pending_completion() {
        let mut store = SearchStore::new();
        let mut page = SearchPage::new(&store);
        let request = page.select_suggestion("Pizza", &mut store);

        page.cancel();
        assert_eq!(page.phase(), SearchPhase::Idle);
        assert_eq!(page.finish(request.id, Ok(mock()), &mut store), None);
        assert!(store.results().is_empty());
    }

    #[test]
    fn tracking_a_superseded_request_aborts_it() {
        let mut store = SearchStore::new();
        let mut page = SearchPage::new(&store);
        let first = page.select_suggestion("Pizza", &mut store);
        page.select_suggestion("Dosa", &mut store);

        let handle = running_task_handle();
        let watcher = handle.clone();
        page.track(first.id, handle);

        assert!(watcher.is_aborted());
    }

    #[test]
    fn dropping_the_page_aborts_the_running_search() {
        let mut store = SearchStore::new();
        let mut page = SearchPage::new(&store);
        let request = page.select_suggestion("Pizza", &mut store);

        let handle = running_task_handle();
        let watcher = handle.clone();
        page.track(request.id, handle);
        assert!(!watcher.is_aborted());

        drop(page);
        assert!(watcher.is_aborted());
    }

    #[test]
    fn a_new_request_aborts_the_previous_task() {
        let mut store = SearchStore::new();
        let mut page = SearchPage::new(&store);
        let first = page.select_suggestion("Pizza", &mut store);

        let handle = running_task_handle();
        let watcher = handle.clone();
        page.track(first.id, handle);

        page.select_suggestion("Dosa", &mut store);
        assert!(watcher.is_aborted());
    }

    #[test]
    fn cancel_aborts_the_running_task() {
        let mut store = SearchStore::new();
        let mut page = SearchPage::new(&store);
        let request = page.select_suggestion("Pizza", &mut store);

        let handle = running_task_handle();
        let watcher = handle.clone();
        page.track(request.id, handle);

        page.cancel();
        assert!(watcher.is_aborted());
    }

    #[test]
    fn query_follows_store_changes() {
        let mut store = SearchStore::new();
        store.update_search_query("Pizza");
        let mut page = SearchPage::new(&store);
        assert_eq!(page.query(), "Pizza");

        page.set_query("Piz".to_string());
        page.sync_query(&store);
        assert_eq!(page.query(), "Piz");

        store.update_search_query("Dosa");
        page.sync_query(&store);
        assert_eq!(page.query(), "Dosa");
    }

    #[test]
    fn filter_selections_travel_with_the_request() {
        let mut store = SearchStore::new();
        let mut page = SearchPage::new(&store);

        page.toggle_filters();
        assert!(page.filters_open());
        page.toggle_cuisine(Cuisine::Chinese);
        page.set_price_ceiling(500);
        page.close_filters();
        assert!(!page.filters_open());

        let request = page.select_suggestion("Chinese", &mut store);
        assert!(request.filters.is_selected(Cuisine::Chinese));
        assert_eq!(request.filters.price_range(), (0, 500));
    }

    #[test]
    fn toggling_a_cuisine_twice_is_a_no_op() {
        let store = SearchStore::new();
        let mut page = SearchPage::new(&store);
        let before = page.filters().clone();

        page.toggle_cuisine(Cuisine::Chinese);
        page.toggle_cuisine(Cuisine::Chinese);
        assert_eq!(page.filters(), &before);
    }
}
