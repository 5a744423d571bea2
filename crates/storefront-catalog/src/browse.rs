//! The listing page as an event-driven session.
//!
//! The presentation layer feeds raw input and picks into [`BrowseSession::handle`]
//! and reads back the derived results and suggestions.

use crate::ids::ProductId;
use crate::repository::ProductRepository;
use crate::search::{filter_products, SearchResults, SuggestionEngine, Suggestions};
use crate::state::ProductListState;

/// Input from the listing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEvent {
    /// The search box now holds this text.
    QueryChanged(String),
    /// The search box gained focus.
    InputFocused,
    /// Focus left the search area.
    Dismissed,
    /// A category or related term was picked from the suggestions.
    SuggestionPicked(String),
    /// A suggested product was picked.
    ProductPicked(ProductId),
    /// The retry action on the error screen.
    RetryRequested,
}

/// Where the view should go after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Open the detail page of this product.
    ProductDetail(ProductId),
    /// Refetch the catalog.
    Reload,
}

/// Catalog, query and suggestion visibility of one listing page.
#[derive(Debug, Default)]
pub struct BrowseSession {
    list: ProductListState,
    query: String,
    suggestions_visible: bool,
    engine: SuggestionEngine,
}

impl BrowseSession {
    pub fn new(engine: SuggestionEngine) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    /// First load of the catalog.
    pub async fn load(&mut self, repo: &dyn ProductRepository) {
        self.list.load(repo).await;
    }

    /// Apply one event. Events that need I/O are returned as [`Navigation`]
    /// for the caller to carry out.
    pub fn handle(&mut self, event: BrowseEvent) -> Option<Navigation> {
        match event {
            BrowseEvent::QueryChanged(text) => {
                self.query = text;
                self.suggestions_visible = self.query_fills_panel();
                None
            }
            BrowseEvent::InputFocused => {
                // focus only reopens the panel, it never closes it
                if self.query_fills_panel() {
                    self.suggestions_visible = true;
                }
                None
            }
            BrowseEvent::Dismissed => {
                self.suggestions_visible = false;
                None
            }
            BrowseEvent::SuggestionPicked(term) => {
                self.query = term;
                self.suggestions_visible = false;
                None
            }
            BrowseEvent::ProductPicked(id) => Some(Navigation::ProductDetail(id)),
            BrowseEvent::RetryRequested => Some(Navigation::Reload),
        }
    }

    fn query_fills_panel(&self) -> bool {
        self.query.chars().count() >= self.engine.config().min_query_len
    }

    /// Carry out [`Navigation::Reload`].
    pub async fn reload(&mut self, repo: &dyn ProductRepository) {
        self.list.refetch(repo).await;
    }

    pub fn list(&self) -> &ProductListState {
        &self.list
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions_visible(&self) -> bool {
        self.suggestions_visible
    }

    /// The filtered catalog for the current query.
    pub fn results(&self) -> SearchResults<'_> {
        filter_products(self.list.products(), &self.query)
    }

    /// Suggestions for the current query.
    pub fn suggestions(&self) -> Suggestions {
        self.engine.suggest(self.list.products(), &self.query)
    }

    /// Result count line, shown only while a query is set and the
    /// suggestions are closed.
    pub fn results_caption(&self) -> Option<String> {
        if self.query.is_empty() || self.suggestions_visible {
            None
        } else {
            Some(self.results().count_label())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;
    use crate::repository::tests::{repo, CATALOG};
    use storefront_data::{MockTransport, StatusCode};

    async fn loaded_session() -> BrowseSession {
        let (repo, _) = repo(MockTransport::new().with_json("/products", StatusCode::OK, CATALOG));
        let mut session = BrowseSession::default();
        session.load(&repo).await;
        session
    }

    #[tokio::test]
    async fn test_query_drives_results_and_visibility() {
        let mut session = loaded_session().await;
        assert_eq!(session.results().results_count(), 2);
        assert_eq!(session.results_caption(), None);

        session.handle(BrowseEvent::QueryChanged("e".into()));
        assert!(!session.suggestions_visible());
        assert!(session.suggestions().is_empty());

        session.handle(BrowseEvent::QueryChanged("electro".into()));
        assert!(session.suggestions_visible());
        assert_eq!(session.results().results_count(), 1);
        assert_eq!(session.suggestions().categories, vec!["electronics"]);
        assert_eq!(session.results_caption(), None);
    }

    #[tokio::test]
    async fn test_picking_a_suggestion_sets_query_and_closes() {
        let mut session = loaded_session().await;
        session.handle(BrowseEvent::QueryChanged("cloth".into()));

        let nav = session.handle(BrowseEvent::SuggestionPicked("clothing".into()));
        assert_eq!(nav, None);
        assert_eq!(session.query(), "clothing");
        assert!(!session.suggestions_visible());
        assert_eq!(session.results_caption(), Some(messages::results_count_label(1)));
    }

    #[tokio::test]
    async fn test_focus_reopens_and_dismiss_closes() {
        let mut session = loaded_session().await;
        session.handle(BrowseEvent::QueryChanged("cloth".into()));
        session.handle(BrowseEvent::SuggestionPicked("clothing".into()));
        assert!(!session.suggestions_visible());

        assert_eq!(session.handle(BrowseEvent::InputFocused), None);
        assert!(session.suggestions_visible());
        assert_eq!(session.suggestions().categories, vec!["clothing"]);

        session.handle(BrowseEvent::Dismissed);
        assert!(!session.suggestions_visible());
        assert_eq!(session.query(), "clothing");
        assert_eq!(session.results_caption(), Some(messages::results_count_label(1)));
    }

    #[tokio::test]
    async fn test_focus_with_short_query_keeps_panel_closed() {
        let mut session = loaded_session().await;
        session.handle(BrowseEvent::QueryChanged("c".into()));

        session.handle(BrowseEvent::InputFocused);
        assert!(!session.suggestions_visible());
    }

    #[tokio::test]
    async fn test_product_pick_and_retry_navigate() {
        let mut session = loaded_session().await;
        assert_eq!(
            session.handle(BrowseEvent::ProductPicked(ProductId::new(2))),
            Some(Navigation::ProductDetail(ProductId::new(2)))
        );
        assert_eq!(session.handle(BrowseEvent::RetryRequested), Some(Navigation::Reload));
    }

    #[tokio::test]
    async fn test_reload_after_failure() {
        let (repo, mock) = repo(
            MockTransport::new().with_status("/products", StatusCode::INTERNAL_SERVER_ERROR),
        );
        let mut session = BrowseSession::default();
        session.load(&repo).await;
        assert_eq!(session.list().error(), Some(messages::PRODUCTS_LOAD_ERROR));
        assert!(!session.results().has_results());

        mock.set_json("/products", StatusCode::OK, CATALOG);
        if let Some(Navigation::Reload) = session.handle(BrowseEvent::RetryRequested) {
            session.reload(&repo).await;
        }
        assert_eq!(session.results().results_count(), 2);
    }
}
