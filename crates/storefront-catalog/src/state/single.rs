//! Product detail state.

use serde::Serialize;

use super::{Failure, LoadState, RequestSequence, Ticket};
use crate::error::{CatalogError, FailureKind};
use crate::ids::ProductId;
use crate::messages;
use crate::product::Product;
use crate::repository::ProductRepository;

/// What the detail view renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub product: Option<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub not_found: bool,
}

/// Owner of one product, keyed by a route-style id.
#[derive(Debug, Default)]
pub struct SingleProductState {
    state: LoadState<Product>,
    sequence: RequestSequence,
    requested: Option<ProductId>,
}

impl SingleProductState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the product named by `raw_id`. Call again whenever the id changes.
    ///
    /// A missing or malformed id resolves immediately without a request.
    pub async fn load(&mut self, repo: &dyn ProductRepository, raw_id: Option<&str>) {
        if let Some((ticket, id)) = self.begin(raw_id) {
            let result = repo.fetch_one(id).await;
            self.complete(ticket, result);
        }
    }

    /// Re-run the last valid id. Does nothing if there is none.
    pub async fn refetch(&mut self, repo: &dyn ProductRepository) {
        let Some(id) = self.requested else {
            return;
        };
        let ticket = self.begin_for(id);
        let result = repo.fetch_one(id).await;
        self.complete(ticket, result);
    }

    /// Validate `raw_id` and issue a ticket for it.
    ///
    /// Returns `None` when the id is unusable; the state is already `Failed`
    /// and any request still in flight for an earlier id is fenced off.
    pub fn begin(&mut self, raw_id: Option<&str>) -> Option<(Ticket, ProductId)> {
        let parsed = raw_id
            .ok_or_else(|| CatalogError::InvalidId(String::new()))
            .and_then(ProductId::parse);

        match parsed {
            Ok(id) => Some((self.begin_for(id), id)),
            Err(e) => {
                tracing::debug!(error = %e, "rejecting product id");
                self.sequence.issue();
                self.requested = None;
                self.state = LoadState::Failed(failure_for(&e));
                None
            }
        }
    }

    fn begin_for(&mut self, id: ProductId) -> Ticket {
        self.requested = Some(id);
        self.state = LoadState::Loading;
        self.sequence.issue()
    }

    /// Apply a fetch result. Returns `false` for a stale ticket.
    pub fn complete(&mut self, ticket: Ticket, result: Result<Product, CatalogError>) -> bool {
        if !self.sequence.is_current(ticket) {
            tracing::debug!(ticket = ticket.get(), "dropping stale product response");
            return false;
        }

        self.state = match result {
            Ok(product) => {
                tracing::info!(id = %product.id, "product loaded");
                LoadState::Loaded(product)
            }
            Err(e) => {
                tracing::warn!(error = %e, "product load failed");
                LoadState::Failed(failure_for(&e))
            }
        };
        true
    }

    pub fn state(&self) -> &LoadState<Product> {
        &self.state
    }

    /// The id of the last valid request.
    pub fn requested_id(&self) -> Option<ProductId> {
        self.requested
    }

    pub fn product(&self) -> Option<&Product> {
        self.state.data()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error_message()
    }

    pub fn is_not_found(&self) -> bool {
        self.state.failure().is_some_and(|f| f.kind.is_not_found())
    }

    pub fn view(&self) -> ProductView {
        ProductView {
            product: self.product().cloned(),
            loading: self.is_loading(),
            error: self.error().map(str::to_string),
            not_found: self.is_not_found(),
        }
    }
}

fn failure_for(error: &CatalogError) -> Failure {
    let kind = error.kind();
    let message = match kind {
        FailureKind::NotFound => messages::PRODUCT_NOT_FOUND,
        FailureKind::Validation => messages::INVALID_PRODUCT_ID,
        FailureKind::Transport => messages::PRODUCT_LOAD_ERROR,
    };
    Failure::new(kind, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::tests::{repo, PRODUCT_1};
    use storefront_data::{FetchError, MockTransport, StatusCode};

    #[tokio::test]
    async fn test_load_success() {
        let (repo, _) = repo(
            MockTransport::new().with_json("/products/1", StatusCode::OK, PRODUCT_1),
        );
        let mut state = SingleProductState::new();

        state.load(&repo, Some("1")).await;

        let view = state.view();
        assert_eq!(view.product.map(|p| p.title), Some("Test Product 1".to_string()));
        assert!(!view.loading);
        assert_eq!(view.error, None);
        assert!(!view.not_found);
    }

    #[tokio::test]
    async fn test_not_found_uses_not_found_message() {
        let (repo, _) = repo(MockTransport::new());
        let mut state = SingleProductState::new();

        state.load(&repo, Some("999")).await;

        assert_eq!(
            state.view(),
            ProductView {
                product: None,
                loading: false,
                error: Some(messages::PRODUCT_NOT_FOUND.to_string()),
                not_found: true,
            }
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_not_not_found() {
        let (repo, _) = repo(
            MockTransport::new()
                .with_failure("/products/4", FetchError::RequestError("reset".into())),
        );
        let mut state = SingleProductState::new();

        state.load(&repo, Some("4")).await;

        assert!(!state.is_not_found());
        assert_eq!(state.error(), Some(messages::PRODUCT_LOAD_ERROR));
    }

    #[tokio::test]
    async fn test_server_error_mentioning_404_is_still_transport() {
        let (repo, _) = repo(
            MockTransport::new()
                .with_json("/products/5", StatusCode::INTERNAL_SERVER_ERROR, "upstream 404"),
        );
        let mut state = SingleProductState::new();

        state.load(&repo, Some("5")).await;

        assert!(!state.is_not_found());
        assert_eq!(state.error(), Some(messages::PRODUCT_LOAD_ERROR));
    }

    #[tokio::test]
    async fn test_missing_or_invalid_id_skips_fetch() {
        let (repo, mock) = repo(MockTransport::new());
        let mut state = SingleProductState::new();

        for raw in [None, Some(""), Some("abc"), Some("0")] {
            state.load(&repo, raw).await;
            assert!(state.is_not_found());
            assert!(!state.is_loading());
            assert_eq!(state.error(), Some(messages::INVALID_PRODUCT_ID));
        }
        assert!(mock.requested_urls().is_empty());
    }

    #[tokio::test]
    async fn test_refetch_reuses_last_id() {
        let (repo, mock) = repo(
            MockTransport::new().with_status("/products/1", StatusCode::SERVICE_UNAVAILABLE),
        );
        let mut state = SingleProductState::new();
        state.load(&repo, Some("1")).await;
        assert_eq!(state.error(), Some(messages::PRODUCT_LOAD_ERROR));

        mock.set_json("/products/1", StatusCode::OK, PRODUCT_1);
        state.refetch(&repo).await;

        assert!(state.product().is_some());
        assert_eq!(state.error(), None);
        assert_eq!(mock.requested_urls().len(), 2);
    }

    #[tokio::test]
    async fn test_refetch_without_valid_id_is_noop() {
        let (repo, mock) = repo(MockTransport::new());
        let mut state = SingleProductState::new();

        state.refetch(&repo).await;
        assert_eq!(state.state(), &LoadState::Idle);

        state.load(&repo, Some("nope")).await;
        state.refetch(&repo).await;
        assert!(mock.requested_urls().is_empty());
    }

    #[test]
    fn test_switching_ids_fences_slow_response() {
        let mut state = SingleProductState::new();
        let (old_ticket, _) = state.begin(Some("1")).unwrap();
        let (new_ticket, new_id) = state.begin(Some("2")).unwrap();
        assert_eq!(new_id, ProductId::new(2));

        assert!(!state.complete(old_ticket, Err(CatalogError::NotFound(ProductId::new(1)))));
        assert!(state.is_loading());
        assert!(!state.is_not_found());

        assert!(state.complete(new_ticket, Err(CatalogError::NotFound(new_id))));
        assert!(state.is_not_found());
        assert_eq!(state.requested_id(), Some(new_id));
    }

    #[test]
    fn test_invalid_id_fences_in_flight_request() {
        let mut state = SingleProductState::new();
        let (ticket, _) = state.begin(Some("1")).unwrap();
        assert!(state.begin(Some("x")).is_none());

        assert!(!state.complete(ticket, Err(CatalogError::Fetch(FetchError::Timeout))));
        assert_eq!(state.error(), Some(messages::INVALID_PRODUCT_ID));
    }
}
