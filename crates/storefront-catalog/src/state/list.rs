//! Catalog list state.

use serde::Serialize;

use super::{Failure, LoadState, RequestSequence, Ticket};
use crate::error::CatalogError;
use crate::messages;
use crate::product::Product;
use crate::repository::ProductRepository;

/// What the list view renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListView {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Owner of the fetched catalog.
///
/// A failed load discards whatever was shown before; the view falls back to
/// the error screen with a retry action.
#[derive(Debug, Default)]
pub struct ProductListState {
    state: LoadState<Vec<Product>>,
    sequence: RequestSequence,
}

impl ProductListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial load.
    pub async fn load(&mut self, repo: &dyn ProductRepository) {
        let ticket = self.begin();
        let result = repo.fetch_all().await;
        self.complete(ticket, result);
    }

    /// Manual retry; replaces the whole catalog on completion.
    pub async fn refetch(&mut self, repo: &dyn ProductRepository) {
        self.load(repo).await;
    }

    /// Enter `Loading` and issue the ticket for a new fetch.
    pub fn begin(&mut self) -> Ticket {
        self.state = LoadState::Loading;
        self.sequence.issue()
    }

    /// Apply a fetch result. Returns `false` when a newer fetch has been
    /// issued since `ticket`, in which case nothing changes.
    pub fn complete(&mut self, ticket: Ticket, result: Result<Vec<Product>, CatalogError>) -> bool {
        if !self.sequence.is_current(ticket) {
            tracing::debug!(ticket = ticket.get(), "dropping stale catalog response");
            return false;
        }

        self.state = match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded");
                LoadState::Loaded(products)
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog load failed");
                LoadState::Failed(Failure::new(e.kind(), messages::PRODUCTS_LOAD_ERROR))
            }
        };
        true
    }

    pub fn state(&self) -> &LoadState<Vec<Product>> {
        &self.state
    }

    /// Loaded products, or an empty slice while loading or after a failure.
    pub fn products(&self) -> &[Product] {
        self.state.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error_message()
    }

    pub fn view(&self) -> ProductListView {
        ProductListView {
            products: self.products().to_vec(),
            loading: self.is_loading(),
            error: self.error().map(str::to_string),
        }
    }
}
