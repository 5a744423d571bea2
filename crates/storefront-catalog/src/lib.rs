//! Product catalog, search and suggestions for the storefront browser.
//!
//! This crate provides:
//!
//! - **Repository**: `ProductRepository` and its HTTP implementation
//! - **State**: list and detail load states with stale-response fencing
//! - **Search**: substring filtering and type-ahead suggestions
//! - **Browse**: the listing page as an event-driven session
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::prelude::*;
//!
//! let repo = HttpProductRepository::new(client);
//! let mut session = BrowseSession::new(SuggestionEngine::default());
//! session.load(&repo).await;
//!
//! session.handle(BrowseEvent::QueryChanged("jack".into()));
//! for product in session.results().iter() {
//!     println!("{} {}", product.title, product.display_price());
//! }
//! let hints = session.suggestions();
//! ```

pub mod error;
pub mod ids;
pub mod messages;
pub mod money;
pub mod product;

pub mod browse;
pub mod repository;
pub mod search;
pub mod state;

pub use error::{CatalogError, FailureKind};
pub use ids::ProductId;
pub use product::{Product, Rating};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, FailureKind};
    pub use crate::ids::ProductId;
    pub use crate::product::{Product, Rating};

    pub use crate::browse::{BrowseEvent, BrowseSession, Navigation};
    pub use crate::repository::{HttpProductRepository, ProductRepository, DEFAULT_BASE_URL};
    pub use crate::search::{
        filter_products, SearchResults, SuggestionConfig, SuggestionEngine, Suggestions,
    };
    pub use crate::state::{
        LoadState, ProductListState, ProductListView, ProductView, SingleProductState,
    };
}
