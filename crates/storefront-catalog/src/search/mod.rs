//! Search module.
//!
//! Client-side filtering and type-ahead suggestions over an already fetched
//! catalog. Both are pure functions of `(products, query)`.

mod filter;
mod suggest;

pub use filter::{filter_products, SearchResults};
pub use suggest::{SuggestionConfig, SuggestionEngine, Suggestions, POPULAR_SEARCH_TERMS};
