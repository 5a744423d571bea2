//! Substring search over the catalog.

use crate::messages;
use crate::product::Product;

/// Products matching a query, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults<'a> {
    pub products: Vec<&'a Product>,
}

impl<'a> SearchResults<'a> {
    pub fn has_results(&self) -> bool {
        !self.products.is_empty()
    }

    pub fn results_count(&self) -> usize {
        self.products.len()
    }

    /// "N productos encontrados".
    pub fn count_label(&self) -> String {
        messages::results_count_label(self.results_count())
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.iter().copied()
    }
}

/// Keep the products whose title, description or category contains `query`,
/// ignoring case. A blank query keeps everything.
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> SearchResults<'a> {
    if query.trim().is_empty() {
        return SearchResults {
            products: products.iter().collect(),
        };
    }

    let needle = query.to_lowercase();
    SearchResults {
        products: products.iter().filter(|p| p.matches(&needle)).collect(),
    }
}
