//! Type-ahead suggestions.
//!
//! Suggestions are derived from the fetched catalog on every query change:
//! matching categories, related words taken from product titles, and the
//! best-rated matching products.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Fallback terms used to top up related terms.
pub const POPULAR_SEARCH_TERMS: &[&str] = &[
    "clothing",
    "electronics",
    "jewelry",
    "men",
    "women",
    "backpack",
    "shirt",
    "jacket",
    "ring",
    "necklace",
];

/// Limits and fallback data for a [`SuggestionEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Terms offered when titles yield too few related terms.
    pub popular_terms: Vec<String>,
    /// Trimmed query length below which nothing is suggested.
    pub min_query_len: usize,
    pub max_categories: usize,
    pub max_related_terms: usize,
    /// Top up related terms from `popular_terms` until this many exist.
    pub min_related_terms: usize,
    pub max_popular_products: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            popular_terms: POPULAR_SEARCH_TERMS.iter().map(|t| t.to_string()).collect(),
            min_query_len: 2,
            max_categories: 3,
            max_related_terms: 4,
            min_related_terms: 3,
            max_popular_products: 3,
        }
    }
}

/// Suggestions for one query.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Suggestions {
    pub categories: Vec<String>,
    pub related_terms: Vec<String>,
    pub popular_products: Vec<Product>,
    /// True when at least one of the lists is non-empty.
    pub show_popular_terms: bool,
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        !self.show_popular_terms
    }
}

/// Computes [`Suggestions`] from a catalog and a raw query.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    config: SuggestionConfig,
}

impl SuggestionEngine {
    pub fn new(config: SuggestionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Whether `query` is long enough to produce suggestions.
    pub fn is_active(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.config.min_query_len
    }

    pub fn suggest(&self, products: &[Product], query: &str) -> Suggestions {
        if !self.is_active(query) {
            return Suggestions::default();
        }

        let term = query.to_lowercase();
        let categories = self.categories(products, &term);
        let related_terms = self.related_terms(products, &term);
        let popular_products = self.popular_products(products, &term);

        let show_popular_terms =
            !categories.is_empty() || !related_terms.is_empty() || !popular_products.is_empty();

        Suggestions {
            categories,
            related_terms,
            popular_products,
            show_popular_terms,
        }
    }

    fn categories(&self, products: &[Product], term: &str) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in products {
            if categories.len() == self.config.max_categories {
                break;
            }
            if product.category.to_lowercase().contains(term)
                && !categories.contains(&product.category)
            {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    fn related_terms(&self, products: &[Product], term: &str) -> Vec<String> {
        let mut terms: Vec<String> = Vec::new();

        let sources = products.iter().filter(|p| {
            p.title.to_lowercase().contains(term) || p.description.to_lowercase().contains(term)
        });

        'products: for product in sources {
            let title = product.title.to_lowercase();
            for word in title.split(is_word_separator).filter(|w| !w.is_empty()) {
                if terms.len() == self.config.max_related_terms {
                    break 'products;
                }
                if is_related_word(word, term) && !terms.iter().any(|t| t == word) {
                    terms.push(word.to_string());
                }
            }
        }

        if terms.len() < self.config.min_related_terms {
            let missing = self.config.min_related_terms - terms.len();
            let fill: Vec<String> = self
                .config
                .popular_terms
                .iter()
                .filter(|popular| popular.contains(term) && !terms.contains(*popular))
                .take(missing)
                .cloned()
                .collect();
            terms.extend(fill);
        }

        terms
    }

    fn popular_products(&self, products: &[Product], term: &str) -> Vec<Product> {
        let mut matching: Vec<&Product> = products
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(term) || p.category.to_lowercase().contains(term)
            })
            .collect();

        // stable: equal rates keep catalog order
        matching.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate));

        matching
            .into_iter()
            .take(self.config.max_popular_products)
            .cloned()
            .collect()
    }
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '-'
}

/// Title words worth suggesting: longer than three letters, purely
/// alphabetic, containing the term without being the term itself.
fn is_related_word(word: &str, term: &str) -> bool {
    word.len() > 3
        && word.contains(term)
        && word != term
        && word.chars().all(|c| c.is_ascii_alphabetic())
}
