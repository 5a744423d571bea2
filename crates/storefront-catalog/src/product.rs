//! Product records as served by the repository.

use crate::ids::ProductId;
use crate::money::format_price;
use serde::{Deserialize, Serialize};

/// Customer rating summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average score, 0 to 5.
    pub rate: f64,
    /// Number of reviews.
    pub count: u64,
}

/// A product in the catalog.
///
/// Products are replaced wholesale on every fetch and never edited locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Repository-assigned identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: f64,
    /// Long description.
    pub description: String,
    /// Free-form category name.
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Rating summary.
    pub rating: Rating,
}

impl Product {
    /// Price formatted for display, e.g. `$109.95`.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }

    /// Case-insensitive containment test against title, description or
    /// category. `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 1,
        "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn test_deserialize_repository_record() {
        let product: Product = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating, Rating { rate: 3.9, count: 120 });
        assert_eq!(product.display_price(), "$109.95");
    }

    #[test]
    fn test_partial_record_is_rejected() {
        let result: Result<Product, _> = serde_json::from_str(r#"{"id": 1, "title": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_matches_each_field() {
        let product: Product = serde_json::from_str(SAMPLE).unwrap();
        assert!(product.matches("backpack"));
        assert!(product.matches("forest"));
        assert!(product.matches("men's"));
        assert!(!product.matches("jewel"));
    }
}
