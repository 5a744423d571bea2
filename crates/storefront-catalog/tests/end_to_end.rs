//! Listing and detail flows against a canned repository.

use std::sync::Arc;

use storefront_catalog::messages;
use storefront_catalog::prelude::*;
use storefront_data::{FetchClient, FetchError, MockTransport, StatusCode};

const CATALOG: &str = r#"[
    {"id":1,"title":"Test Product 1","price":29.99,"description":"A test product",
     "category":"electronics","image":"https://example.test/1.jpg",
     "rating":{"rate":4.5,"count":10}},
    {"id":2,"title":"Test Product 2","price":19.99,"description":"Another test product",
     "category":"clothing","image":"https://example.test/2.jpg",
     "rating":{"rate":4.0,"count":5}}
]"#;

fn repository(mock: MockTransport) -> (HttpProductRepository, Arc<MockTransport>) {
    let mock = Arc::new(mock);
    let client = FetchClient::new(mock.clone()).with_base_url("https://fakestore.test");
    (HttpProductRepository::new(client), mock)
}

#[tokio::test]
async fn electro_query_filters_and_suggests() {
    let (repo, _) = repository(
        MockTransport::new().with_json("/products", StatusCode::OK, CATALOG),
    );
    let mut session = BrowseSession::new(SuggestionEngine::default());
    session.load(&repo).await;

    session.handle(BrowseEvent::QueryChanged("electro".to_string()));

    let results = session.results();
    let ids: Vec<u64> = results.iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![1]);

    let suggestions = session.suggestions();
    assert_eq!(suggestions.categories, vec!["electronics".to_string()]);
    let popular: Vec<u64> = suggestions.popular_products.iter().map(|p| p.id.get()).collect();
    assert_eq!(popular, vec![1]);
    assert!(suggestions.show_popular_terms);
}

#[tokio::test]
async fn unknown_product_resolves_to_not_found_view() {
    let (repo, mock) = repository(MockTransport::new());
    let mut detail = SingleProductState::new();

    detail.load(&repo, Some("999")).await;

    assert_eq!(
        detail.view(),
        ProductView {
            product: None,
            loading: false,
            error: Some("Producto no encontrado".to_string()),
            not_found: true,
        }
    );
    assert_eq!(mock.requested_urls(), vec!["https://fakestore.test/products/999".to_string()]);
}

#[tokio::test]
async fn failed_refetch_clears_the_listing() {
    let (repo, mock) = repository(
        MockTransport::new().with_json("/products", StatusCode::OK, CATALOG),
    );
    let mut list = ProductListState::new();
    list.load(&repo).await;
    assert_eq!(list.view().products.len(), 2);

    mock.set_failure("/products", FetchError::RequestError("network unreachable".to_string()));
    list.refetch(&repo).await;

    let view = list.view();
    assert!(view.products.is_empty());
    assert!(!view.loading);
    assert_eq!(view.error.as_deref(), Some(messages::PRODUCTS_LOAD_ERROR));
}

#[tokio::test]
async fn detail_after_picking_a_suggested_product() {
    let product_2 = r#"{"id":2,"title":"Test Product 2","price":19.99,
        "description":"Another test product","category":"clothing",
        "image":"https://example.test/2.jpg","rating":{"rate":4.0,"count":5}}"#;
    let (repo, _) = repository(
        MockTransport::new()
            .with_json("/products", StatusCode::OK, CATALOG)
            .with_json("/products/2", StatusCode::OK, product_2),
    );
    let mut session = BrowseSession::default();
    session.load(&repo).await;
    session.handle(BrowseEvent::QueryChanged("cloth".to_string()));

    let picked = session.suggestions().popular_products[0].id;
    let nav = session.handle(BrowseEvent::ProductPicked(picked));
    let Some(Navigation::ProductDetail(id)) = nav else {
        panic!("expected navigation to the detail page");
    };

    let mut detail = SingleProductState::new();
    detail.load(&repo, Some(&id.to_string())).await;
    let product = detail.product().expect("product loaded");
    assert_eq!(product.title, "Test Product 2");
    assert_eq!(product.display_price(), "$19.99");
}
