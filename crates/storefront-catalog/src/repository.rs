//! Access to the product repository.

use async_trait::async_trait;
use storefront_data::FetchClient;

use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::product::Product;

/// Public FakeStore deployment.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Read-only product source.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// The whole catalog, in repository order.
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError>;

    /// One product by id.
    async fn fetch_one(&self, id: ProductId) -> Result<Product, CatalogError>;
}

/// [`ProductRepository`] over the REST API.
#[derive(Debug, Clone)]
pub struct HttpProductRepository {
    client: FetchClient,
}

impl HttpProductRepository {
    /// `client` must carry the repository base URL.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    async fn fetch_all_inner(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self
            .client
            .get("/products")
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json()?)
    }

    async fn fetch_one_inner(&self, id: ProductId) -> Result<Product, CatalogError> {
        let response = self
            .client
            .get(format!("/products/{}", id))
            .accept("application/json")
            .send()
            .await
            .map_err(CatalogError::from)?;

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) if e.is_not_found() => return Err(CatalogError::NotFound(id)),
            Err(e) => return Err(e.into()),
        };

        // Unknown ids come back as 200 with an empty or `null` body.
        if response.is_empty() {
            return Err(CatalogError::NotFound(id));
        }
        let product: Option<Product> = response.json()?;
        product.ok_or(CatalogError::NotFound(id))
    }
}

#[async_trait]
impl ProductRepository for HttpProductRepository {
    async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        let result = self.fetch_all_inner().await;
        match &result {
            Ok(products) => tracing::debug!(count = products.len(), "fetched catalog"),
            Err(e) => tracing::warn!(error = %e, "error fetching products"),
        }
        result
    }

    async fn fetch_one(&self, id: ProductId) -> Result<Product, CatalogError> {
        let result = self.fetch_one_inner(id).await;
        if let Err(e) = &result {
            tracing::warn!(%id, error = %e, "error fetching product");
        }
        result
    }
}
