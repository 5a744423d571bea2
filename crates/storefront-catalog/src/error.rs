//! Catalog error types.

use serde::{Deserialize, Serialize};
use storefront_data::FetchError;
use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur while talking to the product repository.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The repository has no product with this id.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The id was missing or malformed; no request was made.
    #[error("Invalid product id: {0:?}")]
    InvalidId(String),

    /// Transport, HTTP or parse failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl CatalogError {
    /// Classify the error for display.
    pub fn kind(&self) -> FailureKind {
        match self {
            CatalogError::NotFound(_) => FailureKind::NotFound,
            CatalogError::InvalidId(_) => FailureKind::Validation,
            CatalogError::Fetch(_) => FailureKind::Transport,
        }
    }
}

/// How a failed load should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The item does not exist.
    NotFound,
    /// The requested id was unusable.
    Validation,
    /// Connectivity, server or malformed-body failure.
    Transport,
}

impl FailureKind {
    /// Not-found and validation failures both route to the "does not exist"
    /// view.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FailureKind::NotFound | FailureKind::Validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_data::StatusCode;

    #[test]
    fn test_kinds() {
        assert_eq!(CatalogError::NotFound(ProductId::new(1)).kind(), FailureKind::NotFound);
        assert_eq!(CatalogError::InvalidId("x".into()).kind(), FailureKind::Validation);
        assert_eq!(
            CatalogError::from(FetchError::ParseError("eof".into())).kind(),
            FailureKind::Transport
        );
        assert_eq!(
            CatalogError::from(FetchError::HttpError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "boom".into(),
            })
            .kind(),
            FailureKind::Transport
        );
    }

    #[test]
    fn test_not_found_view_routing() {
        assert!(FailureKind::NotFound.is_not_found());
        assert!(FailureKind::Validation.is_not_found());
        assert!(!FailureKind::Transport.is_not_found());
    }
}
