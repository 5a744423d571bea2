//! User-facing texts.
//!
//! The storefront ships in Spanish only.

pub const LOADING_PRODUCTS: &str = "Cargando productos...";
pub const LOADING_PRODUCT: &str = "Cargando producto...";

/// Shown when the catalog list cannot be loaded.
pub const PRODUCTS_LOAD_ERROR: &str = "Error al cargar los productos";

/// Shown when the repository reports that a product does not exist.
pub const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";

/// Shown when the requested id is missing or malformed.
pub const INVALID_PRODUCT_ID: &str = "ID de producto no válido";

/// Shown for any other single-product failure.
pub const PRODUCT_LOAD_ERROR: &str =
    "Error al cargar el producto. Verifica tu conexión a internet.";

pub const NOT_FOUND_DESCRIPTION: &str =
    "El producto que buscas no existe o ha sido eliminado de nuestro catálogo";

pub const NO_RESULTS: &str = "No se encontraron productos";

/// Shown when a query yields no categories, terms or products.
pub const NO_SUGGESTIONS: &str = "No se encontraron sugerencias";

/// "1 producto encontrado" / "3 productos encontrados".
pub fn results_count_label(count: usize) -> String {
    if count == 1 {
        format!("{} producto encontrado", count)
    } else {
        format!("{} productos encontrados", count)
    }
}

/// "(120 reseñas)".
pub fn reviews_label(count: u64) -> String {
    format!("({} reseñas)", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_count_label_pluralizes() {
        assert_eq!(results_count_label(0), "0 productos encontrados");
        assert_eq!(results_count_label(1), "1 producto encontrado");
        assert_eq!(results_count_label(20), "20 productos encontrados");
    }

    #[test]
    fn test_reviews_label() {
        assert_eq!(reviews_label(120), "(120 reseñas)");
    }
}
