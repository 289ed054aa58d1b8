use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    models::product::Product,
    repositories::{InMemoryProductRepository, ProductRepository, ProductRepositoryError},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogServiceError {
    #[error("Product not found.")]
    ProductNotFound,

    #[error("Invalid quantity or not enough stock.")]
    InsufficientStock,
}

impl From<ProductRepositoryError> for CatalogServiceError {
    fn from(error: ProductRepositoryError) -> Self {
        match error {
            ProductRepositoryError::NotFound => CatalogServiceError::ProductNotFound,
            ProductRepositoryError::InsufficientStock { .. } => {
                CatalogServiceError::InsufficientStock
            }
        }
    }
}

pub struct CatalogService {
    product_repository: Box<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(product_repository: Box<dyn ProductRepository>) -> Self {
        Self { product_repository }
    }

    /// Catalog backed by the fixed seed products.
    pub fn seeded() -> Self {
        Self::new(Box::new(InMemoryProductRepository::seeded()))
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.product_repository.list_all()
    }

    pub fn find_product(&self, id: i64) -> Result<Product, CatalogServiceError> {
        debug!("Looking up product {}", id);
        self.product_repository.find_by_id(id).ok_or_else(|| {
            debug!("Product {} not found in catalog", id);
            CatalogServiceError::ProductNotFound
        })
    }

    /// Take `amount` units out of stock. The quantity is validated again
    /// against the live catalog, independently of any cart-side check.
    pub fn reduce_stock(&mut self, id: i64, amount: i64) -> Result<Product, CatalogServiceError> {
        let product = self
            .product_repository
            .reduce_stock(id, amount)
            .map_err(|e| {
                warn!("Stock reduction of {} for product {} rejected: {}", amount, id, e);
                CatalogServiceError::from(e)
            })?;

        info!(
            "Reduced stock of product {} by {}, {} left",
            product.id, amount, product.stock
        );
        Ok(product)
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::seeded()
    }
}
