use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::product::Product;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProductRepositoryError {
    #[error("Not found")]
    NotFound,
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: u32 },
}

/// Product catalog data access
pub trait ProductRepository {
    fn find_by_id(&self, id: i64) -> Option<Product>;
    fn list_all(&self) -> Vec<Product>;
    /// Decrement the stock of `id` by `amount`, returning the updated product.
    fn reduce_stock(&mut self, id: i64, amount: i64) -> Result<Product, ProductRepositoryError>;
}

/// The five products every session starts with, in display order.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(1, "Wireless Mouse", Decimal::new(85000, 2), 20),
        Product::new(2, "Mechanical Keyboard", Decimal::new(350000, 2), 15),
        Product::new(3, "USB-C Hub", Decimal::new(120000, 2), 10),
        Product::new(4, "Bluetooth Speaker", Decimal::new(275000, 2), 8),
        Product::new(5, "Noise Cancelling Headphones", Decimal::new(680000, 2), 5),
    ]
}

/// Vec-backed catalog. Lookups are linear scans in seed order.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn seeded() -> Self {
        Self::new(seed_products())
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_by_id(&self, id: i64) -> Option<Product> {
        self.products.iter().find(|product| product.id == id).cloned()
    }

    fn list_all(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn reduce_stock(&mut self, id: i64, amount: i64) -> Result<Product, ProductRepositoryError> {
        let product = self
            .products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(ProductRepositoryError::NotFound)?;

        if !product.has_stock_for(amount) {
            return Err(ProductRepositoryError::InsufficientStock {
                requested: amount,
                available: product.stock,
            });
        }

        let amount = u32::try_from(amount).map_err(|_| ProductRepositoryError::InsufficientStock {
            requested: amount,
            available: product.stock,
        })?;
        product.stock -= amount;

        Ok(product.clone())
    }
}
