use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable product as held by the catalog.
///
/// `id`, `name` and `price` never change after seeding; `stock` is
/// decremented as units are placed into a cart.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    /// True when `quantity` is positive and no larger than the current stock.
    pub fn has_stock_for(&self, quantity: i64) -> bool {
        quantity > 0 && quantity <= i64::from(self.stock)
    }
}
