use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{payment::PaymentMethod, product::Product};

/// One line of the cart. `product` is a copy taken when the line was first
/// added, so its price stays frozen even if the catalog changes later.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product_id(&self) -> i64 {
        self.product.id
    }

    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Read-only view of a non-empty cart.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub entries: Vec<CartEntry>,
    pub total: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub product_id: i64,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl From<&CartEntry> for ReceiptLine {
    fn from(entry: &CartEntry) -> Self {
        Self {
            product_id: entry.product.id,
            name: entry.product.name.clone(),
            quantity: entry.quantity,
            unit_price: entry.product.price,
            line_total: entry.line_total(),
        }
    }
}

// Result of a completed checkout
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Receipt {
    pub payment_method: PaymentMethod,
    pub payment_message: String,
    pub lines: Vec<ReceiptLine>,
    pub total: Decimal,
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    pub fn lines_total(&self) -> Decimal {
        self.lines.iter().map(|line| line.line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total_uses_snapshot_price() {
        let mut product = Product::new(3, "USB-C Hub", Decimal::new(120000, 2), 10);
        let entry = CartEntry::new(product.clone(), 3);

        product.stock = 0;

        assert_eq!(entry.line_total(), Decimal::new(360000, 2));
        assert_eq!(entry.product.stock, 10);
    }

    #[test]
    fn test_receipt_line_from_entry() {
        let entry = CartEntry::new(
            Product::new(4, "Bluetooth Speaker", Decimal::new(275000, 2), 8),
            2,
        );

        let line = ReceiptLine::from(&entry);

        assert_eq!(line.product_id, 4);
        assert_eq!(line.name, "Bluetooth Speaker");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price, Decimal::new(275000, 2));
        assert_eq!(line.line_total, Decimal::new(550000, 2));
    }
}
