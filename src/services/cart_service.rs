use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{
    cart::{CartEntry, CartSummary, Receipt, ReceiptLine},
    payment::PaymentMethod,
    product::Product,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CartError {
    #[error("Invalid quantity or not enough stock.")]
    InvalidQuantity { requested: i64, available: u32 },

    #[error("Item not found in cart.")]
    ItemNotFound(i64),

    #[error("Cart is empty.")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Added,
    /// An existing line grew; carries the new quantity.
    Merged { quantity: u32 },
}

/// The shopper's in-progress selection.
///
/// Holds at most one entry per product id, in first-added order.
#[derive(Debug, Default, Clone)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`.
    ///
    /// The quantity is checked against `product.stock` as passed in (the
    /// catalog's current stock). When the product is already in the cart
    /// the quantities are summed without checking the sum against stock.
    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<AddOutcome, CartError> {
        if !product.has_stock_for(quantity) {
            debug!(
                "Rejected add of {} x product {} (stock {})",
                quantity, product.id, product.stock
            );
            return Err(CartError::InvalidQuantity {
                requested: quantity,
                available: product.stock,
            });
        }
        let quantity = u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity {
            requested: quantity,
            available: product.stock,
        })?;

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.product_id() == product.id)
        {
            entry.quantity = entry.quantity.saturating_add(quantity);
            debug!(
                "Merged {} x '{}' into existing line, now {}",
                quantity, product.name, entry.quantity
            );
            return Ok(AddOutcome::Merged {
                quantity: entry.quantity,
            });
        }

        self.entries.push(CartEntry::new(product.clone(), quantity));
        debug!("Added {} x '{}' as a new line", quantity, product.name);
        Ok(AddOutcome::Added)
    }

    /// Drop the line for `id`. Removed units are not returned to stock.
    pub fn remove(&mut self, id: i64) -> Result<CartEntry, CartError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.product_id() == id)
            .ok_or(CartError::ItemNotFound(id))?;

        let removed = self.entries.remove(index);
        info!("Removed '{}' x{} from cart", removed.product.name, removed.quantity);
        Ok(removed)
    }

    pub fn total(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    pub fn summary(&self) -> Result<CartSummary, CartError> {
        if self.is_empty() {
            return Err(CartError::Empty);
        }

        Ok(CartSummary {
            entries: self.entries.clone(),
            total: self.total(),
        })
    }

    /// Pay for everything in the cart and empty it.
    ///
    /// An empty cart is rejected before the payment method is touched.
    /// Otherwise the cart is cleared unconditionally once the receipt is
    /// built.
    pub fn checkout(&mut self, payment_method: PaymentMethod) -> Result<Receipt, CartError> {
        if self.is_empty() {
            debug!("Checkout attempted with an empty cart");
            return Err(CartError::Empty);
        }

        let total = self.total();
        let payment_message = payment_method.pay(total);
        let lines: Vec<ReceiptLine> = self.entries.iter().map(ReceiptLine::from).collect();

        let receipt = Receipt {
            payment_method,
            payment_message,
            lines,
            total,
            issued_at: Utc::now(),
        };
        self.entries.clear();

        info!(
            "Checked out {} lines for {} via {}",
            receipt.lines.len(),
            receipt.total,
            payment_method
        );
        Ok(receipt)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
