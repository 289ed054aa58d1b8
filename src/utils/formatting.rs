use rust_decimal::Decimal;

use crate::models::{
    cart::{CartEntry, CartSummary, Receipt, ReceiptLine},
    product::Product,
};

pub const CURRENCY_LABEL: &str = "PHP";

pub const MENU_BANNER: &str = "--- Online Shopping Cart ---";
pub const MENU_OPTIONS: [&str; 6] = [
    "1. View Products",
    "2. Add to Cart",
    "3. Remove from Cart",
    "4. View Cart",
    "5. Checkout",
    "6. Exit",
];
pub const PAYMENT_OPTIONS: [&str; 2] = ["1. Cash", "2. Card"];

const RECEIPT_HEADER: &str = "----- Receipt -----";
const RECEIPT_FOOTER: &str = "-------------------";

fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// `PHP 1700.00`
pub fn format_money(amount: Decimal) -> String {
    format!("{} {}", CURRENCY_LABEL, format_amount(amount))
}

pub fn format_product_row(product: &Product) -> String {
    format!(
        "{:>4} | {:<25} | {} {:<8} | Stock: {}",
        product.id,
        product.name,
        CURRENCY_LABEL,
        format_amount(product.price),
        product.stock
    )
}

fn format_line_item(name: &str, quantity: u32, line_total: Decimal) -> String {
    format!("{} x{} = {}", name, quantity, format_money(line_total))
}

pub fn format_cart_line(entry: &CartEntry) -> String {
    format_line_item(&entry.product.name, entry.quantity, entry.line_total())
}

pub fn format_receipt_line(line: &ReceiptLine) -> String {
    format_line_item(&line.name, line.quantity, line.line_total)
}

pub fn format_total(total: Decimal) -> String {
    format!("Total: {}", format_money(total))
}

pub fn format_cart_summary(summary: &CartSummary) -> String {
    let mut output = String::from("\nItems in Cart:\n");

    for entry in &summary.entries {
        output.push_str(&format_cart_line(entry));
        output.push('\n');
    }
    output.push_str(&format_total(summary.total));
    output.push('\n');

    output
}

/// Receipt body as printed after the payment confirmation.
pub fn format_receipt(receipt: &Receipt) -> String {
    let mut output = format!("\n{}\n", RECEIPT_HEADER);

    for line in &receipt.lines {
        output.push_str(&format_receipt_line(line));
        output.push('\n');
    }
    output.push_str(&format_total(receipt.total));
    output.push('\n');
    output.push_str(RECEIPT_FOOTER);
    output.push('\n');

    output
}
