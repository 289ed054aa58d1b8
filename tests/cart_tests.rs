use rust_decimal::Decimal;
use testresult::TestResult;

use shopping_cart_cli::models::payment::PaymentMethod;
use shopping_cart_cli::services::{AddOutcome, Cart, CartError, CatalogService, CatalogServiceError};

/// Add through the catalog the way the menu does: validate in the cart,
/// then take the units out of stock.
fn add_from_catalog(
    catalog: &mut CatalogService,
    cart: &mut Cart,
    id: i64,
    quantity: i64,
) -> Result<AddOutcome, CartError> {
    let product = catalog.find_product(id).expect("seeded product");
    let outcome = cart.add(&product, quantity)?;
    catalog.reduce_stock(id, quantity).expect("stock reduction");
    Ok(outcome)
}

#[test]
fn test_every_seed_product_adds_and_increases_total() -> TestResult {
    let mut catalog = CatalogService::seeded();
    let mut cart = Cart::new();

    for product in catalog.list_products() {
        let before = cart.total();
        add_from_catalog(&mut catalog, &mut cart, product.id, 2)?;
        assert_eq!(cart.total() - before, product.price * Decimal::from(2));
    }

    assert_eq!(cart.len(), 5);
    Ok(())
}

#[test]
fn test_repeated_add_merges_into_one_entry() -> TestResult {
    let mut catalog = CatalogService::seeded();
    let mut cart = Cart::new();

    add_from_catalog(&mut catalog, &mut cart, 1, 3)?;
    let outcome = add_from_catalog(&mut catalog, &mut cart, 1, 2)?;

    assert_eq!(outcome, AddOutcome::Merged { quantity: 5 });
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.entries()[0].quantity, 5);
    assert_eq!(catalog.find_product(1)?.stock, 15);
    Ok(())
}

#[test]
fn test_invalid_quantities_leave_cart_and_stock_unchanged() -> TestResult {
    let catalog = CatalogService::seeded();
    let mut cart = Cart::new();
    let speaker = catalog.find_product(4)?;

    for quantity in [0, -1, 9] {
        assert!(matches!(
            cart.add(&speaker, quantity),
            Err(CartError::InvalidQuantity { .. })
        ));
    }

    assert!(cart.is_empty());
    assert_eq!(catalog.find_product(4)?.stock, 8);
    Ok(())
}

#[test]
fn test_remove_deletes_only_matching_entry_and_keeps_stock() -> TestResult {
    let mut catalog = CatalogService::seeded();
    let mut cart = Cart::new();
    add_from_catalog(&mut catalog, &mut cart, 1, 1)?;
    add_from_catalog(&mut catalog, &mut cart, 2, 1)?;
    add_from_catalog(&mut catalog, &mut cart, 3, 1)?;

    let removed = cart.remove(2)?;

    assert_eq!(removed.product.name, "Mechanical Keyboard");
    let ids: Vec<i64> = cart.entries().iter().map(|e| e.product.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(catalog.find_product(2)?.stock, 14);

    assert_eq!(cart.remove(2), Err(CartError::ItemNotFound(2)));
    assert_eq!(cart.len(), 2);
    Ok(())
}

#[test]
fn test_cart_keeps_price_snapshot_after_stock_changes() -> TestResult {
    let mut catalog = CatalogService::seeded();
    let mut cart = Cart::new();

    add_from_catalog(&mut catalog, &mut cart, 5, 2)?;
    catalog.reduce_stock(5, 3)?;

    assert_eq!(cart.entries()[0].product.stock, 5);
    assert_eq!(cart.total(), Decimal::new(1360000, 2));
    Ok(())
}

#[test]
fn test_removed_units_are_not_restocked() -> TestResult {
    let mut catalog = CatalogService::seeded();
    let mut cart = Cart::new();

    add_from_catalog(&mut catalog, &mut cart, 5, 4)?;
    cart.remove(5)?;
    add_from_catalog(&mut catalog, &mut cart, 5, 1)?;

    assert_eq!(catalog.find_product(5)?.stock, 0);
    assert_eq!(
        catalog.reduce_stock(5, 1),
        Err(CatalogServiceError::InsufficientStock)
    );
    Ok(())
}

#[test]
fn test_checkout_receipt_matches_total_and_empties_cart() -> TestResult {
    let mut catalog = CatalogService::seeded();
    let mut cart = Cart::new();
    add_from_catalog(&mut catalog, &mut cart, 1, 2)?;

    assert_eq!(cart.total(), Decimal::new(170000, 2));

    let receipt = cart.checkout(PaymentMethod::Cash)?;

    assert_eq!(receipt.payment_message, "Paid PHP 1700.00 using Cash.");
    assert_eq!(receipt.lines_total(), receipt.total);
    assert_eq!(receipt.lines.len(), 1);
    assert!(cart.is_empty());
    assert_eq!(cart.summary(), Err(CartError::Empty));
    Ok(())
}

#[test]
fn test_checkout_empty_cart_produces_no_receipt() {
    let mut cart = Cart::new();

    assert_eq!(cart.checkout(PaymentMethod::Card).unwrap_err(), CartError::Empty);
}
