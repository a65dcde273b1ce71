//! Cart pricing against the bakery catalog.

use bakery_commerce::prelude::*;

fn cart_with(catalog: &Catalog, ids: &[u32]) -> Cart {
    let mut cart = Cart::new();
    for id in ids {
        let product = catalog.require(ProductId::new(*id)).unwrap();
        cart.add_to_cart(product);
    }
    cart
}

#[test]
fn test_delivery_brackets() {
    let catalog = Catalog::bakery();
    let cart = cart_with(&catalog, &[1, 2, 2]);
    let tiers = DeliveryTiers::default();

    let cases = [
        ("0", 0),
        ("3", 0),
        ("3.01", 150),
        ("5", 150),
        ("7", 300),
        ("10", 300),
        ("10.5", 500),
        ("not a number", 0),
    ];

    for (input, fee) in cases {
        let pricing = cart.pricing(&tiers, DeliveryDistance::parse(input));
        assert_eq!(pricing.delivery_fee.amount, fee, "distance {:?}", input);
        assert_eq!(pricing.subtotal.amount, 2100);
        assert_eq!(pricing.total.amount, 2100 + fee);
    }
}

#[test]
fn test_empty_cart_still_prices_delivery() {
    let cart = Cart::default();
    let pricing = cart.pricing(&DeliveryTiers::default(), DeliveryDistance::new(7.0));
    assert!(pricing.subtotal.is_zero());
    assert_eq!(pricing.delivery_fee.amount, 300);
    assert_eq!(pricing.total.amount, 300);
    assert!(pricing.line_items.is_empty());
}

#[test]
fn test_filter_then_add() {
    let catalog = Catalog::bakery();
    let macarons = catalog.filter(&CategoryFilter::Only(Category::Macarons));
    assert_eq!(macarons.len(), 1);

    let mut cart = Cart::new();
    cart.add_to_cart(macarons[0]);
    cart.add_to_cart(macarons[0]);
    assert!(cart.update_quantity(macarons[0].id, 5));

    let pricing = cart.pricing(&DeliveryTiers::default(), DeliveryDistance::default());
    assert_eq!(pricing.line_items[0].quantity, 5);
    assert_eq!(pricing.line_items[0].total.amount, 450 * 5);
    assert_eq!(pricing.total.display(), "2400 ₽");
}

#[test]
fn test_review_feed() {
    let feed = ReviewFeed::bakery();
    let authors: Vec<_> = feed.reviews().iter().map(|r| r.author.as_str()).collect();
    assert_eq!(authors, ["Анна Смирнова", "Михаил Петров", "Елена Волкова"]);
    assert!(feed.reviews().iter().all(|r| (1..=5).contains(&r.rating)));
}
