//! Domain types and logic for the bakery storefront.
//!
//! This crate provides the decision logic behind the storefront page:
//!
//! - **Catalog**: Products, categories, category filtering
//! - **Cart**: Line items keyed by product, quantity updates and removal
//! - **Pricing**: Item subtotal, tiered delivery fee, grand total
//! - **Reviews**: The static customer review feed
//!
//! # Example
//!
//! ```
//! use bakery_commerce::prelude::*;
//!
//! let catalog = Catalog::bakery();
//! let mut cart = Cart::new();
//!
//! cart.add_to_cart(catalog.require(ProductId::new(1)).unwrap());
//! cart.add_to_cart(catalog.require(ProductId::new(2)).unwrap());
//! cart.add_to_cart(catalog.require(ProductId::new(2)).unwrap());
//!
//! let pricing = cart.pricing(&DeliveryTiers::default(), DeliveryDistance::new(5.0));
//! assert_eq!(pricing.subtotal.amount, 2100);
//! assert_eq!(pricing.delivery_fee.amount, 150);
//! assert_eq!(pricing.total.amount, 2250);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod reviews;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{
        Cart, CartPricing, DeliveryDistance, DeliveryTier, DeliveryTiers, LineItem,
        LineItemPricing,
    };

    // Reviews
    pub use crate::reviews::{Review, ReviewFeed};
}
