//! Cart and line item types.

use crate::cart::{CartPricing, DeliveryDistance, DeliveryTiers, LineItemPricing};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Line items are keyed by product id and keep the order in which each product
/// was first added. Every present item has a quantity of at least 1.
///
/// Carts serialize for snapshots but only the mutation methods can build one,
/// so there is no way to deserialize a cart that breaks those rules:
///
/// ```compile_fail
/// let cart: bakery_commerce::cart::Cart = serde_json::from_str(r#"{"items": []}"#).unwrap();
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart, in first-insertion order.
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line item, or appends a new one with quantity 1.
    /// Returns the item's quantity after the add.
    pub fn add_to_cart(&mut self, product: &Product) -> i64 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.items.push(LineItem::from_product(product));
        1
    }

    /// Set an item's quantity to exactly `quantity`.
    ///
    /// A quantity of zero or less removes the item. Returns `false` when no
    /// item with that id is in the cart, which leaves the cart untouched.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_from_cart(product_id);
        }

        match self.items.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove an item from the cart. Returns whether anything was removed.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Line items in first-insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Number of distinct items (the cart badge count).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `unit price × quantity` over all items.
    pub fn items_subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, item| {
                acc.saturating_add(&item.total_price())
            })
    }

    /// Compute the pricing breakdown for a delivery distance.
    ///
    /// Nothing is cached: every call walks the current items.
    pub fn pricing(&self, tiers: &DeliveryTiers, distance: DeliveryDistance) -> CartPricing {
        let line_items = self
            .items
            .iter()
            .map(|item| LineItemPricing {
                product_id: item.product_id,
                unit_price: item.unit_price,
                quantity: item.quantity,
                total: item.total_price(),
            })
            .collect();

        let subtotal = self.items_subtotal();
        let delivery_fee = Money::new(tiers.fee_for(distance));

        CartPricing {
            subtotal,
            delivery_fee,
            total: subtotal.saturating_add(&delivery_fee),
            distance_km: distance.km(),
            line_items,
        }
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name (copied at add-time for display).
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Product image URL.
    pub image_url: String,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl LineItem {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            image_url: product.image_url.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn total_price(&self) -> Money {
        self.unit_price.saturating_multiply(self.quantity)
    }
}
