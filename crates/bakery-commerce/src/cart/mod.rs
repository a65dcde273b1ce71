//! Shopping cart module.
//!
//! Contains the cart and its line items, the delivery fee tiers, and the
//! pricing breakdown derived from both.

mod cart;
mod delivery;
mod pricing;

pub use cart::{Cart, LineItem};
pub use delivery::{DeliveryDistance, DeliveryTier, DeliveryTiers, DEFAULT_DISTANCE_KM};
pub use pricing::{CartPricing, LineItemPricing};
