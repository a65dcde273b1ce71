//! Cart pricing breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Complete pricing breakdown for a cart at a delivery distance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line item totals.
    pub subtotal: Money,
    /// Delivery fee for `distance_km`.
    pub delivery_fee: Money,
    /// Final total (subtotal + delivery).
    pub total: Money,
    /// Distance the fee was computed for.
    pub distance_km: f64,
    /// Per-line-item pricing breakdown.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Check if delivery is free.
    pub fn has_free_delivery(&self) -> bool {
        self.delivery_fee.is_zero()
    }
}

/// Pricing breakdown for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product ID.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Line total (unit_price * quantity).
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_delivery_flag() {
        let pricing = CartPricing {
            subtotal: Money::new(1000),
            delivery_fee: Money::zero(),
            total: Money::new(1000),
            distance_km: 2.0,
            line_items: vec![],
        };
        assert!(pricing.has_free_delivery());
    }

    #[test]
    fn test_pricing_serializes() {
        let pricing = CartPricing {
            subtotal: Money::new(900),
            delivery_fee: Money::new(150),
            total: Money::new(1050),
            distance_km: 4.0,
            line_items: vec![LineItemPricing {
                product_id: ProductId::new(2),
                unit_price: Money::new(450),
                quantity: 2,
                total: Money::new(900),
            }],
        };
        let json = serde_json::to_value(&pricing).unwrap();
        assert_eq!(json["total"], 1050);
        assert_eq!(json["delivery_fee"], 150);
        assert_eq!(json["line_items"][0]["product_id"], 2);
    }
}
