//! Delivery distance and tiered delivery fees.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Distance pre-filled in the delivery input, in kilometers.
pub const DEFAULT_DISTANCE_KM: f64 = 5.0;

/// Delivery distance in kilometers, as typed by the customer.
///
/// Always finite. Negative values are kept as entered; they price like zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryDistance(f64);

impl DeliveryDistance {
    /// Create a distance. Non-finite input becomes 0.
    pub fn new(km: f64) -> Self {
        if km.is_finite() {
            Self(km)
        } else {
            Self(0.0)
        }
    }

    /// Parse raw input from the distance field.
    ///
    /// Anything that is not a finite number (empty, text, "NaN", "inf")
    /// becomes 0, which lands in the free tier.
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<f64>()
            .map(Self::new)
            .unwrap_or(Self(0.0))
    }

    /// Distance in kilometers.
    pub fn km(&self) -> f64 {
        self.0
    }
}

impl Default for DeliveryDistance {
    fn default() -> Self {
        Self(DEFAULT_DISTANCE_KM)
    }
}

/// One bracket of the delivery price list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTier {
    /// Inclusive upper bound of the bracket, in kilometers.
    pub up_to_km: f64,
    /// Fee charged inside the bracket, in rubles.
    pub fee: i64,
}

impl DeliveryTier {
    pub const fn new(up_to_km: f64, fee: i64) -> Self {
        Self { up_to_km, fee }
    }
}

/// Step function from distance to delivery fee.
///
/// Brackets are checked in ascending order with `distance <= up_to_km`; the
/// first match wins, so a distance sitting exactly on a threshold pays the
/// cheaper bracket. Distances past the last bracket pay `beyond_fee`.
/// Either field may be omitted when deserializing; it falls back to the
/// default brackets or the default 500 fee beyond them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryTiers {
    pub tiers: Vec<DeliveryTier>,
    pub beyond_fee: i64,
}

impl Default for DeliveryTiers {
    fn default() -> Self {
        Self {
            tiers: vec![
                DeliveryTier::new(3.0, 0),
                DeliveryTier::new(5.0, 150),
                DeliveryTier::new(10.0, 300),
            ],
            beyond_fee: 500,
        }
    }
}

impl DeliveryTiers {
    /// Fee for a distance.
    pub fn fee_for(&self, distance: DeliveryDistance) -> i64 {
        let km = distance.km();
        self.tiers
            .iter()
            .find(|tier| km <= tier.up_to_km)
            .map(|tier| tier.fee)
            .unwrap_or(self.beyond_fee)
    }

    /// Whether delivery is free at this distance.
    pub fn is_free(&self, distance: DeliveryDistance) -> bool {
        self.fee_for(distance) == 0
    }

    /// Check that thresholds ascend and fees never decrease.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let mut prev_km: Option<f64> = None;
        let mut prev_fee = 0_i64;

        for tier in &self.tiers {
            if !tier.up_to_km.is_finite() {
                return Err(CommerceError::InvalidDeliveryTiers(format!(
                    "threshold {} is not a finite distance",
                    tier.up_to_km
                )));
            }
            if let Some(prev) = prev_km {
                if tier.up_to_km <= prev {
                    return Err(CommerceError::InvalidDeliveryTiers(format!(
                        "threshold {} km does not exceed previous {} km",
                        tier.up_to_km, prev
                    )));
                }
            }
            if tier.fee < prev_fee {
                return Err(CommerceError::InvalidDeliveryTiers(format!(
                    "fee {} for up to {} km is below the previous fee {}",
                    tier.fee, tier.up_to_km, prev_fee
                )));
            }
            prev_km = Some(tier.up_to_km);
            prev_fee = tier.fee;
        }

        if self.beyond_fee < prev_fee {
            return Err(CommerceError::InvalidDeliveryTiers(format!(
                "fee beyond the last tier ({}) is below {}",
                self.beyond_fee, prev_fee
            )));
        }

        Ok(())
    }
}
