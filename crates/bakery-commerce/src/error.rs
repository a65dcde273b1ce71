//! Commerce error types.

use thiserror::Error;

/// Errors raised while building or querying storefront data.
///
/// Cart mutations and pricing never fail; these cover catalog construction,
/// lookups by user-supplied identifiers, and configuration validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two catalog entries share an identifier.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// Category tag outside the fixed set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Delivery tiers are not ascending or fees decrease.
    #[error("Invalid delivery tiers: {0}")]
    InvalidDeliveryTiers(String),

    /// Review rating outside 1..=5.
    #[error("Invalid rating {0}: must be between 1 and 5")]
    InvalidRating(u8),
}
