//! Newtype IDs for type-safe identifiers.
//!
//! Catalog and review identifiers are small stable integers taken from the
//! static storefront data. Wrapping them keeps a review id from being passed
//! where a product id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A stable numeric identifier.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create an ID from its numeric value.
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the numeric value.
            pub const fn get(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(ProductId);
define_id!(ReviewId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(42);
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn test_id_from_str() {
        let id: ProductId = " 7 ".parse().unwrap();
        assert_eq!(id, ProductId::new(7));
        assert!("seven".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", ReviewId::new(3)), "3");
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&ProductId::new(5)).unwrap();
        assert_eq!(json, "5");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProductId::new(5));
    }
}
