//! Category tags for product organization.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product category. The set is closed: the storefront tabs are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cakes,
    Macarons,
    Eclairs,
    Cupcakes,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 4] = [
        Category::Cakes,
        Category::Macarons,
        Category::Eclairs,
        Category::Cupcakes,
    ];

    /// URL-friendly tag used in filters and markup.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Cakes => "cakes",
            Category::Macarons => "macarons",
            Category::Eclairs => "eclairs",
            Category::Cupcakes => "cupcakes",
        }
    }

    /// Tab label shown on the storefront.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cakes => "Торты",
            Category::Macarons => "Макаруны",
            Category::Eclairs => "Эклеры",
            Category::Cupcakes => "Капкейки",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == needle)
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Cakes".parse::<Category>().unwrap(), Category::Cakes);
    }

    #[test]
    fn test_unknown_category() {
        let err = "bread".parse::<Category>().unwrap_err();
        assert_eq!(err, CommerceError::UnknownCategory("bread".to_string()));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Eclairs.label(), "Эклеры");
    }
}
