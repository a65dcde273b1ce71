//! Category filter for the catalog tabs.

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The active catalog tab: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Slug of the tab (`"all"` or a category slug).
    pub fn slug(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.slug(),
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Все",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Check whether a product belongs to this tab.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }

    /// Every tab in display order, `All` first.
    pub fn tabs() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.slug().to_string()
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CommerceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
