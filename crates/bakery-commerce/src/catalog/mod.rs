//! Product catalog module.
//!
//! Contains the product type, the fixed category set, category filtering and
//! the static bakery catalog.

mod category;
mod filter;
mod product;

pub use category::Category;
pub use filter::CategoryFilter;
pub use product::{Catalog, Product};
