//! Bakery storefront view.
//!
//! Wires the commerce engine into the single storefront page:
//! - `StorefrontView` - Session state: cart, active category, delivery distance
//! - `StoreConfig` - Store name, delivery tiers and logging, loaded from TOML or JSON
//! - `content` - Static page copy (hero, about, contacts)
//! - `sections` - HTML renderers for every page section

pub mod config;
pub mod content;
pub mod sections;
mod view;

pub use config::{ConfigError, LoggingConfig, StoreConfig, StoreSettings};
pub use content::StoreContent;
pub use view::{Action, CartSnapshot, StorefrontView};
