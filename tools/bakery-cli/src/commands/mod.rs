//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod quote;
pub mod render;
pub mod reviews;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context as _, Result};
use bakery_commerce::catalog::CategoryFilter;
use bakery_commerce::ProductId;
use bakery_storefront::StorefrontView;
use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Category tab: all, cakes, macarons, eclairs or cupcakes.
    #[arg(short = 'k', long, default_value = "all")]
    pub category: CategoryFilter,
}

/// Cart contents shared by `quote` and `render`.
#[derive(Args, Debug, Default)]
pub struct CartArgs {
    /// Add one unit of a product (repeatable).
    #[arg(short, long = "add", value_name = "ID")]
    pub add: Vec<ProductId>,

    /// Set a product's quantity, applied after adds (repeatable).
    #[arg(short, long = "set", value_name = "ID=QTY")]
    pub set: Vec<SetQuantity>,

    /// Remove a product, applied after sets (repeatable).
    #[arg(short, long = "remove", value_name = "ID")]
    pub remove: Vec<ProductId>,

    /// Delivery distance in kilometers. Non-numeric input counts as 0.
    #[arg(short, long, allow_hyphen_values = true)]
    pub distance: Option<String>,
}

impl CartArgs {
    /// Apply adds, then sets, then removes, then the distance.
    pub fn apply(&self, view: &mut StorefrontView) -> Result<()> {
        for id in &self.add {
            view.add_to_cart(*id)
                .with_context(|| format!("Cannot add product {}", id))?;
        }
        for set in &self.set {
            if !view.update_quantity(set.product_id, set.quantity) {
                anyhow::bail!(
                    "Product {} is not in the cart; add it before setting its quantity",
                    set.product_id
                );
            }
        }
        for id in &self.remove {
            view.remove_from_cart(*id);
        }
        if let Some(distance) = &self.distance {
            view.set_delivery_input(distance);
        }
        Ok(())
    }
}

/// `ID=QTY` pair for `--set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetQuantity {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl FromStr for SetQuantity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, qty) = s
            .split_once('=')
            .ok_or_else(|| format!("expected ID=QTY, got '{}'", s))?;
        let product_id = id
            .parse()
            .map_err(|_| format!("invalid product id '{}'", id))?;
        let quantity = qty
            .trim()
            .parse()
            .map_err(|_| format!("invalid quantity '{}'", qty))?;
        Ok(Self {
            product_id,
            quantity,
        })
    }
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub cart: CartArgs,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub cart: CartArgs,

    /// Active catalog tab.
    #[arg(short = 'k', long, default_value = "all")]
    pub category: CategoryFilter,

    /// Write the page to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Write a default bakery.toml in the working directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakery_observability::LogSink;

    fn view() -> StorefrontView {
        let (sink, _log) = LogSink::memory();
        StorefrontView::bakery().with_log_sink(sink)
    }

    #[test]
    fn test_parse_set_quantity() {
        let set: SetQuantity = "2=4".parse().unwrap();
        assert_eq!(set.product_id, ProductId::new(2));
        assert_eq!(set.quantity, 4);
        assert!("2".parse::<SetQuantity>().is_err());
        assert!("x=1".parse::<SetQuantity>().is_err());
        assert!("1=many".parse::<SetQuantity>().is_err());
    }

    #[test]
    fn test_cart_args_order() {
        let args = CartArgs {
            add: vec![ProductId::new(1), ProductId::new(2), ProductId::new(2)],
            set: vec!["1=3".parse().unwrap()],
            remove: vec![ProductId::new(2)],
            distance: Some("12".to_string()),
        };
        let mut view = view();
        args.apply(&mut view).unwrap();

        let pricing = view.pricing();
        assert_eq!(pricing.subtotal.amount, 3600);
        assert_eq!(pricing.delivery_fee.amount, 500);
    }

    #[derive(clap::Parser)]
    struct QuoteCli {
        #[command(flatten)]
        cart: CartArgs,
    }

    #[test]
    fn test_negative_distance_is_accepted() {
        use clap::Parser;

        let cli = QuoteCli::try_parse_from(["bakery", "--add", "1", "--distance", "-3"]).unwrap();
        assert_eq!(cli.cart.distance.as_deref(), Some("-3"));

        let mut view = view();
        cli.cart.apply(&mut view).unwrap();
        assert_eq!(view.delivery_distance().km(), -3.0);
        assert_eq!(view.pricing().delivery_fee.amount, 0);
    }

    #[test]
    fn test_set_requires_line() {
        let args = CartArgs {
            set: vec!["5=2".parse().unwrap()],
            ..Default::default()
        };
        assert!(args.apply(&mut view()).is_err());
    }

    #[test]
    fn test_unknown_add_fails() {
        let args = CartArgs {
            add: vec![ProductId::new(77)],
            ..Default::default()
        };
        let err = args.apply(&mut view()).unwrap_err();
        assert!(format!("{:#}", err).contains("Cannot add product 77"));
    }
}
