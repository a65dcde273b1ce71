//! Storefront session state.

use bakery_commerce::cart::{Cart, CartPricing, DeliveryDistance, DeliveryTiers, LineItem};
use bakery_commerce::catalog::{Catalog, CategoryFilter, Product};
use bakery_commerce::reviews::ReviewFeed;
use bakery_commerce::{CommerceError, Money, ProductId};
use bakery_observability::{LogSink, SessionId, StructuredLogger};
use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::content::StoreContent;
use crate::sections;

/// A user action on the storefront page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Switch the catalog tab.
    SelectCategory { category: CategoryFilter },
    /// "В корзину" on a product card.
    AddToCart { product_id: ProductId },
    /// "+" in the cart sheet.
    Increment { product_id: ProductId },
    /// "−" in the cart sheet.
    Decrement { product_id: ProductId },
    /// Set a line's quantity directly.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Trash button in the cart sheet.
    RemoveFromCart { product_id: ProductId },
    /// Text typed into the delivery distance field.
    SetDeliveryDistance { input: String },
}

/// Everything the cart sheet and header badge display, derived from current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub pricing: CartPricing,
    /// Number of distinct products in the cart.
    pub badge_count: usize,
    pub delivery_hint: String,
}

/// The storefront page for one visitor.
#[derive(Debug, Clone)]
pub struct StorefrontView {
    store_name: String,
    catalog: Catalog,
    reviews: ReviewFeed,
    content: StoreContent,
    tiers: DeliveryTiers,
    cart: Cart,
    filter: CategoryFilter,
    distance: DeliveryDistance,
    logger: StructuredLogger,
}

impl StorefrontView {
    /// Create a view over a catalog and review feed with default settings.
    pub fn new(catalog: Catalog, reviews: ReviewFeed) -> Self {
        let config = StoreConfig::default();
        let cart = Cart::new();
        let logger = StructuredLogger::new(SessionId::generate()).with_component("storefront");

        Self {
            store_name: config.store.name,
            catalog,
            reviews,
            content: StoreContent::bakery(),
            tiers: config.delivery,
            cart,
            filter: CategoryFilter::All,
            distance: DeliveryDistance::new(config.store.default_distance_km),
            logger,
        }
    }

    /// The bakery storefront with its built-in catalog and reviews.
    pub fn bakery() -> Self {
        Self::new(Catalog::bakery(), ReviewFeed::bakery())
    }

    /// The bakery storefront using store name, delivery tiers and logging from config.
    pub fn from_config(config: &StoreConfig) -> Self {
        let logger = StructuredLogger::new(SessionId::generate())
            .with_component("storefront")
            .with_min_level(config.logging.level)
            .with_format(config.logging.format);

        Self {
            store_name: config.store.name.clone(),
            tiers: config.delivery.clone(),
            distance: DeliveryDistance::new(config.store.default_distance_km),
            logger,
            ..Self::bakery()
        }
    }

    /// Replace the logger.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Route log entries to another sink, keeping level and format.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.logger = self.logger.with_sink(sink);
        self
    }

    /// Replace the static page copy.
    pub fn with_content(mut self, content: StoreContent) -> Self {
        self.content = content;
        self
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn reviews(&self) -> &ReviewFeed {
        &self.reviews
    }

    pub fn content(&self) -> &StoreContent {
        &self.content
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn tiers(&self) -> &DeliveryTiers {
        &self.tiers
    }

    pub fn category(&self) -> CategoryFilter {
        self.filter
    }

    pub fn delivery_distance(&self) -> DeliveryDistance {
        self.distance
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Switch the active catalog tab.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.logger
            .debug_builder("Category selected")
            .field("category", filter.slug())
            .field_i64("visible", self.visible_products().len() as i64)
            .emit();
    }

    /// Products shown under the active tab, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter(&self.filter)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of a catalog product. Returns the product's new quantity.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<i64, CommerceError> {
        let product = match self.catalog.require(product_id) {
            Ok(product) => product,
            Err(e) => {
                self.logger
                    .warn_builder("Add to cart for unknown product")
                    .field_i64("product_id", i64::from(product_id.get()))
                    .emit();
                return Err(e);
            }
        };

        let quantity = self.cart.add_to_cart(product);
        self.logger
            .debug_builder("Added to cart")
            .field_i64("product_id", i64::from(product_id.get()))
            .field_i64("quantity", quantity)
            .field_i64("lines", self.cart.len() as i64)
            .emit();
        Ok(quantity)
    }

    /// Raise a line's quantity by one. No-op for products not in the cart.
    pub fn increment(&mut self, product_id: ProductId) -> bool {
        match self.cart.get(product_id) {
            Some(item) => {
                let quantity = item.quantity.saturating_add(1);
                self.update_quantity(product_id, quantity)
            }
            None => self.missing_line(product_id, "increment"),
        }
    }

    /// Lower a line's quantity by one, removing it when it reaches zero.
    pub fn decrement(&mut self, product_id: ProductId) -> bool {
        match self.cart.get(product_id) {
            Some(item) => {
                let quantity = item.quantity.saturating_sub(1);
                self.update_quantity(product_id, quantity)
            }
            None => self.missing_line(product_id, "decrement"),
        }
    }

    /// Set a line's quantity; zero or below removes it.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        let changed = self.cart.update_quantity(product_id, quantity);
        if changed {
            self.logger
                .debug_builder("Quantity updated")
                .field_i64("product_id", i64::from(product_id.get()))
                .field_i64("quantity", quantity.max(0))
                .field_bool("removed", quantity <= 0)
                .emit();
        } else {
            self.missing_line(product_id, "update_quantity");
        }
        changed
    }

    /// Drop a line from the cart.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        let removed = self.cart.remove_from_cart(product_id);
        if removed {
            self.logger
                .debug_builder("Removed from cart")
                .field_i64("product_id", i64::from(product_id.get()))
                .field_i64("lines", self.cart.len() as i64)
                .emit();
        } else {
            self.missing_line(product_id, "remove_from_cart");
        }
        removed
    }

    fn missing_line(&self, product_id: ProductId, operation: &str) -> bool {
        self.logger
            .debug_builder("Product not in cart")
            .field("operation", operation)
            .field_i64("product_id", i64::from(product_id.get()))
            .emit();
        false
    }

    // =========================================================================
    // Delivery
    // =========================================================================

    /// Set the distance from raw field text. Unparseable text counts as 0 km.
    pub fn set_delivery_input(&mut self, input: &str) {
        let distance = DeliveryDistance::parse(input);
        if distance.km() == 0.0 && input.trim().parse::<f64>().is_err() {
            self.logger
                .debug_builder("Delivery input not numeric")
                .field("input", input)
                .emit();
        }
        self.set_delivery_distance(distance);
    }

    pub fn set_delivery_distance(&mut self, distance: DeliveryDistance) {
        self.distance = distance;
        self.logger
            .debug_builder("Delivery distance set")
            .field_f64("distance_km", distance.km())
            .field_i64("fee", self.tiers.fee_for(distance))
            .emit();
    }

    /// Hint under the delivery field.
    pub fn delivery_hint(&self) -> String {
        let fee = self.tiers.fee_for(self.distance);
        if fee == 0 {
            "Бесплатная доставка! 🎉".to_string()
        } else {
            format!("Доставка: {}", Money::new(fee).display())
        }
    }

    // =========================================================================
    // Dispatch and derived state
    // =========================================================================

    /// Apply one user action.
    pub fn apply(&mut self, action: Action) -> Result<(), CommerceError> {
        match action {
            Action::SelectCategory { category } => self.select_category(category),
            Action::AddToCart { product_id } => {
                self.add_to_cart(product_id)?;
            }
            Action::Increment { product_id } => {
                self.increment(product_id);
            }
            Action::Decrement { product_id } => {
                self.decrement(product_id);
            }
            Action::UpdateQuantity {
                product_id,
                quantity,
            } => {
                self.update_quantity(product_id, quantity);
            }
            Action::RemoveFromCart { product_id } => {
                self.remove_from_cart(product_id);
            }
            Action::SetDeliveryDistance { input } => self.set_delivery_input(&input),
        }
        Ok(())
    }

    /// Pricing at the current distance.
    pub fn pricing(&self) -> CartPricing {
        self.cart.pricing(&self.tiers, self.distance)
    }

    /// Current cart contents and totals.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.cart.items().to_vec(),
            pricing: self.pricing(),
            badge_count: self.cart.len(),
            delivery_hint: self.delivery_hint(),
        }
    }

    /// Render the full storefront page.
    pub fn render_page(&self) -> String {
        let snapshot = self.snapshot();
        let visible = self.visible_products();

        let body = [
            sections::render_header(&self.store_name, snapshot.badge_count),
            sections::render_hero(&self.content.hero),
            sections::render_catalog(self.filter, &visible),
            sections::render_cart(&snapshot, self.distance),
            sections::render_about(&self.content.about),
            sections::render_reviews(&self.reviews),
            sections::render_contacts(&self.content.contacts),
            sections::render_footer(&self.store_name, self.content.copyright_year),
        ]
        .join("\n");

        self.logger
            .debug_builder("Page rendered")
            .field_i64("bytes", body.len() as i64)
            .field_i64("visible_products", visible.len() as i64)
            .emit();

        sections::PageShell::new(&self.store_name).render(&body)
    }
}

impl Default for StorefrontView {
    fn default() -> Self {
        Self::bakery()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bakery_commerce::catalog::Category;
    use bakery_observability::LogLevel;

    fn quiet_view() -> StorefrontView {
        let (sink, _log) = LogSink::memory();
        StorefrontView::bakery().with_log_sink(sink)
    }

    #[test]
    fn test_initial_state() {
        let view = quiet_view();
        assert_eq!(view.category(), CategoryFilter::All);
        assert_eq!(view.delivery_distance().km(), 5.0);
        assert!(view.cart().is_empty());
        assert_eq!(view.visible_products().len(), 6);
    }

    #[test]
    fn test_select_category() {
        let mut view = quiet_view();
        view.select_category(Category::Cakes.into());
        let ids: Vec<u32> = view.visible_products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, [1, 3, 5]);
    }

    #[test]
    fn test_add_unknown_product() {
        let mut view = quiet_view();
        let err = view.add_to_cart(ProductId::new(99)).unwrap_err();
        assert!(matches!(err, CommerceError::ProductNotFound(_)));
        assert!(view.cart().is_empty());
    }

    #[test]
    fn test_end_to_end_totals() {
        let mut view = quiet_view();
        view.add_to_cart(ProductId::new(1)).unwrap();
        view.add_to_cart(ProductId::new(2)).unwrap();
        assert_eq!(view.add_to_cart(ProductId::new(2)).unwrap(), 2);

        let snapshot = view.snapshot();
        assert_eq!(snapshot.pricing.subtotal.amount, 2100);
        assert_eq!(snapshot.pricing.delivery_fee.amount, 150);
        assert_eq!(snapshot.pricing.total.amount, 2250);
        assert_eq!(snapshot.badge_count, 2);
    }

    #[test]
    fn test_decrement_from_one_removes() {
        let mut view = quiet_view();
        view.add_to_cart(ProductId::new(4)).unwrap();
        assert!(view.decrement(ProductId::new(4)));
        assert!(view.cart().is_empty());
        assert!(!view.decrement(ProductId::new(4)));
    }

    #[test]
    fn test_increment_absent_is_noop() {
        let mut view = quiet_view();
        assert!(!view.increment(ProductId::new(1)));
        assert!(view.cart().is_empty());
    }

    #[test]
    fn test_delivery_hint() {
        let mut view = quiet_view();
        assert_eq!(view.delivery_hint(), "Доставка: 150 ₽");
        view.set_delivery_input("3");
        assert_eq!(view.delivery_hint(), "Бесплатная доставка! 🎉");
        view.set_delivery_input("12");
        assert_eq!(view.delivery_hint(), "Доставка: 500 ₽");
        view.set_delivery_input("abc");
        assert_eq!(view.delivery_distance().km(), 0.0);
        assert_eq!(view.delivery_hint(), "Бесплатная доставка! 🎉");
    }

    #[test]
    fn test_apply_actions_from_json() {
        let mut view = quiet_view();
        let actions: Vec<Action> = serde_json::from_str(
            r#"[
                {"action": "add_to_cart", "product_id": 3},
                {"action": "increment", "product_id": 3},
                {"action": "select_category", "category": "eclairs"},
                {"action": "set_delivery_distance", "input": "7.5"}
            ]"#,
        )
        .unwrap();

        for action in actions {
            view.apply(action).unwrap();
        }

        assert_eq!(view.cart().get(ProductId::new(3)).unwrap().quantity, 2);
        assert_eq!(view.category(), CategoryFilter::Only(Category::Eclairs));
        assert_eq!(view.pricing().delivery_fee.amount, 300);
        assert_eq!(view.pricing().total.amount, 2260);
    }

    #[test]
    fn test_apply_propagates_unknown_product() {
        let mut view = quiet_view();
        assert!(view
            .apply(Action::AddToCart {
                product_id: ProductId::new(42)
            })
            .is_err());
    }

    #[test]
    fn test_unknown_product_logs_warning() {
        let (sink, log) = LogSink::memory();
        let mut view = StorefrontView::bakery().with_log_sink(sink);
        let _ = view.add_to_cart(ProductId::new(7));

        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Warn);
        assert_eq!(entries[0].fields["product_id"], serde_json::json!(7));
    }

    #[test]
    fn test_from_config_uses_tiers() {
        let config = StoreConfig::from_toml_str(
            r#"
[store]
name = "Пекарня"
default_distance_km = 1.0
"#,
        )
        .unwrap();
        let view = StorefrontView::from_config(&config);
        assert_eq!(view.store_name(), "Пекарня");
        assert_eq!(view.pricing().delivery_fee.amount, 0);
    }
}
