//! A scripted visitor session through the storefront.

use bakery_commerce::catalog::{Category, CategoryFilter};
use bakery_commerce::ProductId;
use bakery_observability::{LogLevel, LogSink, SessionId, StructuredLogger};
use bakery_storefront::{Action, StoreConfig, StorefrontView};

fn logged_view() -> (StorefrontView, bakery_observability::MemoryLog) {
    let (sink, log) = LogSink::memory();
    let logger = StructuredLogger::new(SessionId::from_string("test-session"))
        .with_component("storefront")
        .with_min_level(LogLevel::Debug)
        .with_sink(sink);
    (StorefrontView::bakery().with_logger(logger), log)
}

#[test]
fn test_full_session() {
    let (mut view, log) = logged_view();

    let script = vec![
        Action::SelectCategory {
            category: CategoryFilter::Only(Category::Cakes),
        },
        Action::AddToCart {
            product_id: ProductId::new(1),
        },
        Action::AddToCart {
            product_id: ProductId::new(5),
        },
        Action::Increment {
            product_id: ProductId::new(5),
        },
        Action::SelectCategory {
            category: CategoryFilter::All,
        },
        Action::AddToCart {
            product_id: ProductId::new(6),
        },
        Action::Decrement {
            product_id: ProductId::new(1),
        },
        Action::SetDeliveryDistance {
            input: "10".to_string(),
        },
    ];

    for action in script {
        view.apply(action).unwrap();
    }

    let snapshot = view.snapshot();
    assert_eq!(snapshot.badge_count, 2);
    // 890 * 2 + 380
    assert_eq!(snapshot.pricing.subtotal.amount, 2160);
    assert_eq!(snapshot.pricing.delivery_fee.amount, 300);
    assert_eq!(snapshot.pricing.total.amount, 2460);
    assert_eq!(snapshot.delivery_hint, "Доставка: 300 ₽");

    let messages = log.messages();
    assert!(messages.iter().any(|m| m == "Added to cart"));
    assert!(messages.iter().any(|m| m == "Delivery distance set"));
    assert!(log
        .entries()
        .iter()
        .all(|e| e.session_id == "test-session" && e.component.as_deref() == Some("storefront")));
}

#[test]
fn test_unknown_product_leaves_state_unchanged() {
    let (mut view, log) = logged_view();
    view.add_to_cart(ProductId::new(2)).unwrap();
    let before = view.snapshot();

    assert!(view
        .apply(Action::AddToCart {
            product_id: ProductId::new(404),
        })
        .is_err());

    assert_eq!(view.snapshot(), before);
    assert!(log.entries().iter().any(|e| e.level == LogLevel::Warn));
}

#[test]
fn test_rendered_page_reflects_state() {
    let (mut view, _log) = logged_view();
    let empty = view.render_page();
    assert!(empty.contains("Корзина пуста"));
    assert!(!empty.contains("class=\"cart-badge\""));
    assert_eq!(empty.matches("class=\"product-card\"").count(), 6);

    view.select_category(CategoryFilter::Only(Category::Eclairs));
    view.add_to_cart(ProductId::new(4)).unwrap();
    view.set_delivery_input("2");

    let page = view.render_page();
    assert!(page.contains(r#"<span class="cart-badge">1</span>"#));
    assert_eq!(page.matches("class=\"product-card\"").count(), 1);
    assert!(page.contains("Бесплатная доставка! 🎉"));
    assert!(page.contains("Итого:</span><span class=\"amount\">550 ₽"));
    assert!(page.contains("Отзывы наших клиентов"));
    assert!(page.contains("© 2026 Все права защищены"));
}

#[test]
fn test_config_drives_view() {
    let config = StoreConfig::from_toml_str(
        r#"
[store]
name = "Пекарня на углу"
default_distance_km = 4.0

[delivery]
beyond_fee = 250

[[delivery.tiers]]
up_to_km = 5.0
fee = 0
"#,
    )
    .unwrap();

    let (sink, _log) = LogSink::memory();
    let mut view = StorefrontView::from_config(&config).with_log_sink(sink);
    view.add_to_cart(ProductId::new(3)).unwrap();
    assert_eq!(view.pricing().delivery_fee.amount, 0);

    view.set_delivery_input("6");
    assert_eq!(view.pricing().total.amount, 980 + 250);
    assert!(view.render_page().contains("Пекарня на углу"));
}
