//! Sticky header with navigation and cart button.

use super::html_escape;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#catalog", "Каталог"),
    ("#about", "О нас"),
    ("#reviews", "Отзывы"),
    ("#contacts", "Контакты"),
];

/// Render the header. The badge is omitted while the cart is empty.
pub fn render_header(store_name: &str, badge_count: usize) -> String {
    let nav: String = NAV_LINKS
        .iter()
        .map(|(href, label)| format!(r#"<a href="{}" class="nav-link">{}</a>"#, href, label))
        .collect();

    let badge = if badge_count > 0 {
        format!(r#"<span class="cart-badge">{}</span>"#, badge_count)
    } else {
        String::new()
    };

    format!(
        r##"<header class="site-header" data-section="header">
    <div class="header-container">
        <a href="#" class="logo">{name}</a>
        <nav class="nav-links">{nav}</nav>
        <button class="cart-button" aria-label="Корзина" data-open="cart">
            <span class="cart-icon">🛒</span>
            {badge}
        </button>
    </div>
</header>"##,
        name = html_escape(store_name),
        nav = nav,
        badge = badge
    )
}
