//! Catalog tabs and product grid.

use bakery_commerce::catalog::{CategoryFilter, Product};

use super::html_escape;

/// Render the catalog section: category tabs with `active` marked, then the visible products.
pub fn render_catalog(active: CategoryFilter, products: &[&Product]) -> String {
    let tabs: String = CategoryFilter::tabs()
        .map(|tab| {
            let selected = tab == active;
            format!(
                r#"<button class="tab{}" role="tab" aria-selected="{}" data-category="{}">{}</button>"#,
                if selected { " active" } else { "" },
                selected,
                tab.slug(),
                tab.label()
            )
        })
        .collect();

    let cards: String = products.iter().map(|p| render_product_card(p)).collect();

    format!(
        r#"<section id="catalog" class="catalog" data-section="catalog">
    <h2>Наше меню</h2>
    <div class="tabs" role="tablist">{}</div>
    <div class="product-grid">
        {}
    </div>
</section>"#,
        tabs, cards
    )
}

/// Render one product card with its add-to-cart button.
pub fn render_product_card(product: &Product) -> String {
    format!(
        r#"<article class="product-card" data-product-id="{id}">
        <img src="{image}" alt="{name}" class="product-image" loading="lazy">
        <div class="product-body">
            <h3 class="product-name">{name}</h3>
            <p class="product-description">{description}</p>
            <div class="product-footer">
                <span class="product-price">{price}</span>
                <button class="btn btn-primary add-to-cart" data-action="add_to_cart" data-product-id="{id}">В корзину</button>
            </div>
        </div>
    </article>"#,
        id = product.id,
        image = html_escape(&product.image_url),
        name = html_escape(&product.name),
        description = html_escape(&product.description),
        price = html_escape(&product.price.display())
    )
}
