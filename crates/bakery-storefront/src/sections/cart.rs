//! Cart sheet.

use bakery_commerce::cart::{DeliveryDistance, LineItem};

use super::html_escape;
use crate::view::CartSnapshot;

/// Render the cart sheet: line items, delivery field and totals, or the empty state.
pub fn render_cart(snapshot: &CartSnapshot, distance: DeliveryDistance) -> String {
    let body = if snapshot.items.is_empty() {
        r#"<p class="cart-empty">Корзина пуста</p>"#.to_string()
    } else {
        let items: String = snapshot.items.iter().map(render_line_item).collect();
        let pricing = &snapshot.pricing;

        format!(
            r#"<ul class="cart-items">
            {items}
        </ul>
        <div class="cart-delivery">
            <label for="delivery">Расстояние доставки (км)</label>
            <input id="delivery" type="number" min="0" step="0.1" value="{km}" data-action="set_delivery_distance">
            <p class="delivery-hint">{hint}</p>
        </div>
        <div class="cart-totals">
            <div class="cart-row"><span>Товары:</span><span class="amount">{subtotal}</span></div>
            <div class="cart-row"><span>Доставка:</span><span class="amount">{fee}</span></div>
            <div class="cart-row cart-total"><span>Итого:</span><span class="amount">{total}</span></div>
        </div>
        <button class="btn btn-primary checkout">Оформить заказ</button>"#,
            items = items,
            km = distance.km(),
            hint = html_escape(&snapshot.delivery_hint),
            subtotal = pricing.subtotal.display(),
            fee = pricing.delivery_fee.display(),
            total = pricing.total.display()
        )
    };

    format!(
        r#"<aside class="cart-sheet" data-section="cart">
    <h2 class="cart-title">Корзина</h2>
    <div class="cart-body">
        {}
    </div>
</aside>"#,
        body
    )
}

fn render_line_item(item: &LineItem) -> String {
    format!(
        r#"<li class="cart-item" data-product-id="{id}">
                <img src="{image}" alt="{name}" class="cart-item-image">
                <div class="cart-item-info">
                    <p class="cart-item-name">{name}</p>
                    <p class="cart-item-price">{price}</p>
                </div>
                <div class="cart-item-controls">
                    <button class="qty-btn" data-action="decrement" data-product-id="{id}">−</button>
                    <span class="qty">{qty}</span>
                    <button class="qty-btn" data-action="increment" data-product-id="{id}">+</button>
                    <button class="remove-btn" data-action="remove_from_cart" data-product-id="{id}" aria-label="Удалить">🗑</button>
                </div>
            </li>"#,
        id = item.product_id,
        image = html_escape(&item.image_url),
        name = html_escape(&item.name),
        price = item.unit_price.display(),
        qty = item.quantity
    )
}
