//! Price a cart.

use anyhow::Result;

use super::QuoteArgs;
use crate::context::Context;
use crate::output::price;

/// Run the quote command.
pub fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let mut view = ctx.storefront();
    args.cart.apply(&mut view)?;
    let snapshot = view.snapshot();

    if ctx.output.is_json() {
        ctx.output.json(&snapshot);
        return Ok(());
    }

    ctx.output.header("Корзина");

    if snapshot.items.is_empty() {
        ctx.output.info("Корзина пуста");
    }

    for item in &snapshot.items {
        let qty = format!("× {}", item.quantity);
        let unit = item.unit_price.display();
        let total = price(item.total_price());
        ctx.output
            .table_row(&[&item.name, &qty, &unit, &total], &[28, 6, 10, 10]);
    }

    let pricing = &snapshot.pricing;
    println!();
    ctx.output
        .kv("Расстояние", &format!("{} км", view.delivery_distance().km()));
    ctx.output.kv("Товары", &price(pricing.subtotal));
    ctx.output.kv("Доставка", &price(pricing.delivery_fee));
    ctx.output.kv("Итого", &price(pricing.total));
    ctx.output.info(&snapshot.delivery_hint);

    Ok(())
}
