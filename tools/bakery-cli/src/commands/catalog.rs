//! List catalog products.

use anyhow::Result;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::price;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let mut view = ctx.storefront();
    view.select_category(args.category);
    let products = view.visible_products();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output
        .header(&format!("Наше меню: {} ({})", args.category.label(), products.len()));

    for product in &products {
        let id = product.id.to_string();
        let amount = price(product.price);
        ctx.output.table_row(
            &[&id, product.category.label(), &product.name, &amount],
            &[3, 10, 28, 10],
        );
        if !product.description.is_empty() {
            ctx.output.debug(&product.description);
        }
    }

    Ok(())
}
