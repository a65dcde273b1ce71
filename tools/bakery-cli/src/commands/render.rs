//! Render the storefront page.

use anyhow::{Context as _, Result};

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut view = ctx.storefront();
    view.select_category(args.category);
    args.cart.apply(&mut view)?;

    let html = view.render_page();

    match args.output {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "bytes": html.len(),
                    "cart": view.snapshot(),
                }));
            } else {
                ctx.output
                    .success(&format!("Wrote {} ({} bytes)", path.display(), html.len()));
            }
        }
        None => print!("{}", html),
    }

    Ok(())
}
