//! Show customer reviews.

use anyhow::Result;
use bakery_storefront::sections::{format_date_ru, reviews_label};
use console::style;

use crate::context::Context;

/// Run the reviews command.
pub fn run(ctx: &Context) -> Result<()> {
    let view = ctx.storefront();
    let feed = view.reviews();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "average_rating": feed.average_rating(),
            "reviews": feed.reviews(),
        }));
        return Ok(());
    }

    ctx.output.header("Отзывы наших клиентов");

    if let Some(avg) = feed.average_rating() {
        let summary = format!("{:.1} ({})", avg, reviews_label(feed.len()));
        ctx.output.kv("Средняя оценка", &summary);
    }

    for review in feed.reviews() {
        println!();
        println!(
            "  {} {}  {}",
            style(review.stars()).yellow(),
            style(&review.author).bold(),
            style(format_date_ru(review.date)).dim()
        );
        println!("  {}", review.text);
    }

    Ok(())
}
