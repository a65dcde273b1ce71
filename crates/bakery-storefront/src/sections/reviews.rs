//! Customer reviews section.

use bakery_commerce::reviews::{Review, ReviewFeed};
use chrono::{Datelike, NaiveDate};

use super::html_escape;

const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

/// Render the reviews section.
pub fn render_reviews(feed: &ReviewFeed) -> String {
    let summary = feed
        .average_rating()
        .map(|avg| {
            format!(
                r#"<p class="reviews-summary"><span class="rating-number">{:.1}</span> ({})</p>"#,
                avg,
                reviews_label(feed.len())
            )
        })
        .unwrap_or_default();

    let cards: String = feed.reviews().iter().map(render_review).collect();

    format!(
        r#"<section id="reviews" class="reviews" data-section="reviews">
    <h2>Отзывы наших клиентов</h2>
    {}
    <div class="reviews-grid">
        {}
    </div>
</section>"#,
        summary, cards
    )
}

fn render_review(review: &Review) -> String {
    format!(
        r#"<article class="review-card">
            <header class="review-header">
                <span class="review-author">{author}</span>
                <span class="review-stars" aria-label="{rating} из 5">{stars}</span>
            </header>
            <p class="review-text">{text}</p>
            <time class="review-date" datetime="{iso}">{date}</time>
        </article>"#,
        author = html_escape(&review.author),
        rating = review.rating,
        stars = review.stars(),
        text = html_escape(&review.text),
        iso = review.date.format("%Y-%m-%d"),
        date = format_date_ru(review.date)
    )
}

/// Format a date the way Russian copy writes it, e.g. "15 января 2026".
pub fn format_date_ru(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Review count with the matching Russian plural: "1 отзыв", "3 отзыва", "5 отзывов".
pub fn reviews_label(count: usize) -> String {
    let word = match (count % 10, count % 100) {
        (1, rem) if rem != 11 => "отзыв",
        (2..=4, rem) if !(12..=14).contains(&rem) => "отзыва",
        _ => "отзывов",
    };
    format!("{} {}", count, word)
}
