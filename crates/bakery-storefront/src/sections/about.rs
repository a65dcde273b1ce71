//! "О нас" section.

use super::html_escape;
use crate::content::AboutContent;

/// Render the about section with its highlight figures.
pub fn render_about(about: &AboutContent) -> String {
    let paragraphs: String = about
        .paragraphs
        .iter()
        .map(|p| format!(r#"<p class="about-text">{}</p>"#, html_escape(p)))
        .collect();

    let highlights: String = about
        .highlights
        .iter()
        .map(|h| {
            format!(
                r#"<div class="highlight-card">
            <h3 class="highlight-value">{}</h3>
            <p class="highlight-caption">{}</p>
        </div>"#,
                html_escape(&h.value),
                html_escape(&h.caption)
            )
        })
        .collect();

    format!(
        r#"<section id="about" class="about" data-section="about">
    <h2>О нас</h2>
    {}
    <div class="highlights-grid">
        {}
    </div>
</section>"#,
        paragraphs, highlights
    )
}
