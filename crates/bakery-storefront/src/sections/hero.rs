//! Hero banner.

use super::html_escape;
use crate::content::HeroContent;

/// Render the hero section.
pub fn render_hero(hero: &HeroContent) -> String {
    format!(
        r##"<section class="hero" data-section="hero" style="background-image: url('{bg}')">
    <div class="hero-overlay"></div>
    <div class="hero-content">
        <h2 class="hero-headline">{headline}</h2>
        <p class="hero-subtitle">{subtitle}</p>
        <a href="#catalog" class="btn btn-primary hero-cta">{cta}</a>
    </div>
</section>"##,
        bg = html_escape(&hero.background_url),
        headline = html_escape(&hero.headline),
        subtitle = html_escape(&hero.subtitle),
        cta = html_escape(&hero.cta_label)
    )
}
