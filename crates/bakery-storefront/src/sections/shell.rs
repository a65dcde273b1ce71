//! Document shell wrapping the rendered sections.

use super::html_escape;

const STOREFRONT_STYLES: &str = r#"
:root { --primary: #8b4513; --accent: #f4a460; --bg: #fff8f0; --muted: #7a6a5a; }
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: 'Open Sans', sans-serif; background: var(--bg); color: #3e2723; }
h1, h2, h3, .logo { font-family: 'Playfair Display', serif; color: var(--primary); }
.site-header { position: sticky; top: 0; z-index: 50; background: rgba(255,248,240,0.95); border-bottom: 1px solid #eadbc8; }
.header-container { max-width: 1200px; margin: 0 auto; padding: 1rem; display: flex; align-items: center; justify-content: space-between; }
.nav-links { display: flex; gap: 1.5rem; }
.nav-link { color: inherit; text-decoration: none; }
.cart-button { position: relative; border: 1px solid var(--primary); background: none; border-radius: 999px; padding: 0.5rem 0.75rem; cursor: pointer; }
.cart-badge { position: absolute; top: -0.5rem; right: -0.5rem; background: var(--primary); color: #fff; border-radius: 999px; padding: 0 0.4rem; font-size: 0.75rem; }
.hero { position: relative; min-height: 70vh; background-size: cover; background-position: center; display: flex; align-items: center; }
.hero-overlay { position: absolute; inset: 0; background: linear-gradient(90deg, rgba(62,39,35,0.7), transparent); }
.hero-content { position: relative; max-width: 1200px; margin: 0 auto; padding: 2rem; color: #fff; }
.hero-headline { color: #fff; font-size: 3.5rem; }
.btn { display: inline-block; border: none; border-radius: 0.5rem; padding: 0.6rem 1.2rem; cursor: pointer; text-decoration: none; }
.btn-primary { background: var(--primary); color: #fff; }
section { max-width: 1200px; margin: 0 auto; padding: 4rem 1rem; }
.tabs { display: flex; gap: 0.5rem; margin: 1.5rem 0; }
.tab { border: 1px solid #eadbc8; background: #fff; border-radius: 0.5rem; padding: 0.4rem 1rem; cursor: pointer; }
.tab.active { background: var(--primary); color: #fff; }
.product-grid, .reviews-grid, .highlights-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }
.product-card, .review-card, .highlight-card { background: #fff; border-radius: 1rem; overflow: hidden; box-shadow: 0 4px 16px rgba(0,0,0,0.06); }
.product-image { width: 100%; height: 220px; object-fit: cover; }
.product-body, .review-card, .highlight-card { padding: 1.25rem; }
.product-footer { display: flex; justify-content: space-between; align-items: center; margin-top: 1rem; }
.product-price { font-size: 1.5rem; font-weight: 700; color: var(--primary); }
.cart-sheet { position: fixed; top: 0; right: 0; width: 400px; max-width: 100%; height: 100vh; overflow-y: auto; background: #fff; padding: 1.5rem; box-shadow: -8px 0 24px rgba(0,0,0,0.1); }
.cart-items { list-style: none; }
.cart-item { display: flex; gap: 0.75rem; align-items: center; padding: 0.75rem 0; border-bottom: 1px solid #f0e6da; }
.cart-item-image { width: 64px; height: 64px; object-fit: cover; border-radius: 0.5rem; }
.cart-row { display: flex; justify-content: space-between; padding: 0.25rem 0; }
.cart-total { font-size: 1.25rem; font-weight: 700; }
.cart-empty, .delivery-hint, .about-text, .highlight-caption { color: var(--muted); }
.review-stars { color: #f5a623; }
.site-footer { background: var(--primary); color: #fff; text-align: center; padding: 2rem; }
"#;

/// Head and body wrapper for the storefront page.
#[derive(Debug, Clone)]
pub struct PageShell {
    /// Page title.
    pub title: String,
    /// `<meta name=… content=…>` pairs.
    pub meta: Vec<(String, String)>,
    /// Inline CSS.
    pub styles: String,
}

impl PageShell {
    /// Shell titled after the store, with the storefront styles.
    pub fn new(store_name: &str) -> Self {
        Self {
            title: format!("{} | Домашняя кондитерская", store_name),
            meta: vec![
                (
                    "viewport".to_string(),
                    "width=device-width, initial-scale=1".to_string(),
                ),
                (
                    "description".to_string(),
                    "Свежие торты, пирожные и десерты с доставкой".to_string(),
                ),
            ],
            styles: STOREFRONT_STYLES.to_string(),
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Render `<head>` contents.
    pub fn render_head(&self) -> String {
        let mut html = String::new();
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", html_escape(&self.title)));
        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }
        html.push_str(&format!("<style>{}</style>\n", self.styles));
        html
    }

    /// Wrap rendered sections into a complete document.
    pub fn render(&self, body: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n{}</head>\n<body>\n<main>\n{}\n</main>\n</body>\n</html>\n",
            self.render_head(),
            body
        )
    }
}
