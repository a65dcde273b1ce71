//! Page footer.

use super::html_escape;

/// Render the footer with the copyright line.
pub fn render_footer(store_name: &str, year: i32) -> String {
    format!(
        r#"<footer class="site-footer" data-section="footer">
    <p class="footer-name">{}</p>
    <p class="footer-copyright">© {} Все права защищены</p>
</footer>"#,
        html_escape(store_name),
        year
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer() {
        let html = render_footer("Сладкий Дворик", 2026);
        assert!(html.contains("© 2026 Все права защищены"));
    }
}
