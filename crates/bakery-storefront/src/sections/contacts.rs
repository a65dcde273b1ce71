//! Contacts section.

use super::html_escape;
use crate::content::ContactsContent;

/// Render the contacts section.
pub fn render_contacts(contacts: &ContactsContent) -> String {
    format!(
        r#"<section id="contacts" class="contacts" data-section="contacts">
    <h2>Контакты</h2>
    <div class="contact-item">
        <h3>Адрес</h3>
        <p>{address}</p>
    </div>
    <div class="contact-item">
        <h3>Телефон</h3>
        <p><a href="{tel}">{phone}</a></p>
    </div>
    <div class="contact-item">
        <h3>Режим работы</h3>
        <p>{hours}</p>
    </div>
</section>"#,
        address = html_escape(&contacts.address),
        tel = html_escape(&contacts.phone_uri()),
        phone = html_escape(&contacts.phone),
        hours = html_escape(&contacts.hours)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::StoreContent;

    #[test]
    fn test_contacts() {
        let html = render_contacts(&StoreContent::bakery().contacts);
        assert!(html.contains("г. Москва, ул. Кондитерская, д. 15"));
        assert!(html.contains(r#"href="tel:+74951234567""#));
        assert!(html.contains("Ежедневно с 9:00 до 21:00"));
    }
}
