//! Static page copy.

use serde::{Deserialize, Serialize};

const HERO_IMAGE: &str = "https://cdn.poehali.dev/projects/1b462873-6ca0-4712-8f05-9a57ffa723dd/files/6887c62d-2257-46b5-b8c5-747592260a06.jpg";

/// All non-catalog copy on the storefront page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreContent {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub contacts: ContactsContent,
    /// Year shown in the footer copyright line.
    pub copyright_year: i32,
}

/// Hero banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub headline: String,
    pub subtitle: String,
    pub background_url: String,
    pub cta_label: String,
}

/// "About us" block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub paragraphs: Vec<String>,
    pub highlights: Vec<Highlight>,
}

/// A headline figure with its caption, e.g. "10+ лет" / "на рынке".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub value: String,
    pub caption: String,
}

impl Highlight {
    pub fn new(value: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            caption: caption.into(),
        }
    }
}

/// Contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactsContent {
    pub address: String,
    pub phone: String,
    pub hours: String,
}

impl ContactsContent {
    /// Phone number as a `tel:` URI, keeping only `+` and digits.
    pub fn phone_uri(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

impl StoreContent {
    /// Copy for the "Сладкий Дворик" storefront.
    pub fn bakery() -> Self {
        Self {
            hero: HeroContent {
                headline: "Домашняя выпечка с любовью".to_string(),
                subtitle: "Свежие торты, пирожные и десерты из лучших ингредиентов".to_string(),
                background_url: HERO_IMAGE.to_string(),
                cta_label: "Смотреть каталог".to_string(),
            },
            about: AboutContent {
                paragraphs: vec![
                    "Кондитерская \"Сладкий Дворик\" работает с 2015 года. Мы создаем десерты по \
                     классическим рецептам, используя только натуральные ингредиенты высшего качества."
                        .to_string(),
                    "Каждый торт и пирожное мы готовим с любовью и вниманием к деталям. Наша цель: \
                     радовать вас вкусом и создавать праздничное настроение!"
                        .to_string(),
                ],
                highlights: vec![
                    Highlight::new("10+ лет", "на рынке"),
                    Highlight::new("5000+", "довольных клиентов"),
                    Highlight::new("100%", "натуральные продукты"),
                ],
            },
            contacts: ContactsContent {
                address: "г. Москва, ул. Кондитерская, д. 15".to_string(),
                phone: "+7 (495) 123-45-67".to_string(),
                hours: "Ежедневно с 9:00 до 21:00".to_string(),
            },
            copyright_year: 2026,
        }
    }
}

impl Default for StoreContent {
    fn default() -> Self {
        Self::bakery()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bakery_highlights() {
        let content = StoreContent::bakery();
        let values: Vec<_> = content.about.highlights.iter().map(|h| h.value.as_str()).collect();
        assert_eq!(values, ["10+ лет", "5000+", "100%"]);
        assert_eq!(content.copyright_year, 2026);
    }

    #[test]
    fn test_phone_uri() {
        let content = StoreContent::bakery();
        assert_eq!(content.contacts.phone_uri(), "tel:+74951234567");
    }
}
