//! Customer review feed.

use crate::error::CommerceError;
use crate::ids::ReviewId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Individual review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub text: String,
    pub date: NaiveDate,
}

impl Review {
    /// Create a review, rejecting ratings outside 1..=5.
    pub fn new(
        id: ReviewId,
        author: impl Into<String>,
        rating: u8,
        text: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, CommerceError> {
        if !(1..=5).contains(&rating) {
            return Err(CommerceError::InvalidRating(rating));
        }
        Ok(Self {
            id,
            author: author.into(),
            rating,
            text: text.into(),
            date,
        })
    }

    /// Render star rating as text.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// Read-only list of reviews shown on the storefront.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct ReviewFeed {
    reviews: Vec<Review>,
}

impl ReviewFeed {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    /// The bakery's static review feed.
    pub fn bakery() -> Self {
        let entries: [(u32, &str, u8, &str, u32); 3] = [
            (
                1,
                "Анна Смирнова",
                5,
                "Заказывала торт Прага на день рождения. Все гости были в восторге! Очень вкусный и красивый.",
                15,
            ),
            (
                2,
                "Михаил Петров",
                5,
                "Макаруны просто восхитительные! Нежные, тают во рту. Доставка быстрая.",
                12,
            ),
            (
                3,
                "Елена Волкова",
                4,
                "Отличное качество, свежие продукты. Немного дороговато, но того стоит.",
                8,
            ),
        ];

        let reviews = entries
            .into_iter()
            .filter_map(|(id, author, rating, text, day)| {
                let date = NaiveDate::from_ymd_opt(2026, 1, day)?;
                Review::new(ReviewId::new(id), author, rating, text, date).ok()
            })
            .collect();

        Self { reviews }
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Mean rating, or `None` for an empty feed.
    pub fn average_rating(&self) -> Option<f32> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(sum as f32 / self.reviews.len() as f32)
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}
