//! Product and catalog types.

use crate::catalog::{Category, CategoryFilter};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const CAKE_IMAGE: &str = "https://cdn.poehali.dev/projects/1b462873-6ca0-4712-8f05-9a57ffa723dd/files/8cd7092c-6808-47f5-ab1d-ba923e6c8b52.jpg";
const PASTRY_IMAGE: &str = "https://cdn.poehali.dev/projects/1b462873-6ca0-4712-8f05-9a57ffa723dd/files/be97dd0f-ebe2-4d96-8a53-919a6b8d295e.jpg";

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Category tag.
    pub category: Category,
    /// Image URL, passed through to the page untouched.
    pub image_url: String,
    /// Short description for the product card.
    pub description: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
            image_url: String::new(),
            description: String::new(),
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// An ordered, read-only product list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// The bakery's static catalog.
    pub fn bakery() -> Self {
        let products = vec![
            Product::new(
                ProductId::new(1),
                "Шоколадный торт \"Прага\"",
                Money::new(1200),
                Category::Cakes,
            )
            .with_image(CAKE_IMAGE)
            .with_description("Классический торт с шоколадным кремом"),
            Product::new(
                ProductId::new(2),
                "Французские макаруны",
                Money::new(450),
                Category::Macarons,
            )
            .with_image(PASTRY_IMAGE)
            .with_description("Набор из 6 макарунов разных вкусов"),
            Product::new(ProductId::new(3), "Чизкейк Нью-Йорк", Money::new(980), Category::Cakes)
                .with_image(CAKE_IMAGE)
                .with_description("Нежный чизкейк с ягодным соусом"),
            Product::new(ProductId::new(4), "Эклеры ассорти", Money::new(550), Category::Eclairs)
                .with_image(PASTRY_IMAGE)
                .with_description("Набор из 4 эклеров с разными начинками"),
            Product::new(ProductId::new(5), "Медовик домашний", Money::new(890), Category::Cakes)
                .with_image(CAKE_IMAGE)
                .with_description("Торт из медовых коржей со сметанным кремом"),
            Product::new(
                ProductId::new(6),
                "Капкейки шоколадные",
                Money::new(380),
                Category::Cupcakes,
            )
            .with_image(PASTRY_IMAGE)
            .with_description("Набор из 4 капкейков с кремом"),
        ];
        Self { products }
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Find a product by ID.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find a product by ID, failing if it is not in the catalog.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Products visible under a tab, in catalog order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bakery()
    }
}
