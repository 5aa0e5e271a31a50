//! Product domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::types::ProductId;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price. Not checked for sign unless strict validation is on.
    pub price: f64,
    pub category: String,
    pub tags: Vec<String>,
    pub in_stock: bool,
    /// When the product was created. Never changes afterwards.
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /products`.
///
/// `tags` defaults to empty and `in_stock` to `true` when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

/// Payload for `PUT /products/{id}`.
///
/// Absent and `null` fields are both left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub in_stock: Option<bool>,
}

const fn default_in_stock() -> bool {
    true
}

impl ProductUpdate {
    /// Names of the fields this update will overwrite.
    #[must_use]
    pub fn present_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_some()),
            ("description", self.description.is_some()),
            ("price", self.price.is_some()),
            ("category", self.category.is_some()),
            ("tags", self.tags.is_some()),
            ("in_stock", self.in_stock.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, present)| present.then_some(field))
        .collect()
    }
}

impl Entity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;

    const KIND: &'static str = "Product";

    fn from_create(id: ProductId, data: ProductCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
            price: data.price,
            category: data.category,
            tags: data.tags,
            in_stock: data.in_stock,
            created_at,
        }
    }

    fn id(&self) -> ProductId {
        self.id
    }

    fn apply(&mut self, update: ProductUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(in_stock) = update.in_stock {
            self.in_stock = in_stock;
        }
    }
}
