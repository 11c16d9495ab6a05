//! Product entity and its insert/patch companions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// The reserved category filter value meaning "no filter".
///
/// Never stored on a product; only meaningful as a query parameter.
pub const ALL_CATEGORIES: &str = "All";

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price. Orders snapshot this into their items at purchase time.
    pub price: Decimal,
    /// Free-text category. `"All"` is reserved for queries and never stored.
    pub category: String,
    pub available: bool,
}

/// Data for creating a product. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    /// Defaults to `true` when absent.
    #[serde(default)]
    pub available: Option<bool>,
}

/// Partial product update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

impl Product {
    /// Apply a partial update, overwriting only the fields the patch carries.
    pub fn apply(&mut self, patch: ProductPatch) {
        let ProductPatch {
            name,
            description,
            price,
            category,
            available,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(available) = available {
            self.available = available;
        }
    }
}
