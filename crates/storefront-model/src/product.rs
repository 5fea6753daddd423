//! Catalog product records.

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId, Universe};

/// An immutable catalog product.
///
/// Products are owned by the catalog and shared by reference with the cart,
/// the detail session and the rendered views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub universe: Universe,
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_old: Option<Price>,
    /// Size labels in display order.
    pub sizes: Vec<String>,
    /// Sizes that are listed but currently out of stock.
    #[serde(default)]
    pub sizes_off: Vec<String>,
    /// Color values (CSS colors) in display order.
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub img_seed: u32,
    pub category: String,
    #[serde(default)]
    pub meta: String,
    #[serde(default, alias = "desc")]
    pub description: String,
}

impl Product {
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// True if the size is listed and not marked unavailable.
    pub fn is_size_available(&self, size: &str) -> bool {
        self.has_size(size) && !self.sizes_off.iter().any(|s| s == size)
    }

    /// Listed sizes that are in stock, in display order.
    pub fn available_sizes(&self) -> impl Iterator<Item = &str> {
        self.sizes
            .iter()
            .map(String::as_str)
            .filter(|size| self.is_size_available(size))
    }

    /// The size pre-selected when the product is inspected: the first
    /// available size, or the first listed size when none is available.
    pub fn default_size(&self) -> Option<&str> {
        self.available_sizes()
            .next()
            .or_else(|| self.sizes.first().map(String::as_str))
    }

    pub fn default_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    /// Case-insensitive category comparison.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}
