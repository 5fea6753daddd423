//! Cart ledger.
//!
//! An ordered list of lines, each keyed by `(product, size, color)`. Adding a
//! line whose key is already present merges the quantity into the existing
//! line and keeps its position; a new key is appended at the end.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storefront_model::{Price, Product, ProductId};

use crate::error::StoreError;

/// Identity of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: ProductId,
    pub size: String,
    pub color: String,
}

impl LineKey {
    pub fn new(product_id: ProductId, size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            product_id,
            size: size.into(),
            color: color.into(),
        }
    }
}

/// One cart line. `qty` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Arc<Product>,
    pub size: String,
    pub color: String,
    pub qty: u32,
}

impl CartLine {
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product.id.clone(), &self.size, &self.color)
    }

    fn matches(&self, product_id: &ProductId, size: &str, color: &str) -> bool {
        self.product.id == *product_id && self.size == size && self.color == color
    }

    pub fn subtotal(&self) -> Price {
        self.product.price.times(self.qty)
    }
}

/// What [`CartLedger::add_item`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended at `index`.
    Appended { index: usize },
    /// An existing line at `index` now holds `qty`.
    Merged { index: usize, qty: u32 },
}

#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` units of a product variant. A quantity of zero is treated as 1.
    pub fn add_item(
        &mut self,
        product: Arc<Product>,
        size: impl Into<String>,
        color: impl Into<String>,
        qty: u32,
    ) -> AddOutcome {
        let size = size.into();
        let color = color.into();
        let qty = qty.max(1);

        if let Some(index) = self
            .lines
            .iter()
            .position(|line| line.matches(&product.id, &size, &color))
        {
            let line = &mut self.lines[index];
            line.qty = line.qty.saturating_add(qty);
            return AddOutcome::Merged {
                index,
                qty: line.qty,
            };
        }

        self.lines.push(CartLine {
            product,
            size,
            color,
            qty,
        });
        AddOutcome::Appended {
            index: self.lines.len() - 1,
        }
    }

    /// Remove the line at `index`, preserving the order of the rest.
    pub fn remove_item(&mut self, index: usize) -> Result<CartLine, StoreError> {
        if index >= self.lines.len() {
            return Err(StoreError::LineIndexOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    /// Remove the line with the given key.
    pub fn remove_line(&mut self, key: &LineKey) -> Result<CartLine, StoreError> {
        let index = self
            .position(key)
            .ok_or_else(|| StoreError::LineNotFound { key: key.clone() })?;
        Ok(self.lines.remove(index))
    }

    pub fn position(&self, key: &LineKey) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.matches(&key.product_id, &key.size, &key.color))
    }

    pub fn line(&self, key: &LineKey) -> Option<&CartLine> {
        self.position(key).map(|index| &self.lines[index])
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.qty))
    }

    /// Sum of `price × qty` over all lines.
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}
