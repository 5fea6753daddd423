//! Product detail session.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storefront_model::Product;

use crate::error::StoreError;

/// How a detail session was dismissed. All reasons converge on the same close.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    #[default]
    Explicit,
    Backdrop,
    CancelKey,
}

/// Selections bound to exactly one inspected product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSession {
    product: Arc<Product>,
    size: String,
    color: String,
    qty: u32,
    image: usize,
}

impl DetailSession {
    /// Start a session with the product's default size and color, quantity 1
    /// and the primary image active.
    pub fn open(product: Arc<Product>) -> Result<Self, StoreError> {
        let (Some(size), Some(color)) = (product.default_size(), product.default_color()) else {
            return Err(StoreError::NoVariants {
                product: product.id.clone(),
            });
        };
        let size = size.to_string();
        let color = color.to_string();
        Ok(Self {
            product,
            size,
            color,
            qty: 1,
            image: 0,
        })
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn selected_size(&self) -> &str {
        &self.size
    }

    pub fn selected_color(&self) -> &str {
        &self.color
    }

    pub fn qty(&self) -> u32 {
        self.qty
    }

    /// Index of the active gallery image; 0 is the primary image.
    pub fn active_image(&self) -> usize {
        self.image
    }

    pub fn select_size(&mut self, size: &str) -> Result<(), StoreError> {
        if !self.product.has_size(size) {
            return Err(StoreError::SizeUnknown {
                product: self.product.id.clone(),
                size: size.to_string(),
            });
        }
        if !self.product.is_size_available(size) {
            return Err(StoreError::SizeUnavailable {
                product: self.product.id.clone(),
                size: size.to_string(),
            });
        }
        self.size = size.to_string();
        Ok(())
    }

    pub fn select_color(&mut self, color: &str) -> Result<(), StoreError> {
        if !self.product.has_color(color) {
            return Err(StoreError::ColorUnknown {
                product: self.product.id.clone(),
                color: color.to_string(),
            });
        }
        self.color = color.to_string();
        Ok(())
    }

    /// Apply a quantity delta, clamping at 1. Returns the new quantity.
    pub fn change_qty(&mut self, delta: i32) -> u32 {
        let next = i64::from(self.qty) + i64::from(delta);
        self.qty = u32::try_from(next.max(1)).unwrap_or(u32::MAX);
        self.qty
    }

    /// Make gallery image `index` active. `gallery_len` is the number of
    /// images the detail view shows.
    pub fn switch_image(&mut self, index: usize, gallery_len: usize) -> Result<(), StoreError> {
        if index >= gallery_len {
            return Err(StoreError::ImageOutOfRange {
                index,
                len: gallery_len,
            });
        }
        self.image = index;
        Ok(())
    }
}

/// At most one detail session per storefront.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    session: Option<DetailSession>,
}

impl SelectionState {
    /// Open a session for `product`, replacing any open one.
    pub fn open(&mut self, product: Arc<Product>) -> Result<&DetailSession, StoreError> {
        let session = DetailSession::open(product)?;
        Ok(self.session.insert(session))
    }

    /// Close the session. Closing twice is harmless.
    pub fn close(&mut self) -> Option<DetailSession> {
        self.session.take()
    }

    pub fn session(&self) -> Option<&DetailSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Result<&mut DetailSession, StoreError> {
        self.session.as_mut().ok_or(StoreError::NoDetailSession)
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }
}
