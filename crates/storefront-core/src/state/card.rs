//! Grid card selections and the wishlist.

use std::collections::{BTreeSet, HashMap};

use storefront_model::{Product, ProductId};

use crate::error::StoreError;

#[derive(Debug, Clone, Default)]
pub struct CardState {
    sizes: HashMap<ProductId, String>,
    wishlist: BTreeSet<ProductId>,
}

impl CardState {
    /// Pick a size on a product card. Only available sizes are accepted.
    pub fn select_size(&mut self, product: &Product, size: &str) -> Result<(), StoreError> {
        if !product.has_size(size) {
            return Err(StoreError::SizeUnknown {
                product: product.id.clone(),
                size: size.to_string(),
            });
        }
        if !product.is_size_available(size) {
            return Err(StoreError::SizeUnavailable {
                product: product.id.clone(),
                size: size.to_string(),
            });
        }
        self.sizes.insert(product.id.clone(), size.to_string());
        Ok(())
    }

    pub fn selected_size(&self, id: &ProductId) -> Option<&str> {
        self.sizes.get(id).map(String::as_str)
    }

    /// Clear the card's size, returning it.
    pub fn take_size(&mut self, id: &ProductId) -> Option<String> {
        self.sizes.remove(id)
    }

    /// Flip wishlist membership. Returns `true` if the product is now wishlisted.
    pub fn toggle_wishlist(&mut self, id: &ProductId) -> bool {
        if self.wishlist.remove(id) {
            false
        } else {
            self.wishlist.insert(id.clone());
            true
        }
    }

    pub fn is_wishlisted(&self, id: &ProductId) -> bool {
        self.wishlist.contains(id)
    }

    pub fn wishlist(&self) -> impl Iterator<Item = &ProductId> {
        self.wishlist.iter()
    }
}
