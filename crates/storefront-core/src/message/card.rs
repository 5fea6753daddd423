//! Product card messages.

use serde::{Deserialize, Serialize};
use storefront_model::ProductId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardMessage {
    /// Click on the card body.
    Open(ProductId),

    /// Size button in the card overlay.
    SelectSize { product_id: ProductId, size: String },

    /// "Adicionar ao Carrinho" in the card overlay.
    QuickAdd(ProductId),

    /// Heart button.
    ToggleWishlist(ProductId),
}
