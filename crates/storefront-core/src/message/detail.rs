//! Product detail messages.

use serde::{Deserialize, Serialize};
use storefront_model::ProductId;

use crate::state::DismissReason;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailMessage {
    /// Open the detail of a product (detail button, related card).
    Open(ProductId),

    /// Thumbnail clicked.
    SwitchImage(usize),

    SelectSize(String),

    SelectColor(String),

    /// Quantity stepper, usually `-1` or `+1`.
    ChangeQty(i32),

    /// Add the current selection to the cart and close.
    AddToCart,

    /// Close button, backdrop click or cancel key.
    Close(DismissReason),
}
