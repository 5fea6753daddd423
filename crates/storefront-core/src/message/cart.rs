//! Cart messages.

use serde::{Deserialize, Serialize};
use storefront_model::{ProductId, Universe};

use crate::state::LineKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartMessage {
    /// Add a product variant to the cart.
    AddItem {
        product_id: ProductId,
        size: String,
        color: String,
        #[serde(default = "one")]
        qty: u32,
    },

    /// Remove control of a drawer line.
    RemoveLine(LineKey),

    /// Remove the line at a position.
    RemoveAt(usize),

    /// Cart icon of a universe header.
    OpenDrawer(Universe),

    /// Close button or backdrop of the open drawer.
    CloseDrawer,

    /// "Finalizar Compra".
    Checkout,
}

fn one() -> u32 {
    1
}
