//! Cart message handler.

use std::sync::Arc;

use storefront_model::Product;
use tracing::debug;

use super::{Effects, MessageHandler};
use crate::error::StoreError;
use crate::message::CartMessage;
use crate::notify::Notice;
use crate::state::StoreState;
use crate::view::Dirty;

/// Handler for cart drawer and ledger messages.
pub struct CartHandler;

impl MessageHandler<CartMessage> for CartHandler {
    fn handle(&self, state: &mut StoreState, msg: CartMessage) -> Result<Effects, StoreError> {
        match msg {
            CartMessage::AddItem {
                product_id,
                size,
                color,
                qty,
            } => {
                let product = state.product(&product_id)?;
                check_variant(&product, &size, &color)?;
                Ok(add_to_cart(state, product, size, color, qty))
            }

            CartMessage::RemoveLine(key) => {
                let line = state.cart.remove_line(&key)?;
                debug!(product = %line.product.id, size = %line.size, "removed cart line");
                Ok(Effects::dirty(Dirty::Cart))
            }

            CartMessage::RemoveAt(index) => {
                let line = state.cart.remove_item(index)?;
                debug!(product = %line.product.id, index, "removed cart line");
                Ok(Effects::dirty(Dirty::Cart))
            }

            CartMessage::OpenDrawer(universe) => {
                state.drawer = Some(universe);
                Ok(Effects::dirty(Dirty::Cart))
            }

            CartMessage::CloseDrawer => {
                state.drawer = None;
                Ok(Effects::dirty(Dirty::Cart))
            }

            CartMessage::Checkout => {
                if state.cart.is_empty() {
                    return Err(StoreError::EmptyCart);
                }
                Ok(Effects::none().with_notice(Notice::checkout()))
            }
        }
    }
}

/// Reject variants the product does not offer in stock.
fn check_variant(product: &Product, size: &str, color: &str) -> Result<(), StoreError> {
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
    if !product.has_color(color) {
        return Err(StoreError::ColorUnknown {
            product: product.id.clone(),
            color: color.to_string(),
        });
    }
    Ok(())
}

/// Add a validated selection to the cart. Shared by the cart, detail and
/// card handlers.
pub(super) fn add_to_cart(
    state: &mut StoreState,
    product: Arc<Product>,
    size: String,
    color: String,
    qty: u32,
) -> Effects {
    let notice = Notice::added_to_cart(&product.name);
    let outcome = state.cart.add_item(product, size, color, qty.max(1));
    debug!(
        ?outcome,
        total_items = state.cart.total_items(),
        "cart updated"
    );
    Effects::dirty(Dirty::Cart).with_notice(notice)
}
