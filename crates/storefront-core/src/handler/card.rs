//! Product card message handler.

use tracing::debug;

use super::cart::add_to_cart;
use super::detail::open_detail;
use super::{Effects, MessageHandler};
use crate::error::StoreError;
use crate::message::CardMessage;
use crate::notify::Notice;
use crate::state::StoreState;
use crate::view::Dirty;

/// Handler for grid card messages.
pub struct CardHandler;

impl MessageHandler<CardMessage> for CardHandler {
    fn handle(&self, state: &mut StoreState, msg: CardMessage) -> Result<Effects, StoreError> {
        match msg {
            CardMessage::Open(id) => open_detail(state, &id),

            CardMessage::SelectSize { product_id, size } => {
                let product = state.product(&product_id)?;
                state.cards.select_size(&product, &size)?;
                Ok(Effects::dirty(Dirty::Grid(product.universe)))
            }

            CardMessage::QuickAdd(id) => {
                let product = state.product(&id)?;
                let color = product
                    .default_color()
                    .ok_or_else(|| StoreError::NoVariants {
                        product: id.clone(),
                    })?
                    .to_string();
                let Some(size) = state.cards.take_size(&id) else {
                    debug!(product = %id, "quick add without a size");
                    return Ok(Effects::none().with_notice(Notice::size_required()));
                };
                let universe = product.universe;
                Ok(add_to_cart(state, product, size, color, 1).with_dirty(Dirty::Grid(universe)))
            }

            CardMessage::ToggleWishlist(id) => {
                let product = state.product(&id)?;
                let added = state.cards.toggle_wishlist(&id);
                Ok(Effects::dirty(Dirty::Grid(product.universe)).with_notice(Notice::wishlist(added)))
            }
        }
    }
}
