//! Product detail message handler.

use std::sync::Arc;

use storefront_model::{Page, ProductId};
use tracing::debug;

use super::cart::add_to_cart;
use super::{Effects, MessageHandler};
use crate::error::StoreError;
use crate::message::DetailMessage;
use crate::state::StoreState;
use crate::view::Dirty;

/// Handler for product detail messages.
pub struct DetailHandler;

impl MessageHandler<DetailMessage> for DetailHandler {
    fn handle(&self, state: &mut StoreState, msg: DetailMessage) -> Result<Effects, StoreError> {
        match msg {
            DetailMessage::Open(id) => open_detail(state, &id),

            DetailMessage::SwitchImage(index) => {
                let len = state.settings.detail.gallery_len();
                state.selection.session_mut()?.switch_image(index, len)?;
                Ok(Effects::dirty(Dirty::Detail))
            }

            DetailMessage::SelectSize(size) => {
                state.selection.session_mut()?.select_size(&size)?;
                Ok(Effects::dirty(Dirty::Detail))
            }

            DetailMessage::SelectColor(color) => {
                state.selection.session_mut()?.select_color(&color)?;
                Ok(Effects::dirty(Dirty::Detail))
            }

            DetailMessage::ChangeQty(delta) => {
                let qty = state.selection.session_mut()?.change_qty(delta);
                debug!(delta, qty, "detail quantity changed");
                Ok(Effects::dirty(Dirty::Detail))
            }

            DetailMessage::AddToCart => {
                let session = state
                    .selection
                    .session()
                    .ok_or(StoreError::NoDetailSession)?;
                let product = Arc::clone(session.product());
                let size = session.selected_size().to_string();
                let color = session.selected_color().to_string();
                let qty = session.qty();

                state.selection.close();
                Ok(add_to_cart(state, product, size, color, qty).with_dirty(Dirty::Detail))
            }

            DetailMessage::Close(reason) => {
                if state.selection.close().is_none() {
                    return Ok(Effects::none());
                }
                debug!(?reason, "detail closed");
                Ok(Effects::dirty(Dirty::Detail))
            }
        }
    }
}

/// Open the detail of a product, replacing any open session. The product's
/// universe page must be current and settled.
pub(super) fn open_detail(state: &mut StoreState, id: &ProductId) -> Result<Effects, StoreError> {
    let product = state.product(id)?;
    let page = Page::Store(product.universe);
    if state.navigation.is_transitioning() || state.navigation.current() != page {
        return Err(StoreError::DetailOffPage {
            product: id.clone(),
            universe: product.universe,
        });
    }
    let session = state.selection.open(product)?;
    debug!(
        product = %id,
        size = session.selected_size(),
        "detail opened"
    );
    Ok(Effects::dirty(Dirty::Detail))
}
