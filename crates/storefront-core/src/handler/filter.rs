//! Category filter message handler.

use storefront_model::Universe;
use tracing::debug;

use super::{Effects, MessageHandler};
use crate::error::StoreError;
use crate::message::FilterMessage;
use crate::port::ScrollRequest;
use crate::state::{CategoryFilter, StoreState};
use crate::view::{Dirty, SurfaceId};

/// Handler for category nav messages.
pub struct FilterHandler;

impl MessageHandler<FilterMessage> for FilterHandler {
    fn handle(&self, state: &mut StoreState, msg: FilterMessage) -> Result<Effects, StoreError> {
        let effects = match msg {
            FilterMessage::Apply { universe, filter } => apply_filter(state, universe, filter),
            FilterMessage::Reset(universe) => apply_filter(state, universe, CategoryFilter::All),
        };
        Ok(effects)
    }
}

fn apply_filter(state: &mut StoreState, universe: Universe, filter: CategoryFilter) -> Effects {
    let changed = state.filters.set(universe, filter);
    let visible = state
        .filters
        .get(universe)
        .visible(state.catalog.products(universe))
        .count();
    debug!(%universe, changed, visible, "category filter applied");

    Effects::dirty(Dirty::Grid(universe))
        .with_dirty(Dirty::Nav(universe))
        .with_scroll(SurfaceId::ProductGrid(universe), ScrollRequest::IntoView)
}
