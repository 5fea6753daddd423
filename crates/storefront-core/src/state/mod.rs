//! Storefront state.
//!
//! The session state is split the same way the surfaces are:
//!
//! - **CartLedger**: cart lines, shared by every universe's badge and drawer
//! - **FilterState**: active category per universe grid
//! - **SelectionState**: the open product detail, if any
//! - **CardState**: quick-add sizes picked on grid cards and the wishlist
//! - **NavigationMachine**: current page and in-flight transition
//!
//! All of it is owned by [`StoreState`]; nothing is global.

mod card;
mod cart;
mod filter;
mod navigation;
mod selection;

use std::fmt;
use std::sync::Arc;

use storefront_model::{CatalogRepository, Page, Product, ProductId, Universe};

pub use card::CardState;
pub use cart::{AddOutcome, CartLedger, CartLine, LineKey};
pub use filter::{CategoryFilter, FilterState};
pub use navigation::{
    BusyPolicy, EnterOutcome, NavStep, NavigationMachine, PageStatus, StepReport,
};
pub use selection::{DetailSession, DismissReason, SelectionState};

use crate::error::StoreError;
use crate::settings::Settings;
use crate::timeline::Timeline;

/// Root state of one storefront session.
pub struct StoreState {
    pub catalog: Arc<dyn CatalogRepository>,
    pub settings: Settings,
    pub cart: CartLedger,
    /// Universe whose cart drawer is open. At most one drawer is open.
    pub drawer: Option<Universe>,
    pub filters: FilterState,
    pub selection: SelectionState,
    pub cards: CardState,
    pub navigation: NavigationMachine,
    pub timeline: Timeline,
}

impl StoreState {
    /// Fresh session: empty cart, no filters, resting on the home page.
    pub fn new(catalog: Arc<dyn CatalogRepository>, settings: Settings) -> Self {
        let navigation = NavigationMachine::new(&settings.navigation);
        Self {
            catalog,
            settings,
            cart: CartLedger::new(),
            drawer: None,
            filters: FilterState::default(),
            selection: SelectionState::default(),
            cards: CardState::default(),
            navigation,
            timeline: Timeline::new(),
        }
    }

    /// Resolve a product id against the catalog.
    pub fn product(&self, id: &ProductId) -> Result<Arc<Product>, StoreError> {
        self.catalog
            .product(id)
            .cloned()
            .ok_or_else(|| StoreError::ProductNotFound { id: id.clone() })
    }

    /// Overlay label for a navigation target: the universe's display name,
    /// or the configured home label.
    pub fn page_label(&self, page: Page) -> String {
        page.universe()
            .and_then(|universe| self.catalog.copy(universe))
            .map(|copy| copy.display_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(self.settings.navigation.home_label.as_str())
            .to_string()
    }
}

impl fmt::Debug for StoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreState")
            .field("cart", &self.cart)
            .field("drawer", &self.drawer)
            .field("filters", &self.filters)
            .field("selection", &self.selection)
            .field("cards", &self.cards)
            .field("navigation", &self.navigation)
            .field("timeline", &self.timeline)
            .finish_non_exhaustive()
    }
}
