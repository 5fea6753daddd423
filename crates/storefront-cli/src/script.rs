//! Scripted sessions.
//!
//! A script is a JSON array of [`Step`]s replayed against a fresh
//! [`Storefront`] backed by a [`MemoryViewPort`] with every surface mounted:
//!
//! ```json
//! [
//!   { "send": { "navigation": { "enter": "geek" } } },
//!   { "wait_ms": 1300 },
//!   { "send": { "card": { "select_size": { "product_id": "g1", "size": "M" } } } },
//!   { "send": { "card": { "quick_add": "g1" } } },
//!   "settle"
//! ]
//! ```

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_core::{
    MemoryViewPort, Message, Notice, Notifier, Settings, Storefront, TracingNotifier,
};
use storefront_model::{CatalogRepository, Page, Price, ProductId, Universe};
use tracing::{debug, debug_span};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Deliver a message as if a surface had raised it.
    Send(Message),
    /// Advance the virtual clock, firing every step that falls due.
    WaitMs(u64),
    /// Fire pending transition steps until the session is idle.
    Settle,
    /// Re-render every mounted surface.
    Mount,
}

pub fn parse_script(json: &str) -> serde_json::Result<Vec<Step>> {
    serde_json::from_str(json)
}

/// A message the storefront refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedStep {
    pub index: usize,
    pub feature: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRow {
    pub product_id: ProductId,
    pub name: String,
    pub size: String,
    pub color: String,
    pub qty: u32,
    pub subtotal: Price,
}

/// Final state of a replayed session.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub steps: usize,
    pub accepted: usize,
    pub rejected: Vec<RejectedStep>,
    pub page: Page,
    pub drawer: Option<Universe>,
    pub cart: Vec<CartRow>,
    pub total_items: u32,
    pub total_price: Price,
    pub wishlist: Vec<ProductId>,
    pub notices: Vec<Notice>,
    /// Surface renders delivered to the view port, including the initial mount.
    pub presents: usize,
    pub elapsed_ms: u64,
}

/// Logs every notice and keeps it for the report.
#[derive(Default)]
struct SessionNotices {
    log: TracingNotifier,
    shown: Vec<Notice>,
}

impl Notifier for SessionNotices {
    fn show(&mut self, notice: Notice) {
        self.log.show(notice.clone());
        self.shown.push(notice);
    }
}

pub fn run_script(
    catalog: Arc<dyn CatalogRepository>,
    settings: Settings,
    steps: Vec<Step>,
) -> RunReport {
    let mut store = Storefront::new(
        catalog,
        settings,
        MemoryViewPort::with_all_surfaces(),
        SessionNotices::default(),
    );
    store.mount();

    let total = steps.len();
    let mut accepted = 0;
    let mut rejected = Vec::new();
    for (index, step) in steps.into_iter().enumerate() {
        let _span = debug_span!("step", index).entered();
        match step {
            Step::Send(message) => {
                let feature = message.feature();
                if store.update(message) {
                    accepted += 1;
                } else {
                    rejected.push(RejectedStep { index, feature });
                }
            }
            Step::WaitMs(ms) => store.advance(Duration::from_millis(ms)),
            Step::Settle => store.settle(),
            Step::Mount => {
                let presented = store.remount();
                debug!(presented, "remounted");
            }
        }
    }

    let (state, port, notices) = store.into_parts();
    let cart = state
        .cart
        .lines()
        .iter()
        .map(|line| CartRow {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            size: line.size.clone(),
            color: line.color.clone(),
            qty: line.qty,
            subtotal: line.subtotal(),
        })
        .collect();

    RunReport {
        steps: total,
        accepted,
        rejected,
        page: state.navigation.current(),
        drawer: state.drawer,
        cart,
        total_items: state.cart.total_items(),
        total_price: state.cart.total_price(),
        wishlist: state.cards.wishlist().cloned().collect(),
        notices: notices.shown,
        presents: port.present_count(),
        elapsed_ms: u64::try_from(state.timeline.now().as_millis()).unwrap_or(u64::MAX),
    }
}
