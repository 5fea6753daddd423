//! Page, transition overlay and body views.

use serde::Serialize;
use storefront_model::Page;

use crate::state::{PageStatus, StoreState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub status: PageStatus,
    /// Accepts input: active and no transition in flight.
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayView {
    pub visible: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyView {
    /// Page scrolling is locked while a product detail is open.
    pub scroll_locked: bool,
}

pub fn view_page(state: &StoreState, page: Page) -> PageView {
    PageView {
        status: state.navigation.page_status(page),
        interactive: state.navigation.is_interactive(page),
    }
}

pub fn view_overlay(state: &StoreState) -> OverlayView {
    match state.navigation.overlay_target() {
        Some(target) => OverlayView {
            visible: true,
            label: state.page_label(target),
        },
        None => OverlayView {
            visible: false,
            label: String::new(),
        },
    }
}

pub fn view_body(state: &StoreState) -> BodyView {
    BodyView {
        scroll_locked: state.selection.is_open(),
    }
}
