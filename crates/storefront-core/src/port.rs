//! Rendering surface abstraction.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use storefront_model::{Page, Universe};

use crate::view::{
    BadgeView, BodyView, DetailView, DrawerView, GridView, NavView, OverlayView, PageView,
    SurfaceId, SurfaceView,
};

/// Scroll request sent alongside presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollRequest {
    /// Scroll the surface to its top (page entry).
    ToTop,
    /// Bring the surface into the viewport (filtered grid).
    IntoView,
}

/// Where rendered views end up.
///
/// The storefront only presents to mounted surfaces; a missing surface is
/// skipped silently.
pub trait ViewPort {
    fn is_mounted(&self, surface: SurfaceId) -> bool;

    /// Replace the content of a mounted surface.
    fn present(&mut self, surface: SurfaceId, view: SurfaceView);

    fn scroll(&mut self, surface: SurfaceId, request: ScrollRequest);
}

/// In-memory view port that records everything it is given.
#[derive(Debug, Default, Clone)]
pub struct MemoryViewPort {
    mounted: BTreeSet<SurfaceId>,
    views: BTreeMap<SurfaceId, SurfaceView>,
    presents: usize,
    scrolls: Vec<(SurfaceId, ScrollRequest)>,
}

impl MemoryViewPort {
    /// A port with no surfaces mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// A port with every surface mounted.
    pub fn with_all_surfaces() -> Self {
        let mut port = Self::new();
        for surface in SurfaceId::all() {
            port.mount(surface);
        }
        port
    }

    pub fn mount(&mut self, surface: SurfaceId) {
        self.mounted.insert(surface);
    }

    /// Unmount a surface, dropping its content.
    pub fn unmount(&mut self, surface: SurfaceId) {
        self.mounted.remove(&surface);
        self.views.remove(&surface);
    }

    pub fn view(&self, surface: SurfaceId) -> Option<&SurfaceView> {
        self.views.get(&surface)
    }

    pub fn views(&self) -> impl Iterator<Item = (&SurfaceId, &SurfaceView)> {
        self.views.iter()
    }

    /// Number of presentations received so far.
    pub fn present_count(&self) -> usize {
        self.presents
    }

    pub fn scrolls(&self) -> &[(SurfaceId, ScrollRequest)] {
        &self.scrolls
    }

    pub fn page(&self, page: Page) -> Option<&PageView> {
        match self.view(SurfaceId::Page(page))? {
            SurfaceView::Page(view) => Some(view),
            _ => None,
        }
    }

    pub fn overlay(&self) -> Option<&OverlayView> {
        match self.view(SurfaceId::Overlay)? {
            SurfaceView::Overlay(view) => Some(view),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&BodyView> {
        match self.view(SurfaceId::Body)? {
            SurfaceView::Body(view) => Some(view),
            _ => None,
        }
    }

    pub fn badge(&self, universe: Universe) -> Option<&BadgeView> {
        match self.view(SurfaceId::CartBadge(universe))? {
            SurfaceView::CartBadge(view) => Some(view),
            _ => None,
        }
    }

    pub fn drawer(&self, universe: Universe) -> Option<&DrawerView> {
        match self.view(SurfaceId::CartDrawer(universe))? {
            SurfaceView::CartDrawer(view) => Some(view),
            _ => None,
        }
    }

    pub fn nav(&self, universe: Universe) -> Option<&NavView> {
        match self.view(SurfaceId::CategoryNav(universe))? {
            SurfaceView::CategoryNav(view) => Some(view),
            _ => None,
        }
    }

    pub fn grid(&self, universe: Universe) -> Option<&GridView> {
        match self.view(SurfaceId::ProductGrid(universe))? {
            SurfaceView::ProductGrid(view) => Some(view),
            _ => None,
        }
    }

    pub fn detail(&self, universe: Universe) -> Option<&DetailView> {
        match self.view(SurfaceId::Detail(universe))? {
            SurfaceView::Detail(view) => Some(view),
            _ => None,
        }
    }
}

impl ViewPort for MemoryViewPort {
    fn is_mounted(&self, surface: SurfaceId) -> bool {
        self.mounted.contains(&surface)
    }

    fn present(&mut self, surface: SurfaceId, view: SurfaceView) {
        if self.mounted.contains(&surface) {
            self.presents += 1;
            self.views.insert(surface, view);
        }
    }

    fn scroll(&mut self, surface: SurfaceId, request: ScrollRequest) {
        if self.mounted.contains(&surface) {
            self.scrolls.push((surface, request));
        }
    }
}
