//! Surface views.
//!
//! Views are pure functions of [`StoreState`]: rendering the same state twice
//! yields equal values, which is what lets the
//! [`ViewSynchronizer`](crate::ViewSynchronizer) drop duplicate presentations.
//!
//! ## Surfaces
//!
//! - one page surface per [`Page`]
//! - the transition overlay and the document body
//! - per universe: cart badge, cart drawer, category nav, product grid and
//!   product detail

mod cart;
mod detail;
mod grid;
mod page;

use std::fmt;

use serde::Serialize;
use storefront_model::{Page, Universe};

pub use cart::{BadgeView, DrawerContent, DrawerLineView, DrawerView, view_cart_badge, view_cart_drawer};
pub use detail::{
    ColorOption, DetailContent, DetailView, Feature, GalleryView, RelatedCard, SizeOption,
    Thumbnail, gallery_seeds, view_detail,
};
pub use grid::{
    CardSizeView, CardView, EmptyStateView, GridView, NavLinkView, NavView, view_category_nav,
    view_product_grid,
};
pub use page::{BodyView, OverlayView, PageView, view_body, view_overlay, view_page};

use crate::state::StoreState;

// =============================================================================
// SURFACE IDS
// =============================================================================

/// Addressable rendered surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SurfaceId {
    Page(Page),
    Overlay,
    Body,
    CartBadge(Universe),
    CartDrawer(Universe),
    CategoryNav(Universe),
    ProductGrid(Universe),
    Detail(Universe),
}

impl SurfaceId {
    /// Every surface, pages first.
    pub fn all() -> Vec<SurfaceId> {
        let mut surfaces: Vec<SurfaceId> = Page::ALL.into_iter().map(Self::Page).collect();
        surfaces.push(Self::Overlay);
        surfaces.push(Self::Body);
        for universe in Universe::ALL {
            surfaces.extend(Self::universe_surfaces(universe));
        }
        surfaces
    }

    /// Surfaces owned by one universe.
    pub fn universe_surfaces(universe: Universe) -> [SurfaceId; 5] {
        [
            Self::CartBadge(universe),
            Self::CartDrawer(universe),
            Self::CategoryNav(universe),
            Self::ProductGrid(universe),
            Self::Detail(universe),
        ]
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "page-{page}"),
            Self::Overlay => f.write_str("overlay"),
            Self::Body => f.write_str("body"),
            Self::CartBadge(u) => write!(f, "cart-badge-{u}"),
            Self::CartDrawer(u) => write!(f, "cart-drawer-{u}"),
            Self::CategoryNav(u) => write!(f, "category-nav-{u}"),
            Self::ProductGrid(u) => write!(f, "product-grid-{u}"),
            Self::Detail(u) => write!(f, "detail-{u}"),
        }
    }
}

// =============================================================================
// DIRTY MARKERS
// =============================================================================

/// State component that changed; maps to the surfaces it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dirty {
    /// Cart lines or the open drawer: every badge and drawer.
    Cart,
    /// Filter or card state of one universe grid.
    Grid(Universe),
    /// Active category of one universe nav.
    Nav(Universe),
    /// Detail session: every detail surface and the body scroll lock.
    Detail,
    /// Navigation: every page and the overlay.
    Navigation,
}

impl Dirty {
    pub fn surfaces(self) -> Vec<SurfaceId> {
        match self {
            Self::Cart => Universe::ALL
                .into_iter()
                .flat_map(|u| [SurfaceId::CartBadge(u), SurfaceId::CartDrawer(u)])
                .collect(),
            Self::Grid(u) => vec![SurfaceId::ProductGrid(u)],
            Self::Nav(u) => vec![SurfaceId::CategoryNav(u)],
            Self::Detail => Universe::ALL
                .into_iter()
                .map(SurfaceId::Detail)
                .chain([SurfaceId::Body])
                .collect(),
            Self::Navigation => Page::ALL
                .into_iter()
                .map(SurfaceId::Page)
                .chain([SurfaceId::Overlay])
                .collect(),
        }
    }
}

// =============================================================================
// SURFACE VIEWS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "surface", rename_all = "snake_case")]
pub enum SurfaceView {
    Page(PageView),
    Overlay(OverlayView),
    Body(BodyView),
    CartBadge(BadgeView),
    CartDrawer(DrawerView),
    CategoryNav(NavView),
    ProductGrid(GridView),
    Detail(DetailView),
}

/// Render one surface. `None` when the state has nothing to show on it,
/// e.g. a category nav without a copy table.
pub fn render_surface(state: &StoreState, surface: SurfaceId) -> Option<SurfaceView> {
    let view = match surface {
        SurfaceId::Page(page) => SurfaceView::Page(view_page(state, page)),
        SurfaceId::Overlay => SurfaceView::Overlay(view_overlay(state)),
        SurfaceId::Body => SurfaceView::Body(view_body(state)),
        SurfaceId::CartBadge(_) => SurfaceView::CartBadge(view_cart_badge(state)),
        SurfaceId::CartDrawer(u) => SurfaceView::CartDrawer(view_cart_drawer(state, u)),
        SurfaceId::CategoryNav(u) => SurfaceView::CategoryNav(view_category_nav(state, u)?),
        SurfaceId::ProductGrid(u) => SurfaceView::ProductGrid(view_product_grid(state, u)),
        SurfaceId::Detail(u) => SurfaceView::Detail(view_detail(state, u)),
    };
    Some(view)
}
