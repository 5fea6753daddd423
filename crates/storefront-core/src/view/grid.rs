//! Product grid and category nav views.

use serde::Serialize;
use storefront_model::{Product, ProductId, Universe};

use crate::state::{CategoryFilter, StoreState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    /// Every product of the universe, in catalog order. Filtered-out cards
    /// stay in the grid with `visible = false`.
    pub cards: Vec<CardView>,
    pub visible_count: usize,
    pub empty_state: Option<EmptyStateView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub product_id: ProductId,
    pub visible: bool,
    pub name: String,
    pub meta: String,
    pub price: String,
    pub price_old: Option<String>,
    pub badge: Option<String>,
    pub image_seed: u32,
    /// Quick-add size buttons; only available sizes are offered.
    pub sizes: Vec<CardSizeView>,
    pub quick_add_enabled: bool,
    pub wishlisted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSizeView {
    pub label: String,
    pub selected: bool,
}

/// Shown when a category filter leaves the grid empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyStateView {
    pub category: String,
    pub message: String,
    pub reset_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavView {
    pub links: Vec<NavLinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLinkView {
    pub label: String,
    /// Filter applied when the link is followed.
    pub filter: CategoryFilter,
    pub active: bool,
}

pub fn view_product_grid(state: &StoreState, universe: Universe) -> GridView {
    let filter = state.filters.get(universe);
    let cards: Vec<CardView> = state
        .catalog
        .products(universe)
        .iter()
        .map(|product| product_card(state, product, filter.admits(product)))
        .collect();
    let visible_count = cards.iter().filter(|card| card.visible).count();

    let empty_state = match filter.as_category() {
        Some(category) if visible_count == 0 => Some(EmptyStateView {
            category: category.to_string(),
            message: format!("Nenhum produto em {category} no momento."),
            reset_label: "Ver todos os produtos".to_string(),
        }),
        _ => None,
    };

    GridView {
        cards,
        visible_count,
        empty_state,
    }
}

fn product_card(state: &StoreState, product: &Product, visible: bool) -> CardView {
    let selected = state.cards.selected_size(&product.id);
    CardView {
        product_id: product.id.clone(),
        visible,
        name: product.name.clone(),
        meta: product.meta.clone(),
        price: product.price.to_string(),
        price_old: product.price_old.map(|p| p.to_string()),
        badge: product.badge.clone(),
        image_seed: product.img_seed,
        sizes: product
            .available_sizes()
            .map(|size| CardSizeView {
                label: size.to_string(),
                selected: selected == Some(size),
            })
            .collect(),
        quick_add_enabled: selected.is_some(),
        wishlisted: state.cards.is_wishlisted(&product.id),
    }
}

/// Category nav of a universe; `None` when the catalog has no copy table
/// for it.
pub fn view_category_nav(state: &StoreState, universe: Universe) -> Option<NavView> {
    let copy = state.catalog.copy(universe)?;
    let active = state.filters.get(universe).nav_index(&copy.nav);
    let links = copy
        .nav
        .iter()
        .enumerate()
        .map(|(index, label)| NavLinkView {
            label: label.clone(),
            filter: if index == 0 {
                CategoryFilter::All
            } else {
                CategoryFilter::category(label.as_str())
            },
            active: active == Some(index),
        })
        .collect();
    Some(NavView { links })
}
