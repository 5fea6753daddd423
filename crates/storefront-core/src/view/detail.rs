//! Product detail view.

use serde::Serialize;
use storefront_model::{Product, ProductId, Universe};

use crate::settings::{DetailSettings, FeatureIcon};
use crate::state::{DetailSession, StoreState};

/// Detail surface of one universe. Only the universe of the inspected
/// product shows content; every other detail surface is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub open: bool,
    pub content: Option<DetailContent>,
}

impl DetailView {
    pub fn closed() -> Self {
        Self {
            open: false,
            content: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailContent {
    pub product_id: ProductId,
    pub name: String,
    pub meta: String,
    pub category_tag: String,
    pub badge: Option<String>,
    pub price: String,
    pub price_old: Option<String>,
    pub installments: String,
    pub description: String,
    pub features: Vec<Feature>,
    pub gallery: GalleryView,
    pub sizes: Vec<SizeOption>,
    pub colors: Vec<ColorOption>,
    pub qty: u32,
    /// Empty when the universe has no other product; the section is hidden.
    pub related: Vec<RelatedCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryView {
    pub main_seed: u32,
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub index: usize,
    pub seed: u32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeOption {
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorOption {
    pub value: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedCard {
    pub product_id: ProductId,
    pub name: String,
    pub meta: String,
    pub price: String,
    pub badge: Option<String>,
    pub image_seed: u32,
}

/// Image seeds of the gallery. The first image is the product image itself.
pub fn gallery_seeds(product: &Product, settings: &DetailSettings) -> Vec<u32> {
    std::iter::once(product.img_seed)
        .chain(
            settings
                .thumbnail_offsets
                .iter()
                .map(|offset| product.img_seed.saturating_add(*offset)),
        )
        .collect()
}

pub fn view_detail(state: &StoreState, universe: Universe) -> DetailView {
    match state.selection.session() {
        Some(session) if session.product().universe == universe => DetailView {
            open: true,
            content: Some(detail_content(state, session)),
        },
        _ => DetailView::closed(),
    }
}

fn detail_content(state: &StoreState, session: &DetailSession) -> DetailContent {
    let product = session.product();
    let settings = &state.settings.detail;

    let seeds = gallery_seeds(product, settings);
    let active = session.active_image();
    let gallery = GalleryView {
        main_seed: seeds.get(active).copied().unwrap_or(product.img_seed),
        thumbnails: seeds
            .iter()
            .enumerate()
            .map(|(index, seed)| Thumbnail {
                index,
                seed: *seed,
                active: index == active,
            })
            .collect(),
    };

    let installment = product.price.installment(settings.installments);

    DetailContent {
        product_id: product.id.clone(),
        name: product.name.clone(),
        meta: product.meta.clone(),
        category_tag: format!("✦ {}", product.category),
        badge: product.badge.clone(),
        price: product.price.to_string(),
        price_old: product.price_old.map(|p| p.to_string()),
        installments: format!(
            "ou {}× de {installment} sem juros",
            settings.installments
        ),
        description: product.description.clone(),
        features: features(product, settings),
        gallery,
        sizes: product
            .sizes
            .iter()
            .map(|size| SizeOption {
                label: size.clone(),
                selected: size == session.selected_size(),
                disabled: !product.is_size_available(size),
            })
            .collect(),
        colors: product
            .colors
            .iter()
            .map(|color| ColorOption {
                value: color.clone(),
                selected: color == session.selected_color(),
            })
            .collect(),
        qty: session.qty(),
        related: related(state, product),
    }
}

fn features(product: &Product, settings: &DetailSettings) -> Vec<Feature> {
    let mut items = Vec::new();
    if !product.meta.is_empty() {
        items.push(Feature {
            icon: FeatureIcon::Check,
            text: product.meta.clone(),
        });
    }
    if !product.sizes.is_empty() {
        let sizes: Vec<&str> = product.available_sizes().collect();
        items.push(Feature {
            icon: FeatureIcon::Ruler,
            text: format!("Tamanhos: {}", sizes.join(", ")),
        });
    }
    match product.colors.len() {
        0 => {}
        1 => items.push(Feature {
            icon: FeatureIcon::Palette,
            text: "1 opção de cor".to_string(),
        }),
        n => items.push(Feature {
            icon: FeatureIcon::Palette,
            text: format!("{n} opções de cor"),
        }),
    }
    items.extend(settings.marketing.iter().map(|line| Feature {
        icon: line.icon,
        text: line.text.clone(),
    }));
    items
}

fn related(state: &StoreState, product: &Product) -> Vec<RelatedCard> {
    state
        .catalog
        .products(product.universe)
        .iter()
        .filter(|other| other.id != product.id)
        .take(state.settings.detail.related_limit)
        .map(|other| RelatedCard {
            product_id: other.id.clone(),
            name: other.name.clone(),
            meta: other.meta.clone(),
            price: other.price.to_string(),
            badge: other.badge.clone(),
            image_seed: other.img_seed,
        })
        .collect()
}
