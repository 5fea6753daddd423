//! Per-universe category filters.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use storefront_model::{Product, Universe};

/// Active category of one universe grid.
///
/// Serializes as `null` for [`CategoryFilter::All`] and as the category name
/// otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum CategoryFilter {
    /// Show every product.
    #[default]
    All,
    /// Show products whose category matches, ignoring case.
    Category(String),
}

static SHOW_ALL: CategoryFilter = CategoryFilter::All;

impl CategoryFilter {
    /// A category filter; a blank name means "show all".
    pub fn category(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.trim().is_empty() {
            Self::All
        } else {
            Self::Category(name)
        }
    }

    pub fn as_category(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Category(name) => Some(name),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a product is visible under this filter.
    pub fn admits(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => product.matches_category(name),
        }
    }

    /// Products of a grid that remain visible, in catalog order.
    pub fn visible<'a>(
        &'a self,
        products: &'a [Arc<Product>],
    ) -> impl Iterator<Item = &'a Arc<Product>> + 'a {
        products.iter().filter(|product| self.admits(product))
    }

    /// Index of the highlighted link in a category nav whose first entry is
    /// the "show all" link.
    pub fn nav_index(&self, nav: &[String]) -> Option<usize> {
        match self {
            Self::All => (!nav.is_empty()).then_some(0),
            Self::Category(name) => {
                let wanted = name.to_lowercase();
                nav.iter()
                    .skip(1)
                    .position(|label| label.to_lowercase() == wanted)
                    .map(|index| index + 1)
            }
        }
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::All, Self::category)
    }
}

impl From<CategoryFilter> for Option<String> {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => None,
            CategoryFilter::Category(name) => Some(name),
        }
    }
}

/// Exactly one filter per universe; universes never set are [`CategoryFilter::All`].
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    active: BTreeMap<Universe, CategoryFilter>,
}

impl FilterState {
    pub fn get(&self, universe: Universe) -> &CategoryFilter {
        self.active.get(&universe).unwrap_or(&SHOW_ALL)
    }

    /// Replace the filter of a universe. Returns `true` if it changed.
    pub fn set(&mut self, universe: Universe, filter: CategoryFilter) -> bool {
        if *self.get(universe) == filter {
            return false;
        }
        if filter.is_all() {
            self.active.remove(&universe);
        } else {
            self.active.insert(universe, filter);
        }
        true
    }
}
