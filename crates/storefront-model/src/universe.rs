//! Universes and pages.
//!
//! A universe is one themed catalog section. A page is either the neutral
//! home page or the storefront page of one universe.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

// =============================================================================
// UNIVERSE
// =============================================================================

/// One independently themed storefront section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Universe {
    Geek,
    Esporte,
    Crista,
    Street,
}

impl Universe {
    /// All universes in page order.
    pub const ALL: [Universe; 4] = [Self::Geek, Self::Esporte, Self::Crista, Self::Street];

    /// Lowercase identifier used in surface ids and data files.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Geek => "geek",
            Self::Esporte => "esporte",
            Self::Crista => "crista",
            Self::Street => "street",
        }
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Universe {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|universe| universe.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownUniverse(s.to_string()))
    }
}

// =============================================================================
// PAGE
// =============================================================================

/// A navigable page: the home page or one universe's storefront.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Page {
    #[default]
    Home,
    Store(Universe),
}

impl Page {
    /// Every page, home first.
    pub const ALL: [Page; 5] = [
        Self::Home,
        Self::Store(Universe::Geek),
        Self::Store(Universe::Esporte),
        Self::Store(Universe::Crista),
        Self::Store(Universe::Street),
    ];

    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Store(universe) => universe.slug(),
        }
    }

    /// The universe shown on this page, if any.
    pub const fn universe(&self) -> Option<Universe> {
        match self {
            Self::Home => None,
            Self::Store(universe) => Some(*universe),
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }
}

impl From<Universe> for Page {
    fn from(universe: Universe) -> Self {
        Self::Store(universe)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("home") {
            return Ok(Self::Home);
        }
        s.parse().map(Self::Store)
    }
}

impl TryFrom<String> for Page {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Page> for String {
    fn from(page: Page) -> Self {
        page.slug().to_string()
    }
}
