//! Category filter messages.

use serde::{Deserialize, Serialize};
use storefront_model::Universe;

use crate::state::CategoryFilter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMessage {
    /// Nav link clicked. `filter` is `null` for the "show all" link.
    Apply {
        universe: Universe,
        #[serde(default)]
        filter: CategoryFilter,
    },

    /// "Ver todos os produtos" in the empty state.
    Reset(Universe),
}
