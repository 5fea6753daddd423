//! Navigation messages.

use serde::{Deserialize, Serialize};
use storefront_model::Page;

use crate::state::NavStep;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMessage {
    /// Enter a universe page or the home page.
    Enter(Page),

    /// Logo / back link.
    GoHome,

    /// A scheduled transition step fired. Sent by the storefront clock,
    /// never by surfaces.
    StepFired { transition: u64, step: NavStep },
}
