//! Message hierarchy.
//!
//! Every user action on a rendered surface is a [`Message`]. Each variant
//! wraps the message type of one feature and is routed to that feature's
//! handler. Messages deserialize from JSON so hosts can replay scripted
//! sessions, e.g. `{"cart": {"remove_at": 0}}`.

pub mod card;
pub mod cart;
pub mod detail;
pub mod filter;
pub mod navigation;

use serde::{Deserialize, Serialize};

pub use card::CardMessage;
pub use cart::CartMessage;
pub use detail::DetailMessage;
pub use filter::FilterMessage;
pub use navigation::NavigationMessage;

/// Root message enum of the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Cart drawer and ledger actions
    Cart(CartMessage),

    /// Category nav and empty-state actions
    Filter(FilterMessage),

    /// Product detail actions
    Detail(DetailMessage),

    /// Product card actions (quick add, wishlist, card click)
    Card(CardMessage),

    /// Page navigation
    Navigation(NavigationMessage),
}

impl Message {
    /// Feature name, for logging.
    pub fn feature(&self) -> &'static str {
        match self {
            Self::Cart(_) => "cart",
            Self::Filter(_) => "filter",
            Self::Detail(_) => "detail",
            Self::Card(_) => "card",
            Self::Navigation(_) => "navigation",
        }
    }
}
