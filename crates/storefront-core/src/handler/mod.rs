//! Message handlers.
//!
//! Each feature has a unit-struct handler implementing [`MessageHandler`]
//! for its message type. A handler mutates the [`StoreState`] and returns the
//! [`Effects`] of the change: which state components are dirty, which
//! notices to show and which surfaces to scroll. Applying the effects is
//! left to the [`Storefront`](crate::Storefront).
//!
//! ```ignore
//! match message {
//!     Message::Cart(msg) => CartHandler.handle(&mut state, msg),
//!     Message::Filter(msg) => FilterHandler.handle(&mut state, msg),
//!     // ...
//! }
//! ```
//!
//! A handler that returns an error has not mutated anything.

mod card;
mod cart;
mod detail;
mod filter;
mod navigation;

use std::collections::BTreeSet;

pub use card::CardHandler;
pub use cart::CartHandler;
pub use detail::DetailHandler;
pub use filter::FilterHandler;
pub use navigation::NavigationHandler;

use crate::error::StoreError;
use crate::notify::Notice;
use crate::port::ScrollRequest;
use crate::state::StoreState;
use crate::view::{Dirty, SurfaceId};

/// Trait for handling one feature's messages.
pub trait MessageHandler<M> {
    fn handle(&self, state: &mut StoreState, msg: M) -> Result<Effects, StoreError>;
}

/// Follow-up work produced by a handler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effects {
    pub dirty: BTreeSet<Dirty>,
    pub notices: Vec<Notice>,
    pub scrolls: Vec<(SurfaceId, ScrollRequest)>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn dirty(dirty: Dirty) -> Self {
        Self::none().with_dirty(dirty)
    }

    pub fn with_dirty(mut self, dirty: Dirty) -> Self {
        self.dirty.insert(dirty);
        self
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    pub fn with_scroll(mut self, surface: SurfaceId, request: ScrollRequest) -> Self {
        self.scrolls.push((surface, request));
        self
    }

    pub fn merge(&mut self, other: Effects) {
        self.dirty.extend(other.dirty);
        self.notices.extend(other.notices);
        self.scrolls.extend(other.scrolls);
    }

    pub fn is_empty(&self) -> bool {
        self.dirty.is_empty() && self.notices.is_empty() && self.scrolls.is_empty()
    }
}
