//! State and view synchronization for the multi-universe storefront.
//!
//! A [`Storefront`] keeps four pieces of session state consistent with every
//! rendered surface:
//!
//! - the cart ledger, shown by the cart badge and drawer of every universe;
//! - one category filter per universe grid;
//! - the open product detail;
//! - the current page and its in-flight transition.
//!
//! User actions arrive as [`Message`]s, handlers return [`Effects`], and the
//! [`ViewSynchronizer`] re-renders only the surfaces whose view changed.

pub mod error;
pub mod handler;
pub mod message;
pub mod notify;
pub mod port;
pub mod settings;
pub mod state;
pub mod store;
pub mod sync;
pub mod timeline;
pub mod view;

pub use error::{ErrorCategory, StoreError};
pub use handler::{Effects, MessageHandler};
pub use message::{
    CardMessage, CartMessage, DetailMessage, FilterMessage, Message, NavigationMessage,
};
pub use notify::{Notice, NoticeKind, Notifier, TracingNotifier};
pub use port::{MemoryViewPort, ScrollRequest, ViewPort};
pub use settings::{Settings, SettingsError};
pub use state::{
    BusyPolicy, CartLedger, CategoryFilter, DismissReason, LineKey, PageStatus, StoreState,
};
pub use store::Storefront;
pub use sync::{SyncOutcome, ViewSynchronizer};
pub use timeline::{TimerEvent, TimerHandle, Timeline};
pub use view::{Dirty, SurfaceId, SurfaceView};
