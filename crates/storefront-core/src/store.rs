//! The storefront runtime.
//!
//! [`Storefront`] owns the session state, a [`ViewPort`] and a [`Notifier`].
//! Hosts feed it [`Message`]s and drive its clock; it dispatches each
//! message to its feature handler and applies the returned effects:
//!
//! 1. dirty surfaces are re-rendered through the [`ViewSynchronizer`];
//! 2. scroll requests are forwarded to the view port;
//! 3. notices are shown with the configured duration.

use std::sync::Arc;
use std::time::Duration;

use storefront_model::{CatalogRepository, Page};
use tracing::{debug, trace, warn};

use crate::error::StoreError;
use crate::handler::{
    CardHandler, CartHandler, DetailHandler, Effects, FilterHandler, MessageHandler,
    NavigationHandler,
};
use crate::message::{Message, NavigationMessage};
use crate::notify::Notifier;
use crate::port::ViewPort;
use crate::settings::Settings;
use crate::state::StoreState;
use crate::sync::ViewSynchronizer;
use crate::timeline::TimerEvent;

pub struct Storefront<P: ViewPort, N: Notifier> {
    state: StoreState,
    sync: ViewSynchronizer,
    port: P,
    notifier: N,
}

impl<P: ViewPort, N: Notifier> Storefront<P, N> {
    /// Create a storefront session. Nothing is rendered until [`mount`](Self::mount).
    pub fn new(catalog: Arc<dyn CatalogRepository>, settings: Settings, port: P, notifier: N) -> Self {
        Self {
            state: StoreState::new(catalog, settings),
            sync: ViewSynchronizer::new(),
            port,
            notifier,
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Mutable access to the view port, e.g. to mount or unmount surfaces.
    /// Call [`remount`](Self::remount) afterwards to bring new surfaces up to
    /// date.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_parts(self) -> (StoreState, P, N) {
        (self.state, self.port, self.notifier)
    }

    pub fn current_page(&self) -> Page {
        self.state.navigation.current()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.navigation.is_transitioning()
    }

    // =========================================================================
    // RENDERING
    // =========================================================================

    /// Render every mounted surface from the current state. Surfaces already
    /// showing the current view are left alone.
    pub fn mount(&mut self) -> usize {
        self.sync.sync_all(&self.state, &mut self.port)
    }

    /// Render every mounted surface, including those the synchronizer
    /// believes are up to date.
    pub fn remount(&mut self) -> usize {
        self.sync.invalidate_all();
        self.mount()
    }

    // =========================================================================
    // UPDATE
    // =========================================================================

    /// Apply one message. Returns `false` if the message was rejected, in
    /// which case state and surfaces are untouched.
    pub fn update(&mut self, message: Message) -> bool {
        let feature = message.feature();
        match self.dispatch(message) {
            Ok(effects) => {
                self.apply(effects);
                true
            }
            Err(err) if err.is_contract_violation() => {
                debug!(feature, category = err.category().label(), "ignored: {err}");
                false
            }
            Err(err) => {
                warn!(feature, category = err.category().label(), "rejected: {err}");
                false
            }
        }
    }

    fn dispatch(&mut self, message: Message) -> Result<Effects, StoreError> {
        let state = &mut self.state;
        match message {
            Message::Cart(msg) => CartHandler.handle(state, msg),
            Message::Filter(msg) => FilterHandler.handle(state, msg),
            Message::Detail(msg) => DetailHandler.handle(state, msg),
            Message::Card(msg) => CardHandler.handle(state, msg),
            Message::Navigation(msg) => NavigationHandler.handle(state, msg),
        }
    }

    fn apply(&mut self, effects: Effects) {
        let presented = self
            .sync
            .sync_dirty(&self.state, &mut self.port, &effects.dirty);
        trace!(dirty = effects.dirty.len(), presented, "effects applied");

        for (surface, request) in effects.scrolls {
            if self.port.is_mounted(surface) {
                self.port.scroll(surface, request);
            }
        }

        let duration = self.state.settings.notifications.duration();
        for notice in effects.notices {
            self.notifier.show(notice.with_duration(duration));
        }
    }

    // =========================================================================
    // CLOCK
    // =========================================================================

    /// Time left until the next scheduled step, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.timeline.next_deadline()
    }

    /// Move the clock forward by `by`, firing every step that falls due.
    pub fn advance(&mut self, by: Duration) {
        let until = self.state.timeline.now().saturating_add(by);
        while let Some((_, event)) = self.state.timeline.pop_due(until) {
            self.fire(event);
        }
        self.state.timeline.advance_to(until);
    }

    /// Fire scheduled steps until nothing is pending.
    pub fn settle(&mut self) {
        while let Some(at) = self.state.timeline.next_due_at() {
            if let Some((_, event)) = self.state.timeline.pop_due(at) {
                self.fire(event);
            }
        }
    }

    fn fire(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Navigation { transition, step } => {
                self.update(Message::Navigation(NavigationMessage::StepFired {
                    transition,
                    step,
                }));
            }
        }
    }
}
