//! Navigation message handler.

use storefront_model::Page;
use tracing::{debug, info, trace};

use super::{Effects, MessageHandler};
use crate::error::StoreError;
use crate::message::NavigationMessage;
use crate::port::ScrollRequest;
use crate::state::{EnterOutcome, NavStep, StoreState};
use crate::view::{Dirty, SurfaceId};

/// Handler for page navigation and transition steps.
pub struct NavigationHandler;

impl MessageHandler<NavigationMessage> for NavigationHandler {
    fn handle(&self, state: &mut StoreState, msg: NavigationMessage) -> Result<Effects, StoreError> {
        let effects = match msg {
            NavigationMessage::Enter(page) => enter(state, page),
            NavigationMessage::GoHome => enter(state, Page::Home),
            NavigationMessage::StepFired { transition, step } => step_fired(state, transition, step),
        };
        Ok(effects)
    }
}

fn enter(state: &mut StoreState, target: Page) -> Effects {
    let outcome = state.navigation.enter(target, &mut state.timeline);
    log_outcome(&outcome);

    let mut effects = if outcome.changed_pages() {
        Effects::dirty(Dirty::Navigation)
    } else {
        Effects::none()
    };
    effects.merge(close_overlays(state));
    effects.merge(entry_scrolls(state));
    effects
}

fn step_fired(state: &mut StoreState, transition: u64, step: NavStep) -> Effects {
    let Some(report) = state
        .navigation
        .on_step(transition, step, &mut state.timeline)
    else {
        trace!(transition, ?step, "stale navigation step ignored");
        return Effects::none();
    };

    debug!(transition, ?step, page = %report.page, "navigation step applied");
    if report.settled {
        info!(page = %state.navigation.current(), "navigation settled");
    }
    if let Some(outcome) = &report.follow_up {
        log_outcome(outcome);
    }

    let mut effects = Effects::dirty(Dirty::Navigation);
    effects.merge(close_overlays(state));
    effects.merge(entry_scrolls(state));
    effects
}

/// Close the open detail and cart drawer once a transition is in flight, so
/// neither stays up on a page that is leaving.
fn close_overlays(state: &mut StoreState) -> Effects {
    if !state.navigation.is_transitioning() {
        return Effects::none();
    }
    let mut effects = Effects::none();
    if state.selection.close().is_some() {
        debug!("detail closed by navigation");
        effects = effects.with_dirty(Dirty::Detail);
    }
    if state.drawer.take().is_some() {
        debug!("cart drawer closed by navigation");
        effects = effects.with_dirty(Dirty::Cart);
    }
    effects
}

/// Scroll every newly entered page to its top.
fn entry_scrolls(state: &mut StoreState) -> Effects {
    state
        .navigation
        .take_entered()
        .into_iter()
        .fold(Effects::none(), |effects, page| {
            effects.with_scroll(SurfaceId::Page(page), ScrollRequest::ToTop)
        })
}

fn log_outcome(outcome: &EnterOutcome) {
    match outcome {
        EnterOutcome::AlreadyCurrent | EnterOutcome::AlreadyPending => {
            debug!(?outcome, "navigation request ignored");
        }
        EnterOutcome::Started { from, to } => {
            debug!(%from, %to, "navigation started");
        }
        EnterOutcome::Queued { target, replaced } => {
            debug!(%target, ?replaced, "navigation request queued");
        }
        EnterOutcome::Rejected { target } => {
            info!(%target, "navigation request rejected, transition in flight");
        }
        EnterOutcome::Superseded { settled, next } => {
            debug!(%settled, ?next, "in-flight navigation superseded");
        }
    }
}
