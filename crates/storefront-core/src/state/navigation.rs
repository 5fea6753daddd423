//! Navigation state machine.
//!
//! A transition from page `from` to page `to` runs in two scheduled steps:
//!
//! - **exit** (default 700 ms): `from` stops being marked as exiting;
//! - **entry** (default 600 ms): `to` becomes the current, active page.
//!
//! The transition settles once both steps have fired. Until then the machine
//! is busy and new requests are handled per [`BusyPolicy`]. Each transition
//! has an id carried by its timer events, so events of a cancelled or
//! finished transition are ignored.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_model::Page;

use crate::settings::NavigationSettings;
use crate::timeline::{TimerEvent, TimerHandle, Timeline};

// =============================================================================
// TYPES
// =============================================================================

/// One scheduled step of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavStep {
    Exit,
    Entry,
}

/// What to do with a navigation request while a transition is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyPolicy {
    /// Remember the latest request and start it once the transition settles.
    #[default]
    Queue,
    /// Drop the request.
    Reject,
    /// Cancel the pending steps, settle the transition at once and start
    /// the new one.
    Supersede,
}

impl BusyPolicy {
    pub const ALL: [BusyPolicy; 3] = [Self::Queue, Self::Reject, Self::Supersede];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Queue => "queue",
            Self::Reject => "reject",
            Self::Supersede => "supersede",
        }
    }
}

/// Visibility of one page surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    Hidden,
    Active,
    Exiting,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterOutcome {
    /// Target is already current and nothing is in flight.
    AlreadyCurrent,
    /// Target is the in-flight transition's destination.
    AlreadyPending,
    /// A transition started.
    Started { from: Page, to: Page },
    /// Target will start once the in-flight transition settles.
    Queued { target: Page, replaced: Option<Page> },
    /// Target was dropped because a transition is in flight.
    Rejected { target: Page },
    /// The in-flight transition was settled early; `next` is the transition
    /// started afterwards, if the target was not the settled page.
    Superseded { settled: Page, next: Option<Page> },
}

impl EnterOutcome {
    /// True if page surfaces need re-rendering.
    pub fn changed_pages(&self) -> bool {
        matches!(self, Self::Started { .. } | Self::Superseded { .. })
    }
}

/// Result of a fired step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub step: NavStep,
    /// Page the step applied to: `from` for exit, `to` for entry.
    pub page: Page,
    /// True if this step settled the transition.
    pub settled: bool,
    /// Outcome of the queued request started after settling.
    pub follow_up: Option<EnterOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Transition {
    id: u64,
    from: Page,
    to: Page,
    exited: bool,
    entered: bool,
    exit_timer: TimerHandle,
    entry_timer: TimerHandle,
}

// =============================================================================
// MACHINE
// =============================================================================

#[derive(Debug, Clone)]
pub struct NavigationMachine {
    current: Page,
    in_flight: Option<Transition>,
    queued: Option<Page>,
    policy: BusyPolicy,
    exit_delay: Duration,
    entry_delay: Duration,
    next_id: u64,
    entered: Vec<Page>,
}

impl Default for NavigationMachine {
    fn default() -> Self {
        Self::new(&NavigationSettings::default())
    }
}

impl NavigationMachine {
    /// A machine resting on the home page.
    pub fn new(settings: &NavigationSettings) -> Self {
        Self {
            current: Page::Home,
            in_flight: None,
            queued: None,
            policy: settings.busy_policy,
            exit_delay: settings.exit_delay(),
            entry_delay: settings.entry_delay(),
            next_id: 1,
            entered: Vec::new(),
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn policy(&self) -> BusyPolicy {
        self.policy
    }

    /// `(from, to)` of the in-flight transition.
    pub fn in_flight(&self) -> Option<(Page, Page)> {
        self.in_flight.as_ref().map(|t| (t.from, t.to))
    }

    pub fn queued(&self) -> Option<Page> {
        self.queued
    }

    /// Destination shown on the transition overlay: set while a transition
    /// is in flight and its entry step has not fired.
    pub fn overlay_target(&self) -> Option<Page> {
        self.in_flight
            .as_ref()
            .filter(|t| !t.entered)
            .map(|t| t.to)
    }

    pub fn page_status(&self, page: Page) -> PageStatus {
        match &self.in_flight {
            Some(t) if page == t.to && t.entered => PageStatus::Active,
            Some(t) if page == t.from && !t.exited => PageStatus::Exiting,
            Some(_) => PageStatus::Hidden,
            None if page == self.current => PageStatus::Active,
            None => PageStatus::Hidden,
        }
    }

    /// Only the active page accepts input, and only when nothing is in flight.
    pub fn is_interactive(&self, page: Page) -> bool {
        self.in_flight.is_none() && page == self.current
    }

    /// Pages whose entry step fired since the last call.
    pub fn take_entered(&mut self) -> Vec<Page> {
        std::mem::take(&mut self.entered)
    }

    /// Request navigation to `target`.
    pub fn enter(&mut self, target: Page, timeline: &mut Timeline) -> EnterOutcome {
        if let Some(transition) = &self.in_flight {
            if transition.to == target {
                // the latest request wins over anything queued before it
                self.queued = None;
                return EnterOutcome::AlreadyPending;
            }
            match self.policy {
                BusyPolicy::Queue => {
                    let replaced = self.queued.replace(target);
                    return EnterOutcome::Queued { target, replaced };
                }
                BusyPolicy::Reject => return EnterOutcome::Rejected { target },
                BusyPolicy::Supersede => {
                    let settled = self.fast_forward(timeline);
                    let next = (target != self.current).then(|| {
                        self.start(target, timeline);
                        target
                    });
                    return EnterOutcome::Superseded { settled, next };
                }
            }
        }

        if target == self.current {
            return EnterOutcome::AlreadyCurrent;
        }
        let from = self.current;
        self.start(target, timeline);
        EnterOutcome::Started { from, to: target }
    }

    /// Apply a fired step. Returns `None` for events of a transition that is
    /// no longer in flight or a step that already fired.
    pub fn on_step(
        &mut self,
        transition_id: u64,
        step: NavStep,
        timeline: &mut Timeline,
    ) -> Option<StepReport> {
        let transition = self.in_flight.as_mut().filter(|t| t.id == transition_id)?;

        let page = match step {
            NavStep::Exit => {
                if transition.exited {
                    return None;
                }
                transition.exited = true;
                transition.from
            }
            NavStep::Entry => {
                if transition.entered {
                    return None;
                }
                transition.entered = true;
                self.current = transition.to;
                self.entered.push(transition.to);
                transition.to
            }
        };

        let settled = transition.exited && transition.entered;
        let mut report = StepReport {
            step,
            page,
            settled,
            follow_up: None,
        };
        if settled {
            self.in_flight = None;
            if let Some(next) = self.queued.take() {
                report.follow_up = Some(self.enter(next, timeline));
            }
        }
        Some(report)
    }

    fn start(&mut self, target: Page, timeline: &mut Timeline) {
        let id = self.next_id;
        self.next_id += 1;
        let exit_timer = timeline.schedule(
            self.exit_delay,
            TimerEvent::Navigation {
                transition: id,
                step: NavStep::Exit,
            },
        );
        let entry_timer = timeline.schedule(
            self.entry_delay,
            TimerEvent::Navigation {
                transition: id,
                step: NavStep::Entry,
            },
        );
        self.in_flight = Some(Transition {
            id,
            from: self.current,
            to: target,
            exited: false,
            entered: false,
            exit_timer,
            entry_timer,
        });
    }

    /// Cancel the in-flight steps and apply their end state. Returns the
    /// page that is now current.
    fn fast_forward(&mut self, timeline: &mut Timeline) -> Page {
        if let Some(transition) = self.in_flight.take() {
            timeline.cancel(transition.exit_timer);
            timeline.cancel(transition.entry_timer);
            if !transition.entered {
                self.current = transition.to;
                self.entered.push(transition.to);
            }
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use storefront_model::Universe;

    use super::*;

    const GEEK: Page = Page::Store(Universe::Geek);
    const STREET: Page = Page::Store(Universe::Street);

    fn machine(policy: BusyPolicy) -> NavigationMachine {
        NavigationMachine::new(&NavigationSettings {
            busy_policy: policy,
            ..NavigationSettings::default()
        })
    }

    /// Fire every due event up to `ms`, returning the reports.
    fn run_until(nav: &mut NavigationMachine, timeline: &mut Timeline, ms: u64) -> Vec<StepReport> {
        let mut reports = Vec::new();
        while let Some((_, TimerEvent::Navigation { transition, step })) =
            timeline.pop_due(Duration::from_millis(ms))
        {
            reports.extend(nav.on_step(transition, step, timeline));
        }
        timeline.advance_to(Duration::from_millis(ms));
        reports
    }

    fn active_pages(nav: &NavigationMachine) -> usize {
        Page::ALL
            .iter()
            .filter(|page| nav.page_status(**page) == PageStatus::Active)
            .count()
    }

    #[test]
    fn transition_runs_exit_and_entry_steps() {
        let mut timeline = Timeline::new();
        let mut nav = machine(BusyPolicy::Queue);

        let outcome = nav.enter(GEEK, &mut timeline);
        assert_eq!(outcome, EnterOutcome::Started { from: Page::Home, to: GEEK });
        assert_eq!(nav.page_status(Page::Home), PageStatus::Exiting);
        assert_eq!(nav.page_status(GEEK), PageStatus::Hidden);
        assert_eq!(nav.overlay_target(), Some(GEEK));

        let reports = run_until(&mut nav, &mut timeline, 600);
        assert_eq!(reports.len(), 1);
        assert_eq!(nav.current(), GEEK);
        assert_eq!(nav.page_status(GEEK), PageStatus::Active);
        assert_eq!(nav.page_status(Page::Home), PageStatus::Exiting);
        assert!(nav.is_transitioning());
        assert!(!nav.is_interactive(GEEK));
        assert_eq!(nav.overlay_target(), None);
        assert_eq!(nav.take_entered(), vec![GEEK]);

        let reports = run_until(&mut nav, &mut timeline, 700);
        assert!(reports[0].settled);
        assert!(!nav.is_transitioning());
        assert_eq!(nav.page_status(Page::Home), PageStatus::Hidden);
        assert!(nav.is_interactive(GEEK));
    }

    #[test]
    fn entering_current_page_is_a_no_op() {
        let mut timeline = Timeline::new();
        let mut nav = machine(BusyPolicy::Queue);
        assert_eq!(nav.enter(Page::Home, &mut timeline), EnterOutcome::AlreadyCurrent);
        assert!(timeline.is_empty());
    }

    #[test]
    fn repeat_request_for_in_flight_target_is_ignored() {
        let mut timeline = Timeline::new();
        let mut nav = machine(BusyPolicy::Queue);
        nav.enter(GEEK, &mut timeline);
        assert_eq!(nav.enter(GEEK, &mut timeline), EnterOutcome::AlreadyPending);
        assert_eq!(timeline.len(), 2);
        assert_eq!(nav.queued(), None);
    }

    #[test]
    fn queue_policy_starts_latest_request_after_settle() {
        let mut timeline = Timeline::new();
        let mut nav = machine(BusyPolicy::Queue);
        nav.enter(GEEK, &mut timeline);
        run_until(&mut nav, &mut timeline, 100);
        nav.enter(Page::Store(Universe::Crista), &mut timeline);
        let outcome = nav.enter(STREET, &mut timeline);
        assert_eq!(
            outcome,
            EnterOutcome::Queued {
                target: STREET,
                replaced: Some(Page::Store(Universe::Crista))
            }
        );

        let reports = run_until(&mut nav, &mut timeline, 700);
        let settle = reports.iter().find(|r| r.settled).unwrap();
        assert_eq!(
            settle.follow_up,
            Some(EnterOutcome::Started { from: GEEK, to: STREET })
        );
        assert!(active_pages(&nav) <= 1);

        run_until(&mut nav, &mut timeline, 1400);
        assert_eq!(nav.current(), STREET);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn returning_to_in_flight_target_drops_queued_request() {
        let mut timeline = Timeline::new();
        let mut nav = machine(BusyPolicy::Queue);
        nav.enter(GEEK, &mut timeline);
        nav.enter(STREET, &mut timeline);
        assert_eq!(nav.queued(), Some(STREET));

        assert_eq!(nav.enter(GEEK, &mut timeline), EnterOutcome::AlreadyPending);
        assert_eq!(nav.queued(), None);

        let reports = run_until(&mut nav, &mut timeline, 5000);
        assert!(reports.iter().all(|r| r.follow_up.is_none()));
        assert_eq!(nav.current(), GEEK);
        assert!(!nav.is_transitioning());
    }

    #[test]
    fn reject_policy_drops_request() {
        let mut timeline = Timeline::new();
        let mut nav = machine(BusyPolicy::Reject);
        nav.enter(GEEK, &mut timeline);
        assert_eq!(
            nav.enter(STREET, &mut timeline),
            EnterOutcome::Rejected { target: STREET }
        );
        run_until(&mut nav, &mut timeline, 5000);
        assert_eq!(nav.current(), GEEK);
    }

    #[test]
    fn supersede_policy_cancels_pending_steps() {
        let mut timeline = Timeline::new();
        let mut nav = machine(BusyPolicy::Supersede);
        nav.enter(GEEK, &mut timeline);
        let outcome = nav.enter(STREET, &mut timeline);
        assert_eq!(
            outcome,
            EnterOutcome::Superseded {
                settled: GEEK,
                next: Some(STREET)
            }
        );
        // Only the new transition's two steps remain.
        assert_eq!(timeline.len(), 2);
        assert_eq!(nav.in_flight(), Some((GEEK, STREET)));

        let reports = run_until(&mut nav, &mut timeline, 700);
        assert_eq!(reports.len(), 2);
        assert_eq!(nav.current(), STREET);
        assert_eq!(active_pages(&nav), 1);
    }

    #[test]
    fn stale_step_is_ignored() {
        let mut timeline = Timeline::new();
        let mut nav = machine(BusyPolicy::Queue);
        assert!(nav.on_step(42, NavStep::Entry, &mut timeline).is_none());
        assert_eq!(nav.current(), Page::Home);
    }
}
