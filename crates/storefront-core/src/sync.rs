//! View synchronizer.
//!
//! Re-renders the surfaces owned by changed state and hands them to the
//! [`ViewPort`]. The last view presented on each surface is cached, so a
//! render equal to what the surface already shows is not presented again.

use std::collections::HashMap;

use tracing::trace;

use crate::port::ViewPort;
use crate::state::StoreState;
use crate::view::{Dirty, SurfaceId, SurfaceView, render_surface};

/// What happened to one surface during a sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Presented,
    /// Equal to the view already on the surface.
    Unchanged,
    /// Surface is not mounted.
    Skipped,
    /// Nothing to render for this surface.
    Empty,
}

#[derive(Debug, Default)]
pub struct ViewSynchronizer {
    presented: HashMap<SurfaceId, SurfaceView>,
}

impl ViewSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render one surface and present it if it changed.
    pub fn sync<P: ViewPort + ?Sized>(
        &mut self,
        state: &StoreState,
        port: &mut P,
        surface: SurfaceId,
    ) -> SyncOutcome {
        if !port.is_mounted(surface) {
            // Forget what it showed so a remounted surface gets a full render.
            self.presented.remove(&surface);
            trace!(%surface, "surface not mounted, skipping");
            return SyncOutcome::Skipped;
        }
        let Some(view) = render_surface(state, surface) else {
            return SyncOutcome::Empty;
        };
        if self.presented.get(&surface) == Some(&view) {
            return SyncOutcome::Unchanged;
        }
        self.presented.insert(surface, view.clone());
        port.present(surface, view);
        SyncOutcome::Presented
    }

    /// Sync every surface owned by the dirty components. Returns the number
    /// of presentations.
    pub fn sync_dirty<'a, P: ViewPort + ?Sized>(
        &mut self,
        state: &StoreState,
        port: &mut P,
        dirty: impl IntoIterator<Item = &'a Dirty>,
    ) -> usize {
        dirty
            .into_iter()
            .flat_map(|d| d.surfaces())
            .filter(|surface| self.sync(state, port, *surface) == SyncOutcome::Presented)
            .count()
    }

    /// Sync every surface.
    pub fn sync_all<P: ViewPort + ?Sized>(&mut self, state: &StoreState, port: &mut P) -> usize {
        SurfaceId::all()
            .into_iter()
            .filter(|surface| self.sync(state, port, *surface) == SyncOutcome::Presented)
            .count()
    }

    /// Forget every cached view; the next sync presents everything again.
    pub fn invalidate_all(&mut self) {
        self.presented.clear();
    }
}
