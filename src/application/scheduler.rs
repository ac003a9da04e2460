use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

/// Process-wide so that no two schedulers ever hand out equal handles.
static NEXT_TICK_ID: AtomicU64 = AtomicU64::new(0);

/// Ticket for one scheduled tick.
///
/// Each handle is unique and runs at most once: only the handle most
/// recently returned by [`Scheduler::take_due`] can be claimed, and claiming
/// it uses it up. `cancel` invalidates every outstanding handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickHandle {
    id: u64,
}

/// Scheduler holds at most one pending tick and at most one due tick.
///
/// The host's frame loop takes the due tick once per frame; the driver
/// claims the handle before running the tick body.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Option<TickHandle>,
    due: Option<TickHandle>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a tick for the next frame, replacing any pending one
    pub fn schedule(&mut self) -> TickHandle {
        let handle = TickHandle {
            id: NEXT_TICK_ID.fetch_add(1, Ordering::Relaxed),
        };
        self.pending = Some(handle);
        handle
    }

    /// Drop the pending tick and invalidate every handle issued so far
    pub fn cancel(&mut self) {
        let pending = self.pending.take();
        let due = self.due.take();
        if let Some(handle) = pending.or(due) {
            trace!(id = handle.id, "cancelled tick");
        }
    }

    /// Take the tick due this frame, if any
    pub fn take_due(&mut self) -> Option<TickHandle> {
        let handle = self.pending.take()?;
        self.due = Some(handle);
        Some(handle)
    }

    /// Use up `handle`. True only for the live due handle, and only once.
    pub fn claim(&mut self, handle: TickHandle) -> bool {
        if self.due == Some(handle) {
            self.due = None;
            true
        } else {
            false
        }
    }
}
