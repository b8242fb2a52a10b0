//! Single-slot cancellable debounce timer.
//!
//! The debouncer holds at most one pending value. Scheduling a new value
//! cancels the previous one and restarts the quiet window from `now_ms`. Time
//! is passed in by the caller, so the same type works under a browser timer,
//! a test clock, or a manual flush.
//!
//! Every schedule returns a fresh [`TimerHandle`]. Hosts that drive a real
//! timer (`setTimeout`) hand the handle back through [`Debouncer::fire`]; a
//! handle from a superseded schedule no longer matches and is ignored.

/// Identifies one scheduled commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u32);

impl TimerHandle {
    /// Raw id, for passing across the JS boundary.
    pub fn id(self) -> u32 {
        self.0
    }

    /// Rebuild a handle from a raw id.
    pub fn from_id(id: u32) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    handle: TimerHandle,
    value: T,
    deadline_ms: u64,
}

/// Debounce timer owning the latest pending value.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window_ms: u64,
    next_id: u32,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Create an idle debouncer with the given quiet window.
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            next_id: 0,
            pending: None,
        }
    }

    /// Quiet window in milliseconds.
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Schedule `value`, replacing any pending one.
    pub fn schedule(&mut self, value: T, now_ms: u64) -> TimerHandle {
        if let Some(previous) = self.pending.take() {
            tracing::trace!(handle = previous.handle.0, "debounced commit superseded");
        }

        self.next_id = self.next_id.wrapping_add(1);
        let handle = TimerHandle(self.next_id);
        let deadline_ms = now_ms.saturating_add(self.window_ms);
        tracing::trace!(handle = handle.0, deadline_ms, "debounced commit scheduled");

        self.pending = Some(Pending {
            handle,
            value,
            deadline_ms,
        });
        handle
    }

    /// Drop the pending value, if any, and return it.
    pub fn cancel(&mut self) -> Option<T> {
        let pending = self.pending.take()?;
        tracing::trace!(handle = pending.handle.0, "debounced commit cancelled");
        Some(pending.value)
    }

    /// Take the pending value regardless of its deadline.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Take the pending value if its quiet window has elapsed at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| now_ms >= p.deadline_ms);
        if due {
            self.take()
        } else {
            None
        }
    }

    /// Take the pending value if `handle` is still the live timer.
    pub fn fire(&mut self, handle: TimerHandle) -> Option<T> {
        if self.handle() == Some(handle) {
            self.take()
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, if any.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline_ms)
    }

    /// Handle of the pending value, if any.
    pub fn handle(&self) -> Option<TimerHandle> {
        self.pending.as_ref().map(|p| p.handle)
    }
}
