//! Debounced history controller.
//!
//! The controller starts `Empty` (or seeded via [`HistoryController::with_initial`])
//! and becomes `Tracking` on its first snapshot, staying there for the session.
//! While tracking, [`commit`](HistoryController::commit) only schedules the
//! candidate; it lands in history when the quiet window elapses
//! ([`poll`](HistoryController::poll)), when the host's timer fires
//! ([`fire`](HistoryController::fire)), or on [`flush`](HistoryController::flush).
//!
//! Restoring a snapshot through undo/redo needs no re-entrancy flag: when the
//! host echoes the restored value back through `commit`, it equals the live
//! entry and is dropped.

use super::debounce::{Debouncer, TimerHandle};
use super::{HistoryConfig, HistoryState};
use crate::params::BlurParameters;

/// Undo/redo controller with debounced commits.
#[derive(Debug, Clone)]
pub struct HistoryController<T = BlurParameters> {
    config: HistoryConfig,
    state: Option<HistoryState<T>>,
    debouncer: Debouncer<T>,
}

impl<T: Clone + PartialEq> HistoryController<T> {
    /// Create a controller in the `Empty` state.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            config,
            state: None,
            debouncer: Debouncer::new(config.debounce_ms),
        }
    }

    /// Create a controller already tracking `initial`.
    pub fn with_initial(initial: T, config: HistoryConfig) -> Self {
        Self {
            config,
            state: Some(HistoryState::new(initial)),
            debouncer: Debouncer::new(config.debounce_ms),
        }
    }

    pub fn config(&self) -> HistoryConfig {
        self.config
    }

    /// Whether the first snapshot has been observed.
    pub fn is_tracking(&self) -> bool {
        self.state.is_some()
    }

    /// The live snapshot, or `None` before the first commit.
    pub fn current_snapshot(&self) -> Option<&T> {
        self.state.as_ref().map(HistoryState::current)
    }

    /// Full history, for inspection.
    pub fn state(&self) -> Option<&HistoryState<T>> {
        self.state.as_ref()
    }

    /// Offer a new snapshot observed at `now_ms`.
    ///
    /// - `Empty`: seeds the history immediately and returns `None`.
    /// - Candidate equals the live entry: cancels any pending commit and
    ///   returns `None`.
    /// - Otherwise: schedules the candidate, replacing any pending one, and
    ///   returns the timer handle.
    pub fn commit(&mut self, candidate: T, now_ms: u64) -> Option<TimerHandle> {
        if self.state.is_none() {
            tracing::debug!("history seeded with first snapshot");
            self.state = Some(HistoryState::new(candidate));
            return None;
        }

        if self.current_snapshot() == Some(&candidate) {
            self.debouncer.cancel();
            return None;
        }

        Some(self.debouncer.schedule(candidate, now_ms))
    }

    /// Commit the pending snapshot if its quiet window has elapsed.
    ///
    /// Returns `true` if a new entry was appended.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.debouncer.poll(now_ms) {
            Some(snapshot) => self.append(snapshot),
            None => false,
        }
    }

    /// Commit the pending snapshot if `handle` is still the live timer.
    ///
    /// Returns `true` if a new entry was appended.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        match self.debouncer.fire(handle) {
            Some(snapshot) => self.append(snapshot),
            None => false,
        }
    }

    /// Commit the pending snapshot immediately.
    ///
    /// Returns `true` if a new entry was appended.
    pub fn flush(&mut self) -> bool {
        match self.debouncer.take() {
            Some(snapshot) => self.append(snapshot),
            None => false,
        }
    }

    /// Step back one entry and return the snapshot to apply.
    ///
    /// Any pending edit is cancelled; the restored snapshot replaces it. Only
    /// the cursor moves. No-op at the first entry.
    pub fn undo(&mut self) -> Option<&T> {
        self.debouncer.cancel();
        let state = self.state.as_mut()?;
        state.step_back()?;
        tracing::debug!(index = state.index(), "undo applied");
        Some(state.current())
    }

    /// Step forward one entry and return the snapshot to apply.
    ///
    /// Any pending edit is cancelled. Only the cursor moves. No-op at the last
    /// entry.
    pub fn redo(&mut self) -> Option<&T> {
        self.debouncer.cancel();
        let state = self.state.as_mut()?;
        state.step_forward()?;
        tracing::debug!(index = state.index(), "redo applied");
        Some(state.current())
    }

    /// Whether [`undo`](Self::undo) would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.state.as_ref().is_some_and(HistoryState::can_undo)
    }

    /// Whether [`redo`](Self::redo) would move the cursor.
    pub fn can_redo(&self) -> bool {
        self.state.as_ref().is_some_and(HistoryState::can_redo)
    }

    pub fn has_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Deadline of the pending commit, if any.
    pub fn pending_deadline_ms(&self) -> Option<u64> {
        self.debouncer.deadline_ms()
    }

    /// Number of committed entries.
    pub fn len(&self) -> usize {
        self.state.as_ref().map_or(0, HistoryState::len)
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_none()
    }

    /// Cursor position, or `None` while `Empty`.
    pub fn index(&self) -> Option<usize> {
        self.state.as_ref().map(HistoryState::index)
    }

    fn append(&mut self, snapshot: T) -> bool {
        let capacity = self.config.capacity;
        match self.state.as_mut() {
            Some(state) => {
                let appended = state.push(snapshot, capacity);
                if appended {
                    tracing::debug!(index = state.index(), len = state.len(), "history entry committed");
                }
                appended
            }
            None => {
                self.state = Some(HistoryState::new(snapshot));
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Direction;

    const WINDOW: u64 = 300;

    fn snapshot(height: u32) -> BlurParameters {
        BlurParameters::default().with_height(height)
    }

    fn tracking(initial: BlurParameters) -> HistoryController {
        HistoryController::with_initial(initial, HistoryConfig::default())
    }

    /// Commit and let the debounce window elapse.
    fn settle(history: &mut HistoryController, params: BlurParameters, now: &mut u64) {
        history.commit(params, *now);
        *now += WINDOW;
        history.poll(*now);
    }

    #[test]
    fn test_empty_seeds_on_first_commit() {
        let mut history: HistoryController = HistoryController::new(HistoryConfig::default());
        assert!(!history.is_tracking());
        assert!(history.is_empty());
        assert_eq!(history.current_snapshot(), None);
        assert_eq!(history.index(), None);

        let handle = history.commit(snapshot(40), 0);
        assert_eq!(handle, None);
        assert!(history.is_tracking());
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), Some(0));
        assert_eq!(history.current_snapshot(), Some(&snapshot(40)));
    }

    #[test]
    fn test_duplicate_commit_not_appended() {
        let a = snapshot(40);
        let mut history: HistoryController = HistoryController::new(HistoryConfig::default());
        let mut now = 0;

        settle(&mut history, a, &mut now);
        settle(&mut history, a, &mut now);

        assert_eq!(history.len(), 1);
        assert!(!history.has_pending());
    }

    #[test]
    fn test_undo_then_commit_truncates_future() {
        let (a, b, c, d) = (snapshot(10), snapshot(20), snapshot(30), snapshot(40));
        let mut history = tracking(a);
        let mut now = 0;

        settle(&mut history, b, &mut now);
        settle(&mut history, c, &mut now);
        assert_eq!(history.len(), 3);

        history.undo();
        assert_eq!(history.undo(), Some(&a));
        assert_eq!(history.current_snapshot(), Some(&a));

        settle(&mut history, d, &mut now);
        let state = history.state().unwrap();
        assert_eq!(state.entries(), &[a, d]);
        assert_eq!(state.index(), 1);

        assert_eq!(history.redo(), None);
        assert_eq!(history.index(), Some(1));
    }

    #[test]
    fn test_boundary_undo_redo_are_noops() {
        let a = snapshot(10);
        let mut history = tracking(a);

        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert_eq!(history.index(), Some(0));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_undo_redo_on_empty_controller() {
        let mut history: HistoryController = HistoryController::new(HistoryConfig::default());
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_burst_coalesces_to_last_value() {
        let (a, b, c, d) = (snapshot(10), snapshot(20), snapshot(30), snapshot(40));
        let mut history = tracking(a);

        history.commit(b, 0);
        history.commit(c, 100);
        history.commit(d, 200);

        assert!(!history.poll(499));
        assert!(history.poll(500));

        let state = history.state().unwrap();
        assert_eq!(state.entries(), &[a, d]);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn test_restored_snapshot_echo_is_ignored() {
        let (a, b) = (snapshot(10), snapshot(20));
        let mut history = tracking(a);
        let mut now = 0;
        settle(&mut history, b, &mut now);

        let restored = *history.undo().unwrap();
        // host applies the restored snapshot and reports it back as a change
        assert_eq!(history.commit(restored, now), None);
        assert!(!history.has_pending());
        assert_eq!(history.len(), 2);
        assert!(history.can_redo());
    }

    #[test]
    fn test_returning_to_live_value_cancels_pending() {
        let (a, b) = (snapshot(10), snapshot(20));
        let mut history = tracking(a);

        history.commit(b, 0);
        history.commit(a, 100);

        assert!(!history.has_pending());
        assert!(!history.poll(10_000));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_fire_uses_live_handle_only() {
        let (a, b, c) = (snapshot(10), snapshot(20), snapshot(30));
        let mut history = tracking(a);

        let stale = history.commit(b, 0).unwrap();
        let live = history.commit(c, 50).unwrap();

        assert!(!history.fire(stale));
        assert!(history.fire(live));
        assert_eq!(history.current_snapshot(), Some(&c));
    }

    #[test]
    fn test_redo_at_last_index_with_pending_edit_is_noop() {
        let (a, b) = (snapshot(10), snapshot(20));
        let mut history = tracking(a);

        history.commit(b, 0);
        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);

        let state = history.state().unwrap();
        assert_eq!(state.entries(), &[a]);
        assert_eq!(state.index(), 0);
        assert!(!history.has_pending());
        assert!(!history.poll(10_000));
    }

    #[test]
    fn test_undo_at_first_index_with_pending_edit_is_noop() {
        let (a, b) = (snapshot(10), snapshot(20));
        let mut history = tracking(a);

        history.commit(b, 0);
        assert!(!history.can_undo());
        assert_eq!(history.undo(), None);

        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), Some(0));
        assert!(!history.has_pending());
    }

    #[test]
    fn test_undo_cancels_pending_edit_and_moves_cursor_only() {
        let (a, b, c) = (snapshot(10), snapshot(20), snapshot(30));
        let mut history = tracking(a);
        let mut now = 0;
        settle(&mut history, b, &mut now);

        history.commit(c, now);
        assert_eq!(history.undo(), Some(&a));
        assert!(!history.has_pending());
        assert!(!history.poll(now + 10_000));

        let state = history.state().unwrap();
        assert_eq!(state.entries(), &[a, b]);
        assert_eq!(state.index(), 0);
        assert_eq!(history.redo(), Some(&b));
    }

    #[test]
    fn test_flush_commits_immediately() {
        let (a, b) = (snapshot(10), snapshot(20));
        let mut history = tracking(a);

        history.commit(b, 0);
        assert_eq!(history.pending_deadline_ms(), Some(WINDOW));
        assert!(history.flush());
        assert!(!history.flush());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_capacity_from_config() {
        let config = HistoryConfig {
            debounce_ms: 0,
            capacity: 3,
        };
        let mut history = HistoryController::with_initial(snapshot(0), config);
        for height in 1..=6 {
            history.commit(snapshot(height), 0);
            history.poll(0);
        }

        let state = history.state().unwrap();
        assert_eq!(state.entries(), &[snapshot(4), snapshot(5), snapshot(6)]);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn test_any_field_change_is_a_new_entry() {
        let a = BlurParameters::default();
        let mut history = tracking(a);
        let mut now = 0;

        settle(&mut history, a.with_direction(Direction::ToRight), &mut now);
        settle(&mut history, a.with_direction(Direction::ToRight).with_blur_radius(3), &mut now);
        assert_eq!(history.len(), 3);
    }
}
