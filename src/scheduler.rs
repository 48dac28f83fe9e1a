//! Animation lifecycle: an explicit `Idle`/`Running` state machine.
//!
//! The host's frame-delivery mechanism (a winit redraw in production)
//! calls back with the handle it was issued. Every accepted tick issues
//! the next registration, so exactly one live handle exists at a time;
//! `stop()` invalidates it, and a redraw that was already queued when
//! `stop()` ran is rejected instead of mutating anything.

/// Opaque token for one pending frame registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Running { pending: FrameHandle },
}

/// Drives the per-frame cadence and owns the start/stop lifecycle.
#[derive(Debug)]
pub struct Scheduler {
    state: State,
    next: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            next: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    /// `Idle -> Running`; returns the first registration handle.
    ///
    /// A no-op returning `None` when already running: the existing
    /// registration stays live and is still the one `stop()` cancels.
    pub fn start(&mut self) -> Option<FrameHandle> {
        if self.is_running() {
            return None;
        }
        let handle = self.issue();
        self.state = State::Running { pending: handle };
        Some(handle)
    }

    /// `Running -> Idle`, cancelling the pending registration.
    /// Idempotent; safe with no frame pending. After this returns, no
    /// tick is accepted until the next `start()`.
    pub fn stop(&mut self) {
        self.state = State::Idle;
    }

    /// A frame callback fired for `handle`.
    ///
    /// Accepted only while running and only for the latest issued
    /// registration; acceptance re-registers by issuing the next handle.
    /// Stale or post-stop handles return `None`.
    pub fn tick(&mut self, handle: FrameHandle) -> Option<FrameHandle> {
        match self.state {
            State::Running { pending } if pending == handle => {
                let next = self.issue();
                self.state = State::Running { pending: next };
                Some(next)
            }
            _ => None,
        }
    }

    fn issue(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next);
        self.next += 1;
        handle
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_then_tick_chain() {
        let mut scheduler = Scheduler::new();
        let h0 = scheduler.start().unwrap();
        let h1 = scheduler.tick(h0).unwrap();
        let h2 = scheduler.tick(h1).unwrap();
        assert_ne!(h1, h0);
        assert_ne!(h2, h1);
        assert!(scheduler.is_running());
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut scheduler = Scheduler::new();
        let h0 = scheduler.start().unwrap();
        assert_eq!(scheduler.start(), None);
        // The original registration is still the live one.
        assert!(scheduler.tick(h0).is_some());
    }

    #[test]
    fn test_stop_cancels_latest_registration() {
        let mut scheduler = Scheduler::new();
        let h0 = scheduler.start().unwrap();
        let h1 = scheduler.tick(h0).unwrap();
        scheduler.stop();
        assert!(!scheduler.is_running());
        // Neither the stale nor the latest handle fires after stop.
        assert_eq!(scheduler.tick(h0), None);
        assert_eq!(scheduler.tick(h1), None);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut scheduler = Scheduler::new();
        scheduler.stop();
        scheduler.stop();
        assert!(!scheduler.is_running());
        scheduler.start().unwrap();
        scheduler.stop();
        scheduler.stop();
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_stale_handle_rejected_while_running() {
        let mut scheduler = Scheduler::new();
        let h0 = scheduler.start().unwrap();
        let h1 = scheduler.tick(h0).unwrap();
        // A duplicate delivery of the consumed handle must not tick.
        assert_eq!(scheduler.tick(h0), None);
        assert!(scheduler.tick(h1).is_some());
    }

    #[test]
    fn test_restart_invalidates_old_handles() {
        let mut scheduler = Scheduler::new();
        let h0 = scheduler.start().unwrap();
        scheduler.stop();
        let h1 = scheduler.start().unwrap();
        assert_eq!(scheduler.tick(h0), None);
        assert!(scheduler.tick(h1).is_some());
    }
}
