//! Cancelable debounce timer
//!
//! Deadline based: nothing runs in the background. The owner asks
//! [`Debouncer::fire_if_due`] on every tick and sizes its event poll with
//! [`Debouncer::time_until_due`].

use std::time::{Duration, Instant};

/// Quiet period before a debounced fetch fires
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Handle to one scheduled firing; it goes stale once the timer is
/// rescheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceHandle(u64);

/// A single restartable timer
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
    generation: u64,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    /// Create an idle timer with the given quiet period
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            generation: 0,
        }
    }

    /// (Re)start the timer; any earlier schedule is superseded
    pub fn schedule(&mut self, now: Instant) -> DebounceHandle {
        self.generation += 1;
        self.deadline = Some(now + self.delay);
        DebounceHandle(self.generation)
    }

    /// Cancel only if `handle` is still the pending schedule
    pub fn cancel_handle(&mut self, handle: DebounceHandle) -> bool {
        if self.deadline.is_some() && handle.0 == self.generation {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Whether a firing is pending
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the pending firing (zero if overdue)
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consume the pending firing if its deadline has passed
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn test_fires_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(start);

        assert!(!debouncer.fire_if_due(start + Duration::from_millis(499)));
        assert!(debouncer.fire_if_due(start + DELAY));
        assert!(!debouncer.is_pending());
        assert!(!debouncer.fire_if_due(start + DELAY * 2));
    }

    #[test]
    fn test_reschedule_pushes_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(start);
        debouncer.schedule(start + Duration::from_millis(300));

        assert!(!debouncer.fire_if_due(start + Duration::from_millis(600)));
        assert!(debouncer.fire_if_due(start + Duration::from_millis(800)));
    }

    #[test]
    fn test_rapid_changes_collapse_into_one_firing() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        let mut fired = 0;

        for step in 0..10u64 {
            let now = start + Duration::from_millis(step * 50);
            if debouncer.fire_if_due(now) {
                fired += 1;
            }
            debouncer.schedule(now);
        }
        for step in 0..40u64 {
            if debouncer.fire_if_due(start + Duration::from_millis(450 + step * 50)) {
                fired += 1;
            }
        }

        assert_eq!(fired, 1);
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        let handle = debouncer.schedule(start);

        assert!(debouncer.cancel_handle(handle));
        assert!(!debouncer.cancel_handle(handle));
        assert!(!debouncer.fire_if_due(start + DELAY));
    }

    #[test]
    fn test_handle_is_stale_after_firing() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        let handle = debouncer.schedule(start);

        assert!(debouncer.fire_if_due(start + DELAY));
        assert!(!debouncer.cancel_handle(handle));
    }

    #[test]
    fn test_cancel_stale_handle_is_noop() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        let old = debouncer.schedule(start);
        let current = debouncer.schedule(start);

        assert!(!debouncer.cancel_handle(old));
        assert!(debouncer.is_pending());
        assert!(debouncer.cancel_handle(current));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_time_until_due() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        assert_eq!(debouncer.time_until_due(start), None);

        debouncer.schedule(start);
        assert_eq!(
            debouncer.time_until_due(start + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
        assert_eq!(
            debouncer.time_until_due(start + Duration::from_secs(2)),
            Some(Duration::ZERO)
        );
    }
}
