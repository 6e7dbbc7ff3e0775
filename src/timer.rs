//! A poll-driven one-shot timer for the session's busy window.
//!
//! The session itself never looks at a clock; it marks when playback should
//! end and something in the host loop polls a [`BusyTimer`] to deliver the
//! completion event. Hosts with their own timing (an audio callback, a UI
//! event loop) can skip this type and call the session's completion
//! operation directly.

use std::time::{Duration, Instant};

/// One-shot wall-clock timer that fires exactly once per arming.
///
/// # Examples
///
/// ```
/// use eartrain::BusyTimer;
///
/// let mut timer = BusyTimer::new();
/// assert!(!timer.poll());
///
/// timer.arm(0.0);
/// assert!(timer.poll());  // fires once
/// assert!(!timer.poll()); // then goes quiet
/// ```
#[derive(Debug, Clone)]
pub struct BusyTimer {
    deadline: Option<Instant>,
}

impl BusyTimer {
    /// Creates an unarmed timer.
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `seconds` from now.
    ///
    /// Re-arming replaces any pending deadline.
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is negative or not finite.
    pub fn arm(&mut self, seconds: f64) {
        assert!(
            seconds.is_finite() && seconds >= 0.0,
            "timer deadline must be a non-negative number of seconds"
        );
        self.deadline = Some(Instant::now() + Duration::from_secs_f64(seconds));
    }

    /// Returns true if a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the deadline has passed.
    ///
    /// Polling an unarmed timer, or polling again after the timer has
    /// fired, returns false.
    pub fn poll(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Returns the time left until the deadline, or `None` if unarmed.
    ///
    /// Once the deadline has passed (but before `poll` observes it) this
    /// reports a zero duration.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

impl Default for BusyTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_timer_never_fires() {
        let mut timer = BusyTimer::new();
        assert!(!timer.is_armed());
        assert!(!timer.poll());
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn test_zero_deadline_fires_immediately_and_once() {
        let mut timer = BusyTimer::new();
        timer.arm(0.0);
        assert!(timer.poll());
        assert!(!timer.poll());
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_distant_deadline_does_not_fire() {
        let mut timer = BusyTimer::new();
        timer.arm(10.0);
        assert!(!timer.poll());
        assert!(timer.is_armed());

        let remaining = timer.remaining().unwrap();
        assert!(remaining <= Duration::from_secs(10));
        assert!(remaining > Duration::from_secs(9));
    }

    #[test]
    fn test_rearming_replaces_deadline() {
        let mut timer = BusyTimer::new();
        timer.arm(10.0);
        timer.arm(0.0);
        assert!(timer.poll());
    }

    #[test]
    fn test_fires_after_sleeping_past_deadline() {
        let mut timer = BusyTimer::new();
        timer.arm(0.005);
        std::thread::sleep(Duration::from_millis(20));
        assert!(timer.poll());
        assert!(!timer.poll());
    }

    #[test]
    #[should_panic]
    fn test_negative_deadline_panics() {
        let mut timer = BusyTimer::new();
        timer.arm(-1.0);
    }
}
