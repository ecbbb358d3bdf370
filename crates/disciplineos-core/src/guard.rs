//! Single-flight guard with a soft rate limit.
//!
//! An explicit struct owned by whatever drives the session: an in-flight
//! flag plus a minimum inter-action interval. Both checks are cooperative
//! UI throttles, not correctness mechanisms; the engine itself has no
//! concurrent callers.

use std::time::{Duration, Instant};

use crate::error::Throttle;

/// Default minimum interval between user actions.
pub const DEFAULT_RATE_LIMIT_MS: u64 = 900;

/// Per-session action throttle.
#[derive(Debug)]
pub struct ActionGuard {
    min_interval: Duration,
    last_action_at: Option<Instant>,
    in_flight: bool,
}

impl ActionGuard {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_action_at: None,
            in_flight: false,
        }
    }

    /// Admit an action starting at `now`, or reject it.
    ///
    /// The rate limit is checked first; an admitted timestamp is stamped
    /// before the in-flight check, so a busy rejection still advances the
    /// window while a too-soon rejection does not.
    pub fn try_begin(&mut self, now: Instant) -> Result<(), Throttle> {
        if let Some(last) = self.last_action_at {
            if now.saturating_duration_since(last) < self.min_interval {
                return Err(Throttle::TooSoon);
            }
        }
        self.last_action_at = Some(now);

        if self.in_flight {
            return Err(Throttle::Busy);
        }
        self.in_flight = true;
        Ok(())
    }

    /// Mark the admitted action finished.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

impl Default for ActionGuard {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_RATE_LIMIT_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_actions_inside_the_interval() {
        let mut guard = ActionGuard::new(Duration::from_millis(900));
        let t0 = Instant::now();

        assert!(guard.try_begin(t0).is_ok());
        guard.finish();

        assert_eq!(
            guard.try_begin(t0 + Duration::from_millis(100)),
            Err(Throttle::TooSoon)
        );
        assert!(guard.try_begin(t0 + Duration::from_millis(1000)).is_ok());
    }

    #[test]
    fn rejects_overlapping_actions() {
        let mut guard = ActionGuard::new(Duration::ZERO);
        let t0 = Instant::now();

        assert!(guard.try_begin(t0).is_ok());
        // Previous action never finished.
        assert_eq!(guard.try_begin(t0), Err(Throttle::Busy));

        guard.finish();
        assert!(guard.try_begin(t0).is_ok());
    }

    #[test]
    fn too_soon_rejection_does_not_extend_the_window() {
        let mut guard = ActionGuard::new(Duration::from_millis(900));
        let t0 = Instant::now();

        assert!(guard.try_begin(t0).is_ok());
        guard.finish();

        // The rejected attempt at t0+800 does not restart the window, so
        // t0+1000 is admitted.
        assert_eq!(
            guard.try_begin(t0 + Duration::from_millis(800)),
            Err(Throttle::TooSoon)
        );
        assert!(guard.try_begin(t0 + Duration::from_millis(1000)).is_ok());
    }
}
