//! Frame-polled toggle timers.
//!
//! Every timed behaviour in the game — star blink, heart pulse, shoot
//! cooldown, meteor spawning — is the same pattern: an explicit
//! last-transition timestamp compared against the monotonic clock each
//! frame. [`Pulse`] names that pattern once so entity state stays plain
//! data with no hidden closures.

/// A repeating timer: fires whenever `period` seconds have elapsed since the
/// last transition. Purely queried; nothing runs between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    /// Timestamp of the last transition (seconds since app start).
    pub last: f32,
    /// Seconds that must elapse before the next transition.
    pub period: f32,
}

impl Pulse {
    pub fn new(now: f32, period: f32) -> Self {
        Self { last: now, period }
    }

    /// Whether the period has elapsed since the last transition.
    #[inline]
    pub fn ready(&self, now: f32) -> bool {
        now - self.last >= self.period
    }

    /// Consume the elapsed period if ready. Returns `true` exactly when the
    /// caller should perform its toggle; `last` is then anchored at `now`.
    #[inline]
    pub fn tick(&mut self, now: f32) -> bool {
        if self.ready(now) {
            self.last = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_period_elapses() {
        let mut pulse = Pulse::new(0.0, 0.5);
        assert!(!pulse.tick(0.1));
        assert!(!pulse.tick(0.49));
        assert!(pulse.tick(0.5));
    }

    #[test]
    fn rearms_from_fire_time() {
        let mut pulse = Pulse::new(0.0, 0.5);
        assert!(pulse.tick(0.6));
        // Anchored at 0.6, not 0.5 — drift is intentional and matches the
        // original per-frame polling behaviour.
        assert!(!pulse.tick(1.0));
        assert!(pulse.tick(1.1));
    }

    #[test]
    fn period_can_be_rerandomised_between_fires() {
        let mut pulse = Pulse::new(0.0, 0.2);
        assert!(pulse.tick(0.2));
        pulse.period = 1.0;
        assert!(!pulse.tick(0.9));
        assert!(pulse.tick(1.2));
    }
}
