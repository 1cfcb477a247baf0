use std::time::Duration;
use tokio::time::Instant;

/// Answer countdown for the running round.
///
/// Restarting replaces the previous deadline rather than stacking a second
/// one, so back-to-back announcements never drift.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: Duration,
    started: Option<Instant>,
}

impl Countdown {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: None,
        }
    }
    pub fn restart(&mut self, now: Instant) {
        self.started = Some(now);
    }
    /// Empty the indicator.
    pub fn reset(&mut self) {
        self.started = None;
    }
    pub fn running(&self) -> bool {
        self.started.is_some()
    }
    pub fn deadline(&self) -> Option<Instant> {
        self.started.map(|s| s + self.duration)
    }
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline().map(|d| d.saturating_duration_since(now))
    }
    pub fn expired(&self, now: Instant) -> bool {
        self.deadline().map(|d| now >= d).unwrap_or(false)
    }
    /// Fraction of the bar filled, from 0 at restart to 1 at the deadline.
    /// An empty indicator reads 0.
    pub fn progress(&self, now: Instant) -> f64 {
        match (self.started, self.duration.is_zero()) {
            (None, _) => 0.0,
            (Some(_), true) => 1.0,
            (Some(started), false) => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn starts_empty() {
        let countdown = Countdown::new(Duration::from_secs(11));
        let now = Instant::now();
        assert!(!countdown.running());
        assert!(!countdown.expired(now));
        assert_eq!(countdown.progress(now), 0.0);
        assert!(countdown.remaining(now).is_none());
    }
    #[test]
    fn fills_over_duration() {
        let mut countdown = Countdown::new(Duration::from_secs(10));
        let t0 = Instant::now();
        countdown.restart(t0);
        assert_eq!(countdown.progress(t0), 0.0);
        assert_eq!(countdown.progress(t0 + Duration::from_secs(5)), 0.5);
        assert_eq!(countdown.progress(t0 + Duration::from_secs(30)), 1.0);
        assert_eq!(
            countdown.remaining(t0 + Duration::from_secs(4)),
            Some(Duration::from_secs(6))
        );
        assert!(countdown.expired(t0 + Duration::from_secs(10)));
    }
    #[test]
    fn restart_replaces_deadline() {
        let mut countdown = Countdown::new(Duration::from_secs(10));
        let t0 = Instant::now();
        countdown.restart(t0);
        countdown.restart(t0 + Duration::from_secs(8));
        assert_eq!(countdown.deadline(), Some(t0 + Duration::from_secs(18)));
        assert_eq!(countdown.progress(t0 + Duration::from_secs(13)), 0.5);
    }
    #[test]
    fn reset_empties() {
        let mut countdown = Countdown::new(Duration::from_secs(10));
        let t0 = Instant::now();
        countdown.restart(t0);
        countdown.reset();
        countdown.reset();
        assert!(!countdown.running());
        assert_eq!(countdown.progress(t0 + Duration::from_secs(3)), 0.0);
    }
}
