use crate::Points;
use crate::SCORE_ANIMATION;
use crate::SCORE_MIN_STEP;
use std::time::Duration;
use tokio::time::Instant;

/// Score reveal that counts from 0 up to the awarded points.
///
/// The value follows wall time over [`SCORE_ANIMATION`] and is sampled at
/// most once per step, the step being long enough to show every intermediate
/// value but never shorter than [`SCORE_MIN_STEP`]. Once the target has been
/// shown the counter yields nothing more.
#[derive(Debug, Clone, Copy)]
pub struct ScoreCounter {
    target: Points,
    start: Instant,
    step: Duration,
    due: Instant,
    shown: Option<Points>,
}

impl ScoreCounter {
    pub fn start(target: Points, now: Instant) -> Self {
        Self {
            target,
            start: now,
            step: Self::step_for(target),
            due: now,
            shown: None,
        }
    }
    fn step_for(target: Points) -> Duration {
        match target {
            0 => SCORE_MIN_STEP,
            n => (SCORE_ANIMATION / n).max(SCORE_MIN_STEP),
        }
    }
    pub fn step(&self) -> Duration {
        self.step
    }
    pub fn shown(&self) -> Option<Points> {
        self.shown
    }
    pub fn end(&self) -> Instant {
        self.start + SCORE_ANIMATION
    }
    /// Counter value at `now`, regardless of stepping.
    pub fn value_at(&self, now: Instant) -> Points {
        let remaining = self.end().saturating_duration_since(now).as_secs_f64()
            / SCORE_ANIMATION.as_secs_f64();
        let target = self.target as f64;
        (target - remaining * target).round() as Points
    }
    /// The animation has displayed its final value.
    pub fn done(&self) -> bool {
        self.shown == Some(self.target)
    }
    /// Next value to display, if a step is due and the animation still runs.
    pub fn poll(&mut self, now: Instant) -> Option<Points> {
        if self.done() || now < self.due {
            return None;
        }
        while self.due <= now {
            self.due += self.step;
        }
        let value = self.value_at(now);
        self.shown = Some(value);
        Some(value)
    }
}
