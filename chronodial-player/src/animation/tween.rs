use std::time::{Duration, Instant};

use super::easing::EasingFunction;

/// Timing of a single tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenSpec {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: EasingFunction,
}

impl TweenSpec {
    pub const fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

/// Interpolates one value from `from` to `to`, optionally carrying a cue that
/// is handed back when the tween completes.
#[derive(Debug, Clone)]
pub struct Tween<C> {
    from: f64,
    to: f64,
    started_at: Instant,
    spec: TweenSpec,
    cue: Option<C>,
}

/// Value of a tween at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub finished: bool,
}

impl<C> Tween<C> {
    pub fn new(
        from: f64,
        to: f64,
        started_at: Instant,
        spec: TweenSpec,
        cue: Option<C>,
    ) -> Self {
        Self {
            from,
            to,
            started_at,
            spec,
            cue,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn sample(&self, now: Instant) -> Sample {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.spec.total() {
            return Sample {
                value: self.to,
                finished: true,
            };
        }
        let Some(running) = elapsed.checked_sub(self.spec.delay) else {
            return Sample {
                value: self.from,
                finished: false,
            };
        };
        let t = (running.as_secs_f64() / self.spec.duration.as_secs_f64())
            .clamp(0.0, 1.0);
        let te = self.spec.easing.apply(t);
        Sample {
            value: self.from + (self.to - self.from) * te,
            finished: false,
        }
    }

    pub fn into_cue(self) -> Option<C> {
        self.cue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(ms: u64) -> TweenSpec {
        TweenSpec::new(Duration::from_millis(ms), EasingFunction::Linear)
    }

    #[test]
    fn samples_linearly_and_finishes_on_target() {
        let t0 = Instant::now();
        let tween: Tween<()> = Tween::new(0.0, 100.0, t0, linear(1000), None);

        let half = tween.sample(t0 + Duration::from_millis(500));
        assert!((half.value - 50.0).abs() < 1e-3);
        assert!(!half.finished);

        let end = tween.sample(t0 + Duration::from_millis(1000));
        assert_eq!(end.value, 100.0);
        assert!(end.finished);
    }

    #[test]
    fn holds_start_value_during_delay() {
        let t0 = Instant::now();
        let spec = linear(200).with_delay(Duration::from_millis(300));
        let tween: Tween<()> = Tween::new(0.0, 1.0, t0, spec, None);

        assert_eq!(tween.sample(t0 + Duration::from_millis(299)).value, 0.0);
        let mid = tween.sample(t0 + Duration::from_millis(400));
        assert!((mid.value - 0.5).abs() < 1e-3);
        assert!(tween.sample(t0 + Duration::from_millis(500)).finished);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let t0 = Instant::now();
        let tween: Tween<()> = Tween::new(3.0, 9.0, t0, linear(0), None);
        let sample = tween.sample(t0);
        assert!(sample.finished);
        assert_eq!(sample.value, 9.0);
    }
}
