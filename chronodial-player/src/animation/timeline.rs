use std::collections::BTreeMap;
use std::time::Instant;

use super::tween::{Tween, TweenSpec};

/// Keyed set of running tweens plus the last sampled value of every channel.
///
/// Values only change on [`Timeline::tick`] or [`Timeline::set`]. Channels
/// are kept ordered so cues completing on the same frame are delivered in a
/// stable order.
#[derive(Debug, Clone)]
pub struct Timeline<K, C> {
    values: BTreeMap<K, f64>,
    tweens: BTreeMap<K, Tween<C>>,
}

impl<K, C> Default for Timeline<K, C> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
            tweens: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy, C> Timeline<K, C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump a channel to `value`, cancelling any tween on it. The cancelled
    /// tween's cue is returned and never delivered.
    pub fn set(&mut self, key: K, value: f64) -> Option<C> {
        self.values.insert(key, value);
        self.tweens.remove(&key).and_then(Tween::into_cue)
    }

    /// Current animated value of a channel, if it was ever set.
    pub fn value(&self, key: K) -> Option<f64> {
        self.values.get(&key).copied()
    }

    pub fn value_or(&self, key: K, default: f64) -> f64 {
        self.value(key).unwrap_or(default)
    }

    /// Where the channel is heading: the running tween's target, otherwise
    /// its current value.
    pub fn goal(&self, key: K) -> Option<f64> {
        self.tweens
            .get(&key)
            .map(Tween::target)
            .or_else(|| self.value(key))
    }

    /// Animate `key` from its current value to `to`.
    ///
    /// A tween already running on the channel is replaced; its cue is
    /// returned so the caller can tell a request was superseded.
    pub fn animate(
        &mut self,
        key: K,
        to: f64,
        spec: TweenSpec,
        now: Instant,
        cue: Option<C>,
    ) -> Option<C> {
        let from = self.value_or(key, to);
        self.values.entry(key).or_insert(from);
        self.tweens
            .insert(key, Tween::new(from, to, now, spec, cue))
            .and_then(Tween::into_cue)
    }

    /// Advance every tween to `now`, returning the cues of tweens that
    /// finished.
    pub fn tick(&mut self, now: Instant) -> Vec<C> {
        let mut finished = Vec::new();
        for (key, tween) in &self.tweens {
            let sample = tween.sample(now);
            self.values.insert(*key, sample.value);
            if sample.finished {
                finished.push(*key);
            }
        }

        finished
            .into_iter()
            .filter_map(|key| self.tweens.remove(&key))
            .filter_map(Tween::into_cue)
            .collect()
    }

    pub fn is_active(&self) -> bool {
        !self.tweens.is_empty()
    }

    pub fn is_animating(&self, key: K) -> bool {
        self.tweens.contains_key(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EasingFunction;
    use std::time::Duration;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Key {
        A,
        B,
    }

    fn spec(ms: u64) -> TweenSpec {
        TweenSpec::new(Duration::from_millis(ms), EasingFunction::Linear)
    }

    #[test]
    fn unset_channel_animates_from_its_goal() {
        let t0 = Instant::now();
        let mut timeline: Timeline<Key, &str> = Timeline::new();
        timeline.animate(Key::A, 5.0, spec(100), t0, None);
        timeline.tick(t0 + Duration::from_millis(50));
        assert_eq!(timeline.value(Key::A), Some(5.0));
    }

    #[test]
    fn tick_delivers_cues_once_and_goes_idle() {
        let t0 = Instant::now();
        let mut timeline: Timeline<Key, &str> = Timeline::new();
        timeline.set(Key::A, 0.0);
        timeline.animate(Key::A, 10.0, spec(100), t0, Some("done"));

        assert!(timeline.tick(t0 + Duration::from_millis(50)).is_empty());
        assert!((timeline.value_or(Key::A, -1.0) - 5.0).abs() < 1e-3);
        assert!(timeline.is_active());

        assert_eq!(timeline.tick(t0 + Duration::from_millis(100)), vec!["done"]);
        assert!(!timeline.is_active());
        assert!(timeline.tick(t0 + Duration::from_millis(200)).is_empty());
        assert_eq!(timeline.value(Key::A), Some(10.0));
    }

    #[test]
    fn retarget_continues_from_current_value_and_drops_old_cue() {
        let t0 = Instant::now();
        let mut timeline: Timeline<Key, &str> = Timeline::new();
        timeline.set(Key::A, 0.0);
        timeline.animate(Key::A, 100.0, spec(100), t0, Some("first"));
        timeline.tick(t0 + Duration::from_millis(50));

        let t1 = t0 + Duration::from_millis(50);
        let superseded =
            timeline.animate(Key::A, 0.0, spec(100), t1, Some("second"));
        assert_eq!(superseded, Some("first"));
        assert_eq!(timeline.goal(Key::A), Some(0.0));

        // Starts from 50, not from the original 0 or the old target.
        timeline.tick(t1 + Duration::from_millis(50));
        assert!((timeline.value_or(Key::A, -1.0) - 25.0).abs() < 1e-3);

        let cues = timeline.tick(t1 + Duration::from_millis(100));
        assert_eq!(cues, vec!["second"]);
    }

    #[test]
    fn independent_channels_do_not_interfere() {
        let t0 = Instant::now();
        let mut timeline: Timeline<Key, u8> = Timeline::new();
        timeline.set(Key::A, 0.0);
        timeline.set(Key::B, 0.0);
        timeline.animate(Key::A, 1.0, spec(100), t0, Some(1));
        timeline.animate(Key::B, 1.0, spec(300), t0, Some(2));

        assert_eq!(timeline.tick(t0 + Duration::from_millis(100)), vec![1]);
        assert!(timeline.is_animating(Key::B));
        assert_eq!(timeline.tick(t0 + Duration::from_millis(300)), vec![2]);
    }

    #[test]
    fn large_magnitudes_settle_exactly() {
        let t0 = Instant::now();
        let mut timeline: Timeline<Key, u8> = Timeline::new();
        timeline.set(Key::A, -541_000_001.0);
        timeline.animate(Key::A, 123_456_789.0, spec(100), t0, None);

        timeline.tick(t0 + Duration::from_millis(37));
        timeline.tick(t0 + Duration::from_millis(100));
        assert_eq!(timeline.value(Key::A), Some(123_456_789.0));
        assert_eq!(timeline.value(Key::A).map(|v| v as i32), Some(123_456_789));
    }

    #[test]
    fn set_cancels_running_tween() {
        let t0 = Instant::now();
        let mut timeline: Timeline<Key, u8> = Timeline::new();
        timeline.set(Key::A, 0.0);
        timeline.animate(Key::A, 1.0, spec(100), t0, Some(7));
        assert_eq!(timeline.set(Key::A, 0.3), Some(7));
        assert!(!timeline.is_active());
        assert_eq!(timeline.value(Key::A), Some(0.3));
    }
}
