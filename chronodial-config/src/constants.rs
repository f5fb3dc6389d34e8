//! Environment keys and built-in defaults.

use std::time::Duration;

pub const ENV_TIMELINE: &str = "CHRONODIAL_TIMELINE";
pub const ENV_TITLE: &str = "CHRONODIAL_TITLE";
pub const ENV_ANIMATION_DURATION: &str = "CHRONODIAL_ANIMATION_DURATION";
pub const ENV_FADE_PAUSE: &str = "CHRONODIAL_FADE_PAUSE";

/// Shared duration of every tween in a selection change.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(1000);

/// Pause between the carousel fade-out committing and the fade-in starting.
pub const DEFAULT_FADE_PAUSE: Duration = Duration::from_millis(300);

/// Timeline shown when no document is configured.
pub const BUNDLED_TIMELINE: &str =
    include_str!("../assets/default_timeline.toml");
