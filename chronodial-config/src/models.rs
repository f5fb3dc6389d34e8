use std::path::PathBuf;
use std::time::Duration;

use chronodial_model::PeriodList;
use serde::Deserialize;

use crate::constants::{DEFAULT_ANIMATION_DURATION, DEFAULT_FADE_PAUSE};

/// On-disk shape of a timeline document.
///
/// ```toml
/// title = "Historical dates"
///
/// [animation]
/// duration_ms = 1000
/// fade_pause_ms = 300
///
/// [[periods]]
/// id = 1
/// label = "Cinema"
/// start_year = 1987
/// end_year = 1991
///
/// [[periods.events]]
/// year = 1987
/// description = "..."
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub animation: AnimationSection,
    #[serde(default)]
    pub periods: PeriodList,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimationSection {
    pub duration_ms: Option<u64>,
    pub fade_pause_ms: Option<u64>,
}

/// Timing shared by every tween of a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    pub duration: Duration,
    pub fade_pause: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_ANIMATION_DURATION,
            fade_pause: DEFAULT_FADE_PAUSE,
        }
    }
}

impl AnimationConfig {
    pub(crate) fn merge_section(&mut self, section: AnimationSection) {
        if let Some(ms) = section.duration_ms {
            self.duration = Duration::from_millis(ms);
        }
        if let Some(ms) = section.fade_pause_ms {
            self.fade_pause = Duration::from_millis(ms);
        }
    }
}

/// Where the period list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineSource {
    Bundled,
    File(PathBuf),
}

impl std::fmt::Display for TimelineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimelineSource::Bundled => write!(f, "bundled timeline"),
            TimelineSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fully resolved configuration handed to the player.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub title: Option<String>,
    pub periods: PeriodList,
    pub animation: AnimationConfig,
    pub source: TimelineSource,
}

impl PlayerConfig {
    /// Configuration for an in-memory period list with default timing.
    pub fn from_periods(periods: PeriodList) -> Self {
        Self {
            title: None,
            periods,
            animation: AnimationConfig::default(),
            source: TimelineSource::Bundled,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }
}
