//! Data checks the selector tolerates but that usually indicate a mistake in
//! the timeline document.

use std::time::Duration;

use chronodial_model::{PeriodId, PeriodList};

use crate::models::AnimationConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No periods: the selector renders its zero-state.
    EmptyTimeline,
    /// A single period: previous/next stay disabled.
    SinglePeriod,
    InvertedRange { id: PeriodId, start_year: i32, end_year: i32 },
    EmptyLabel { id: PeriodId },
    EventOutsideRange { id: PeriodId, year: i32 },
    /// Transitions will jump straight to their end values.
    ZeroDuration,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::EmptyTimeline => {
                write!(f, "timeline has no periods")
            }
            ConfigWarning::SinglePeriod => {
                write!(f, "timeline has a single period; navigation is disabled")
            }
            ConfigWarning::InvertedRange {
                id,
                start_year,
                end_year,
            } => write!(
                f,
                "period {id} starts after it ends ({start_year} > {end_year})"
            ),
            ConfigWarning::EmptyLabel { id } => {
                write!(f, "period {id} has an empty label")
            }
            ConfigWarning::EventOutsideRange { id, year } => {
                write!(f, "period {id} lists an event in {year}, outside its span")
            }
            ConfigWarning::ZeroDuration => {
                write!(f, "animation duration is zero; transitions will jump")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings(Vec<ConfigWarning>);

impl ConfigWarnings {
    pub fn push(&mut self, warning: ConfigWarning) {
        self.0.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigWarning> {
        self.0.iter()
    }

    pub fn contains(&self, warning: &ConfigWarning) -> bool {
        self.0.contains(warning)
    }

    /// Emit every warning at warn level.
    pub fn log(&self) {
        for warning in &self.0 {
            tracing::warn!(target: "chronodial_config", "{warning}");
        }
    }
}

pub fn validate(
    periods: &PeriodList,
    animation: &AnimationConfig,
) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    match periods.len() {
        0 => warnings.push(ConfigWarning::EmptyTimeline),
        1 => warnings.push(ConfigWarning::SinglePeriod),
        _ => {}
    }

    for period in periods {
        if period.is_inverted() {
            warnings.push(ConfigWarning::InvertedRange {
                id: period.id,
                start_year: period.start_year,
                end_year: period.end_year,
            });
        }
        if period.label.trim().is_empty() {
            warnings.push(ConfigWarning::EmptyLabel { id: period.id });
        }
        for event in &period.events {
            if !period.contains_year(event.year) {
                warnings.push(ConfigWarning::EventOutsideRange {
                    id: period.id,
                    year: event.year,
                });
            }
        }
    }

    if animation.duration == Duration::ZERO {
        warnings.push(ConfigWarning::ZeroDuration);
    }

    warnings
}
