//! Root application state.

use chronodial_config::{AnimationConfig, PlayerConfig};
use chronodial_model::prelude::{Period, PeriodList};
use iced::Size;

use crate::animation::{Channel, EasingFunction, TweenSpec, WidgetTimeline};
use crate::domains::carousel::EventCarouselState;
use crate::domains::selector::SelectorState;
use crate::domains::selector::counter::{displayed_year, page_counter};
use crate::infra::constants::window;

#[derive(Debug)]
pub struct State {
    pub title: Option<String>,
    pub periods: PeriodList,
    pub animation: AnimationConfig,
    pub selector: SelectorState,
    pub carousel: EventCarouselState,
    /// Every animated value the view reads lives here.
    pub timeline: WidgetTimeline,
    pub window_size: Size,
}

impl State {
    pub fn new(config: &PlayerConfig) -> Self {
        let periods = config.periods.clone();
        let first = periods.first();
        let (start_year, end_year) = first.map(Period::years).unwrap_or((0, 0));

        let mut timeline = WidgetTimeline::new();
        timeline.set(Channel::CircleRotation, 0.0);
        for index in 0..periods.len() {
            timeline.set(Channel::PointRotation(index), 0.0);
        }
        timeline.set(Channel::StartYear, f64::from(start_year));
        timeline.set(Channel::EndYear, f64::from(end_year));
        timeline.set(Channel::CarouselOpacity, 1.0);

        let carousel = EventCarouselState::new(
            first.map(|period| period.id),
            first.map_or(0, |period| period.events.len()),
        );

        Self {
            title: config.title.clone(),
            periods,
            animation: config.animation,
            selector: SelectorState::new(),
            carousel,
            timeline,
            window_size: Size::new(window::WIDTH, window::HEIGHT),
        }
    }

    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    /// Committed period whose events the carousel shows.
    pub fn active_period(&self) -> Option<&Period> {
        self.periods.get(self.selector.active_index)
    }

    pub fn page_counter(&self) -> String {
        page_counter(self.selector.active_index, self.period_count())
    }

    /// Start/end year counters as currently displayed.
    pub fn displayed_years(&self) -> (i32, i32) {
        (
            displayed_year(self.timeline.value_or(Channel::StartYear, 0.0)),
            displayed_year(self.timeline.value_or(Channel::EndYear, 0.0)),
        )
    }

    pub fn circle_rotation(&self) -> f32 {
        self.timeline.value_or(Channel::CircleRotation, 0.0) as f32
    }

    pub fn point_rotation(&self, index: usize) -> f32 {
        self.timeline.value_or(Channel::PointRotation(index), 0.0) as f32
    }

    pub fn carousel_opacity(&self) -> f32 {
        self.timeline.value_or(Channel::CarouselOpacity, 1.0) as f32
    }

    /// Timing shared by every tween of a selection change.
    pub fn transition_spec(&self) -> TweenSpec {
        TweenSpec::new(self.animation.duration, EasingFunction::EaseInOutQuad)
    }

    /// Narrow windows drop the circle for a stacked layout.
    pub fn is_compact(&self) -> bool {
        self.window_size.width < window::COMPACT_BREAKPOINT
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.is_active()
    }
}
