use std::time::{Duration, Instant};

use chronodial_config::{AnimationConfig, PlayerConfig};
use chronodial_model::{Event, Period, PeriodId, PeriodList};
use chronodial_player::animation::Channel;
use chronodial_player::common::messages::DomainMessage;
use chronodial_player::domains::selector::SelectorMessage;
use chronodial_player::state::State;
use chronodial_player::update::update_at;

const DURATION: Duration = Duration::from_millis(1000);
const FADE_PAUSE: Duration = Duration::from_millis(300);

fn three_periods() -> State {
    let periods = PeriodList::new(vec![
        Period::new(1, "Science", 1900, 1920)
            .with_events(vec![Event::new(1905, "Special relativity")]),
        Period::new(2, "Cinema", 1920, 1950).with_events(vec![
            Event::new(1927, "First feature with sound"),
            Event::new(1939, "Technicolor goes mainstream"),
        ]),
        Period::new(3, "Sport", 1950, 1980)
            .with_events(vec![Event::new(1966, "World Cup in England")]),
    ])
    .unwrap();

    let config = PlayerConfig::from_periods(periods).with_animation(AnimationConfig {
        duration: DURATION,
        fade_pause: FADE_PAUSE,
    });
    State::new(&config)
}

fn select(state: &mut State, message: SelectorMessage, now: Instant) {
    let _ = update_at(state, DomainMessage::Selector(message), now);
}

fn frame(state: &mut State, now: Instant) {
    let _ = update_at(state, DomainMessage::AnimationFrame(now), now);
}

/// Drive frames until the timeline goes idle.
fn settle(state: &mut State, mut now: Instant) -> Instant {
    for _ in 0..10 {
        if !state.is_animating() {
            break;
        }
        now += Duration::from_secs(5);
        frame(state, now);
    }
    now
}

#[test]
fn initial_state_shows_first_period() {
    let state = three_periods();

    assert_eq!(state.page_counter(), "01/03");
    assert_eq!(state.displayed_years(), (1900, 1920));
    assert_eq!(state.active_period().map(|p| p.id), Some(PeriodId(1)));
    assert_eq!(state.carousel_opacity(), 1.0);
    assert!(!state.is_animating());
}

#[test]
fn clicking_a_point_runs_the_full_transition() {
    let mut state = three_periods();
    let start = Instant::now();

    select(&mut state, SelectorMessage::PointPressed(1), start);
    assert!(state.is_animating());
    // Index commits only after the fade-out.
    assert_eq!(state.page_counter(), "01/03");

    let midway = start + DURATION / 2;
    frame(&mut state, midway);
    let (start_year, end_year) = state.displayed_years();
    assert!(start_year > 1900 && start_year < 1920, "{start_year}");
    assert!(end_year > 1920 && end_year < 1950, "{end_year}");
    assert!(state.carousel_opacity() > 0.0 && state.carousel_opacity() < 1.0);
    assert_eq!(state.page_counter(), "01/03");

    let faded_out = start + DURATION;
    frame(&mut state, faded_out);
    assert_eq!(state.page_counter(), "02/03");
    assert_eq!(state.displayed_years(), (1920, 1950));
    assert_eq!(state.carousel.period_id, Some(PeriodId(2)));
    assert_eq!(state.carousel.generation, 1);
    assert_eq!(state.carousel.event_count, 2);
    assert_eq!(state.carousel.scroll_x, 0.0);
    assert_eq!(state.carousel_opacity(), 0.0);

    // Fade-in waits for the pause before it starts.
    frame(&mut state, faded_out + FADE_PAUSE / 2);
    assert_eq!(state.carousel_opacity(), 0.0);

    frame(&mut state, faded_out + FADE_PAUSE + DURATION);
    assert_eq!(state.carousel_opacity(), 1.0);
    assert!(!state.is_animating());

    let listed: Vec<(i32, &str)> = state
        .active_period()
        .map(|period| {
            period
                .events
                .iter()
                .map(|event| (event.year, event.description.as_str()))
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(
        listed,
        [
            (1927, "First feature with sound"),
            (1939, "Technicolor goes mainstream"),
        ]
    );
}

#[test]
fn deep_history_years_settle_exactly() {
    let periods = PeriodList::new(vec![
        Period::new(1, "Cambrian", -541_000_001, -485_400_000),
        Period::new(2, "Far future", 16_777_217, 123_456_789),
    ])
    .unwrap();
    let mut state = State::new(&PlayerConfig::from_periods(periods));
    let start = Instant::now();

    assert_eq!(state.displayed_years(), (-541_000_001, -485_400_000));

    select(&mut state, SelectorMessage::Next, start);
    frame(&mut state, start + Duration::from_millis(333));
    let now = settle(&mut state, start);
    assert_eq!(state.displayed_years(), (16_777_217, 123_456_789));

    select(&mut state, SelectorMessage::Previous, now);
    settle(&mut state, now);
    assert_eq!(state.displayed_years(), (-541_000_001, -485_400_000));
}

#[test]
fn rotation_and_counter_rotation_cancel_out() {
    let mut state = three_periods();
    let start = Instant::now();

    select(&mut state, SelectorMessage::DotPressed(2), start);
    settle(&mut state, start);

    assert_eq!(state.circle_rotation(), 120.0);
    for index in 0..3 {
        assert_eq!(state.circle_rotation() + state.point_rotation(index), 0.0);
    }
}

#[test]
fn boundary_navigation_is_a_no_op() {
    let mut state = three_periods();
    let now = Instant::now();

    select(&mut state, SelectorMessage::Previous, now);
    assert!(!state.is_animating());
    assert_eq!(state.page_counter(), "01/03");

    select(&mut state, SelectorMessage::DotPressed(2), now);
    let now = settle(&mut state, now);
    assert_eq!(state.page_counter(), "03/03");

    select(&mut state, SelectorMessage::Next, now);
    assert!(!state.is_animating());
    assert_eq!(state.page_counter(), "03/03");
}

#[test]
fn reselecting_the_active_period_starts_nothing() {
    let mut state = three_periods();
    let now = Instant::now();

    select(&mut state, SelectorMessage::PointPressed(0), now);
    select(&mut state, SelectorMessage::DotPressed(0), now);
    select(&mut state, SelectorMessage::PointPressed(7), now);

    assert!(!state.is_animating());
    assert_eq!(state.selector.pending_index, None);
    assert_eq!(state.carousel.generation, 0);
}

#[test]
fn newer_request_supersedes_one_in_flight() {
    let mut state = three_periods();
    let start = Instant::now();

    select(&mut state, SelectorMessage::PointPressed(1), start);
    let later = start + DURATION / 4;
    frame(&mut state, later);
    select(&mut state, SelectorMessage::PointPressed(2), later);

    // The first fade-out would have finished here; it must not commit.
    frame(&mut state, start + DURATION);
    assert_eq!(state.page_counter(), "01/03");
    assert_eq!(state.carousel.generation, 0);

    settle(&mut state, later);
    assert_eq!(state.page_counter(), "03/03");
    assert_eq!(state.displayed_years(), (1950, 1980));
    assert_eq!(state.carousel.period_id, Some(PeriodId(3)));
    assert_eq!(state.carousel.generation, 1);
    assert_eq!(state.carousel_opacity(), 1.0);
}

#[test]
fn next_during_flight_steps_from_the_pending_target() {
    let mut state = three_periods();
    let now = Instant::now();

    select(&mut state, SelectorMessage::Next, now);
    select(&mut state, SelectorMessage::Next, now + Duration::from_millis(10));
    assert_eq!(state.selector.selection_target(), 2);

    settle(&mut state, now);
    assert_eq!(state.page_counter(), "03/03");
}

#[test]
fn empty_timeline_renders_zero_state() {
    let mut state = State::new(&PlayerConfig::from_periods(PeriodList::empty()));
    let now = Instant::now();

    assert_eq!(state.page_counter(), "00/00");
    assert_eq!(state.displayed_years(), (0, 0));
    assert!(state.active_period().is_none());

    select(&mut state, SelectorMessage::Next, now);
    select(&mut state, SelectorMessage::PointPressed(0), now);
    assert!(!state.is_animating());
    assert_eq!(state.timeline.value(Channel::CircleRotation), Some(0.0));
}

#[test]
fn narrow_window_switches_to_compact_layout() {
    let mut state = three_periods();
    let now = Instant::now();
    assert!(!state.is_compact());

    let narrow = iced::Size::new(800.0, 900.0);
    let _ = update_at(&mut state, DomainMessage::WindowResized(narrow), now);
    assert!(state.is_compact());

    select(&mut state, SelectorMessage::Next, now);
    settle(&mut state, now);
    assert_eq!(state.page_counter(), "02/03");
    assert_eq!(state.displayed_years(), (1920, 1950));

    let wide = iced::Size::new(1280.0, 900.0);
    let _ = update_at(&mut state, DomainMessage::WindowResized(wide), now);
    assert!(!state.is_compact());
}
