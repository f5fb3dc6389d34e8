//! Selection change protocol.
//!
//! A request kicks off four tween families on the shared timeline at once:
//! circle rotation, point counter-rotation, the two year counters, and the
//! event carousel fade-out. Only the fade-out carries a cue; the index commit
//! and carousel reset wait for it, everything else is fire-and-forget.

use std::time::Instant;

use iced::Task;

use super::geometry::rotation_delta;
use super::messages::SelectorMessage;
use crate::animation::{Channel, Cue};
use crate::common::messages::DomainMessage;
use crate::state::State;

/// Handle selector messages
pub fn update(
    state: &mut State,
    message: SelectorMessage,
    now: Instant,
) -> Task<DomainMessage> {
    let count = state.period_count();
    let target = state.selector.selection_target();

    match message {
        SelectorMessage::Previous => {
            if state.selector.can_go_previous(count) {
                request_selection(state, target - 1, now);
            }
        }
        SelectorMessage::Next => {
            if state.selector.can_go_next(count) {
                request_selection(state, target + 1, now);
            }
        }
        SelectorMessage::PointPressed(index)
        | SelectorMessage::DotPressed(index) => {
            request_selection(state, index, now);
        }
    }

    Task::none()
}

/// Start a transition to `target`. Returns `false` (and touches nothing)
/// when `target` is out of range or already selected.
pub fn request_selection(state: &mut State, target: usize, now: Instant) -> bool {
    let count = state.period_count();
    let current = state.selector.selection_target();
    let Some(period) = state.periods.get(target) else {
        log::debug!("[Selector] ignoring out-of-range index {target} (len {count})");
        return false;
    };
    if target == current {
        return false;
    }

    let (start_year, end_year) = period.years();
    let delta = rotation_delta(current, target, count);
    let spec = state.transition_spec();

    state.selector.rotation_goal -= delta;
    let rotation_goal = f64::from(state.selector.rotation_goal);
    let timeline = &mut state.timeline;

    timeline.animate(Channel::CircleRotation, rotation_goal, spec, now, None);
    for index in 0..count {
        timeline.animate(Channel::PointRotation(index), -rotation_goal, spec, now, None);
    }
    timeline.animate(Channel::StartYear, f64::from(start_year), spec, now, None);
    timeline.animate(Channel::EndYear, f64::from(end_year), spec, now, None);

    let superseded = timeline.animate(
        Channel::CarouselOpacity,
        0.0,
        spec,
        now,
        Some(Cue::FadeOutComplete { index: target }),
    );
    if let Some(cue) = superseded {
        log::debug!("[Selector] {cue:?} superseded by request for {target}");
    }

    state.selector.pending_index = Some(target);
    log::debug!(
        "[Selector] {current} -> {target}: rotating {:.1} deg, years {start_year}..{end_year}",
        -delta
    );
    true
}

/// Apply a completion cue delivered by the timeline.
pub fn handle_cue(state: &mut State, cue: Cue, now: Instant) -> Task<DomainMessage> {
    match cue {
        Cue::FadeOutComplete { index } => commit_selection(state, index, now),
        Cue::FadeInComplete { index } => {
            log::trace!("[Selector] period {index} settled");
            Task::none()
        }
    }
}

/// Second half of the protocol, run once the carousel is fully transparent:
/// commit the index, re-key the carousel on the new period, jump it to its
/// first slide and fade it back in after a pause.
pub fn commit_selection(
    state: &mut State,
    index: usize,
    now: Instant,
) -> Task<DomainMessage> {
    let Some(period) = state.periods.get(index) else {
        return Task::none();
    };
    let period_id = period.id;
    let event_count = period.events.len();

    state.selector.active_index = index;
    if state.selector.pending_index == Some(index) {
        state.selector.pending_index = None;
    }

    state.carousel.rekey(Some(period_id), event_count);
    let reset = state.carousel.slide_to(0);

    let spec = state.transition_spec().with_delay(state.animation.fade_pause);
    state.timeline.animate(
        Channel::CarouselOpacity,
        1.0,
        spec,
        now,
        Some(Cue::FadeInComplete { index }),
    );

    log::debug!("[Selector] committed period {period_id} at index {index}");
    reset
}
