//! Root-level message routing

use std::time::Instant;

use iced::Task;

use crate::common::messages::DomainMessage;
use crate::domains::{carousel, selector};
use crate::state::State;

pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    update_at(state, message, Instant::now())
}

/// [`update`] with an explicit clock, so a test can step time by hand.
pub fn update_at(
    state: &mut State,
    message: DomainMessage,
    now: Instant,
) -> Task<DomainMessage> {
    log::trace!("update: {}", message.name());

    match message {
        DomainMessage::Selector(message) => {
            selector::update::update(state, message, now)
        }
        DomainMessage::Carousel(message) => carousel::update::update(state, message),
        DomainMessage::AnimationFrame(frame) => advance_animations(state, frame),
        DomainMessage::WindowResized(size) => {
            state.window_size = size;
            Task::none()
        }
        DomainMessage::NoOp => Task::none(),
    }
}

/// Sample every tween at `now` and run the follow-up of each finished cue.
pub fn advance_animations(state: &mut State, now: Instant) -> Task<DomainMessage> {
    let cues = state.timeline.tick(now);
    if cues.is_empty() {
        return Task::none();
    }

    Task::batch(
        cues.into_iter()
            .map(|cue| selector::update::handle_cue(state, cue, now))
            .collect::<Vec<_>>(),
    )
}
