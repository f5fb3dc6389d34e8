use iced::Task;

use super::messages::CarouselMessage;
use crate::common::messages::DomainMessage;
use crate::state::State;

/// Handle event carousel messages
pub fn update(state: &mut State, message: CarouselMessage) -> Task<DomainMessage> {
    let event_count = state
        .active_period()
        .map(|period| period.events.len())
        .unwrap_or(0);
    let carousel = &mut state.carousel;

    match message {
        CarouselMessage::Scrolled(viewport) => {
            carousel.update_scroll(viewport);
            Task::none()
        }
        CarouselMessage::PreviousSlide => {
            if !carousel.can_slide_previous() {
                return Task::none();
            }
            let target = carousel.current_slide().saturating_sub(1);
            log::trace!("[Carousel] sliding back to {target}");
            carousel.slide_to(target)
        }
        CarouselMessage::NextSlide => {
            if !carousel.can_slide_next() || event_count == 0 {
                return Task::none();
            }
            let target = (carousel.current_slide() + 1).min(event_count - 1);
            log::trace!("[Carousel] sliding forward to {target}");
            carousel.slide_to(target)
        }
    }
}
