//! Root-level subscription composition

use std::time::Duration;

use iced::Subscription;
use iced::event::{self, Event as RuntimeEvent, Status as EventStatus};
use iced::keyboard::{self, Key, key::Named};

use crate::common::messages::DomainMessage;
use crate::domains::selector::SelectorMessage;
use crate::infra::constants::animation::TICK_NS;
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    let mut subscriptions = vec![
        event::listen_with(navigation_key_handler),
        iced::window::events().map(|(_id, event)| match event {
            iced::window::Event::Opened { size, .. }
            | iced::window::Event::Resized(size) => {
                DomainMessage::WindowResized(size)
            }
            _ => DomainMessage::NoOp,
        }),
    ];

    // Frames only flow while something is moving.
    if state.is_animating() {
        subscriptions.push(
            iced::time::every(Duration::from_nanos(TICK_NS))
                .map(DomainMessage::AnimationFrame),
        );
    }

    Subscription::batch(subscriptions)
}

fn navigation_key_handler(
    event: RuntimeEvent,
    status: EventStatus,
    _window: iced::window::Id,
) -> Option<DomainMessage> {
    if status == EventStatus::Captured {
        return None;
    }

    let RuntimeEvent::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) =
        event
    else {
        return None;
    };
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => Some(SelectorMessage::Previous.into()),
        Key::Named(Named::ArrowRight) => Some(SelectorMessage::Next.into()),
        _ => None,
    }
}
