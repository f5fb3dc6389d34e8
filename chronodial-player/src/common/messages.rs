//! Application-wide message routing

use std::time::Instant;

use iced::Size;

use crate::domains::carousel::CarouselMessage;
use crate::domains::selector::SelectorMessage;

/// Top-level message type routed to the domain updates.
#[derive(Debug, Clone)]
pub enum DomainMessage {
    Selector(SelectorMessage),
    Carousel(CarouselMessage),
    /// Frame tick while any tween is running.
    AnimationFrame(Instant),
    WindowResized(Size),
    NoOp,
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Selector(message) => message.name(),
            Self::Carousel(message) => message.name(),
            Self::AnimationFrame(_) => "AnimationFrame",
            Self::WindowResized(_) => "WindowResized",
            Self::NoOp => "NoOp",
        }
    }
}

impl From<SelectorMessage> for DomainMessage {
    fn from(message: SelectorMessage) -> Self {
        DomainMessage::Selector(message)
    }
}

impl From<CarouselMessage> for DomainMessage {
    fn from(message: CarouselMessage) -> Self {
        DomainMessage::Carousel(message)
    }
}
