//! Event carousel: the active period's events as a horizontally scrollable
//! strip.

pub mod messages;
pub mod state;
pub mod update;
pub mod view;

pub use messages::CarouselMessage;
pub use state::EventCarouselState;
pub use view::view_carousel;
