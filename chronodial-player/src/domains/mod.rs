//! Widget domains: the circular period selector and the event carousel.

pub mod carousel;
pub mod selector;
