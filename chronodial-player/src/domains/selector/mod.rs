//! Period selector: circular layout, navigation protocol and the animated
//! year counters.

pub mod counter;
pub mod geometry;
pub mod messages;
pub mod state;
pub mod update;
pub mod view;
pub mod wheel;

pub use messages::SelectorMessage;
pub use state::SelectorState;
pub use view::{view_compact_selector, view_navigation, view_selector};
