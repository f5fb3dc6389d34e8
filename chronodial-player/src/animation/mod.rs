//! Tween timeline driving every animated property of the widget.
//!
//! Properties are addressed by [`Channel`]; each channel holds at most one
//! tween. Starting a tween on a busy channel retargets it in place from the
//! current animated value and drops the superseded completion cue, so the
//! last request always wins.

pub mod channel;
pub mod easing;
pub mod timeline;
pub mod tween;

pub use channel::{Channel, Cue};
pub use easing::EasingFunction;
pub use timeline::Timeline;
pub use tween::{Tween, TweenSpec};

/// Timeline specialised to the selector's channels and cues.
pub type WidgetTimeline = Timeline<Channel, Cue>;
