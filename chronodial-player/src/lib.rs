//! Chronodial player library
//!
//! Desktop rendition of a circular period selector: periods sit as points on
//! a circle, the circle rotates the chosen one into a fixed slot, two large
//! year counters tween to its range and a carousel underneath shows its
//! events.
//!
//! The binary in `src/main.rs` only loads configuration and hands it to
//! [`app::application`]; everything else lives here so it can be driven from
//! tests without a window.

pub mod animation;
pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
