//! Configuration library for chronodial.
//!
//! Loads the period list the selector displays from a TOML or JSON timeline
//! document (or the bundled default), layers environment and command-line
//! overrides on top, and reports tolerable data problems as warnings rather
//! than failing the load.

pub mod cli;
pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use cli::Cli;
pub use loader::{ConfigLoad, ConfigLoader, EnvSnapshot, error::ConfigLoadError};
pub use models::{AnimationConfig, PlayerConfig, TimelineDocument, TimelineSource};
pub use validation::{ConfigWarning, ConfigWarnings};
