//! Player/UI focused snapshot of the types surface.
//! Prefer importing from this module when working in the player or other
//! presentation layers.

pub use super::error::{ModelError, Result as ModelResult};
pub use super::ids::PeriodId;
pub use super::list::PeriodList;
pub use super::period::{Event, Period};
