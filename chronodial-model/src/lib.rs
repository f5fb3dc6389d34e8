//! Core data model definitions shared across chronodial crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod list;
pub mod period;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use ids::PeriodId;
pub use list::PeriodList;
pub use period::{Event, Period};
