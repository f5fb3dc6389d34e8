pub mod constants;
pub mod theme;
