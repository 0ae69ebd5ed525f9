//! Shared foundation for the mdlog crates: the time-series data model,
//! the error taxonomy, and the command-line settings.

pub mod error;
pub mod series;
pub mod settings;
