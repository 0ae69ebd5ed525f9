//! Data ingestion layer for mdlog.
//!
//! Responsible for parsing AMBER mdout and NAMD log files into per-key time
//! series, aggregating multiple files into one validated table, and writing
//! the aligned columns back out as delimited text.

pub mod amber;
pub mod analysis;
pub mod namd;
pub mod writer;

pub use mdlog_core as core;
