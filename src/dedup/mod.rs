//! Deduplication module.
//!
//! Provides the persistent log of downloaded file names that guarantees
//! each enclosure is fetched at most once across runs.

pub mod log;

pub use log::DedupLog;
