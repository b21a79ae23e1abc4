//! Download module.
//!
//! This module provides:
//! - The fetch coordinator guarding every transfer with the dedup log
//! - One aggregation pass over the subscription list
//! - Run statistics

pub mod fetch;
pub mod run;
pub mod state;

#[cfg(test)]
mod test_helpers;

pub use fetch::{Fetcher, Outcome};
pub use run::run_pass;
pub use state::{GlobalState, SubscriptionState};
