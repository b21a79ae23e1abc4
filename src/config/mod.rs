//! Configuration module for the podcast aggregator.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Run modes
//! - Configuration validation
//! - Reading the subscription list

pub mod loader;
pub mod modes;
pub mod subscriptions;
pub mod validation;

pub use loader::{Config, LOG_FILE, SUBSCRIPTIONS_FILE};
pub use modes::RunMode;
pub use subscriptions::{load_subscriptions, parse_subscriptions, Subscription};
pub use validation::validate_config;
