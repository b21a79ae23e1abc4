//! Network module.
//!
//! Provides:
//! - HTTP client construction
//! - Address normalization
//! - Feed retrieval
//! - Enclosure transfer

pub mod client;
pub mod feed;
pub mod normalize;
pub mod transfer;

pub use client::build_client;
pub use feed::{FeedSource, HttpFeedSource};
pub use normalize::normalize_url;
pub use transfer::{HttpTransfer, Transfer};
