//! Podcast aggregator - downloads new feed enclosures exactly once.
//!
//! This library reads a list of subscribed feeds, picks one enclosure per
//! feed entry according to an ordered media-type preference, and downloads
//! each new enclosure once, recording it in a persistent dedup log.
//!
//! # Features
//!
//! - RSS 2.0 and Atom feeds
//! - Preference-ranked enclosure selection (e.g. video over audio)
//! - Append-only dedup log shared across runs
//! - Catch-up mode that records a feed's backlog without downloading it
//! - Downloads bucketed into dated per-subscription folders
//!
//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use podcast_aggregator::{
//!     config::{load_subscriptions, Config},
//!     dedup::DedupLog,
//!     download::{run_pass, Fetcher},
//!     net::{build_client, HttpFeedSource, HttpTransfer},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         base_dir: Some("/srv/podcasts".into()),
//!         ..Default::default()
//!     };
//!     let subscriptions = load_subscriptions(&config.subscriptions_path()?)?;
//!     let client = build_client(&config.user_agent)?;
//!     let fetcher = Fetcher::new(
//!         DedupLog::new(config.log_path()?),
//!         HttpTransfer::new(client.clone(), false),
//!     );
//!     let feeds = HttpFeedSource::new(client);
//!
//!     let today = Local::now().date_naive();
//!     let stats = run_pass(&config, &subscriptions, &feeds, &fetcher, today).await?;
//!     println!("{} downloaded", stats.downloaded);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod dedup;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod net;
pub mod output;

// Re-exports for convenience
pub use config::{Config, RunMode, Subscription};
pub use dedup::DedupLog;
pub use download::{run_pass, Fetcher, GlobalState, Outcome};
pub use error::{Error, Result};
pub use media::{select_enclosure, Attachment, Enclosure, Selection};
