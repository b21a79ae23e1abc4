//! Fetch coordination.
//!
//! Every selected item passes through [`Fetcher::process`], which consults
//! the dedup log before any I/O and logs an item only once it is on disk
//! (or, in catch-up mode, instead of downloading it).

use crate::dedup::DedupLog;
use crate::error::Result;
use crate::fs::paths::ensure_dir;
use crate::media::SelectedItem;
use crate::net::{normalize_url, Transfer};
use crate::output::print_success;

/// What happened to one selected item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Fetched and logged.
    Downloaded { bytes: u64 },
    /// Already in the log; nothing was done.
    AlreadyLogged,
    /// Logged without fetching (catch-up mode).
    LoggedOnly,
    /// The transfer failed. The item is not logged and is retried next run.
    Failed { reason: String },
}

/// Owns the dedup log and the transfer primitive for a run.
pub struct Fetcher<T> {
    log: DedupLog,
    transfer: T,
}

impl<T: Transfer> Fetcher<T> {
    pub fn new(log: DedupLog, transfer: T) -> Self {
        Self { log, transfer }
    }

    /// The dedup log this fetcher records into.
    pub fn log(&self) -> &DedupLog {
        &self.log
    }

    pub fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Process one item.
    ///
    /// Errors are limited to this item: a dedup log that cannot be read or
    /// written, or a destination folder that cannot be created. A failed
    /// transfer is an [`Outcome::Failed`], not an error.
    pub async fn process(&self, item: &SelectedItem, catch_up: bool) -> Result<Outcome> {
        if catch_up {
            if !self.log.append_if_absent(&item.file_name, item.length)? {
                tracing::debug!("{} already exists, skipping...", item.file_name);
                return Ok(Outcome::AlreadyLogged);
            }
            tracing::debug!("Link is: {}", item.public_link);
            return Ok(Outcome::LoggedOnly);
        }

        if self.log.contains(&item.file_name)? {
            tracing::debug!("{} already exists, skipping...", item.file_name);
            return Ok(Outcome::AlreadyLogged);
        }

        ensure_dir(&item.destination_folder).await?;

        tracing::debug!("Fetching {}", item.file_name);
        let url = normalize_url(&item.url);

        match self.transfer.fetch(&url, &item.destination_path()).await {
            Ok(bytes) => {
                self.log.append(&item.file_name, item.length)?;
                print_success(&format!("Fetched {} to {}", item.file_name, item.public_link));
                Ok(Outcome::Downloaded { bytes })
            }
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {}", url, e);
                Ok(Outcome::Failed {
                    reason: e.to_string(),
                })
            }
        }
    }
}
