//! Path and directory management.
//!
//! Downloads are bucketed by the day of the run: every file fetched today
//! for `MyShow` lands in `<base>/YYYY-MM-DD/MyShow/`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;

/// Folder name for a run day.
pub fn date_folder(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}

/// Folder a subscription's files are written to on `today`.
pub fn destination_folder(base_dir: &Path, today: NaiveDate, name: &str) -> PathBuf {
    base_dir.join(date_folder(today)).join(name)
}

/// Public link for a downloaded file.
pub fn public_link(link_base: &str, today: NaiveDate, name: &str, file_name: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        link_base.trim_end_matches('/'),
        date_folder(today),
        name,
        file_name
    )
}

/// Ensure a directory exists, creating it if necessary.
///
/// An existing directory is fine; any other failure is returned.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}
