//! Configuration structures and loading logic.

use crate::config::modes::RunMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the subscription list inside the base directory.
pub const SUBSCRIPTIONS_FILE: &str = "subscriptions";

/// File name of the dedup log inside the base directory.
pub const LOG_FILE: &str = "pip.log";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the subscription list, the dedup log and all downloads.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Whether to download or only record items as seen.
    #[serde(default)]
    pub mode: RunMode,

    /// Emit per-item diagnostics.
    #[serde(default)]
    pub verbose: bool,

    /// Only process subscriptions with these names (empty means all).
    #[serde(default)]
    pub names: Vec<String>,

    /// Base URL used to build public links to downloaded files.
    #[serde(default = "default_link_base")]
    pub link_base: String,

    /// Media-type substrings in order of preference.
    #[serde(default = "default_mime_types")]
    pub mime_types: Vec<String>,

    /// User agent sent with feed and enclosure requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: None,
            mode: RunMode::default(),
            verbose: false,
            names: Vec::new(),
            link_base: default_link_base(),
            mime_types: default_mime_types(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_link_base() -> String {
    "https://192.168.1.51/mythweb/data/video/vidcast".to_string()
}

fn default_mime_types() -> Vec<String> {
    vec!["video".to_string()]
}

fn default_user_agent() -> String {
    format!("pa/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the base directory, which has no default.
    pub fn base_dir(&self) -> Result<&Path> {
        self.base_dir
            .as_deref()
            .ok_or_else(|| Error::MissingConfig("base_dir (pass -d/--dir)".to_string()))
    }

    /// Path of the subscription list.
    pub fn subscriptions_path(&self) -> Result<PathBuf> {
        Ok(self.base_dir()?.join(SUBSCRIPTIONS_FILE))
    }

    /// Path of the dedup log.
    pub fn log_path(&self) -> Result<PathBuf> {
        Ok(self.base_dir()?.join(LOG_FILE))
    }
}
