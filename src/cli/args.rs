//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, RunMode};

/// Podcast aggregator CLI.
#[derive(Parser, Debug)]
#[command(
    name = "pa",
    version,
    about = "Download new enclosures from podcast feeds",
    long_about = "Reads <DIR>/subscriptions (one '<feed address> <name>' per line), picks one \
                  enclosure per feed entry by media-type preference and downloads every \
                  enclosure not yet recorded in <DIR>/pip.log."
)]
pub struct Args {
    /// Base directory holding the subscription list, the log and all downloads.
    #[arg(short = 'd', long = "dir")]
    pub base_dir: Option<PathBuf>,

    /// Catch-up mode: write the log, but don't download anything.
    #[arg(short, long = "catchup")]
    pub catch_up: bool,

    /// Print per-item status.
    #[arg(short, long)]
    pub verbose: bool,

    /// Only process the subscription with this name (repeatable).
    #[arg(short, long = "name")]
    pub names: Vec<String>,

    /// Base URL for public links to downloaded files.
    #[arg(short, long = "link")]
    pub link_base: Option<String>,

    /// Comma-separated media types in order of preference; the first match is fetched.
    #[arg(short, long = "mime-types", value_delimiter = ',')]
    pub mime_types: Option<Vec<String>>,

    /// Path to an optional configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(dir) = self.base_dir {
            config.base_dir = Some(dir);
        }

        if self.catch_up {
            config.mode = RunMode::CatchUp;
        }

        if self.verbose {
            config.verbose = true;
        }

        if !self.names.is_empty() {
            config.names = self.names;
        }

        if let Some(link_base) = self.link_base {
            config.link_base = link_base;
        }

        if let Some(mime_types) = self.mime_types {
            config.mime_types = mime_types;
        }
    }
}
