//! Stubs shared by the download tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::media::{parse_feed, Attachment, Enclosure, FeedEntry, SelectedItem};
use crate::net::{FeedSource, Transfer};

pub const LINK_BASE: &str = "https://media.example.test/vidcast";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

/// A selected item for the `MyShow` subscription.
pub fn item(base_dir: &Path, url: &str, length: u64) -> SelectedItem {
    let attachment = Attachment {
        url: url.to_string(),
        length,
        mime_type: "video/mp4".to_string(),
    };
    SelectedItem::new("MyShow", attachment, base_dir, LINK_BASE, today()).unwrap()
}

pub fn enclosure(url: &str, length: u64, mime_type: &str) -> Enclosure {
    Enclosure {
        url: Some(url.to_string()),
        length: Some(length),
        mime_type: Some(mime_type.to_string()),
    }
}

/// Writes a fixed body and remembers every requested address.
pub struct RecordingTransfer {
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingTransfer {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transfer for RecordingTransfer {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<u64> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(Error::Transfer("connection reset".to_string()));
        }
        tokio::fs::write(dest, b"data").await?;
        Ok(4)
    }
}

/// Serves fixed entries per feed address; unknown addresses fail.
#[derive(Default)]
pub struct StaticFeeds {
    feeds: HashMap<String, Vec<FeedEntry>>,
}

impl StaticFeeds {
    pub fn with_feed(mut self, url: &str, entries: Vec<FeedEntry>) -> Self {
        self.feeds.insert(url.to_string(), entries);
        self
    }

    /// Serve the entries of a feed document.
    pub fn with_document(self, url: &str, document: &str) -> Self {
        let entries = parse_feed(document.as_bytes()).unwrap();
        self.with_feed(url, entries)
    }
}

#[async_trait]
impl FeedSource for StaticFeeds {
    async fn entries(&self, url: &str) -> Result<Vec<FeedEntry>> {
        self.feeds
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Feed(format!("{} returned HTTP 404 Not Found", url)))
    }
}
