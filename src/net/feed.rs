//! Feed retrieval.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{Error, Result};
use crate::media::{parse_feed, FeedEntry};

/// Something that turns a feed address into its entries.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn entries(&self, url: &str) -> Result<Vec<FeedEntry>>;
}

/// Fetches feeds over HTTP.
pub struct HttpFeedSource {
    client: Client,
}

impl HttpFeedSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn entries(&self, url: &str) -> Result<Vec<FeedEntry>> {
        let url = Url::parse(url)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Feed(format!("{} returned HTTP {}", url, status)));
        }

        let body = response.bytes().await?;
        parse_feed(&body)
    }
}
