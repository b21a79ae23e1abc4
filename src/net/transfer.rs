//! Enclosure transfer.

use std::path::Path;

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use indicatif::ProgressBar;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::error::{Error, Result};
use crate::output::create_download_bar;

/// Minimum advertised size to show a progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Copies the resource at an address to a local file.
#[async_trait]
pub trait Transfer: Send + Sync {
    /// Fetch `url` into `dest`, returning the number of bytes written.
    async fn fetch(&self, url: &str, dest: &Path) -> Result<u64>;
}

/// Streams enclosures over HTTP.
pub struct HttpTransfer {
    client: Client,
    show_progress: bool,
}

impl HttpTransfer {
    pub fn new(client: Client, show_progress: bool) -> Self {
        Self {
            client,
            show_progress,
        }
    }
}

#[async_trait]
impl Transfer for HttpTransfer {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<u64> {
        let url = Url::parse(url)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transfer(format!("{} returned HTTP {}", url, status)));
        }

        let progress = match response.content_length() {
            Some(len) if self.show_progress && len > PROGRESS_THRESHOLD => {
                Some(create_download_bar(len))
            }
            _ => None,
        };

        let written = write_body(response.bytes_stream(), dest, progress.as_ref()).await;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        written
    }
}

/// Write a body stream to `dest`, removing the file if the copy fails.
async fn write_body<S, B, E>(
    stream: S,
    dest: &Path,
    progress: Option<&ProgressBar>,
) -> Result<u64>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let result = copy_body(stream, dest, progress).await;

    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(dest).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Could not remove partial file {}: {}", dest.display(), e);
            }
        }
    }

    result
}

async fn copy_body<S, B, E>(
    stream: S,
    dest: &Path,
    progress: Option<&ProgressBar>,
) -> Result<u64>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut stream = std::pin::pin!(stream);
    let mut file = File::create(dest).await?;
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Transfer(format!("Stream error: {}", e)))?;
        let bytes = chunk.as_ref();
        file.write_all(bytes).await?;
        downloaded += bytes.len() as u64;

        if let Some(pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;
    Ok(downloaded)
}
