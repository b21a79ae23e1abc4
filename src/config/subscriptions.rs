//! Subscription list parsing.
//!
//! The list is a plain text file with one feed per line:
//!
//! ```text
//! http://example.test/feed.xml  MyShow
//! ```

use std::path::Path;

use crate::error::{Error, Result};

/// One subscribed feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    /// Feed address.
    pub url: String,
    /// Human label, also used as the download folder name.
    pub name: String,
}

impl Subscription {
    /// Whether the name filter selects this subscription.
    pub fn is_selected(&self, names: &[String]) -> bool {
        names.is_empty() || names.iter().any(|n| n == &self.name)
    }
}

/// Parse a subscription list.
///
/// Blank lines and `#` comments are ignored. Every other line must hold
/// exactly an address and a name separated by whitespace.
pub fn parse_subscriptions(text: &str) -> Result<Vec<Subscription>> {
    let mut subscriptions = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [url, name] => subscriptions.push(Subscription {
                url: url.to_string(),
                name: name.to_string(),
            }),
            _ => {
                return Err(Error::Subscription {
                    line: idx + 1,
                    message: format!(
                        "expected '<address> <name>', found {} field(s)",
                        fields.len()
                    ),
                })
            }
        }
    }

    Ok(subscriptions)
}

/// Read and parse the subscription list at `path`.
pub fn load_subscriptions(path: &Path) -> Result<Vec<Subscription>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::Config(format!("Subscription list not found: {}", path.display()))
        } else {
            Error::Io(e)
        }
    })?;

    parse_subscriptions(&text)
}
