//! Enclosure and download item representation.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::Result;
use crate::fs::naming::{file_name_from_url, sanitize_path_component};
use crate::fs::paths::{destination_folder, public_link};

/// An attachment descriptor as found in a feed entry.
///
/// Feeds routinely omit attributes, so every field is optional here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enclosure {
    pub url: Option<String>,
    pub length: Option<u64>,
    pub mime_type: Option<String>,
}

impl Enclosure {
    /// Build an enclosure from raw attribute values, treating empty or
    /// unparseable values as absent.
    pub fn from_attrs(url: Option<&str>, length: Option<&str>, mime_type: Option<&str>) -> Self {
        let non_empty = |s: Option<&str>| {
            s.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            url: non_empty(url),
            length: length.and_then(|l| l.trim().parse::<u64>().ok()),
            mime_type: non_empty(mime_type),
        }
    }

    /// The enclosure with all required fields, if it has them.
    pub fn complete(&self) -> Option<Attachment> {
        Some(Attachment {
            url: self.url.clone()?,
            length: self.length?,
            mime_type: self.mime_type.clone()?,
        })
    }
}

/// An enclosure carrying address, byte length and media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub url: String,
    pub length: u64,
    pub mime_type: String,
}

/// One entry of a parsed feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub enclosures: Vec<Enclosure>,
}

/// An attachment chosen for download, with its naming resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedItem {
    /// Subscription label.
    pub name: String,
    pub url: String,
    pub length: u64,
    pub mime_type: String,
    /// Folder the file is written to.
    pub destination_folder: PathBuf,
    /// Name on disk and key in the dedup log.
    pub file_name: String,
    /// Where the file is reachable once downloaded.
    pub public_link: String,
}

impl SelectedItem {
    /// Resolve file name, destination and public link for an attachment.
    pub fn new(
        name: &str,
        attachment: Attachment,
        base_dir: &Path,
        link_base: &str,
        today: NaiveDate,
    ) -> Result<Self> {
        let file_name = file_name_from_url(&attachment.url)?;
        let folder_name = sanitize_path_component(name)?;
        let destination_folder = destination_folder(base_dir, today, &folder_name);
        let public_link = public_link(link_base, today, &folder_name, &file_name);

        Ok(Self {
            name: name.to_string(),
            url: attachment.url,
            length: attachment.length,
            mime_type: attachment.mime_type,
            destination_folder,
            file_name,
            public_link,
        })
    }

    /// Full path of the downloaded file.
    pub fn destination_path(&self) -> PathBuf {
        self.destination_folder.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attrs() {
        let enc = Enclosure::from_attrs(
            Some("http://example.test/ep1.mp3"),
            Some(" 100 "),
            Some("audio/mpeg"),
        );
        assert_eq!(
            enc.complete(),
            Some(Attachment {
                url: "http://example.test/ep1.mp3".into(),
                length: 100,
                mime_type: "audio/mpeg".into(),
            })
        );

        let enc = Enclosure::from_attrs(Some(""), Some("abc"), None);
        assert_eq!(enc, Enclosure::default());
        assert_eq!(enc.complete(), None);
    }

    #[test]
    fn test_zero_length_is_complete() {
        let enc = Enclosure::from_attrs(
            Some("http://example.test/a.mp4"),
            Some("0"),
            Some("video/mp4"),
        );
        assert_eq!(enc.complete().map(|a| a.length), Some(0));
    }

    #[test]
    fn test_selected_item_naming() {
        let attachment = Attachment {
            url: "http://example.test/media/ep1.mp4?token=abc".into(),
            length: 200,
            mime_type: "video/mp4".into(),
        };
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let item = SelectedItem::new(
            "MyShow",
            attachment,
            Path::new("/srv/podcasts"),
            "https://media.example.test/vidcast",
            today,
        )
        .unwrap();

        assert_eq!(item.file_name, "ep1.mp4");
        assert_eq!(
            item.destination_folder,
            PathBuf::from("/srv/podcasts/2024-03-09/MyShow")
        );
        assert_eq!(
            item.destination_path(),
            PathBuf::from("/srv/podcasts/2024-03-09/MyShow/ep1.mp4")
        );
        assert_eq!(
            item.public_link,
            "https://media.example.test/vidcast/2024-03-09/MyShow/ep1.mp4"
        );
    }
}
