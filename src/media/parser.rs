//! Feed document parsing.
//!
//! RSS is tried first, then Atom. Only what enclosure selection needs is
//! extracted: the entry title and its attachment descriptors.
//!
//! RSS items are read with a streaming XML reader so that every
//! `<enclosure>` of an item is kept, in document order.

use xml::attribute::OwnedAttribute;
use xml::reader::{EventReader, XmlEvent};

use crate::error::{Error, Result};
use crate::media::item::{Enclosure, FeedEntry};

/// Atom link relation marking an enclosure.
const ATOM_ENCLOSURE_REL: &str = "enclosure";

/// Root elements of RSS 2.0 (`rss`) and RSS 1.0 (`rdf:RDF`) documents.
const RSS_ROOTS: &[&str] = &["rss", "RDF"];

#[derive(Debug, thiserror::Error)]
enum RssError {
    #[error(transparent)]
    Xml(#[from] xml::reader::Error),

    #[error("root element is <{0}>")]
    NotRss(String),

    #[error("no root element")]
    Empty,
}

/// Parse a feed document into its entries.
pub fn parse_feed(content: &[u8]) -> Result<Vec<FeedEntry>> {
    match parse_rss(content) {
        Ok(entries) => {
            tracing::debug!("Parsed RSS feed with {} entries", entries.len());
            Ok(entries)
        }
        Err(rss_err) => match parse_atom(content) {
            Ok(entries) => {
                tracing::debug!("Parsed Atom feed with {} entries", entries.len());
                Ok(entries)
            }
            Err(atom_err) => Err(Error::Feed(format!(
                "Not an RSS or Atom document. RSS error: {}. Atom error: {}",
                rss_err, atom_err
            ))),
        },
    }
}

fn parse_rss(content: &[u8]) -> std::result::Result<Vec<FeedEntry>, RssError> {
    let mut entries = Vec::new();
    let mut current: Option<FeedEntry> = None;
    let mut depth = 0usize;
    let mut item_depth = 0usize;
    let mut in_title = false;
    let mut saw_root = false;

    for event in EventReader::new(content) {
        match event? {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                depth += 1;
                if depth == 1 {
                    if !RSS_ROOTS.contains(&name.local_name.as_str()) {
                        return Err(RssError::NotRss(name.local_name));
                    }
                    saw_root = true;
                    continue;
                }
                // Extension elements such as <itunes:title> are not ours.
                if name.prefix.is_some() {
                    continue;
                }

                match current.as_mut() {
                    None => {
                        if name.local_name == "item" {
                            item_depth = depth;
                            current = Some(FeedEntry::default());
                        }
                    }
                    Some(entry) if depth == item_depth + 1 => match name.local_name.as_str() {
                        "title" => in_title = true,
                        "enclosure" => entry.enclosures.push(Enclosure::from_attrs(
                            attr(&attributes, "url"),
                            attr(&attributes, "length"),
                            attr(&attributes, "type"),
                        )),
                        _ => {}
                    },
                    Some(_) => {}
                }
            }
            XmlEvent::EndElement { .. } => {
                in_title = false;
                if depth == item_depth {
                    if let Some(mut entry) = current.take() {
                        entry.title = entry
                            .title
                            .map(|t| t.trim().to_string())
                            .filter(|t| !t.is_empty());
                        entries.push(entry);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            XmlEvent::Characters(text) | XmlEvent::CData(text) if in_title => {
                if let Some(entry) = current.as_mut() {
                    entry.title.get_or_insert_with(String::new).push_str(&text);
                }
            }
            _ => {}
        }
    }

    if !saw_root {
        return Err(RssError::Empty);
    }

    Ok(entries)
}

/// Value of an unprefixed attribute.
fn attr<'a>(attributes: &'a [OwnedAttribute], key: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|a| a.name.prefix.is_none() && a.name.local_name == key)
        .map(|a| a.value.as_str())
}

fn parse_atom(content: &[u8]) -> std::result::Result<Vec<FeedEntry>, atom_syndication::Error> {
    let feed = atom_syndication::Feed::read_from(content)?;

    let entries = feed
        .entries()
        .iter()
        .map(|entry| {
            let title = entry.title().as_str();
            FeedEntry {
                title: (!title.is_empty()).then(|| title.to_string()),
                enclosures: entry
                    .links()
                    .iter()
                    .filter(|link| link.rel() == ATOM_ENCLOSURE_REL)
                    .map(|link| {
                        Enclosure::from_attrs(Some(link.href()), link.length(), link.mime_type())
                    })
                    .collect(),
            }
        })
        .collect();

    Ok(entries)
}
