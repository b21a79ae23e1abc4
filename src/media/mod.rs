//! Media module for enclosure representation, selection and feed parsing.

pub mod item;
pub mod parser;
pub mod select;

pub use item::{Attachment, Enclosure, FeedEntry, SelectedItem};
pub use parser::parse_feed;
pub use select::{select_enclosure, Selection};
