//! Filesystem module.
//!
//! Provides:
//! - File naming from enclosure addresses
//! - Dated destination folders and public links

pub mod naming;
pub mod paths;

pub use naming::{file_name_from_url, sanitize_filename, sanitize_path_component};
pub use paths::{date_folder, destination_folder, ensure_dir, public_link};
