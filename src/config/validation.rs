//! Configuration validation logic.

use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    config.base_dir()?;
    validate_mime_types(&config.mime_types)?;
    validate_link_base(&config.link_base)?;
    validate_names(&config.names)?;

    Ok(())
}

/// Validate the media-type preference list.
///
/// An empty entry would match every enclosure, which is never what a
/// trailing comma on the command line meant.
pub fn validate_mime_types(mime_types: &[String]) -> Result<()> {
    if mime_types.is_empty() {
        return Err(Error::MissingConfig(
            "mime_types (at least one media type required)".to_string(),
        ));
    }

    if let Some(pos) = mime_types.iter().position(|m| m.trim().is_empty()) {
        return Err(Error::ConfigValidation {
            field: "mime_types".to_string(),
            message: format!("Entry {} is empty", pos + 1),
        });
    }

    Ok(())
}

/// Validate the public link base.
pub fn validate_link_base(link_base: &str) -> Result<()> {
    Url::parse(link_base).map_err(|e| Error::ConfigValidation {
        field: "link_base".to_string(),
        message: format!("'{}' is not an absolute URL: {}", link_base, e),
    })?;

    Ok(())
}

/// Validate subscription name filters.
pub fn validate_names<S: AsRef<str>>(names: &[S]) -> Result<()> {
    for name in names {
        let name = name.as_ref();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(Error::ConfigValidation {
                field: "names".to_string(),
                message: format!(
                    "Name filter '{}' can never match: names are single words",
                    name
                ),
            });
        }
    }

    Ok(())
}
