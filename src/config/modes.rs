//! Run mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do with enclosures that are not in the dedup log yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Download new enclosures and log them (default).
    #[default]
    Fetch,
    /// Log new enclosures as seen without downloading them.
    CatchUp,
}

impl RunMode {
    /// Whether this run only records items.
    pub fn is_catch_up(&self) -> bool {
        matches!(self, RunMode::CatchUp)
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::Fetch => write!(f, "fetch"),
            RunMode::CatchUp => write!(f, "catchup"),
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fetch" => Ok(RunMode::Fetch),
            "catchup" | "catch-up" => Ok(RunMode::CatchUp),
            _ => Err(format!("Unknown run mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("fetch".parse::<RunMode>().unwrap(), RunMode::Fetch);
        assert_eq!("CatchUp".parse::<RunMode>().unwrap(), RunMode::CatchUp);
        assert_eq!("catch-up".parse::<RunMode>().unwrap(), RunMode::CatchUp);
        assert!("sync".parse::<RunMode>().is_err());
        assert_eq!(RunMode::CatchUp.to_string(), "catchup");
        assert!(RunMode::CatchUp.is_catch_up());
        assert!(!RunMode::Fetch.is_catch_up());
    }
}
