use crate::DEFAULT_LOG_LEVEL_STRING;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// Verbosity knob as written in `config.toml` or `LAUDO_LOG_LEVEL`.
///
/// An unrecognized name degrades to the default level instead of erroring;
/// a typo in a logging knob must never keep the client from starting.
#[derive(Debug, Clone, Copy)]
pub struct LogLevel(pub LevelFilter);

impl LogLevel {
    /// Parse a level name, `None` when the name is not recognized.
    pub fn parse(name: &str) -> Option<Self> {
        let filter = match name.to_ascii_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => return None,
        };
        Some(Self(filter))
    }

    /// Parse a level name, degrading to the default level.
    pub fn parse_or_default(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        // DEFAULT_LOG_LEVEL_STRING is always a recognized name
        Self::parse(DEFAULT_LOG_LEVEL_STRING).unwrap_or(Self(LevelFilter::Info))
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse_or_default(&name))
    }
}
