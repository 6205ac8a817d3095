use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_FILENAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Token store file, relative to the config directory
    pub storage_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_file: DEFAULT_SESSION_FILENAME.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.storage_file.is_empty() {
            return Err(ConfigError::session("session.storage_file cannot be empty"));
        }

        // Must stay inside the config directory
        let path = std::path::Path::new(&self.storage_file);
        if path.is_absolute() || self.storage_file.contains("..") {
            return Err(ConfigError::session(
                "session.storage_file must be relative and cannot contain '..'",
            ));
        }
        Ok(())
    }
}
