use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DASHBOARD_PATH, DEFAULT_LOGIN_PATH,
    DEFAULT_SUPER_ADMIN_PATH,
};

use serde::Deserialize;

/// Landing paths the client shell navigates to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub login: String,
    pub dashboard: String,
    pub super_admin: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            login: DEFAULT_LOGIN_PATH.to_string(),
            dashboard: DEFAULT_DASHBOARD_PATH.to_string(),
            super_admin: DEFAULT_SUPER_ADMIN_PATH.to_string(),
        }
    }
}

impl RoutesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, path) in [
            ("routes.login", &self.login),
            ("routes.dashboard", &self.dashboard),
            ("routes.super_admin", &self.super_admin),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::routes(format!("{} must start with '/'", name)));
            }
        }
        Ok(())
    }
}
