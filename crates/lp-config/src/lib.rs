mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod routes_config;
mod session_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use routes_config::RoutesConfig;
pub use session_config::SessionConfig;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOGIN_PATH: &str = "/login";
const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";
const DEFAULT_SUPER_ADMIN_PATH: &str = "/admin";
const DEFAULT_SESSION_FILENAME: &str = "session.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
