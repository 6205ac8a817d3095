use lp_client::Navigator;

use std::sync::Mutex;

use log::info;

/// A terminal has no router; navigation intents are logged and tracked so
/// pipeline redirects (e.g. session expiry) still surface to the operator.
pub struct CliNavigator {
    current: Mutex<String>,
}

impl CliNavigator {
    pub fn new(starting_path: &str) -> Self {
        Self {
            current: Mutex::new(starting_path.to_string()),
        }
    }
}

impl Navigator for CliNavigator {
    fn current_path(&self) -> String {
        self.current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn navigate(&self, to: &str) {
        info!("navigate -> {}", to);
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = to.to_string();
    }
}
