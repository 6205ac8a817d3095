use std::sync::Mutex;

/// Seam through which the pipeline and session service drive navigation.
///
/// The browser shell supplies the real router; tests and non-browser
/// embedders record or log the intents instead.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;
    fn navigate(&self, to: &str);
}

#[derive(Debug, Default)]
struct RecordingState {
    current: String,
    history: Vec<String>,
}

/// Navigator that records every navigation.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    state: Mutex<RecordingState>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(path: &str) -> Self {
        let navigator = Self::new();
        navigator
            .state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .current = path.to_string();
        navigator
    }

    pub fn history(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .history
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .current
            .clone()
    }

    fn navigate(&self, to: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.current = to.to_string();
        state.history.push(to.to_string());
    }
}
