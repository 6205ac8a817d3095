use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use log::warn;

/// The three independently stored credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
    Csrf,
}

impl TokenKind {
    pub const ALL: [TokenKind; 3] = [Self::Access, Self::Refresh, Self::Csrf];

    /// Key under which the token is persisted
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Access => "accessToken",
            Self::Refresh => "refreshToken",
            Self::Csrf => "csrfToken",
        }
    }
}

/// Durable key/value persistence for the session tokens.
///
/// No validation, no logic beyond get/set/clear. A store whose backing
/// storage is unavailable behaves as an empty store (the session degrades
/// to logged out); it never raises. Absence of any entry is a valid state.
pub trait TokenStore: Send + Sync {
    fn get(&self, kind: TokenKind) -> Option<String>;
    fn set(&self, kind: TokenKind, token: &str);
    fn clear(&self, kind: TokenKind);

    fn clear_all(&self) {
        for kind in TokenKind::ALL {
            self.clear(kind);
        }
    }
}

/// Token store backed by a JSON file.
///
/// Read-modify-write is serialized by an internal lock; across processes
/// the last write wins, which matches the single-shell usage model.
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    fn read_map(&self) -> HashMap<String, String> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!("token store unreadable, treating as empty: {}", e);
                return HashMap::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(map) => map,
            Err(e) => {
                warn!("token store corrupt, treating as empty: {}", e);
                HashMap::new()
            }
        }
    }

    fn write_map(&self, map: &HashMap<String, String>) {
        let contents = match serde_json::to_string(map) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("token store serialization failed: {}", e);
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("token store directory unavailable: {}", e);
                return;
            }
        }

        if let Err(e) = std::fs::write(&self.path, contents) {
            warn!("token store write failed: {}", e);
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, kind: TokenKind) -> Option<String> {
        self.read_map().get(kind.storage_key()).cloned()
    }

    fn set(&self, kind: TokenKind, token: &str) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_map();
        map.insert(kind.storage_key().to_string(), token.to_string());
        self.write_map(&map);
    }

    fn clear(&self, kind: TokenKind) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_map();
        if map.remove(kind.storage_key()).is_some() {
            self.write_map(&map);
        }
    }

    fn clear_all(&self) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        self.write_map(&HashMap::new());
    }
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<&'static str, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, kind: TokenKind) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(kind.storage_key())
            .cloned()
    }

    fn set(&self, kind: TokenKind, token: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(kind.storage_key(), token.to_string());
    }

    fn clear(&self, kind: TokenKind) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(kind.storage_key());
    }

    fn clear_all(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}
