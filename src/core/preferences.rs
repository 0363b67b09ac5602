//! Persisted user preference lookup
//!
//! The store never owns preference storage; it only asks whether a flag is
//! set. Hosts plug in whatever backs their settings.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;

/// Preference gating file persistence of log entries
pub const DEBUG_LOG_KEY: &str = "debug_log";

pub trait Preferences: Send + Sync {
    /// Value of a boolean flag; unset flags read as `false`
    fn get_bool(&self, key: &str) -> bool;
}

/// Preferences held in memory, mostly for tests and embedding
#[derive(Debug, Default)]
pub struct InMemoryPreferences {
    flags: RwLock<HashMap<String, bool>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preferences with file logging switched on
    pub fn with_file_logging() -> Self {
        let prefs = Self::new();
        prefs.set_bool(DEBUG_LOG_KEY, true);
        prefs
    }

    pub fn set_bool(&self, key: impl Into<String>, value: bool) {
        self.flags.write().insert(key.into(), value);
    }

    pub fn remove(&self, key: &str) {
        self.flags.write().remove(key);
    }
}

impl Preferences for InMemoryPreferences {
    fn get_bool(&self, key: &str) -> bool {
        self.flags.read().get(key).copied().unwrap_or(false)
    }
}

/// Preferences read from a JSON object file on every lookup.
///
/// A missing file, unparsable JSON, an absent key or a non-boolean value all
/// read as `false`. Values `1`/`0` and `"true"`/`"false"` are accepted too.
#[derive(Debug, Clone)]
pub struct JsonPreferences {
    path: PathBuf,
}

impl JsonPreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Option<serde_json::Map<String, Value>> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content).ok()? {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl Preferences for JsonPreferences {
    fn get_bool(&self, key: &str) -> bool {
        let Some(map) = self.load() else {
            return false;
        };
        match map.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
            Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_defaults_to_false() {
        let prefs = InMemoryPreferences::new();
        assert!(!prefs.get_bool(DEBUG_LOG_KEY));
        prefs.set_bool(DEBUG_LOG_KEY, true);
        assert!(prefs.get_bool(DEBUG_LOG_KEY));
        prefs.remove(DEBUG_LOG_KEY);
        assert!(!prefs.get_bool(DEBUG_LOG_KEY));
    }

    #[test]
    fn test_json_preferences() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"debug_log": true, "numeric": 1, "text": "TRUE", "off": false}"#)
            .expect("write prefs");

        let prefs = JsonPreferences::new(&path);
        assert!(prefs.get_bool(DEBUG_LOG_KEY));
        assert!(prefs.get_bool("numeric"));
        assert!(prefs.get_bool("text"));
        assert!(!prefs.get_bool("off"));
        assert!(!prefs.get_bool("missing"));
    }

    #[test]
    fn test_json_preferences_reread_on_lookup() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("prefs.json");
        let prefs = JsonPreferences::new(&path);
        assert!(!prefs.get_bool(DEBUG_LOG_KEY));

        fs::write(&path, r#"{"debug_log": true}"#).expect("write prefs");
        assert!(prefs.get_bool(DEBUG_LOG_KEY));

        fs::write(&path, "not json").expect("write prefs");
        assert!(!prefs.get_bool(DEBUG_LOG_KEY));
    }
}
