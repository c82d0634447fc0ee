//! Flat JSON-file implementation of the preference store.
//!
//! Three small files under the data directory (default `~/.coinwatch`):
//! `users.json` (the registry), `session.json` (the session pointer) and
//! `language.json` (the preferred UI language). Writes are atomic via temp
//! file + rename.

use crate::domain::repositories::PreferenceStore;
use crate::domain::user::{SessionUser, User};
use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

const REGISTRY_FILE: &str = "users.json";
const SESSION_FILE: &str = "session.json";
const LANGUAGE_FILE: &str = "language.json";

pub struct JsonPreferenceStore {
    dir: PathBuf,
}

impl JsonPreferenceStore {
    /// Opens (and creates if needed) the given data directory, or
    /// `~/.coinwatch` when none is supplied.
    pub fn new(dir_override: Option<PathBuf>) -> Result<Self> {
        let dir = match dir_override {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").context("could not find HOME directory")?;
                PathBuf::from(home).join(".coinwatch")
            }
        };

        if !dir.exists() {
            fs::create_dir_all(&dir).context("failed to create data directory")?;
        }
        info!(dir = %dir.display(), "opened preference store");

        Ok(Self { dir })
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.path(name);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let value = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.path(name);
        let content = serde_json::to_string_pretty(value).context("failed to serialize record")?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)
            .with_context(|| format!("failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("failed to rename into {}", path.display()))?;
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<()> {
        let path = self.path(name);
        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load_registry(&self) -> Result<Vec<User>> {
        Ok(self.read_json(REGISTRY_FILE)?.unwrap_or_default())
    }

    fn save_registry(&self, users: &[User]) -> Result<()> {
        self.write_json(REGISTRY_FILE, &users)
    }

    fn load_session(&self) -> Result<Option<SessionUser>> {
        // A session record that no longer parses is dropped rather than
        // propagated: the user just ends up logged out.
        match self.read_json::<SessionUser>(SESSION_FILE) {
            Ok(session) => Ok(session),
            Err(e) => {
                warn!("discarding unreadable session record: {e:#}");
                let _ = self.remove(SESSION_FILE);
                Ok(None)
            }
        }
    }

    fn save_session(&self, user: &SessionUser) -> Result<()> {
        self.write_json(SESSION_FILE, user)
    }

    fn clear_session(&self) -> Result<()> {
        self.remove(SESSION_FILE)
    }

    fn load_language(&self) -> Result<Option<String>> {
        self.read_json(LANGUAGE_FILE)
    }

    fn save_language(&self, code: &str) -> Result<()> {
        self.write_json(LANGUAGE_FILE, &code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempStore {
        store: JsonPreferenceStore,
        dir: PathBuf,
    }

    impl TempStore {
        fn new() -> Self {
            let dir =
                std::env::temp_dir().join(format!("coinwatch-store-{}", uuid::Uuid::new_v4()));
            let store = JsonPreferenceStore::new(Some(dir.clone())).unwrap();
            Self { store, dir }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    #[test]
    fn missing_files_read_as_empty_state() {
        let t = TempStore::new();
        assert!(t.store.load_registry().unwrap().is_empty());
        assert!(t.store.load_session().unwrap().is_none());
        assert!(t.store.load_language().unwrap().is_none());
    }

    #[test]
    fn registry_round_trips() {
        let t = TempStore::new();
        let users = vec![User::new("Alice", "alice@x.com", "secret1")];
        t.store.save_registry(&users).unwrap();

        let loaded = t.store.load_registry().unwrap();
        assert_eq!(loaded, users);
    }

    #[test]
    fn session_round_trips_and_clears() {
        let t = TempStore::new();
        let session = User::new("Alice", "alice@x.com", "secret1").to_session();
        t.store.save_session(&session).unwrap();
        assert_eq!(t.store.load_session().unwrap(), Some(session));

        t.store.clear_session().unwrap();
        assert!(t.store.load_session().unwrap().is_none());
        // Clearing twice is fine.
        t.store.clear_session().unwrap();
    }

    #[test]
    fn corrupt_session_is_discarded() {
        let t = TempStore::new();
        fs::write(t.store.path(SESSION_FILE), "{not json").unwrap();

        assert!(t.store.load_session().unwrap().is_none());
        assert!(!t.store.path(SESSION_FILE).exists());
    }

    #[test]
    fn language_round_trips() {
        let t = TempStore::new();
        t.store.save_language("fr").unwrap();
        assert_eq!(t.store.load_language().unwrap().as_deref(), Some("fr"));
    }
}
