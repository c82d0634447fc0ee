//! Thread-safe in-memory preference store, used by tests and by the auth
//! service's unit coverage. Mirrors the JSON store's contract exactly,
//! including the "missing reads as empty" behavior.

use crate::domain::repositories::PreferenceStore;
use crate::domain::user::{SessionUser, User};
use anyhow::{Result, anyhow};
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPreferenceStore {
    registry: RwLock<Vec<User>>,
    session: RwLock<Option<SessionUser>>,
    language: RwLock<Option<String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load_registry(&self) -> Result<Vec<User>> {
        Ok(self
            .registry
            .read()
            .map_err(|e| anyhow!("registry lock poisoned: {e}"))?
            .clone())
    }

    fn save_registry(&self, users: &[User]) -> Result<()> {
        *self
            .registry
            .write()
            .map_err(|e| anyhow!("registry lock poisoned: {e}"))? = users.to_vec();
        Ok(())
    }

    fn load_session(&self) -> Result<Option<SessionUser>> {
        Ok(self
            .session
            .read()
            .map_err(|e| anyhow!("session lock poisoned: {e}"))?
            .clone())
    }

    fn save_session(&self, user: &SessionUser) -> Result<()> {
        *self
            .session
            .write()
            .map_err(|e| anyhow!("session lock poisoned: {e}"))? = Some(user.clone());
        Ok(())
    }

    fn clear_session(&self) -> Result<()> {
        *self
            .session
            .write()
            .map_err(|e| anyhow!("session lock poisoned: {e}"))? = None;
        Ok(())
    }

    fn load_language(&self) -> Result<Option<String>> {
        Ok(self
            .language
            .read()
            .map_err(|e| anyhow!("language lock poisoned: {e}"))?
            .clone())
    }

    fn save_language(&self, code: &str) -> Result<()> {
        *self
            .language
            .write()
            .map_err(|e| anyhow!("language lock poisoned: {e}"))? = Some(code.to_string());
        Ok(())
    }
}
