//! Account and session management over the local preference store.
//!
//! This is an explicit store object handed to the UI, not a process-wide
//! global: it hydrates from persisted storage once at startup and owns the
//! in-memory session pointer from then on.

use crate::domain::errors::AuthError;
use crate::domain::repositories::PreferenceStore;
use crate::domain::user::{PreferencesUpdate, SessionUser, User};
use std::sync::Arc;
use tracing::{info, warn};

pub struct AuthService {
    store: Arc<dyn PreferenceStore>,
    session: Option<SessionUser>,
}

impl AuthService {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            session: None,
        }
    }

    /// Restores the persisted session pointer, if any.
    ///
    /// The pointer is trusted as-is and not re-validated against the registry;
    /// a stale record simply behaves like a logged-in user until logout.
    pub fn hydrate(&mut self) {
        match self.store.load_session() {
            Ok(Some(session)) => {
                info!(user = %session.name, "restored persisted session");
                self.session = Some(session);
            }
            Ok(None) => {}
            Err(e) => warn!("could not restore session: {e:#}"),
        }
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Creates an account, appends it to the registry and signs it in.
    ///
    /// Fails with [`AuthError::DuplicateEmail`] when the email is already
    /// registered (case-sensitive exact match); neither the registry nor the
    /// session pointer is touched in that case.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, AuthError> {
        let mut registry = self.store.load_registry()?;
        if registry.iter().any(|u| u.email == email) {
            return Err(AuthError::DuplicateEmail);
        }

        let user = User::new(name, email, password);
        let session = user.to_session();
        registry.push(user);

        self.store.save_registry(&registry)?;
        self.store.save_session(&session)?;
        self.session = Some(session.clone());

        info!(user = %session.name, "registered new account");
        Ok(session)
    }

    /// Signs in an existing account. Both fields must match exactly; on
    /// failure the current session pointer is left as it was.
    pub fn login(&mut self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let registry = self.store.load_registry()?;
        let Some(user) = registry
            .iter()
            .find(|u| u.email == email && u.password == password)
        else {
            return Err(AuthError::InvalidCredentials);
        };

        let session = user.to_session();
        self.store.save_session(&session)?;
        self.session = Some(session.clone());

        info!(user = %session.name, "signed in");
        Ok(session)
    }

    /// Clears the session pointer and its persisted copy. Never fails: the
    /// account registry itself is untouched and a storage hiccup only means
    /// the stale pointer survives until the next successful write.
    pub fn logout(&mut self) {
        self.session = None;
        if let Err(e) = self.store.clear_session() {
            warn!("could not clear persisted session: {e:#}");
        }
        info!("signed out");
    }

    /// Shallow-merges the given fields into the current user's preferences.
    ///
    /// No-op when nobody is signed in. The merged record is written both to
    /// the session pointer and to the matching registry entry, so the change
    /// survives the next login.
    pub fn update_preferences(
        &mut self,
        update: PreferencesUpdate,
    ) -> Result<Option<SessionUser>, AuthError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };

        session.preferences.merge(update);
        let session = session.clone();
        self.store.save_session(&session)?;

        let mut registry = self.store.load_registry()?;
        if let Some(user) = registry.iter_mut().find(|u| u.id == session.id) {
            user.preferences = session.preferences.clone();
            self.store.save_registry(&registry)?;
        } else {
            // Stale session pointer (registry entry gone). Keep the session
            // copy updated anyway; there is nothing to write through to.
            warn!(user = %session.id, "preference update for user missing from registry");
        }

        Ok(Some(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::memory::InMemoryPreferenceStore;

    fn service() -> AuthService {
        AuthService::new(Arc::new(InMemoryPreferenceStore::new()))
    }

    #[test]
    fn register_signs_in_with_starter_watchlist() {
        let mut auth = service();
        let session = auth.register("Alice", "alice@x.com", "secret1").unwrap();

        assert_eq!(session.name, "Alice");
        assert_eq!(session.preferences.selected_cryptos, vec!["bitcoin", "ethereum"]);
        assert!(auth.is_authenticated());
    }

    #[test]
    fn duplicate_email_leaves_registry_and_session_untouched() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        let mut auth = AuthService::new(store.clone());
        auth.register("Alice", "alice@x.com", "secret1").unwrap();
        auth.logout();

        let err = auth.register("Alice Again", "alice@x.com", "other").unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));
        assert_eq!(store.load_registry().unwrap().len(), 1);
        assert!(store.load_session().unwrap().is_none());
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn login_requires_exact_credential_match() {
        let mut auth = service();
        auth.register("Alice", "alice@x.com", "secret1").unwrap();
        auth.logout();

        let err = auth.login("alice@x.com", "wrong").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(!auth.is_authenticated());

        let session = auth.login("alice@x.com", "secret1").unwrap();
        assert_eq!(session.email, "alice@x.com");
    }

    #[test]
    fn update_preferences_without_session_is_a_no_op() {
        let mut auth = service();
        let result = auth.update_preferences(PreferencesUpdate::theme("light")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn theme_update_preserves_watchlist() {
        let mut auth = service();
        auth.register("Alice", "alice@x.com", "secret1").unwrap();

        let session = auth
            .update_preferences(PreferencesUpdate::theme("light"))
            .unwrap()
            .unwrap();

        assert_eq!(session.preferences.theme.as_deref(), Some("light"));
        assert_eq!(session.preferences.selected_cryptos, vec!["bitcoin", "ethereum"]);
    }

    #[test]
    fn preference_updates_survive_relogin() {
        let mut auth = service();
        auth.register("Alice", "alice@x.com", "secret1").unwrap();
        auth.update_preferences(PreferencesUpdate::selected_cryptos(vec![
            "solana".to_string(),
            "cardano".to_string(),
        ]))
        .unwrap();
        auth.logout();

        let session = auth.login("alice@x.com", "secret1").unwrap();
        assert_eq!(session.preferences.selected_cryptos, vec!["solana", "cardano"]);
    }
}
