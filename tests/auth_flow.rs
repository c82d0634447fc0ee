//! End-to-end account lifecycle against a real JSON data directory:
//! register, preference updates, logout, failed and successful re-login.

use coinwatch::application::auth::AuthService;
use coinwatch::domain::errors::AuthError;
use coinwatch::domain::repositories::PreferenceStore;
use coinwatch::domain::user::PreferencesUpdate;
use coinwatch::infrastructure::persistence::JsonPreferenceStore;
use std::path::PathBuf;
use std::sync::Arc;

struct TempDir(PathBuf);

impl TempDir {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("coinwatch-e2e-{}", uuid::Uuid::new_v4()));
        Self(dir)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[test]
fn full_account_lifecycle() {
    let tmp = TempDir::new();
    let store = Arc::new(JsonPreferenceStore::new(Some(tmp.0.clone())).unwrap());
    let mut auth = AuthService::new(store.clone());

    // Register and verify the starter watchlist.
    let session = auth.register("Alice", "alice@x.com", "secret1").unwrap();
    assert_eq!(session.name, "Alice");
    assert_eq!(
        session.preferences.selected_cryptos,
        vec!["bitcoin", "ethereum"]
    );

    // The persisted session never contains the credential.
    let raw = std::fs::read_to_string(tmp.0.join("session.json")).unwrap();
    assert!(!raw.contains("secret1"));
    assert!(!raw.contains("password"));

    // Customize preferences while signed in.
    auth.update_preferences(PreferencesUpdate::selected_cryptos(vec![
        "bitcoin".to_string(),
        "solana".to_string(),
    ]))
    .unwrap();
    auth.update_preferences(PreferencesUpdate::theme("light"))
        .unwrap();

    auth.logout();
    assert!(!auth.is_authenticated());
    assert!(store.load_session().unwrap().is_none());

    // Wrong password fails and leaves the session cleared.
    let err = auth.login("alice@x.com", "wrong").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(!auth.is_authenticated());
    assert!(store.load_session().unwrap().is_none());

    // Correct login restores the saved preferences.
    let session = auth.login("alice@x.com", "secret1").unwrap();
    assert_eq!(
        session.preferences.selected_cryptos,
        vec!["bitcoin", "solana"]
    );
    assert_eq!(session.preferences.theme.as_deref(), Some("light"));
}

#[test]
fn session_survives_a_restart() {
    let tmp = TempDir::new();
    {
        let store = Arc::new(JsonPreferenceStore::new(Some(tmp.0.clone())).unwrap());
        let mut auth = AuthService::new(store);
        auth.register("Bob", "bob@x.com", "hunter2").unwrap();
    }

    // Fresh store and service over the same directory, as after a restart.
    let store = Arc::new(JsonPreferenceStore::new(Some(tmp.0.clone())).unwrap());
    let mut auth = AuthService::new(store);
    auth.hydrate();

    let user = auth.current_user().expect("session should be restored");
    assert_eq!(user.email, "bob@x.com");
}

#[test]
fn two_accounts_share_one_registry() {
    let tmp = TempDir::new();
    let store = Arc::new(JsonPreferenceStore::new(Some(tmp.0.clone())).unwrap());
    let mut auth = AuthService::new(store.clone());

    auth.register("Alice", "alice@x.com", "secret1").unwrap();
    auth.logout();
    auth.register("Bob", "bob@x.com", "hunter2").unwrap();

    // Bob's preference changes must not leak into Alice's record.
    auth.update_preferences(PreferencesUpdate::selected_cryptos(vec![
        "dogecoin".to_string(),
    ]))
    .unwrap();
    auth.logout();

    let alice = auth.login("alice@x.com", "secret1").unwrap();
    assert_eq!(
        alice.preferences.selected_cryptos,
        vec!["bitcoin", "ethereum"]
    );

    assert_eq!(store.load_registry().unwrap().len(), 2);
}
