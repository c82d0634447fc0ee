use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Watchlist applied to every newly registered account.
pub const STARTER_ASSETS: [&str; 2] = ["bitcoin", "ethereum"];

/// Watchlist shown to visitors who have not signed in.
pub const GUEST_ASSETS: [&str; 5] = ["bitcoin", "ethereum", "ripple", "cardano", "solana"];

pub const DEFAULT_THEME: &str = "dark";

/// Per-account display preferences.
///
/// `selected_cryptos` is an ordered list of asset ids; duplicates are never
/// appended (see [`Preferences::add_asset`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub selected_cryptos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_chart: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            selected_cryptos: STARTER_ASSETS.iter().map(|s| s.to_string()).collect(),
            theme: Some(DEFAULT_THEME.to_string()),
            default_chart: None,
        }
    }
}

impl Preferences {
    /// Shallow merge: fields present in the update overwrite, omitted fields
    /// are retained.
    pub fn merge(&mut self, update: PreferencesUpdate) {
        if let Some(selected) = update.selected_cryptos {
            let mut seen = std::collections::HashSet::new();
            self.selected_cryptos = selected
                .into_iter()
                .filter(|id| seen.insert(id.clone()))
                .collect();
        }
        if let Some(theme) = update.theme {
            self.theme = Some(theme);
        }
        if let Some(chart) = update.default_chart {
            self.default_chart = Some(chart);
        }
    }

    /// Appends an asset id to the watchlist. Returns `false` (and leaves the
    /// list untouched) when the id is already present.
    pub fn add_asset(&mut self, id: &str) -> bool {
        if self.selected_cryptos.iter().any(|c| c == id) {
            return false;
        }
        self.selected_cryptos.push(id.to_string());
        true
    }
}

/// Partial preference update, applied field-by-field via [`Preferences::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    pub selected_cryptos: Option<Vec<String>>,
    pub theme: Option<String>,
    pub default_chart: Option<String>,
}

impl PreferencesUpdate {
    pub fn theme(theme: impl Into<String>) -> Self {
        Self {
            theme: Some(theme.into()),
            ..Self::default()
        }
    }

    pub fn selected_cryptos(ids: Vec<String>) -> Self {
        Self {
            selected_cryptos: Some(ids),
            ..Self::default()
        }
    }
}

/// A registered account as stored in the registry.
///
/// The password is kept in plaintext: this is a demo-grade local store, not a
/// credential vault. It is stripped before the record becomes session-visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub preferences: Preferences,
}

impl User {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        Self {
            id: format!("user_{}", Uuid::new_v4()),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            preferences: Preferences::default(),
        }
    }

    /// The credential-stripped view of this account used as the session pointer.
    pub fn to_session(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            preferences: self.preferences.clone(),
        }
    }
}

/// The currently signed-in account as seen by the rest of the application.
/// Deliberately has no password field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub preferences: Preferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preferences_use_starter_watchlist() {
        let prefs = Preferences::default();
        assert_eq!(prefs.selected_cryptos, vec!["bitcoin", "ethereum"]);
        assert_eq!(prefs.theme.as_deref(), Some("dark"));
        assert!(prefs.default_chart.is_none());
    }

    #[test]
    fn merge_keeps_omitted_fields() {
        let mut prefs = Preferences::default();
        prefs.merge(PreferencesUpdate::theme("light"));

        assert_eq!(prefs.theme.as_deref(), Some("light"));
        assert_eq!(prefs.selected_cryptos, vec!["bitcoin", "ethereum"]);
    }

    #[test]
    fn merge_replaces_watchlist_wholesale() {
        let mut prefs = Preferences::default();
        prefs.merge(PreferencesUpdate::selected_cryptos(vec![
            "solana".to_string(),
        ]));

        assert_eq!(prefs.selected_cryptos, vec!["solana"]);
        assert_eq!(prefs.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn add_asset_rejects_duplicates() {
        let mut prefs = Preferences::default();
        assert!(prefs.add_asset("cardano"));
        assert!(!prefs.add_asset("cardano"));
        assert!(!prefs.add_asset("bitcoin"));
        assert_eq!(prefs.selected_cryptos, vec!["bitcoin", "ethereum", "cardano"]);
    }

    #[test]
    fn session_view_has_no_password() {
        let user = User::new("Alice", "alice@x.com", "secret1");
        let session = user.to_session();

        let json = serde_json::to_value(&session).expect("serialize session");
        assert!(json.get("password").is_none());
        assert_eq!(json["name"], "Alice");
    }

    #[test]
    fn user_ids_are_unique() {
        let a = User::new("A", "a@x.com", "pw");
        let b = User::new("B", "b@x.com", "pw");
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("user_"));
    }
}
