use crate::domain::repositories::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Fallback language; its table is the second tier of every lookup.
pub const DEFAULT_LANGUAGE: &str = "en";

/// The fixed set of supported languages, embedded at compile time.
const EMBEDDED_TRANSLATIONS: [&str; 10] = [
    include_str!("../../../translations/en.json"),
    include_str!("../../../translations/es.json"),
    include_str!("../../../translations/pt.json"),
    include_str!("../../../translations/fr.json"),
    include_str!("../../../translations/it.json"),
    include_str!("../../../translations/de.json"),
    include_str!("../../../translations/hu.json"),
    include_str!("../../../translations/cs.json"),
    include_str!("../../../translations/zh.json"),
    include_str!("../../../translations/ja.json"),
];

/// Language metadata carried in each translation file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub flag: String,
}

/// One language's translation table.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationData {
    pub language: LanguageInfo,
    pub ui: HashMap<String, String>,
}

/// Internationalization service with a fixed, embedded language set.
///
/// Lookups never fail: `t` falls back from the current language to the
/// default language and finally to the raw key itself.
pub struct I18nService {
    current_language: String,
    translations: HashMap<String, TranslationData>,
    available_languages: Vec<LanguageInfo>,
    store: Option<Arc<dyn PreferenceStore>>,
}

impl I18nService {
    pub fn new() -> Self {
        let mut translations = HashMap::new();
        let mut available_languages = Vec::new();

        for source in EMBEDDED_TRANSLATIONS {
            match serde_json::from_str::<TranslationData>(source) {
                Ok(data) => {
                    available_languages.push(data.language.clone());
                    translations.insert(data.language.code.clone(), data);
                }
                Err(e) => warn!("skipping malformed translation table: {e}"),
            }
        }

        Self {
            current_language: DEFAULT_LANGUAGE.to_string(),
            translations,
            available_languages,
            store: None,
        }
    }

    /// Attaches the preference store used to persist the chosen language.
    pub fn with_store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Restores the persisted language choice. Unsupported or missing codes
    /// leave the default in place.
    pub fn hydrate(&mut self) {
        let Some(store) = &self.store else { return };
        match store.load_language() {
            Ok(Some(code)) if self.translations.contains_key(&code) => {
                self.current_language = code;
            }
            Ok(_) => {}
            Err(e) => warn!("could not restore language preference: {e:#}"),
        }
    }

    /// All supported languages, in declaration order.
    pub fn available_languages(&self) -> &[LanguageInfo] {
        &self.available_languages
    }

    pub fn current_language_code(&self) -> &str {
        &self.current_language
    }

    pub fn current_language_info(&self) -> Option<&LanguageInfo> {
        self.available_languages
            .iter()
            .find(|l| l.code == self.current_language)
    }

    /// Switches the UI language and persists the choice. Unsupported codes
    /// are ignored; the return value reports whether the switch happened.
    pub fn set_language(&mut self, language_code: &str) -> bool {
        if !self.translations.contains_key(language_code) {
            return false;
        }
        self.current_language = language_code.to_string();
        if let Some(store) = &self.store
            && let Err(e) = store.save_language(language_code)
        {
            warn!("could not persist language preference: {e:#}");
        }
        true
    }

    /// Three-tier lookup: current language, then the default language, then
    /// the key itself.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(&self.current_language, key)
            .or_else(|| self.lookup(DEFAULT_LANGUAGE, key))
            .unwrap_or(key)
    }

    /// Translate with `{placeholder}` substitution.
    ///
    /// Usage: `i18n.tf("dashboard.welcomeUser", &[("name", "Alice")])`
    pub fn tf(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut result = self.t(key).to_string();
        for (placeholder, value) in params {
            let pattern = format!("{{{}}}", placeholder);
            result = result.replace(&pattern, value);
        }
        result
    }

    fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        self.translations
            .get(language)
            .and_then(|data| data.ui.get(key))
            .map(|s| s.as_str())
    }
}

impl Default for I18nService {
    fn default() -> Self {
        Self::new()
    }
}
