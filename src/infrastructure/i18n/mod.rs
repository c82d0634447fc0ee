pub mod service;

pub use service::{DEFAULT_LANGUAGE, I18nService, LanguageInfo};
