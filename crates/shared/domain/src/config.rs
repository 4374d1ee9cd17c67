use crate::language::LanguageKey;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    /// Application name; used as the logger name and in the shell banner.
    pub name: String,
    pub i18n: I18nConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Translation bundles and language selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Language announced on the locale stream at startup.
    /// `None` leaves the stream undefined until something selects a language.
    pub default_language: Option<LanguageKey>,
    /// Bundle activated when a requested language has no bundle.
    pub fallback_language: LanguageKey,
    /// Languages that have a translation bundle.
    pub available_languages: Vec<LanguageKey>,
    /// Reject unknown languages instead of falling back.
    pub strict: bool,
}

// --- Default ---

impl Default for AppConfigInner {
    fn default() -> Self {
        Self { name: "folio".to_owned(), i18n: I18nConfig::default() }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: Some(LanguageKey::ENGLISH),
            fallback_language: LanguageKey::ENGLISH,
            available_languages: vec![
                LanguageKey::ENGLISH,
                LanguageKey::FRENCH,
                LanguageKey::GERMAN,
            ],
            strict: false,
        }
    }
}
