use crate::i18n::I18nError;
use folio_domain::config::I18nConfig;
use folio_domain::language::LanguageKey;
use fxhash::FxHashSet;
use parking_lot::RwLock;
use std::fmt::Debug;
use tracing::{debug, warn};

/// Outcome of a language switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageChange {
    /// The requested bundle is now active.
    Switched(LanguageKey),
    /// The requested bundle was already active.
    Unchanged(LanguageKey),
    /// No bundle for `requested`; `applied` was activated instead.
    Fallback { requested: LanguageKey, applied: LanguageKey },
}

impl LanguageChange {
    /// The language active after the switch.
    #[must_use]
    pub const fn applied(&self) -> &LanguageKey {
        match self {
            Self::Switched(key) | Self::Unchanged(key) | Self::Fallback { applied: key, .. } => key,
        }
    }
}

/// Activates translation bundles for a language key.
pub trait LanguageSwitcher: Debug + Send + Sync {
    /// Makes the bundle for `key` the active one.
    ///
    /// # Errors
    /// Implementations return [`I18nError::UnknownLanguage`] when `key` cannot be served.
    fn change_language(&self, key: &LanguageKey) -> Result<LanguageChange, I18nError>;
}

/// Tracks which bundles exist and which one is active.
///
/// Unknown languages resolve to their primary subtag when that bundle exists
/// (`fr-CA` → `fr`), otherwise to the fallback language. In strict mode they are
/// rejected instead.
#[derive(Debug)]
pub struct LanguageService {
    available: FxHashSet<LanguageKey>,
    fallback: LanguageKey,
    strict: bool,
    current: RwLock<Option<LanguageKey>>,
}

impl LanguageService {
    /// Creates a service serving `available` with `fallback` as the default bundle.
    ///
    /// # Errors
    /// Returns [`I18nError::Config`] if `fallback` is not one of the available languages.
    pub fn new(
        available: impl IntoIterator<Item = LanguageKey>,
        fallback: LanguageKey,
    ) -> Result<Self, I18nError> {
        let available: FxHashSet<LanguageKey> = available.into_iter().collect();
        if !available.contains(&fallback) {
            return Err(I18nError::Config {
                message: format!("fallback language '{fallback}' has no bundle").into(),
                context: None,
            });
        }
        Ok(Self { available, fallback, strict: false, current: RwLock::new(None) })
    }

    /// Builds the service from the `i18n` configuration section.
    ///
    /// # Errors
    /// See [`LanguageService::new`].
    pub fn from_config(config: &I18nConfig) -> Result<Self, I18nError> {
        let service =
            Self::new(config.available_languages.iter().cloned(), config.fallback_language.clone())?;
        Ok(service.strict(config.strict))
    }

    /// Rejects unknown languages instead of falling back.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn current(&self) -> Option<LanguageKey> {
        self.current.read().clone()
    }

    #[must_use]
    pub const fn fallback(&self) -> &LanguageKey {
        &self.fallback
    }

    #[must_use]
    pub fn is_available(&self, key: &LanguageKey) -> bool {
        self.available.contains(key)
    }

    /// Available languages, sorted.
    #[must_use]
    pub fn available(&self) -> Vec<LanguageKey> {
        let mut keys: Vec<LanguageKey> = self.available.iter().cloned().collect();
        keys.sort();
        keys
    }

    fn resolve(&self, requested: &LanguageKey) -> Result<LanguageKey, I18nError> {
        if self.available.contains(requested) {
            return Ok(requested.clone());
        }
        if self.strict {
            return Err(I18nError::UnknownLanguage {
                message: requested.to_string().into(),
                context: Some("strict mode".into()),
            });
        }
        let primary = self.available.get(requested.primary());
        Ok(primary.unwrap_or(&self.fallback).clone())
    }
}

impl LanguageSwitcher for LanguageService {
    fn change_language(&self, key: &LanguageKey) -> Result<LanguageChange, I18nError> {
        let applied = self.resolve(key)?;

        let previous = self.current.write().replace(applied.clone());
        let change = if &applied != key {
            warn!(requested = %key, applied = %applied, "No bundle for language, falling back");
            LanguageChange::Fallback { requested: key.clone(), applied }
        } else if previous.as_ref() == Some(&applied) {
            LanguageChange::Unchanged(applied)
        } else {
            debug!(language = %applied, "Language bundle activated");
            LanguageChange::Switched(applied)
        };
        Ok(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &'static str) -> LanguageKey {
        LanguageKey::parse(raw).unwrap()
    }

    fn service() -> LanguageService {
        LanguageService::new([key("en"), key("fr"), key("pt-br")], key("en")).unwrap()
    }

    #[test]
    fn switches_to_available_bundle() {
        let service = service();
        assert_eq!(service.current(), None);

        let change = service.change_language(&key("fr")).unwrap();
        assert_eq!(change, LanguageChange::Switched(key("fr")));
        assert_eq!(service.current(), Some(key("fr")));
    }

    #[test]
    fn repeated_switch_is_unchanged() {
        let service = service();
        service.change_language(&key("pt-br")).unwrap();
        let change = service.change_language(&key("pt-br")).unwrap();
        assert_eq!(change, LanguageChange::Unchanged(key("pt-br")));
    }

    #[test]
    fn regional_variant_uses_primary_bundle() {
        let change = service().change_language(&key("fr-CA")).unwrap();
        assert_eq!(change, LanguageChange::Fallback { requested: key("fr-CA"), applied: key("fr") });
    }

    #[test]
    fn unknown_language_falls_back() {
        let service = service();
        let change = service.change_language(&key("ja")).unwrap();
        assert_eq!(change.applied(), &key("en"));
        assert_eq!(service.current(), Some(key("en")));
    }

    #[test]
    fn strict_mode_rejects_unknown_language() {
        let service = service().strict(true);
        service.change_language(&key("fr")).unwrap();

        let err = service.change_language(&key("ja")).unwrap_err();
        assert!(matches!(err, I18nError::UnknownLanguage { .. }));
        assert_eq!(service.current(), Some(key("fr")), "failed switch keeps the active bundle");
    }

    #[test]
    fn fallback_must_have_a_bundle() {
        let err = LanguageService::new([key("fr")], key("en")).unwrap_err();
        assert!(matches!(err, I18nError::Config { .. }));
    }

    #[test]
    fn available_is_sorted() {
        assert_eq!(service().available(), vec![key("en"), key("fr"), key("pt-br")]);
    }
}
