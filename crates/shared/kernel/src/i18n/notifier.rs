use crate::i18n::I18nError;
use folio_domain::language::LanguageKey;
use folio_event_bus::{EventBus, Subject, Subscription, WatchReceiver};
use std::sync::Arc;
use tracing::debug;

/// Shared stream of the currently selected language.
///
/// `None` means no language has been selected yet. The notifier replays the current
/// value to every new subscriber and then delivers each change in order. It is owned by
/// the application root and passed explicitly to whoever needs it; clones share state.
#[derive(Debug, Clone)]
pub struct LocaleNotifier {
    subject: Subject<Option<LanguageKey>>,
}

impl LocaleNotifier {
    /// A standalone notifier holding `initial`.
    #[must_use]
    pub fn new(initial: Option<LanguageKey>) -> Self {
        Self { subject: Subject::new(initial) }
    }

    /// The bus-owned notifier, created with `initial` on first use.
    ///
    /// A notifier that already exists on `events` keeps its current value.
    ///
    /// # Errors
    /// Returns [`I18nError::Events`] if the bus holds a mismatched subject.
    pub fn shared(events: &EventBus, initial: Option<LanguageKey>) -> Result<Self, I18nError> {
        let subject = events.subject(move || initial)?;
        Ok(Self { subject })
    }

    /// Registers `callback`; it is called right away with the current language and then
    /// on every change until the returned [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Option<&LanguageKey>) + Send + Sync + 'static,
    {
        self.subject.subscribe(move |key: &Option<LanguageKey>| callback(key.as_ref()))
    }

    #[must_use]
    pub fn current(&self) -> Option<LanguageKey> {
        (*self.subject.current()).clone()
    }

    /// Selects `key` and notifies every subscriber. Returns how many were notified.
    pub fn set_language(&self, key: LanguageKey) -> usize {
        debug!(language = %key, "Locale selected");
        self.subject.emit(Some(key))
    }

    /// Returns the stream to the undefined state.
    pub fn clear(&self) -> usize {
        debug!("Locale cleared");
        self.subject.emit(None)
    }

    /// Emits a raw value, defined or not.
    pub fn emit(&self, key: Option<LanguageKey>) -> usize {
        self.subject.emit(key)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subject.subscriber_count()
    }

    /// Async receiver following the same stream.
    #[must_use]
    pub fn watch(&self) -> WatchReceiver<Arc<Option<LanguageKey>>> {
        self.subject.watch()
    }
}

impl Default for LocaleNotifier {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn replays_then_follows_changes() {
        let notifier = LocaleNotifier::new(Some(LanguageKey::ENGLISH));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let _sub = notifier.subscribe(move |key| sink.lock().unwrap().push(key.cloned()));
        notifier.set_language(LanguageKey::FRENCH);
        notifier.clear();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Some(LanguageKey::ENGLISH), Some(LanguageKey::FRENCH), None]
        );
        assert_eq!(notifier.current(), None);
    }

    #[test]
    fn shared_notifier_is_reused() {
        let events = EventBus::new();
        let first = LocaleNotifier::shared(&events, Some(LanguageKey::GERMAN)).unwrap();
        let second = LocaleNotifier::shared(&events, None).unwrap();

        assert_eq!(second.current(), Some(LanguageKey::GERMAN));
        first.set_language(LanguageKey::FRENCH);
        assert_eq!(second.current(), Some(LanguageKey::FRENCH));
    }
}
