use crate::i18n::{LanguageSwitcher, LocaleNotifier};
use folio_domain::registry::ModuleState;
use folio_event_bus::Subscription;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A module's live link between the locale stream and a language switcher.
///
/// Every defined language on the stream is forwarded to the switcher exactly once; the
/// undefined state is skipped. Switch failures are logged and the link stays up.
/// Dropping the binding (or calling [`LocaleBinding::dispose`]) unsubscribes.
#[derive(Debug)]
pub struct LocaleBinding {
    module: &'static str,
    subscription: Option<Subscription>,
}

impl LocaleBinding {
    /// Subscribes `switcher` to `notifier` on behalf of `module`.
    ///
    /// The current language, if any, is applied before this returns.
    pub fn attach(
        module: &'static str,
        notifier: &LocaleNotifier,
        switcher: Arc<dyn LanguageSwitcher>,
    ) -> Self {
        let subscription = notifier.subscribe(move |key| {
            let Some(key) = key else {
                trace!(module, "Locale undefined, keeping current bundle");
                return;
            };
            match switcher.change_language(key) {
                Ok(change) => debug!(module, language = %key, ?change, "Language resources refreshed"),
                Err(err) => warn!(module, language = %key, error = %err, "Language switch failed"),
            }
        });
        debug!(module, "Locale binding attached");

        Self { module, subscription: Some(subscription) }
    }

    #[must_use]
    pub fn state(&self) -> ModuleState {
        if self.subscription.as_ref().is_some_and(Subscription::is_active) {
            ModuleState::Subscribed
        } else {
            ModuleState::Unsubscribed
        }
    }

    /// Unsubscribes. Returns `false` if the binding was already released.
    pub fn dispose(&mut self) -> bool {
        let released = self.subscription.take().is_some_and(Subscription::unsubscribe);
        if released {
            debug!(module = self.module, "Locale binding released");
        }
        released
    }
}
