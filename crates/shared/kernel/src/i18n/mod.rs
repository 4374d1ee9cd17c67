//! Locale stream and language resources.
//!
//! [`LocaleNotifier`] is the single shared stream of the selected language. Feature
//! modules bind it to a [`LanguageSwitcher`] through [`LocaleBinding`], which skips the
//! undefined state and keeps the subscription scoped to the module.

mod binding;
mod notifier;
mod service;

pub use binding::LocaleBinding;
pub use notifier::LocaleNotifier;
pub use service::{LanguageChange, LanguageService, LanguageSwitcher};

use std::borrow::Cow;

#[folio_derive::folio_error]
pub enum I18nError {
    /// No bundle exists for the requested language and no fallback applies.
    #[error("Unknown language{}: {message}", format_context(.context))]
    UnknownLanguage { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The language settings are inconsistent.
    #[error("I18n config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The locale stream could not be obtained from the event bus.
    #[error("Locale stream error{}: {source}", format_context(.context))]
    Events { source: folio_event_bus::EventBusError, context: Option<Cow<'static, str>> },
}
