use std::borrow::Cow;

/// Validation failures for domain values.
#[folio_derive::folio_error]
pub enum DomainError {
    /// The value is not a usable language key.
    #[error("Invalid language key{}: {message}", format_context(.context))]
    InvalidLanguageKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A route path does not follow the `segment/:param` grammar.
    #[error("Invalid route path{}: {message}", format_context(.context))]
    InvalidRoutePath { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
