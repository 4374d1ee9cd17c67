use std::borrow::Cow;

/// Errors that can occur during event bus operations.
#[folio_derive::folio_error]
pub enum EventBusError {
    /// Occurs when an internal dynamic cast fails.
    /// This usually indicates an invariant violation in the type registry.
    #[error("Type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// No subject exists for the requested event type.
    #[error("Channel not found{}: {message}", format_context(.context))]
    ChannelNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
