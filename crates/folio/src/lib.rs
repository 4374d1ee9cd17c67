//! Facade crate for Folio feature modules and shared services.
//! Re-exports domain/kernel primitives and registers every enabled feature module.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `folio` with the desired feature flags (`author`, `book`; both on by default).
//! - Build an [`Application`], then call [`init`] to register the enabled modules.

pub use folio_domain as domain;
pub use folio_event_bus as events;
pub use folio_kernel as kernel;
pub use folio_kernel::app::{AppError, Application};

use std::borrow::Cow;

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "author")]
    pub use folio_author as author;
    #[cfg(feature = "book")]
    pub use folio_book as book;

    /// Build-time enabled features (by Cargo feature), in registration order.
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "author")]
        "author",
        #[cfg(feature = "book")]
        "book",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[folio_derive::folio_error]
pub enum FolioError {
    #[cfg(feature = "author")]
    #[error("Author feature error{}: {source}", format_context(.context))]
    Author { source: folio_author::AuthorError, context: Option<Cow<'static, str>> },

    #[cfg(feature = "book")]
    #[error("Book feature error{}: {source}", format_context(.context))]
    Book { source: folio_book::BookError, context: Option<Cow<'static, str>> },

    #[error("Application error{}: {source}", format_context(.context))]
    App { source: AppError, context: Option<Cow<'static, str>> },
}

/// Registers every enabled feature module on `app`.
///
/// Returns the names of the registered modules.
///
/// # Errors
/// Returns an error if any feature module is rejected; modules registered before it
/// stay registered.
#[allow(clippy::missing_const_for_fn, unused_mut, unused_variables)]
pub fn init(app: &mut Application) -> Result<Vec<&'static str>, FolioError> {
    let mut registered: Vec<&'static str> = Vec::new();

    #[cfg(feature = "author")]
    {
        features::author::init(app)?;
        registered.push(features::author::MODULE_NAME);
    }

    #[cfg(feature = "book")]
    {
        features::book::init(app)?;
        registered.push(features::book::MODULE_NAME);
    }

    tracing::info!(modules = ?registered, "Feature modules registered");
    Ok(registered)
}
