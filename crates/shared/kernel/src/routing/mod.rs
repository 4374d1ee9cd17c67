//! Global route tree and view registry.
//!
//! Feature modules contribute relative routes under a base path and a set of view
//! declarations. Both registries validate a whole batch before committing it, so a
//! rejected module leaves them untouched.

mod routes;
mod views;

pub use routes::{MountedRoute, RouteMatch, RouteTree};
pub use views::{ViewEntry, ViewRegistry};

use folio_domain::DomainError;
use std::borrow::Cow;

#[folio_derive::folio_error]
pub enum RoutingError {
    /// Another route already occupies the same full path and outlet.
    #[error("Duplicate route{}: {message}", format_context(.context))]
    DuplicateRoute { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Duplicate view{}: {message}", format_context(.context))]
    DuplicateView { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A route targets a view nobody declared.
    #[error("Unknown view{}: {message}", format_context(.context))]
    UnknownView { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid route{}: {source}", format_context(.context))]
    InvalidRoute { source: DomainError, context: Option<Cow<'static, str>> },
}
