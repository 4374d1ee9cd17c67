//! Route descriptors.
//!
//! A [`RouteDescriptor`] binds a path pattern relative to its feature's base path to a
//! view. Patterns are `/`-separated segments; a segment starting with `:` captures a
//! parameter (`:id/edit`). The empty pattern addresses the feature root.

use crate::authority::Authorities;
use crate::constants::{POPUP_OUTLET, PRIMARY_OUTLET};
use crate::error::DomainError;
use crate::view::ViewId;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Where a routed view is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outlet {
    #[default]
    Primary,
    /// Secondary outlet for dialogs layered over the current page.
    Popup,
}

impl Outlet {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => PRIMARY_OUTLET,
            Self::Popup => POPUP_OUTLET,
        }
    }
}

impl fmt::Display for Outlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One navigable state of a feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub path: Cow<'static, str>,
    pub view: ViewId,
    pub outlet: Outlet,
    pub authorities: Authorities,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<Cow<'static, str>>,
}

impl RouteDescriptor {
    /// A primary-outlet route with no guards.
    #[must_use]
    pub fn new(path: impl Into<Cow<'static, str>>, view: ViewId) -> Self {
        Self {
            path: path.into(),
            view,
            outlet: Outlet::Primary,
            authorities: Authorities::empty(),
            page_title: None,
            resolve: None,
            default_sort: None,
        }
    }

    #[must_use]
    pub const fn outlet(mut self, outlet: Outlet) -> Self {
        self.outlet = outlet;
        self
    }

    #[must_use]
    pub const fn authorities(mut self, authorities: Authorities) -> Self {
        self.authorities = authorities;
        self
    }

    /// Translation key for the document title while the route is active.
    #[must_use]
    pub fn page_title(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.page_title = Some(key.into());
        self
    }

    /// Name of the resolver that loads the entity before the view is shown.
    #[must_use]
    pub fn resolve(mut self, resolver: impl Into<Cow<'static, str>>) -> Self {
        self.resolve = Some(resolver.into());
        self
    }

    /// Default list ordering, e.g. `id,asc`.
    #[must_use]
    pub fn default_sort(mut self, sort: impl Into<Cow<'static, str>>) -> Self {
        self.default_sort = Some(sort.into());
        self
    }

    /// Checks the path pattern.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidRoutePath`] for leading or trailing `/`, empty
    /// segments, empty parameter names, or characters outside `[A-Za-z0-9_.-]`.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_path(&self.path)
    }

    /// Parameter names captured by the pattern, in order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        segments(&self.path).filter_map(|segment| segment.strip_prefix(':'))
    }
}

/// Splits a pattern or concrete path into segments; the empty path has none.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(move |_| !path.is_empty())
}

/// Validates a relative route path.
///
/// # Errors
/// See [`RouteDescriptor::validate`].
pub fn validate_path(path: &str) -> Result<(), DomainError> {
    let invalid = |message: &'static str| DomainError::InvalidRoutePath {
        message: message.into(),
        context: Some(format!("{path:?}").into()),
    };

    if path.starts_with('/') || path.ends_with('/') {
        return Err(invalid("route paths are relative and must not start or end with '/'"));
    }

    for segment in segments(path) {
        let name = segment.strip_prefix(':').unwrap_or(segment);
        if name.is_empty() {
            return Err(invalid("route path has an empty segment or parameter name"));
        }
        if !name.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-')) {
            return Err(invalid("route segment contains unsupported characters"));
        }
    }
    Ok(())
}
