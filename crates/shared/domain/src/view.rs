use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Identifier of a view contributed by a feature module.
///
/// Views are referenced by id only; rendering them is the view layer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ViewId(Cow<'static, str>);

impl ViewId {
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A view a module declares, and whether it may be instantiated dynamically
/// (dialogs and routed pages) or only inside other views.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ViewDeclaration {
    pub id: ViewId,
    pub entry: bool,
}

impl ViewDeclaration {
    /// A view that can be created on demand.
    #[must_use]
    pub const fn entry(id: ViewId) -> Self {
        Self { id, entry: true }
    }

    /// A view only used from inside other views.
    #[must_use]
    pub const fn embedded(id: ViewId) -> Self {
        Self { id, entry: false }
    }
}
