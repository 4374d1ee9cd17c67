use crate::routing::RoutingError;
use folio_domain::view::{ViewDeclaration, ViewId};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::trace;

/// Where a view came from and whether it can be instantiated on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewEntry {
    pub module: &'static str,
    pub entry: bool,
}

/// Every view declared by a registered module, keyed by id.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct ViewRegistry {
    views: BTreeMap<ViewId, ViewEntry>,
}

impl ViewRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that `declarations` can be added as a batch.
    ///
    /// # Errors
    /// Returns [`RoutingError::DuplicateView`] if an id is already declared or repeats
    /// inside the batch.
    pub fn check(&self, module: &'static str, declarations: &[ViewDeclaration]) -> Result<(), RoutingError> {
        for (i, declaration) in declarations.iter().enumerate() {
            let repeated = declarations[..i].iter().any(|earlier| earlier.id == declaration.id);
            if let Some(owner) = self.owner(&declaration.id).or(repeated.then_some(module)) {
                return Err(RoutingError::DuplicateView {
                    message: format!("'{}' is already declared by {owner}", declaration.id).into(),
                    context: Some(module.into()),
                });
            }
        }
        Ok(())
    }

    /// Adds all of `declarations` or none of them.
    ///
    /// # Errors
    /// See [`ViewRegistry::check`].
    pub fn declare(
        &mut self,
        module: &'static str,
        declarations: Vec<ViewDeclaration>,
    ) -> Result<usize, RoutingError> {
        self.check(module, &declarations)?;
        let count = declarations.len();
        for ViewDeclaration { id, entry } in declarations {
            trace!(module, view = %id, entry, "View declared");
            self.views.insert(id, ViewEntry { module, entry });
        }
        Ok(count)
    }

    #[must_use]
    pub fn contains(&self, id: &ViewId) -> bool {
        self.views.contains_key(id)
    }

    /// `true` if the view exists and may be instantiated dynamically.
    #[must_use]
    pub fn is_entry(&self, id: &ViewId) -> bool {
        self.views.get(id).is_some_and(|view| view.entry)
    }

    #[must_use]
    pub fn owner(&self, id: &ViewId) -> Option<&'static str> {
        self.views.get(id).map(|view| view.module)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Views in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ViewId, &ViewEntry)> {
        self.views.iter()
    }
}
