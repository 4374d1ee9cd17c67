//! Feature module contract.
//! A feature module is constructed explicitly by the bootstrapper and handed to the
//! application, which merges its views and routes and keeps it alive.

use crate::route::RouteDescriptor;
use crate::view::ViewDeclaration;
use serde::Serialize;
use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Lifecycle of a module's locale subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleState {
    Unsubscribed,
    Subscribed,
}

/// A registration unit bundling views, routes and locale sync for one feature.
pub trait FeatureModule: Any + Debug + Send + Sync {
    /// Stable, human-readable module name (used in logs and diagnostics).
    fn name(&self) -> &'static str;

    /// Path prefix the module's routes are mounted under.
    fn base_path(&self) -> &'static str;

    fn views(&self) -> Vec<ViewDeclaration>;

    /// Every route the module contributes, primary and popup alike.
    fn routes(&self) -> Vec<RouteDescriptor>;

    fn state(&self) -> ModuleState;

    /// Releases the module's subscriptions. Returns `false` if nothing was active.
    fn dispose(&mut self) -> bool;

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A module accepted by the application, tagged with its concrete type.
#[derive(Debug)]
pub struct RegisteredModule {
    pub id: TypeId,
    pub name: &'static str,
    pub module: Box<dyn FeatureModule>,
}

impl RegisteredModule {
    /// Wraps a concrete module.
    pub fn new<T: FeatureModule>(module: T) -> Self {
        Self { id: TypeId::of::<T>(), name: module.name(), module: Box::new(module) }
    }

    /// Downcasts to the concrete module type.
    #[must_use]
    pub fn downcast_ref<T: FeatureModule>(&self) -> Option<&T> {
        self.module.as_any().downcast_ref::<T>()
    }
}
