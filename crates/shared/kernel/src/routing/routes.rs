use crate::routing::{RoutingError, RoutingErrorExt};
use folio_domain::route::{Outlet, RouteDescriptor, segments, validate_path};
use fxhash::FxHashMap;
use serde::Serialize;
use std::cmp::Reverse;
use tracing::trace;

/// A route as it lives in the application tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountedRoute {
    pub module: &'static str,
    /// Base path and relative pattern joined with `/`.
    pub full_path: String,
    #[serde(flatten)]
    pub route: RouteDescriptor,
}

/// Result of matching a concrete path against the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a MountedRoute,
    /// Captured `(name, value)` pairs, in pattern order.
    pub params: Vec<(&'a str, String)>,
}

/// The merged route table, in registration order.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct RouteTree {
    routes: Vec<MountedRoute>,
    #[serde(skip)]
    index: FxHashMap<(String, Outlet), usize>,
}

fn join(base: &str, path: &str) -> String {
    match (base.is_empty(), path.is_empty()) {
        (true, _) => path.to_owned(),
        (_, true) => base.to_owned(),
        _ => format!("{base}/{path}"),
    }
}

impl RouteTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `routes` mounted under `base` without touching the tree.
    ///
    /// # Errors
    /// - [`RoutingError::InvalidRoute`] for a malformed base or route pattern.
    /// - [`RoutingError::DuplicateRoute`] if a `(full path, outlet)` pair is taken or
    ///   repeats inside the batch.
    pub fn check(
        &self,
        module: &'static str,
        base: &str,
        routes: &[RouteDescriptor],
    ) -> Result<(), RoutingError> {
        validate_path(base).context(module)?;

        let mut batch = Vec::with_capacity(routes.len());
        for route in routes {
            route.validate().context(module)?;

            let key = (join(base, &route.path), route.outlet);
            if let Some(existing) = self.index.get(&key).map(|&i| &self.routes[i]) {
                return Err(RoutingError::DuplicateRoute {
                    message: format!(
                        "'{}' ({}) is already mounted by {}",
                        key.0, key.1, existing.module
                    )
                    .into(),
                    context: Some(module.into()),
                });
            }
            if batch.contains(&key) {
                return Err(RoutingError::DuplicateRoute {
                    message: format!("'{}' ({}) is declared twice", key.0, key.1).into(),
                    context: Some(module.into()),
                });
            }
            batch.push(key);
        }
        Ok(())
    }

    /// Mounts all of `routes` under `base` or none of them. Returns how many were added.
    ///
    /// # Errors
    /// See [`RouteTree::check`].
    pub fn merge(
        &mut self,
        module: &'static str,
        base: &str,
        routes: Vec<RouteDescriptor>,
    ) -> Result<usize, RoutingError> {
        self.check(module, base, &routes)?;

        let count = routes.len();
        for route in routes {
            let full_path = join(base, &route.path);
            trace!(module, path = %full_path, outlet = %route.outlet, view = %route.view, "Route mounted");
            self.index.insert((full_path.clone(), route.outlet), self.routes.len());
            self.routes.push(MountedRoute { module, full_path, route });
        }
        Ok(count)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MountedRoute> {
        self.routes.iter()
    }

    /// Routes contributed by `module`.
    pub fn by_module<'a>(&'a self, module: &'a str) -> impl Iterator<Item = &'a MountedRoute> {
        self.routes.iter().filter(move |route| route.module == module)
    }

    /// Looks up a route by its exact pattern.
    #[must_use]
    pub fn get(&self, full_path: &str, outlet: Outlet) -> Option<&MountedRoute> {
        self.index.get(&(full_path.to_owned(), outlet)).map(|&i| &self.routes[i])
    }

    /// Matches a concrete path such as `author/42/edit`.
    ///
    /// Parameters match any single segment. When several patterns match, the one with
    /// more literal segments wins (`author/new` beats `author/:id`). Ties go to the route
    /// registered first.
    #[must_use]
    pub fn resolve(&self, path: &str, outlet: Outlet) -> Option<RouteMatch<'_>> {
        let path = path.trim_matches('/');
        let wanted: Vec<&str> = segments(path).collect();

        self.routes
            .iter()
            .filter(|mounted| mounted.route.outlet == outlet)
            .filter_map(|mounted| {
                let pattern: Vec<&str> = segments(&mounted.full_path).collect();
                if pattern.len() != wanted.len() {
                    return None;
                }
                let mut params = Vec::new();
                let mut literals = 0_usize;
                for (expected, actual) in pattern.iter().zip(&wanted) {
                    if let Some(name) = expected.strip_prefix(':') {
                        params.push((name, (*actual).to_owned()));
                    } else if expected == actual {
                        literals += 1;
                    } else {
                        return None;
                    }
                }
                Some((literals, RouteMatch { route: mounted, params }))
            })
            .min_by_key(|(literals, _)| Reverse(*literals))
            .map(|(_, found)| found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::view::ViewId;

    const LIST: ViewId = ViewId::new("thing-list");
    const EDIT: ViewId = ViewId::new("thing-update");

    fn thing_routes() -> Vec<RouteDescriptor> {
        vec![
            RouteDescriptor::new("", LIST),
            RouteDescriptor::new("new", EDIT),
            RouteDescriptor::new(":id/edit", EDIT),
            RouteDescriptor::new(":id", EDIT),
        ]
    }

    #[test]
    fn merge_prefixes_base_path() {
        let mut tree = RouteTree::new();
        assert_eq!(tree.merge("thing", "thing", thing_routes()).unwrap(), 4);

        let paths: Vec<&str> = tree.iter().map(|r| r.full_path.as_str()).collect();
        assert_eq!(paths, vec!["thing", "thing/new", "thing/:id/edit", "thing/:id"]);
        assert!(tree.get("thing/:id/edit", Outlet::Primary).is_some());
        assert!(tree.get("thing/:id/edit", Outlet::Popup).is_none());
    }

    #[test]
    fn same_path_on_another_outlet_is_allowed() {
        let mut tree = RouteTree::new();
        tree.merge("thing", "thing", vec![RouteDescriptor::new(":id/delete", LIST)]).unwrap();
        let popup = RouteDescriptor::new(":id/delete", LIST).outlet(Outlet::Popup);
        assert!(tree.merge("thing", "thing", vec![popup]).is_ok());
    }

    #[test]
    fn failed_merge_leaves_tree_untouched() {
        let mut tree = RouteTree::new();
        tree.merge("thing", "thing", vec![RouteDescriptor::new("new", EDIT)]).unwrap();

        let err = tree
            .merge("other", "thing", vec![RouteDescriptor::new("", LIST), RouteDescriptor::new("new", EDIT)])
            .unwrap_err();

        assert!(matches!(err, RoutingError::DuplicateRoute { .. }));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.by_module("other").count(), 0);
    }

    #[test]
    fn malformed_patterns_are_rejected() {
        let mut tree = RouteTree::new();
        let err = tree.merge("thing", "thing", vec![RouteDescriptor::new("/new", EDIT)]).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidRoute { .. }));

        let err = tree.merge("thing", "/thing", Vec::new()).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidRoute { .. }));
        assert!(tree.is_empty());
    }

    #[test]
    fn resolve_prefers_literal_segments() {
        let mut tree = RouteTree::new();
        tree.merge("thing", "thing", thing_routes()).unwrap();

        let found = tree.resolve("thing/new", Outlet::Primary).unwrap();
        assert_eq!(found.route.full_path, "thing/new");
        assert!(found.params.is_empty());

        let found = tree.resolve("/thing/42/edit", Outlet::Primary).unwrap();
        assert_eq!(found.route.full_path, "thing/:id/edit");
        assert_eq!(found.params, vec![("id", "42".to_owned())]);

        assert_eq!(tree.resolve("thing", Outlet::Primary).unwrap().route.route.view, LIST);
        assert!(tree.resolve("thing/42/view", Outlet::Primary).is_none());
        assert!(tree.resolve("thing/new", Outlet::Popup).is_none());
    }

    #[test]
    fn resolve_ties_go_to_first_registered() {
        let mut tree = RouteTree::new();
        tree.merge("thing", "thing", vec![RouteDescriptor::new(":a/x", LIST)]).unwrap();
        tree.merge("other", "thing", vec![RouteDescriptor::new("x/:b", EDIT)]).unwrap();

        let found = tree.resolve("thing/x/x", Outlet::Primary).unwrap();
        assert_eq!(found.route.full_path, "thing/:a/x");
        assert_eq!(found.params, vec![("a", "x".to_owned())]);
    }
}
