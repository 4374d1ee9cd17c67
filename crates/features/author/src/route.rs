//! Author entity states.
//!
//! Paths are relative to the module's base path (`author`). The delete confirmation is
//! the only state shown in the popup outlet.

use crate::views::{AUTHOR_DELETE_POPUP, AUTHOR_DETAIL, AUTHOR_LIST, AUTHOR_UPDATE};
use folio_kernel::domain::authority::Authorities;
use folio_kernel::domain::route::{Outlet, RouteDescriptor};
use folio_kernel::domain::view::ViewId;

pub const PAGE_TITLE: &str = "folioApp.author.home.title";
/// Resolver that loads the author named by `:id` (or a blank one for `new`).
pub const RESOLVER: &str = "author";
pub const DEFAULT_SORT: &str = "id,asc";

fn state(path: &'static str, view: ViewId) -> RouteDescriptor {
    RouteDescriptor::new(path, view).authorities(Authorities::USER).page_title(PAGE_TITLE)
}

/// Primary-outlet states: list, detail, create and edit.
#[must_use]
pub fn author_route() -> Vec<RouteDescriptor> {
    vec![
        state("", AUTHOR_LIST).default_sort(DEFAULT_SORT),
        state(":id/view", AUTHOR_DETAIL).resolve(RESOLVER),
        state("new", AUTHOR_UPDATE).resolve(RESOLVER),
        state(":id/edit", AUTHOR_UPDATE).resolve(RESOLVER),
    ]
}

/// Popup-outlet states.
#[must_use]
pub fn author_popup_route() -> Vec<RouteDescriptor> {
    vec![state(":id/delete", AUTHOR_DELETE_POPUP).resolve(RESOLVER).outlet(Outlet::Popup)]
}

/// Both route lists, primary first.
#[must_use]
pub fn entity_states() -> Vec<RouteDescriptor> {
    let mut states = author_route();
    states.extend(author_popup_route());
    states
}
