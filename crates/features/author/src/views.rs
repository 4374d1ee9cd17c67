//! Views contributed by the Author module.

use folio_kernel::domain::view::{ViewDeclaration, ViewId};

pub const AUTHOR_LIST: ViewId = ViewId::new("author-list");
pub const AUTHOR_DETAIL: ViewId = ViewId::new("author-detail");
pub const AUTHOR_UPDATE: ViewId = ViewId::new("author-update");
/// Confirmation dialog rendered inside the delete popup.
pub const AUTHOR_DELETE_DIALOG: ViewId = ViewId::new("author-delete-dialog");
pub const AUTHOR_DELETE_POPUP: ViewId = ViewId::new("author-delete-popup");

/// All Author views. The detail view is only ever routed to, never created on demand.
#[must_use]
pub fn declarations() -> Vec<ViewDeclaration> {
    vec![
        ViewDeclaration::entry(AUTHOR_LIST),
        ViewDeclaration::embedded(AUTHOR_DETAIL),
        ViewDeclaration::entry(AUTHOR_UPDATE),
        ViewDeclaration::entry(AUTHOR_DELETE_DIALOG),
        ViewDeclaration::entry(AUTHOR_DELETE_POPUP),
    ]
}
