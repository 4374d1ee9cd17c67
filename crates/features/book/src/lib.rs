//! Book feature module.

mod error;

pub use error::{BookError, BookErrorExt};

use folio_kernel::app::Application;
use folio_kernel::domain::authority::Authorities;
use folio_kernel::domain::registry::{FeatureModule, ModuleState};
use folio_kernel::domain::route::{Outlet, RouteDescriptor};
use folio_kernel::domain::view::{ViewDeclaration, ViewId};
use folio_kernel::i18n::{LanguageSwitcher, LocaleBinding, LocaleNotifier};
use std::any::Any;
use std::sync::Arc;

pub const MODULE_NAME: &str = "book";
pub const BASE_PATH: &str = "book";
pub const PAGE_TITLE: &str = "folioApp.book.home.title";

pub const BOOK_LIST: ViewId = ViewId::new("book-list");
pub const BOOK_DETAIL: ViewId = ViewId::new("book-detail");
pub const BOOK_UPDATE: ViewId = ViewId::new("book-update");
pub const BOOK_DELETE_DIALOG: ViewId = ViewId::new("book-delete-dialog");
pub const BOOK_DELETE_POPUP: ViewId = ViewId::new("book-delete-popup");

#[derive(Debug)]
pub struct BookModule {
    locale: LocaleBinding,
}

impl BookModule {
    pub fn new(locale: &LocaleNotifier, switcher: Arc<dyn LanguageSwitcher>) -> Self {
        Self { locale: LocaleBinding::attach(MODULE_NAME, locale, switcher) }
    }
}

fn entity_state(path: &'static str, view: ViewId) -> RouteDescriptor {
    RouteDescriptor::new(path, view).authorities(Authorities::USER).page_title(PAGE_TITLE)
}

impl FeatureModule for BookModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn base_path(&self) -> &'static str {
        BASE_PATH
    }

    fn views(&self) -> Vec<ViewDeclaration> {
        vec![
            ViewDeclaration::entry(BOOK_LIST),
            ViewDeclaration::embedded(BOOK_DETAIL),
            ViewDeclaration::entry(BOOK_UPDATE),
            ViewDeclaration::entry(BOOK_DELETE_DIALOG),
            ViewDeclaration::entry(BOOK_DELETE_POPUP),
        ]
    }

    fn routes(&self) -> Vec<RouteDescriptor> {
        vec![
            entity_state("", BOOK_LIST).default_sort("id,asc"),
            entity_state(":id/view", BOOK_DETAIL).resolve(MODULE_NAME),
            entity_state("new", BOOK_UPDATE).resolve(MODULE_NAME),
            entity_state(":id/edit", BOOK_UPDATE).resolve(MODULE_NAME),
            entity_state(":id/delete", BOOK_DELETE_POPUP).resolve(MODULE_NAME).outlet(Outlet::Popup),
        ]
    }

    fn state(&self) -> ModuleState {
        self.locale.state()
    }

    fn dispose(&mut self) -> bool {
        self.locale.dispose()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Builds the Book module from the application's services and registers it.
///
/// # Errors
/// Returns [`BookError::Registration`] if the application rejects the module.
pub fn init(app: &mut Application) -> Result<&BookModule, BookError> {
    app.ensure_unregistered::<BookModule>().context("book module")?;
    let module = BookModule::new(app.locale(), app.switcher());
    let module = app.register(module).context("book module")?;
    tracing::info!("Book module initialized");
    Ok(module)
}
