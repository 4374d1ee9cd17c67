//! Author feature module.
//!
//! Contributes the Author views and entity states to the application and keeps the
//! module's language resources in step with the shared locale stream.
//!
//! ```rust
//! use folio_kernel::app::Application;
//! use folio_kernel::domain::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut app = Application::builder().config(AppConfig::default()).build()?;
//! folio_author::init(&mut app)?;
//!
//! assert!(app.routes().get("author/:id/edit", Default::default()).is_some());
//! # Ok(())
//! # }
//! ```

mod error;
pub mod route;
pub mod views;

pub use error::{AuthorError, AuthorErrorExt};

use folio_kernel::app::Application;
use folio_kernel::domain::registry::{FeatureModule, ModuleState};
use folio_kernel::domain::route::RouteDescriptor;
use folio_kernel::domain::view::ViewDeclaration;
use folio_kernel::i18n::{LanguageSwitcher, LocaleBinding, LocaleNotifier};
use std::any::Any;
use std::sync::Arc;

pub const MODULE_NAME: &str = "author";
pub const BASE_PATH: &str = "author";

/// Author feature state.
#[derive(Debug)]
pub struct AuthorModule {
    locale: LocaleBinding,
}

impl AuthorModule {
    /// Builds the module and subscribes it to `locale`.
    ///
    /// The current language, if defined, is applied through `switcher` before this
    /// returns; every later defined language is applied once per emission.
    pub fn new(locale: &LocaleNotifier, switcher: Arc<dyn LanguageSwitcher>) -> Self {
        Self { locale: LocaleBinding::attach(MODULE_NAME, locale, switcher) }
    }
}

impl FeatureModule for AuthorModule {
    fn name(&self) -> &'static str {
        MODULE_NAME
    }

    fn base_path(&self) -> &'static str {
        BASE_PATH
    }

    fn views(&self) -> Vec<ViewDeclaration> {
        views::declarations()
    }

    fn routes(&self) -> Vec<RouteDescriptor> {
        route::entity_states()
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

/// Builds the Author module from the application's services and registers it.
///
/// # Errors
/// Returns [`AuthorError::Registration`] if the application rejects the module, for
/// instance because it is already registered.
pub fn init(app: &mut Application) -> Result<&AuthorModule, AuthorError> {
    app.ensure_unregistered::<AuthorModule>().context("author module")?;
    let module = AuthorModule::new(app.locale(), app.switcher());
    let module = app.register(module).context("author module")?;
    tracing::info!("Author module initialized");
    Ok(module)
}
