use folio_domain::authority::Authorities;
use folio_domain::config::AppConfig;
use folio_domain::language::LanguageKey;
use folio_domain::registry::{FeatureModule, ModuleState};
use folio_domain::route::{Outlet, RouteDescriptor};
use folio_domain::view::{ViewDeclaration, ViewId};
use folio_kernel::app::{AppError, Application};
use folio_kernel::i18n::{I18nError, LanguageChange, LanguageSwitcher, LocaleBinding, LocaleNotifier};
use folio_kernel::routing::RoutingError;
use parking_lot::Mutex;
use std::any::Any;
use std::sync::Arc;

#[derive(Debug, Default)]
struct RecordingSwitcher {
    calls: Mutex<Vec<LanguageKey>>,
}

impl RecordingSwitcher {
    fn calls(&self) -> Vec<LanguageKey> {
        self.calls.lock().clone()
    }
}

impl LanguageSwitcher for RecordingSwitcher {
    fn change_language(&self, key: &LanguageKey) -> Result<LanguageChange, I18nError> {
        self.calls.lock().push(key.clone());
        Ok(LanguageChange::Switched(key.clone()))
    }
}

const SHELF_LIST: ViewId = ViewId::new("shelf-list");
const SHELF_POPUP: ViewId = ViewId::new("shelf-delete-popup");

#[derive(Debug)]
struct ShelfModule {
    binding: LocaleBinding,
    routes: Vec<RouteDescriptor>,
}

impl ShelfModule {
    fn new(locale: &LocaleNotifier, switcher: Arc<dyn LanguageSwitcher>) -> Self {
        let routes = vec![
            RouteDescriptor::new("", SHELF_LIST).authorities(Authorities::USER),
            RouteDescriptor::new(":id/delete", SHELF_POPUP).outlet(Outlet::Popup),
        ];
        Self { binding: LocaleBinding::attach("shelf", locale, switcher), routes }
    }
}

impl FeatureModule for ShelfModule {
    fn name(&self) -> &'static str {
        "shelf"
    }

    fn base_path(&self) -> &'static str {
        "shelf"
    }

    fn views(&self) -> Vec<ViewDeclaration> {
        vec![ViewDeclaration::entry(SHELF_LIST), ViewDeclaration::entry(SHELF_POPUP)]
    }

    fn routes(&self) -> Vec<RouteDescriptor> {
        self.routes.clone()
    }

    fn state(&self) -> ModuleState {
        self.binding.state()
    }

    fn dispose(&mut self) -> bool {
        self.binding.dispose()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn app_with(switcher: &Arc<RecordingSwitcher>) -> Application {
    Application::builder()
        .config(AppConfig::default())
        .switcher(switcher.clone())
        .build()
        .unwrap()
}

#[test]
fn builder_requires_config() {
    let err = Application::builder().build().unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
}

#[test]
fn builder_rejects_unserved_fallback() {
    let mut config = AppConfig::default();
    config.i18n.available_languages = vec![LanguageKey::FRENCH];

    let err = Application::builder().config(config).build().unwrap_err();
    assert!(matches!(err, AppError::I18n { source: I18nError::Config { .. }, .. }));
}

#[test]
fn default_language_is_announced() {
    let switcher = Arc::new(RecordingSwitcher::default());
    let app = app_with(&switcher);

    let module = ShelfModule::new(app.locale(), app.switcher());
    assert_eq!(module.state(), ModuleState::Subscribed);
    assert_eq!(switcher.calls(), vec![LanguageKey::ENGLISH]);
}

#[test]
fn registration_merges_views_and_routes() {
    let switcher = Arc::new(RecordingSwitcher::default());
    let mut app = app_with(&switcher);

    let module = ShelfModule::new(app.locale(), app.switcher());
    let registered = app.register(module).unwrap();
    assert_eq!(registered.name(), "shelf");

    let paths: Vec<(&str, Outlet)> =
        app.routes().iter().map(|r| (r.full_path.as_str(), r.route.outlet)).collect();
    assert_eq!(paths, vec![("shelf", Outlet::Primary), ("shelf/:id/delete", Outlet::Popup)]);
    assert_eq!(app.views().len(), 2);
    assert_eq!(app.views().owner(&SHELF_POPUP), Some("shelf"));
    assert!(app.module::<ShelfModule>().is_some());
    assert_eq!(app.modules().count(), 1);
}

#[test]
fn second_instance_is_rejected_and_released() {
    let switcher = Arc::new(RecordingSwitcher::default());
    let mut app = app_with(&switcher);

    app.register(ShelfModule::new(app.locale(), app.switcher())).unwrap();
    let second = ShelfModule::new(app.locale(), app.switcher());
    assert_eq!(app.locale().subscriber_count(), 2);

    let err = app.register(second).unwrap_err();
    assert!(matches!(err, AppError::DuplicateModule { .. }));
    assert_eq!(app.routes().len(), 2);
    assert_eq!(app.locale().subscriber_count(), 1, "rejected module is dropped");
}

#[test]
fn registration_can_be_checked_up_front() {
    let switcher = Arc::new(RecordingSwitcher::default());
    let mut app = app_with(&switcher);
    assert!(!app.is_registered::<ShelfModule>());
    assert!(app.ensure_unregistered::<ShelfModule>().is_ok());

    app.register(ShelfModule::new(app.locale(), app.switcher())).unwrap();

    assert!(app.is_registered::<ShelfModule>());
    let err = app.ensure_unregistered::<ShelfModule>().unwrap_err();
    assert!(matches!(err, AppError::DuplicateModule { .. }));
    assert!(err.to_string().contains("ShelfModule"));
}

#[test]
fn routes_must_target_declared_views() {
    let switcher = Arc::new(RecordingSwitcher::default());
    let mut app = app_with(&switcher);

    let mut module = ShelfModule::new(app.locale(), app.switcher());
    module.routes.push(RouteDescriptor::new("archive", ViewId::new("shelf-archive")));

    let err = app.register(module).unwrap_err();
    assert!(matches!(err, AppError::Routing { source: RoutingError::UnknownView { .. }, .. }));
    assert!(app.routes().is_empty());
    assert!(app.views().is_empty());
}

#[test]
fn locale_changes_reach_registered_modules() {
    let switcher = Arc::new(RecordingSwitcher::default());
    let mut app = app_with(&switcher);
    app.register(ShelfModule::new(app.locale(), app.switcher())).unwrap();

    app.locale().set_language(LanguageKey::FRENCH);
    app.locale().clear();
    app.locale().set_language(LanguageKey::GERMAN);

    assert_eq!(
        switcher.calls(),
        vec![LanguageKey::ENGLISH, LanguageKey::FRENCH, LanguageKey::GERMAN]
    );
}

#[test]
fn shutdown_disposes_modules() {
    let switcher = Arc::new(RecordingSwitcher::default());
    let mut app = app_with(&switcher);
    app.register(ShelfModule::new(app.locale(), app.switcher())).unwrap();

    let locale = app.locale().clone();
    assert_eq!(app.shutdown(), 1);

    assert_eq!(locale.subscriber_count(), 0);
    locale.set_language(LanguageKey::FRENCH);
    assert_eq!(switcher.calls(), vec![LanguageKey::ENGLISH]);
}
