use folio::domain::config::AppConfig;
use folio::domain::language::LanguageKey;
use folio::domain::registry::{FeatureModule, ModuleState};
use folio::features::{self, author::AuthorModule, book::BookModule};
use folio::kernel::i18n::{I18nError, LanguageChange, LanguageSwitcher};
use folio::{Application, FolioError};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct RecordingSwitcher {
    calls: Mutex<Vec<LanguageKey>>,
}

impl LanguageSwitcher for RecordingSwitcher {
    fn change_language(&self, key: &LanguageKey) -> Result<LanguageChange, I18nError> {
        self.calls.lock().push(key.clone());
        Ok(LanguageChange::Switched(key.clone()))
    }
}

fn app(switcher: &Arc<RecordingSwitcher>) -> Application {
    let mut config = AppConfig::default();
    config.i18n.default_language = None;
    Application::builder().config(config).switcher(switcher.clone()).build().unwrap()
}

#[test]
fn enabled_features_are_listed() {
    assert_eq!(features::ENABLED, &["author", "book"]);
    assert!(features::is_enabled("book"));
    assert!(!features::is_enabled("publisher"));
}

#[test]
fn init_registers_every_module() {
    let switcher = Arc::new(RecordingSwitcher::default());
    let mut app = app(&switcher);

    assert_eq!(folio::init(&mut app).unwrap(), vec!["author", "book"]);
    assert_eq!(app.modules().count(), 2);
    assert_eq!(app.routes().len(), 10);
    assert_eq!(app.views().len(), 10);
    assert!(app.modules().all(|module| module.state() == ModuleState::Subscribed));
}

#[test]
fn one_emission_switches_each_module_once() {
    let switcher = Arc::new(RecordingSwitcher::default());
    let mut app = app(&switcher);
    folio::init(&mut app).unwrap();
    assert!(switcher.calls.lock().is_empty(), "undefined locale is not forwarded");

    let notified = app.locale().set_language(LanguageKey::GERMAN);

    assert_eq!(notified, 2);
    assert_eq!(*switcher.calls.lock(), vec![LanguageKey::GERMAN, LanguageKey::GERMAN]);
}

#[test]
fn init_twice_is_rejected() {
    let switcher = Arc::new(RecordingSwitcher::default());
    let mut app = app(&switcher);
    folio::init(&mut app).unwrap();

    let err = folio::init(&mut app).unwrap_err();
    assert!(matches!(err, FolioError::Author { .. }));
    assert_eq!(app.routes().len(), 10);
}

#[test]
fn shutdown_releases_every_module() {
    let switcher = Arc::new(RecordingSwitcher::default());
    let mut app = app(&switcher);
    folio::init(&mut app).unwrap();
    assert!(app.module::<AuthorModule>().is_some());
    assert!(app.module::<BookModule>().is_some());

    let locale = app.locale().clone();
    assert_eq!(app.shutdown(), 2);
    assert_eq!(locale.set_language(LanguageKey::FRENCH), 0);
    assert!(switcher.calls.lock().is_empty());
}
