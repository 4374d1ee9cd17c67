//! Composition root.
//!
//! [`Application`] owns the shared services (event bus, locale stream, language switcher)
//! and the registries feature modules merge into. Modules are built by the bootstrapper
//! with explicit handles to those services and then handed over with
//! [`Application::register`].

use crate::i18n::{I18nError, LanguageService, LanguageSwitcher, LocaleNotifier};
use crate::routing::{RouteTree, RoutingError, ViewRegistry};
use folio_domain::config::AppConfig;
use folio_domain::registry::{FeatureModule, RegisteredModule};
use folio_event_bus::EventBus;
use std::any::TypeId;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, info};

#[folio_derive::folio_error]
pub enum AppError {
    #[error("Application validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A module of the same type is already registered.
    #[error("Duplicate module{}: {message}", format_context(.context))]
    DuplicateModule { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Routing error{}: {source}", format_context(.context))]
    Routing { source: RoutingError, context: Option<Cow<'static, str>> },

    #[error("I18n error{}: {source}", format_context(.context))]
    I18n { source: I18nError, context: Option<Cow<'static, str>> },

    #[error("Internal application error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct Application {
    config: AppConfig,
    events: EventBus,
    locale: LocaleNotifier,
    switcher: Arc<dyn LanguageSwitcher>,
    routes: RouteTree,
    views: ViewRegistry,
    modules: Vec<RegisteredModule>,
}

impl Application {
    #[must_use]
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::default()
    }

    /// Takes ownership of `module` and merges its views and routes.
    ///
    /// Registration is all-or-nothing: on error neither registry changes and `module` is
    /// dropped, which releases its locale subscription.
    ///
    /// # Errors
    /// - [`AppError::DuplicateModule`] if a module of type `T` is already registered.
    /// - [`AppError::Routing`] for duplicate views or routes, malformed paths, or routes
    ///   targeting a view that nobody declared.
    pub fn register<T: FeatureModule>(&mut self, module: T) -> Result<&T, AppError> {
        let name = module.name();
        self.ensure_unregistered::<T>().context(name)?;

        let views = module.views();
        let routes = module.routes();
        let base = module.base_path();

        self.views.check(name, &views).context(name)?;
        if let Some(orphan) = routes.iter().find(|route| {
            !self.views.contains(&route.view) && !views.iter().any(|view| view.id == route.view)
        }) {
            return Err(AppError::Routing {
                source: RoutingError::UnknownView {
                    message: format!("route '{}' targets '{}'", orphan.path, orphan.view).into(),
                    context: None,
                },
                context: Some(name.into()),
            });
        }
        self.routes.check(name, base, &routes).context(name)?;

        let view_count = self.views.declare(name, views).context(name)?;
        let route_count = self.routes.merge(name, base, routes).context(name)?;
        info!(module = name, base, views = view_count, routes = route_count, "Feature module registered");

        self.modules.push(RegisteredModule::new(module));
        self.module::<T>().ok_or_else(|| AppError::Internal {
            message: "registered module could not be downcast".into(),
            context: Some(name.into()),
        })
    }

    #[must_use]
    pub fn is_registered<T: FeatureModule>(&self) -> bool {
        self.modules.iter().any(|registered| registered.id == TypeId::of::<T>())
    }

    /// Fails if a module of type `T` is already registered.
    ///
    /// Module initializers call this before constructing the module, so a rejected
    /// duplicate never subscribes to the locale stream.
    ///
    /// # Errors
    /// Returns [`AppError::DuplicateModule`] naming `T`.
    pub fn ensure_unregistered<T: FeatureModule>(&self) -> Result<(), AppError> {
        if self.is_registered::<T>() {
            return Err(AppError::DuplicateModule {
                message: std::any::type_name::<T>().into(),
                context: None,
            });
        }
        Ok(())
    }

    /// The registered module of type `T`, if any.
    #[must_use]
    pub fn module<T: FeatureModule>(&self) -> Option<&T> {
        self.modules
            .iter()
            .find(|registered| registered.id == TypeId::of::<T>())
            .and_then(RegisteredModule::downcast_ref::<T>)
    }

    /// Registered modules, in registration order.
    pub fn modules(&self) -> impl Iterator<Item = &dyn FeatureModule> {
        self.modules.iter().map(|registered| registered.module.as_ref())
    }

    #[must_use]
    pub const fn locale(&self) -> &LocaleNotifier {
        &self.locale
    }

    /// A handle to the language switcher for module constructors.
    #[must_use]
    pub fn switcher(&self) -> Arc<dyn LanguageSwitcher> {
        Arc::clone(&self.switcher)
    }

    #[must_use]
    pub const fn routes(&self) -> &RouteTree {
        &self.routes
    }

    #[must_use]
    pub const fn views(&self) -> &ViewRegistry {
        &self.views
    }

    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Disposes every module and closes the event bus.
    ///
    /// Returns the number of modules whose subscription was released.
    pub fn shutdown(mut self) -> usize {
        let disposed = self
            .modules
            .iter_mut()
            .map(|registered| registered.module.dispose())
            .filter(|&released| released)
            .count();
        let detached = self.events.shutdown();
        info!(modules = self.modules.len(), disposed, detached, "Application shut down");
        disposed
    }
}

#[derive(Debug, Default)]
pub struct ApplicationBuilder {
    config: Option<AppConfig>,
    events: Option<EventBus>,
    switcher: Option<Arc<dyn LanguageSwitcher>>,
}

impl ApplicationBuilder {
    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn events(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    /// Replaces the default [`LanguageService`].
    #[must_use]
    pub fn switcher(mut self, switcher: Arc<dyn LanguageSwitcher>) -> Self {
        self.switcher = Some(switcher);
        self
    }

    /// # Errors
    /// - [`AppError::Validation`] if no config was provided.
    /// - [`AppError::I18n`] if the default language service cannot be built from the
    ///   config or the locale stream cannot be created on the event bus.
    pub fn build(self) -> Result<Application, AppError> {
        let config = self.config.ok_or_else(|| AppError::Validation {
            message: "AppConfig not provided".into(),
            context: None,
        })?;
        let events = self.events.unwrap_or_default();

        let switcher = match self.switcher {
            Some(switcher) => switcher,
            None => Arc::new(LanguageService::from_config(&config.i18n).context("language service")?),
        };
        let locale = LocaleNotifier::shared(&events, config.i18n.default_language.clone())
            .context("locale stream")?;
        debug!(name = %config.name, language = ?locale.current(), "Application built");

        Ok(Application {
            config,
            events,
            locale,
            switcher,
            routes: RouteTree::new(),
            views: ViewRegistry::new(),
            modules: Vec::new(),
        })
    }
}
