//! Kernel services shared by every feature module.
//!
//! - [`i18n`]: the locale stream, the language service and the per-module locale binding.
//! - [`routing`]: the global route tree and view registry.
//! - [`app`]: the composition root that owns both and registers feature modules.
//! - [`config`]: layered configuration loading.
//!
//! ```rust
//! use folio_kernel::app::Application;
//! use folio_kernel::domain::config::AppConfig;
//! use folio_kernel::domain::language::LanguageKey;
//!
//! # fn main() -> Result<(), folio_kernel::app::AppError> {
//! let app = Application::builder().config(AppConfig::default()).build()?;
//! assert_eq!(app.locale().current(), Some(LanguageKey::ENGLISH));
//! assert!(app.routes().is_empty());
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod i18n;
pub mod routing;

pub use folio_domain as domain;
pub use folio_event_bus as events;
