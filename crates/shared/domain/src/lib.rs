//! # Domain Models
//!
//! Pure types shared across the workspace: language keys, view and route descriptors,
//! authorities, configuration and the [`registry::FeatureModule`] contract.
//! Keep it lean: no I/O or runtime state, just data and validation helpers.

pub mod authority;
pub mod config;
pub mod constants;
pub mod error;
pub mod language;
pub mod registry;
pub mod route;
pub mod view;

pub use error::{DomainError, DomainErrorExt};
