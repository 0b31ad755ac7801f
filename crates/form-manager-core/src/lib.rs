//! # form-manager-core
//!
//! Core types, settings, and error types for the form-manager workspace.
//! This crate has no dependency on the rendering model and provides the
//! foundation the forms crate builds on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`utils`] - Text helpers (HTML escaping, class token splitting)
//! - [`settings`] - Library settings and global configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{FormError, FormResult, ValidationError};
pub use settings::{Settings, SETTINGS};
