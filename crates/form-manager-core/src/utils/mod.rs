//! Utility functions for form-manager.
//!
//! - [`text`]: HTML escaping and class token splitting.

pub mod text;

pub use text::{escape_html, split_tokens};
