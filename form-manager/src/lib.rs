//! # form-manager
//!
//! HTML form elements that render themselves.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `form-manager` to get everything, or on the individual
//! crates for finer-grained control.
//!
//! ```
//! use form_manager::prelude::*;
//!
//! let mut email = Input::with(InputType::Email, Some("Email"), [("id", "id_email")]);
//! email.element_mut().required().add_class("form-control");
//! email.load(Some("not-an-email"));
//!
//! assert!(!email.is_valid());
//! assert_eq!(email.error(), Some("Enter a valid email address."));
//! assert_eq!(
//!     email.render(),
//!     r#"<input type="email" id="id_email" required class="form-control" value="not-an-email">"#
//! );
//! ```

/// Errors, settings, logging, and text utilities.
pub use form_manager_core as core;

/// Elements, inputs, labels, and validation.
pub use form_manager_forms as forms;

/// Re-exported for building attribute maps with `json!`.
pub use serde_json;

/// Re-exported so callers can filter this crate's spans and events.
pub use tracing;

/// The types most callers need.
pub mod prelude {
    pub use form_manager_core::{FormError, FormResult, Settings, ValidationError, SETTINGS};
    pub use form_manager_forms::{
        AttributeValue, Element, Input, InputType, Label, TokenSet, Validator,
    };
}
