//! # form-manager-forms
//!
//! The HTML element model: elements with ordered attributes, `data-*`
//! attributes and content; class lists; typed inputs with a bound value,
//! validation state and label.
//!
//! ## Modules
//!
//! - [`attributes`] - `AttributeValue` and the `TokenSet` class list
//! - [`element`] - The `Element` store and renderer
//! - [`inputs`] - `Input`, `InputType` and value accessors
//! - [`label`] - Labels attached to inputs
//! - [`validation`] - Validators derived from constraint attributes and input types

pub mod attributes;
pub mod element;
pub mod inputs;
pub mod label;
pub mod validation;

pub use attributes::{AttributeValue, TokenSet};
pub use element::Element;
pub use inputs::{Input, InputType};
pub use label::Label;
pub use validation::{Pattern, Validator};
