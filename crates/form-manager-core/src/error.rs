//! Core error types for form-manager.
//!
//! Rendering is total and attribute mutators accept any input, so the error
//! surface is small: malformed bulk attribute values (normally coerced rather
//! than returned), validation failures, and configuration loading.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// A single validation failure for an input value.
///
/// # Examples
///
/// ```
/// use form_manager_core::error::ValidationError;
///
/// let err = ValidationError::new("This value is too long.", "maxlength")
///     .with_param("max", "10");
/// assert_eq!(err.code, "maxlength");
/// assert_eq!(err.params.get("max").map(String::as_str), Some("10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The human-readable error message.
    pub message: String,
    /// A short code identifying the failed check (e.g. "required", "color").
    pub code: String,
    /// Parameters used to build the message (e.g. `min`, `max`).
    pub params: HashMap<String, String>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            params: HashMap::new(),
        }
    }

    /// Adds a parameter to this validation error.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The primary error type for form-manager.
#[derive(Error, Debug)]
pub enum FormError {
    /// An attribute value could not be represented as text, a flag, or a
    /// token list (e.g. a nested JSON object).
    #[error("Malformed value for attribute '{name}': {reason}")]
    MalformedAttributeValue {
        /// The attribute name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// An input value failed validation.
    #[error("Validation error: {0}")]
    ValidationError(ValidationError),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        Self::ValidationError(err)
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, FormError>`.
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("Enter a valid color.", "color");
        assert_eq!(err.to_string(), "Enter a valid color.");
    }

    #[test]
    fn test_validation_error_with_param() {
        let err = ValidationError::new("Too short.", "minlength").with_param("min", "8");
        assert_eq!(err.params.get("min").unwrap(), "8");
    }

    #[test]
    fn test_malformed_attribute_display() {
        let err = FormError::MalformedAttributeValue {
            name: "style".into(),
            reason: "nested object".into(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed value for attribute 'style': nested object"
        );
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: FormError = ValidationError::new("Required.", "required").into();
        assert!(matches!(err, FormError::ValidationError(ref e) if e.code == "required"));
        assert_eq!(err.to_string(), "Validation error: Required.");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FormError = io_err.into();
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FormError = json_err.into();
        assert!(matches!(err, FormError::SerializationError(_)));
    }
}
