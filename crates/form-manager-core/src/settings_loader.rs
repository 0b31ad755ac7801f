//! Settings loading from configuration files and the environment.
//!
//! A file only needs to name the settings it changes: whatever it contains
//! is deep-merged over [`Settings::default`], so a file holding just an
//! `[error_messages]` table keeps the default `debug` and `log_level`.
//! The `*_with_env` variants then apply `FORM_MANAGER_*` overrides on top.
//!
//! | Env Var | Setting |
//! |---|---|
//! | `FORM_MANAGER_DEBUG` | `debug` |
//! | `FORM_MANAGER_LOG_LEVEL` | `log_level` |
//!
//! ```rust,no_run
//! use form_manager_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("config/forms.toml").unwrap();
//! assert!(settings.error_message("required").is_some());
//! ```

use std::path::Path;

use serde_json::Value;

use crate::error::FormError;
use crate::settings::Settings;

const DEBUG_VAR: &str = "FORM_MANAGER_DEBUG";
const LOG_LEVEL_VAR: &str = "FORM_MANAGER_LOG_LEVEL";

#[derive(Debug, Clone, Copy)]
enum Format {
    Toml,
    Json,
}

impl Format {
    const fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
        }
    }

    fn parse(self, source: &str) -> Result<Value, FormError> {
        let parsed = match self {
            Self::Toml => toml::from_str::<Value>(source).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str::<Value>(source).map_err(|e| e.to_string()),
        };
        parsed.map_err(|e| {
            FormError::ConfigurationError(format!("Failed to parse {}: {e}", self.name()))
        })
    }

    fn load_str(self, source: &str) -> Result<Settings, FormError> {
        let mut merged = serde_json::to_value(Settings::default())?;
        merge_into(&mut merged, self.parse(source)?);
        serde_json::from_value(merged).map_err(|e| {
            FormError::ConfigurationError(format!("Invalid {} settings: {e}", self.name()))
        })
    }

    fn load_file(self, path: &Path) -> Result<Settings, FormError> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            FormError::ConfigurationError(format!(
                "Failed to read {} file '{}': {e}",
                self.name(),
                path.display()
            ))
        })?;
        let settings = self.load_str(&source)?;
        tracing::debug!(path = %path.display(), format = self.name(), "loaded settings");
        Ok(settings)
    }
}

/// Loads settings from a TOML string.
pub fn from_toml_str(source: &str) -> Result<Settings, FormError> {
    Format::Toml.load_str(source)
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, FormError> {
    Format::Toml.load_file(path.as_ref())
}

/// Loads a TOML file, then applies environment overrides.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, FormError> {
    from_toml_file(path).map(with_env)
}

/// Loads settings from a JSON string.
pub fn from_json_str(source: &str) -> Result<Settings, FormError> {
    Format::Json.load_str(source)
}

/// Loads settings from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, FormError> {
    Format::Json.load_file(path.as_ref())
}

/// Loads a JSON file, then applies environment overrides.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> Result<Settings, FormError> {
    from_json_file(path).map(with_env)
}

/// Default settings with environment overrides applied.
pub fn from_env() -> Settings {
    with_env(Settings::default())
}

/// Applies `FORM_MANAGER_DEBUG` (`true`, `1` or `yes`, case-insensitive)
/// and `FORM_MANAGER_LOG_LEVEL` to `settings`.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var(DEBUG_VAR) {
        settings.debug = matches!(val.to_ascii_lowercase().as_str(), "true" | "1" | "yes");
    }
    if let Ok(val) = std::env::var(LOG_LEVEL_VAR) {
        settings.log_level = val;
    }
}

fn with_env(mut settings: Settings) -> Settings {
    apply_env_overrides(&mut settings);
    settings
}

/// Objects merge key by key; any other overlay value replaces the base.
fn merge_into(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge_into(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, overlay) => *slot = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = from_toml_str(
            r#"
                [error_messages]
                required = "Please fill in this field."
            "#,
        )
        .unwrap();
        assert_eq!(
            settings.error_message("required"),
            Some("Please fill in this field.")
        );
        assert!(settings.debug);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_json_sets_messages_and_extra() {
        let settings = from_json_str(
            r#"{"debug": false, "error_messages": {"email": "Bad email."}, "extra": {"theme": "plain"}}"#,
        )
        .unwrap();
        assert!(!settings.debug);
        assert_eq!(settings.error_message("email"), Some("Bad email."));
        assert_eq!(settings.extra["theme"], "plain");
    }

    #[test]
    fn test_malformed_and_mistyped_sources_are_configuration_errors() {
        for result in [
            from_toml_str("this is not = = toml"),
            from_toml_str("debug = \"sometimes\""),
            from_json_str("{not json"),
            from_json_str(r#"{"error_messages": ["required"]}"#),
        ] {
            assert!(matches!(result, Err(FormError::ConfigurationError(_))));
        }
    }

    #[test]
    fn test_file_round_trip_and_missing_file() {
        let path = std::env::temp_dir().join("form_manager_settings_loader.json");
        std::fs::write(&path, r#"{"log_level": "trace"}"#).unwrap();
        assert_eq!(from_json_file(&path).unwrap().log_level, "trace");
        std::fs::remove_file(&path).ok();

        let err = from_toml_file("/nonexistent/forms.toml").unwrap_err();
        assert!(err.to_string().contains("forms.toml"));
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var(DEBUG_VAR, "0");
        std::env::set_var(LOG_LEVEL_VAR, "debug");
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings);
        assert!(!settings.debug);
        assert_eq!(settings.log_level, "debug");

        std::env::set_var(DEBUG_VAR, "YES");
        assert!(from_env().debug);

        std::env::remove_var(DEBUG_VAR);
        std::env::remove_var(LOG_LEVEL_VAR);
    }

    #[test]
    fn test_merge_into_replaces_arrays_and_merges_objects() {
        let mut base = serde_json::json!({"a": {"x": 1, "y": 2}, "list": [1, 2]});
        merge_into(&mut base, serde_json::json!({"a": {"y": 20}, "list": [9]}));
        assert_eq!(base, serde_json::json!({"a": {"x": 1, "y": 20}, "list": [9]}));
    }
}
