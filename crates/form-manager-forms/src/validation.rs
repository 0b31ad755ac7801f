//! Input validation.
//!
//! Validators come from two places: the element's constraint attributes
//! (`required`, `minlength`, `maxlength`, `pattern`) and the input type
//! itself (a color input only accepts `#RRGGBB`). [`validators_for`] collects
//! both, and [`run_validators`] stops at the first failure.
//!
//! Empty values only ever fail [`Validator::Required`]; every other check
//! passes an empty value so optional fields can be left blank.

use std::sync::OnceLock;

use regex::Regex;

use form_manager_core::settings::{Settings, SETTINGS};
use form_manager_core::ValidationError;

use crate::element::Element;
use crate::inputs::InputType;

/// A single check applied to an input value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    /// The value must be non-empty.
    Required,
    /// At least this many characters.
    MinLength(usize),
    /// At most this many characters.
    MaxLength(usize),
    /// The whole value must match this regular expression.
    Pattern(Pattern),
    /// A `#RRGGBB` hex color.
    Color,
    /// An email address.
    Email,
    /// An `http` or `https` URL.
    Url,
    /// A finite decimal number.
    Number,
}

impl Validator {
    /// Returns the code identifying this check in errors and in
    /// [`Settings::error_messages`].
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength(_) => "minlength",
            Self::MaxLength(_) => "maxlength",
            Self::Pattern(_) => "pattern",
            Self::Color => "color",
            Self::Email => "email",
            Self::Url => "url",
            Self::Number => "number",
        }
    }

    const fn default_message(&self) -> &'static str {
        match self {
            Self::Required => "This field is required.",
            Self::MinLength(_) => {
                "Ensure this value has at least {min} characters (it has {length})."
            }
            Self::MaxLength(_) => {
                "Ensure this value has at most {max} characters (it has {length})."
            }
            Self::Pattern(_) => "Enter a value matching the requested format.",
            Self::Color => "Enter a valid color in #RRGGBB format.",
            Self::Email => "Enter a valid email address.",
            Self::Url => "Enter a valid URL.",
            Self::Number => "Enter a number.",
        }
    }

    /// Checks a value using the globally configured messages, if any.
    pub fn validate(&self, value: Option<&str>) -> Result<(), ValidationError> {
        self.validate_with(value, SETTINGS.try_get())
    }

    /// Checks a value, taking message overrides from `settings`.
    pub fn validate_with(
        &self,
        value: Option<&str>,
        settings: Option<&Settings>,
    ) -> Result<(), ValidationError> {
        let value = value.unwrap_or_default();
        let passed = if value.is_empty() {
            !matches!(self, Self::Required)
        } else {
            self.accepts(value)
        };

        if passed {
            Ok(())
        } else {
            Err(self.error(value, settings))
        }
    }

    fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Required => true,
            Self::MinLength(min) => value.chars().count() >= *min,
            Self::MaxLength(max) => value.chars().count() <= *max,
            Self::Pattern(pattern) => pattern.is_match(value),
            Self::Color => color_re().is_match(value),
            Self::Email => email_re().is_match(value),
            Self::Url => url_re().is_match(value),
            Self::Number => value.trim().parse::<f64>().is_ok_and(f64::is_finite),
        }
    }

    fn error(&self, value: &str, settings: Option<&Settings>) -> ValidationError {
        let length = value.chars().count().to_string();
        let params: Vec<(&str, String)> = match self {
            Self::MinLength(min) => vec![("min", min.to_string()), ("length", length)],
            Self::MaxLength(max) => vec![("max", max.to_string()), ("length", length)],
            Self::Pattern(pattern) => vec![("pattern", pattern.as_str().to_string())],
            _ => Vec::new(),
        };

        let template = settings
            .and_then(|s| s.error_message(self.code()))
            .unwrap_or_else(|| self.default_message());

        let mut message = template.to_string();
        for (key, val) in &params {
            message = message.replace(&format!("{{{key}}}"), val);
        }

        params
            .into_iter()
            .fold(ValidationError::new(message, self.code()), |err, (key, val)| {
                err.with_param(key, val)
            })
    }
}

/// A `pattern` constraint, compiled once to match the whole value.
///
/// The source must compile on its own before it is anchored, so a pattern
/// with unbalanced groups cannot escape the anchors. A source that does not
/// compile is logged and accepts every value. Equality compares sources.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Option<Regex>,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let regex = Regex::new(&source)
            .and_then(|_| Regex::new(&format!("^(?:{source})$")))
            .map_err(|err| {
                tracing::warn!(pattern = %source, error = %err, "skipping unusable pattern");
            })
            .ok();
        Self { source, regex }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the pattern compiled.
    pub const fn is_usable(&self) -> bool {
        self.regex.is_some()
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.as_ref().map_or(true, |re| re.is_match(value))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl From<&str> for Pattern {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Pattern {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

/// Collects the validators that apply to an input of `input_type` with the
/// constraint attributes currently set on `element`.
///
/// Unparseable `minlength`/`maxlength` values are ignored.
pub fn validators_for(input_type: InputType, element: &Element) -> Vec<Validator> {
    let mut validators = Vec::new();

    if element
        .attributes()
        .get("required")
        .is_some_and(|v| v.as_flag() != Some(false))
    {
        validators.push(Validator::Required);
    }
    if let Some(min) = length_attr(element, "minlength") {
        validators.push(Validator::MinLength(min));
    }
    if let Some(max) = length_attr(element, "maxlength") {
        validators.push(Validator::MaxLength(max));
    }
    if let Some(pattern) = element.attr_str("pattern") {
        validators.push(Validator::Pattern(Pattern::new(pattern)));
    }
    if let Some(intrinsic) = input_type.intrinsic_validator() {
        validators.push(intrinsic);
    }

    validators
}

/// Runs validators in order and returns the first failure.
pub fn run_validators(
    validators: &[Validator],
    value: Option<&str>,
    settings: Option<&Settings>,
) -> Result<(), ValidationError> {
    validators
        .iter()
        .try_for_each(|validator| validator.validate_with(value, settings))
}

fn length_attr(element: &Element, name: &str) -> Option<usize> {
    element.attr_str(name)?.trim().parse().ok()
}

fn color_re() -> &'static Regex {
    static COLOR_RE: OnceLock<Regex> = OnceLock::new();
    COLOR_RE.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid regex"))
}

fn email_re() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").expect("valid regex")
    })
}

fn url_re() -> &'static Regex {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    URL_RE.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("valid regex"))
}
