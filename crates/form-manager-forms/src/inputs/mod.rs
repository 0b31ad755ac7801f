//! Form inputs.
//!
//! An [`Input`] is an [`Element`] with a fixed tag and `type`, a bound
//! value, a validation error and an optional [`Label`]. What differs between
//! input kinds is captured by [`InputType`], which picks the tag, the
//! `type` attribute, the intrinsic validator, and the [`ValueAccessor`]
//! deciding whether the value is an attribute or the content.

mod accessor;

use std::borrow::Cow;
use std::fmt;

use form_manager_core::settings::{Settings, SETTINGS};
use form_manager_core::ValidationError;

use crate::attributes::AttributeValue;
use crate::element::Element;
use crate::label::Label;
use crate::validation::{self, Validator};

pub use accessor::{AttributeAccessor, ContentAccessor, ValueAccessor};

/// Enumerates the built-in input kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    /// `<input type="text">`.
    Text,
    /// `<input type="email">`.
    Email,
    /// `<input type="url">`.
    Url,
    /// `<input type="number">`.
    Number,
    /// `<input type="hidden">`.
    Hidden,
    /// `<input type="password">`.
    Password,
    /// `<input type="color">`.
    Color,
    /// `<textarea>`.
    Textarea,
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "Text",
            Self::Email => "Email",
            Self::Url => "Url",
            Self::Number => "Number",
            Self::Hidden => "Hidden",
            Self::Password => "Password",
            Self::Color => "Color",
            Self::Textarea => "Textarea",
        };
        write!(f, "{name}")
    }
}

impl InputType {
    /// Returns the HTML tag name.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Textarea => "textarea",
            _ => "input",
        }
    }

    /// Returns the value of the `type` attribute, if the tag uses one.
    pub const fn type_attr(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::Url => Some("url"),
            Self::Number => Some("number"),
            Self::Hidden => Some("hidden"),
            Self::Password => Some("password"),
            Self::Color => Some("color"),
            Self::Textarea => None,
        }
    }

    /// Returns `true` if the element takes a closing tag.
    pub const fn closes(self) -> bool {
        matches!(self, Self::Textarea)
    }

    /// Returns the accessor mapping the bound value onto the element.
    pub fn accessor(self) -> &'static dyn ValueAccessor {
        match self {
            Self::Textarea => &ContentAccessor,
            _ => &AttributeAccessor,
        }
    }

    /// Returns the check every value of this type must pass.
    pub const fn intrinsic_validator(self) -> Option<Validator> {
        match self {
            Self::Color => Some(Validator::Color),
            Self::Email => Some(Validator::Email),
            Self::Url => Some(Validator::Url),
            Self::Number => Some(Validator::Number),
            Self::Text | Self::Hidden | Self::Password | Self::Textarea => None,
        }
    }
}

/// A form input bound to a value.
///
/// # Examples
///
/// ```
/// use form_manager_forms::inputs::Input;
///
/// let color = Input::color(None, [("value", "#ff0000")]);
/// assert_eq!(color.render(), r##"<input type="color" value="#ff0000">"##);
///
/// let mut bio = Input::textarea(Some("Bio"), [("name", "bio")]);
/// bio.set_val("<b>hi</b>");
/// assert_eq!(bio.render(), r#"<textarea name="bio">&lt;b&gt;hi&lt;/b&gt;</textarea>"#);
/// ```
#[derive(Debug, Clone)]
pub struct Input {
    element: Element,
    input_type: InputType,
    label: Option<Label>,
    error: Option<String>,
}

impl Input {
    /// Creates an input of the given type with its `type` attribute set.
    pub fn new(input_type: InputType) -> Self {
        let mut element = Element::new(input_type.tag(), input_type.closes());
        if let Some(type_attr) = input_type.type_attr() {
            element.set_attr("type", type_attr);
        }
        Self {
            element,
            input_type,
            label: None,
            error: None,
        }
    }

    /// Creates an input with an optional label and initial attributes.
    ///
    /// A `value` entry is stored through the type's accessor, so a
    /// textarea's initial value becomes its content.
    pub fn with<K, V>(
        input_type: InputType,
        label: Option<&str>,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        let mut input = Self::new(input_type);
        if let Some(label) = label {
            input.set_label(label);
        }
        let accessor = input_type.accessor();
        for (name, value) in attributes {
            let name = name.into();
            let value = value.into();
            if let ("value", Some(text)) = (name.as_str(), value.as_str()) {
                accessor.set_value(&mut input.element, Some(text));
                continue;
            }
            input.element.set_attr(name, value);
        }
        input
    }

    /// Creates an `<input type="color">`.
    pub fn color<K, V>(label: Option<&str>, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        Self::with(InputType::Color, label, attributes)
    }

    /// Creates a `<textarea>`.
    pub fn textarea<K, V>(label: Option<&str>, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        Self::with(InputType::Textarea, label, attributes)
    }

    /// Returns the input type.
    pub const fn input_type(&self) -> InputType {
        self.input_type
    }

    /// Returns the underlying element.
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// Returns the underlying element for attribute, data and class changes.
    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    // ── Value and content ────────────────────────────────────────────

    /// Returns the bound value.
    pub fn val(&self) -> Option<&str> {
        self.input_type.accessor().value(&self.element)
    }

    /// Sets the bound value.
    pub fn set_val(&mut self, value: impl AsRef<str>) -> &mut Self {
        self.input_type
            .accessor()
            .set_value(&mut self.element, Some(value.as_ref()));
        self
    }

    /// Unsets the bound value.
    pub fn clear_val(&mut self) -> &mut Self {
        self.input_type.accessor().set_value(&mut self.element, None);
        self
    }

    /// Returns the content as it will be rendered (escaped for textareas).
    pub fn html(&self) -> Option<Cow<'_, str>> {
        self.input_type.accessor().content(&self.element)
    }

    /// Sets the raw content. Never escapes.
    pub fn set_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.element.set_html(html);
        self
    }

    /// Populates the input from submitted data and forgets any earlier error.
    pub fn load(&mut self, value: Option<&str>) -> &mut Self {
        self.input_type.accessor().set_value(&mut self.element, value);
        self.error = None;
        self
    }

    // ── Validation ───────────────────────────────────────────────────

    /// Returns the validators that currently apply to this input.
    pub fn validators(&self) -> Vec<Validator> {
        validation::validators_for(self.input_type, &self.element)
    }

    /// Checks the current value without recording the outcome.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with(SETTINGS.try_get())
    }

    /// Like [`validate`](Self::validate), with explicit message settings.
    pub fn validate_with(&self, settings: Option<&Settings>) -> Result<(), ValidationError> {
        validation::run_validators(&self.validators(), self.val(), settings)
    }

    /// Validates the current value and records the error message, if any.
    pub fn is_valid(&mut self) -> bool {
        let result = self.validate();
        self.record(result)
    }

    /// Like [`is_valid`](Self::is_valid), with explicit message settings.
    pub fn is_valid_with(&mut self, settings: &Settings) -> bool {
        let result = self.validate_with(Some(settings));
        self.record(result)
    }

    fn record(&mut self, result: Result<(), ValidationError>) -> bool {
        match result {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(err) => {
                tracing::debug!(
                    input_type = %self.input_type,
                    code = %err.code,
                    "input failed validation"
                );
                self.error = Some(err.message);
                false
            }
        }
    }

    /// Returns the current error message.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sets an error message, e.g. from a check done by the caller.
    pub fn set_error(&mut self, message: impl Into<String>) -> &mut Self {
        self.error = Some(message.into());
        self
    }

    /// Clears the error message.
    pub fn clear_error(&mut self) -> &mut Self {
        self.error = None;
        self
    }

    // ── Label ────────────────────────────────────────────────────────

    /// Returns the label, if one was set.
    pub const fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// Returns the label for changes.
    pub fn label_mut(&mut self) -> Option<&mut Label> {
        self.label.as_mut()
    }

    /// Sets the label text, creating the label if needed.
    pub fn set_label(&mut self, text: impl Into<String>) -> &mut Self {
        match &mut self.label {
            Some(label) => {
                label.set_text(text);
            }
            None => self.label = Some(Label::new(text)),
        }
        self
    }

    /// Renders the label, pointing it at this input's `id` when it has one.
    pub fn render_label(&self) -> Option<String> {
        let id = self.element.attr_str("id");
        self.label.as_ref().map(|label| label.render_for(id))
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Renders the input element, appending `append` after its content.
    pub fn render_appending(&self, append: &str) -> String {
        let content = self.html();
        self.element
            .render_with_content(content.as_deref().unwrap_or_default(), append)
    }

    /// Renders the input element.
    pub fn render(&self) -> String {
        self.render_appending("")
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_attrs() -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }

    // ── InputType ────────────────────────────────────────────────────

    #[test]
    fn test_input_type_tags() {
        assert_eq!(InputType::Color.tag(), "input");
        assert_eq!(InputType::Textarea.tag(), "textarea");
        assert!(InputType::Textarea.closes());
        assert!(!InputType::Color.closes());
        assert_eq!(InputType::Textarea.type_attr(), None);
        assert_eq!(InputType::Password.type_attr(), Some("password"));
    }

    #[test]
    fn test_input_type_display() {
        assert_eq!(InputType::Color.to_string(), "Color");
        assert_eq!(InputType::Textarea.to_string(), "Textarea");
    }

    #[test]
    fn test_intrinsic_validators() {
        assert_eq!(InputType::Color.intrinsic_validator(), Some(Validator::Color));
        assert_eq!(InputType::Text.intrinsic_validator(), None);
    }

    // ── Color ────────────────────────────────────────────────────────

    #[test]
    fn test_color_render() {
        let input = Input::color(None, [("value", "#ff0000")]);
        assert_eq!(input.render(), r##"<input type="color" value="#ff0000">"##);
        assert_eq!(input.val(), Some("#ff0000"));
    }

    #[test]
    fn test_color_with_label() {
        let mut input = Input::color(Some("Colour"), [("id", "fav")]);
        assert_eq!(input.label().and_then(Label::text), Some("Colour"));
        assert_eq!(
            input.render_label().as_deref(),
            Some(r#"<label for="fav">Colour</label>"#)
        );
        input.set_label("Favourite");
        assert_eq!(input.label().and_then(Label::text), Some("Favourite"));
    }

    #[test]
    fn test_color_validation() {
        let mut input = Input::color(None, no_attrs());
        assert!(input.is_valid_with(&Settings::default()));

        input.load(Some("red"));
        assert!(!input.is_valid_with(&Settings::default()));
        assert_eq!(input.error(), Some("Enter a valid color in #RRGGBB format."));

        input.load(Some("#00FF7f"));
        assert_eq!(input.error(), None);
        assert!(input.is_valid_with(&Settings::default()));
    }

    #[test]
    fn test_non_closing_input_drops_append() {
        let input = Input::color(None, no_attrs());
        assert_eq!(input.render_appending("ignored"), r#"<input type="color">"#);
    }

    // ── Textarea ─────────────────────────────────────────────────────

    #[test]
    fn test_textarea_val_is_raw_html_is_escaped() {
        let mut input = Input::new(InputType::Textarea);
        input.set_html("<b>");
        assert_eq!(input.val(), Some("<b>"));
        assert_eq!(input.html().as_deref(), Some("&lt;b&gt;"));
        assert_eq!(input.element().html(), Some("<b>"));
    }

    #[test]
    fn test_textarea_render_escapes_content_once() {
        let mut input = Input::textarea(None, [("name", "bio")]);
        input.set_val("a & b");
        assert_eq!(
            input.render(),
            r#"<textarea name="bio">a &amp; b</textarea>"#
        );
        assert_eq!(input.render(), input.to_string());
    }

    #[test]
    fn test_textarea_value_from_constructor() {
        let input = Input::textarea(None, [("value", "hello"), ("rows", "3")]);
        assert_eq!(input.val(), Some("hello"));
        assert!(!input.element().has_attr("value"));
        assert_eq!(input.render(), r#"<textarea rows="3">hello</textarea>"#);
    }

    #[test]
    fn test_textarea_unset_renders_empty() {
        let input = Input::new(InputType::Textarea);
        assert_eq!(input.val(), None);
        assert_eq!(input.render_appending("!"), "<textarea>!</textarea>");
    }

    // ── value binding ────────────────────────────────────────────────

    #[test]
    fn test_load_and_clear() {
        let mut input = Input::new(InputType::Text);
        input.set_error("stale");
        input.load(Some("x"));
        assert_eq!(input.val(), Some("x"));
        assert_eq!(input.error(), None);

        input.load(None);
        assert_eq!(input.val(), None);
        assert_eq!(input.render(), r#"<input type="text">"#);

        input.set_val("y").clear_val();
        assert_eq!(input.val(), None);
    }

    #[test]
    fn test_required_text() {
        let mut input = Input::new(InputType::Text);
        input.element_mut().required();
        assert!(!input.is_valid_with(&Settings::default()));
        assert_eq!(input.error(), Some("This field is required."));

        input.load(Some("filled"));
        assert!(input.is_valid_with(&Settings::default()));
    }

    #[test]
    fn test_required_message_override() {
        let mut settings = Settings::default();
        settings
            .error_messages
            .insert("required".into(), "Fill me in.".into());
        let mut input = Input::new(InputType::Textarea);
        input.element_mut().required();
        assert!(!input.is_valid_with(&settings));
        assert_eq!(input.error(), Some("Fill me in."));
    }

    #[test]
    fn test_manual_error() {
        let mut input = Input::new(InputType::Email);
        input.set_error("Taken.");
        assert_eq!(input.error(), Some("Taken."));
        input.clear_error();
        assert_eq!(input.error(), None);
    }

    #[test]
    fn test_validate_does_not_record() {
        let mut input = Input::new(InputType::Number);
        input.set_val("abc");
        let err = input.validate_with(None).unwrap_err();
        assert_eq!(err.code, "number");
        assert_eq!(input.error(), None);
    }

    #[test]
    fn test_render_label_without_label() {
        assert_eq!(Input::new(InputType::Hidden).render_label(), None);
    }
}
