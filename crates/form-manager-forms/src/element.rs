//! The HTML element model.
//!
//! An [`Element`] is a tag name plus ordered attributes, ordered `data-*`
//! attributes and optional inner HTML. Mutators take `&mut self` and return
//! `&mut Self` so calls can be chained; rendering borrows immutably and is
//! therefore repeatable.
//!
//! Attribute and data values are escaped when rendered, never when stored.
//! Inner HTML is emitted verbatim.

use std::fmt;

use indexmap::IndexMap;

use form_manager_core::logging::render_span;
use form_manager_core::utils::text::escape_html;

use crate::attributes::{AttributeValue, TokenSet};

const CLASS: &str = "class";

/// A renderable HTML element.
///
/// # Examples
///
/// ```
/// use form_manager_forms::element::Element;
///
/// let mut button = Element::new("button", true);
/// button
///     .set_attr("type", "submit")
///     .add_class("btn btn-primary")
///     .set_data("action", "save")
///     .set_html("Save");
///
/// assert_eq!(
///     button.render(),
///     r#"<button type="submit" class="btn btn-primary" data-action="save">Save</button>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    close: bool,
    attributes: IndexMap<String, AttributeValue>,
    data: IndexMap<String, String>,
    html: Option<String>,
}

impl Element {
    /// Creates an element. `close` selects whether it takes a closing tag
    /// (and therefore content).
    pub fn new(tag: impl Into<String>, close: bool) -> Self {
        Self {
            tag: tag.into(),
            close,
            attributes: IndexMap::new(),
            data: IndexMap::new(),
            html: None,
        }
    }

    /// Returns the tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns `true` if the element takes a closing tag.
    pub const fn closes(&self) -> bool {
        self.close
    }

    /// Changes the tag name and closing behaviour.
    pub fn set_element_name(&mut self, tag: impl Into<String>, close: bool) -> &mut Self {
        self.tag = tag.into();
        self.close = close;
        self
    }

    // ── Content ──────────────────────────────────────────────────────

    /// Returns the raw inner HTML, or `None` if it was never set.
    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    /// Sets the raw inner HTML. The value is stored verbatim.
    pub fn set_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.html = Some(html.into());
        self
    }

    /// Resets the inner HTML to "not set".
    pub fn clear_html(&mut self) -> &mut Self {
        self.html = None;
        self
    }

    // ── Attributes ───────────────────────────────────────────────────

    /// Returns the value of an attribute.
    ///
    /// Token sets are returned as [`AttributeValue::Text`] joined by single
    /// spaces.
    pub fn attr(&self, name: &str) -> Option<AttributeValue> {
        self.attributes.get(name).map(|value| match value {
            AttributeValue::Tokens(tokens) => AttributeValue::Text(tokens.join()),
            other => other.clone(),
        })
    }

    /// Returns the value of a text attribute without copying it.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(AttributeValue::as_str)
    }

    /// Returns `true` if the attribute is present (with any value).
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Returns all attributes in insertion order.
    pub fn attributes(&self) -> &IndexMap<String, AttributeValue> {
        &self.attributes
    }

    /// Sets an attribute, replacing any previous value in place.
    ///
    /// A text value for `class` is normalized into a token set.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> &mut Self {
        let name = name.into();
        let value = match value.into() {
            AttributeValue::Text(text) if name == CLASS => AttributeValue::Tokens(text.into()),
            other => other,
        };
        self.attributes.insert(name, value);
        self
    }

    /// Sets several attributes, one [`set_attr`](Self::set_attr) call per pair.
    pub fn set_attrs<K, V>(&mut self, attributes: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        for (name, value) in attributes {
            self.set_attr(name, value);
        }
        self
    }

    /// Sets attributes from a JSON object.
    ///
    /// `null` entries are skipped. Values that cannot be represented as an
    /// attribute (nested objects) are stored as their JSON text. A non-object
    /// argument is ignored.
    pub fn set_attrs_json(&mut self, attributes: &serde_json::Value) -> &mut Self {
        let Some(map) = attributes.as_object() else {
            tracing::debug!(value = %attributes, "ignoring non-object attribute map");
            return self;
        };
        for (name, value) in map {
            if let Some(value) = AttributeValue::from_json_lossy(name, value) {
                self.set_attr(name.as_str(), value);
            }
        }
        self
    }

    /// Removes an attribute. No-op if it is not set.
    pub fn remove_attr(&mut self, name: &str) -> &mut Self {
        self.attributes.shift_remove(name);
        self
    }

    // ── Classes ──────────────────────────────────────────────────────

    /// Adds one or more classes, keeping existing ones and skipping duplicates.
    pub fn add_class(&mut self, classes: impl Into<TokenSet>) -> &mut Self {
        let mut tokens = self.class_tokens().unwrap_or_default();
        tokens.extend(classes.into());
        self.attributes
            .insert(CLASS.to_string(), AttributeValue::Tokens(tokens));
        self
    }

    /// Removes one or more classes. No-op if `class` is not set.
    pub fn remove_class(&mut self, classes: impl Into<TokenSet>) -> &mut Self {
        if let Some(mut tokens) = self.class_tokens() {
            tokens.remove_all(&classes.into());
            self.attributes
                .insert(CLASS.to_string(), AttributeValue::Tokens(tokens));
        }
        self
    }

    /// Returns `true` if `class` contains the given token.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_tokens()
            .is_some_and(|tokens| tokens.contains(class))
    }

    fn class_tokens(&self) -> Option<TokenSet> {
        match self.attributes.get(CLASS)? {
            AttributeValue::Tokens(tokens) => Some(tokens.clone()),
            AttributeValue::Text(text) => Some(TokenSet::from(text)),
            AttributeValue::Flag(_) => None,
        }
    }

    // ── Common flags and attributes ──────────────────────────────────

    /// Sets the `required` flag.
    pub fn required(&mut self) -> &mut Self {
        self.set_attr("required", true)
    }

    /// Sets the `disabled` flag.
    pub fn disabled(&mut self) -> &mut Self {
        self.set_attr("disabled", true)
    }

    /// Sets the `readonly` flag.
    pub fn readonly(&mut self) -> &mut Self {
        self.set_attr("readonly", true)
    }

    /// Sets the `autofocus` flag.
    pub fn autofocus(&mut self) -> &mut Self {
        self.set_attr("autofocus", true)
    }

    /// Sets the `multiple` flag.
    pub fn multiple(&mut self) -> &mut Self {
        self.set_attr("multiple", true)
    }

    /// Sets the `checked` flag.
    pub fn checked(&mut self) -> &mut Self {
        self.set_attr("checked", true)
    }

    /// Sets the `id` attribute.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.set_attr("id", id.into())
    }

    /// Sets the `name` attribute.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.set_attr("name", name.into())
    }

    /// Sets the `placeholder` attribute.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
        self.set_attr("placeholder", placeholder.into())
    }

    /// Sets the `title` attribute.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.set_attr("title", title.into())
    }

    // ── Data attributes ──────────────────────────────────────────────

    /// Returns the value of a `data-*` attribute (name without the prefix).
    pub fn data(&self, name: &str) -> Option<&str> {
        self.data.get(name).map(String::as_str)
    }

    /// Returns all `data-*` attributes in insertion order.
    pub fn data_attributes(&self) -> &IndexMap<String, String> {
        &self.data
    }

    /// Sets a `data-*` attribute (name without the prefix).
    pub fn set_data(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.data.insert(name.into(), value.into());
        self
    }

    /// Sets several `data-*` attributes.
    pub fn set_data_many<K, V>(&mut self, data: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in data {
            self.data.insert(name.into(), value.into());
        }
        self
    }

    /// Removes one `data-*` attribute.
    pub fn remove_data(&mut self, name: &str) -> &mut Self {
        self.data.shift_remove(name);
        self
    }

    /// Removes every `data-*` attribute. Regular attributes are untouched.
    pub fn clear_data(&mut self) -> &mut Self {
        self.data.clear();
        self
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Renders the opening tag with all attributes and data attributes.
    pub fn render_open_tag(&self) -> String {
        let mut html = String::with_capacity(self.tag.len() + 2);
        html.push('<');
        html.push_str(&self.tag);

        for (name, value) in &self.attributes {
            match value {
                AttributeValue::Flag(false) => {}
                AttributeValue::Flag(true) => {
                    html.push(' ');
                    html.push_str(name);
                }
                AttributeValue::Text(text) => push_attr(&mut html, "", name, text),
                AttributeValue::Tokens(tokens) => {
                    push_attr(&mut html, "", name, &tokens.join());
                }
            }
        }

        for (name, value) in &self.data {
            push_attr(&mut html, "data-", name, value);
        }

        html.push('>');
        html
    }

    /// Renders the closing tag, or an empty string for non-closing elements.
    pub fn render_close_tag(&self) -> String {
        if self.close {
            format!("</{}>", self.tag)
        } else {
            String::new()
        }
    }

    /// Renders the element, appending `append` after the inner HTML.
    ///
    /// Non-closing elements render only their opening tag; `append` is dropped.
    pub fn render_appending(&self, append: &str) -> String {
        self.render_with_content(self.html().unwrap_or_default(), append)
    }

    /// Renders the element.
    pub fn render(&self) -> String {
        self.render_appending("")
    }

    /// Renders with `content` in place of the stored inner HTML.
    pub(crate) fn render_with_content(&self, content: &str, append: &str) -> String {
        let _span = render_span(&self.tag).entered();

        let mut html = self.render_open_tag();
        if self.close {
            html.push_str(content);
            html.push_str(append);
            html.push_str(&self.render_close_tag());
        }
        html
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Appends ` {prefix}{name}="{escaped value}"`.
fn push_attr(html: &mut String, prefix: &str, name: &str, value: &str) {
    html.push(' ');
    html.push_str(prefix);
    html.push_str(name);
    html.push_str("=\"");
    html.push_str(&escape_html(value));
    html.push('"');
}
