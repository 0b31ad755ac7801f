//! Value accessors.
//!
//! An input's bound value lives either in its `value` attribute or in its
//! content, depending on the kind of input. A [`ValueAccessor`] encapsulates
//! that choice so [`Input`](super::Input) can stay a single type.

use std::borrow::Cow;
use std::fmt;

use form_manager_core::utils::text::escape_html;

use crate::element::Element;

/// Maps an input's bound value onto its element.
///
/// Accessors must be `Send + Sync` so a `&'static dyn ValueAccessor` can be
/// shared by every input of the same type.
pub trait ValueAccessor: Send + Sync + fmt::Debug {
    /// Returns the current value.
    fn value<'a>(&self, element: &'a Element) -> Option<&'a str>;

    /// Stores a value; `None` unsets it.
    fn set_value(&self, element: &mut Element, value: Option<&str>);

    /// Returns the content to render between the tags.
    fn content<'a>(&self, element: &'a Element) -> Option<Cow<'a, str>> {
        element.html().map(Cow::Borrowed)
    }
}

/// Keeps the value in the `value` attribute (`<input value="...">`).
#[derive(Debug, Clone, Copy)]
pub struct AttributeAccessor;

impl ValueAccessor for AttributeAccessor {
    fn value<'a>(&self, element: &'a Element) -> Option<&'a str> {
        element.attr_str("value")
    }

    fn set_value(&self, element: &mut Element, value: Option<&str>) {
        match value {
            Some(value) => element.set_attr("value", value),
            None => element.remove_attr("value"),
        };
    }
}

/// Keeps the value as the element's text content (`<textarea>`).
///
/// The value is the raw content; the content read for rendering is escaped
/// because the browser treats it as text, not markup.
#[derive(Debug, Clone, Copy)]
pub struct ContentAccessor;

impl ValueAccessor for ContentAccessor {
    fn value<'a>(&self, element: &'a Element) -> Option<&'a str> {
        element.html()
    }

    fn set_value(&self, element: &mut Element, value: Option<&str>) {
        match value {
            Some(value) => element.set_html(value),
            None => element.clear_html(),
        };
    }

    fn content<'a>(&self, element: &'a Element) -> Option<Cow<'a, str>> {
        element.html().map(|html| Cow::Owned(escape_html(html)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_accessor() {
        let mut el = Element::new("input", false);
        AttributeAccessor.set_value(&mut el, Some("42"));
        assert_eq!(AttributeAccessor.value(&el), Some("42"));
        assert_eq!(el.render(), r#"<input value="42">"#);

        AttributeAccessor.set_value(&mut el, None);
        assert_eq!(AttributeAccessor.value(&el), None);
        assert!(!el.has_attr("value"));
    }

    #[test]
    fn test_attribute_accessor_content_is_raw() {
        let mut el = Element::new("input", false);
        el.set_html("<i>");
        assert_eq!(AttributeAccessor.content(&el).as_deref(), Some("<i>"));
    }

    #[test]
    fn test_content_accessor() {
        let mut el = Element::new("textarea", true);
        ContentAccessor.set_value(&mut el, Some("a < b"));
        assert_eq!(ContentAccessor.value(&el), Some("a < b"));
        assert_eq!(ContentAccessor.content(&el).as_deref(), Some("a &lt; b"));

        ContentAccessor.set_value(&mut el, None);
        assert_eq!(ContentAccessor.value(&el), None);
        assert_eq!(ContentAccessor.content(&el), None);
    }
}
