//! Labels for inputs.

use std::fmt;

use crate::element::Element;

/// A `<label>` element attached to an input.
///
/// The text is stored as the label's inner HTML and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    element: Element,
}

impl Label {
    /// Creates a label with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        let mut element = Element::new("label", true);
        element.set_html(text);
        Self { element }
    }

    /// Returns the label text.
    pub fn text(&self) -> Option<&str> {
        self.element.html()
    }

    /// Replaces the label text.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.element.set_html(text);
        self
    }

    /// Returns the underlying element.
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// Returns the underlying element for attribute changes.
    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    /// Renders the label, pointing it at `input_id` unless it already has
    /// an explicit `for` attribute.
    pub fn render_for(&self, input_id: Option<&str>) -> String {
        match input_id {
            Some(id) if !self.element.has_attr("for") => {
                let mut element = self.element.clone();
                element.set_attr("for", id);
                element.render()
            }
            _ => self.element.render(),
        }
    }

    /// Renders the label as-is.
    pub fn render(&self) -> String {
        self.element.render()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_render() {
        let label = Label::new("Favourite colour");
        assert_eq!(label.render(), "<label>Favourite colour</label>");
        assert_eq!(label.text(), Some("Favourite colour"));
    }

    #[test]
    fn test_label_render_for() {
        let label = Label::new("Name");
        assert_eq!(
            label.render_for(Some("id_name")),
            r#"<label for="id_name">Name</label>"#
        );
        // the stored label is untouched
        assert!(!label.element().has_attr("for"));
    }

    #[test]
    fn test_label_explicit_for_wins() {
        let mut label = Label::new("Name");
        label.element_mut().set_attr("for", "other");
        assert_eq!(
            label.render_for(Some("id_name")),
            r#"<label for="other">Name</label>"#
        );
    }

    #[test]
    fn test_label_set_text() {
        let mut label = Label::new("a");
        label.set_text("b").element_mut().add_class("control-label");
        assert_eq!(label.to_string(), r#"<label class="control-label">b</label>"#);
    }
}
