//! String utility functions.
//!
//! [`escape_html`] is the single escaping routine used for attribute values,
//! data-attribute values and text content. [`split_tokens`] breaks a class
//! list into its whitespace-separated tokens.

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their HTML entity equivalents,
/// so the result is safe inside double- or single-quoted attribute values as
/// well as element content. Existing entities are escaped again: callers
/// must pass raw text.
///
/// # Examples
///
/// ```
/// use form_manager_core::utils::text::escape_html;
///
/// assert_eq!(escape_html("<x> & \"y\""), "&lt;x&gt; &amp; &quot;y&quot;");
/// assert_eq!(escape_html("it's"), "it&#039;s");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(ch),
        }
    }
    result
}

/// Splits a space-separated list into its non-empty tokens.
///
/// # Examples
///
/// ```
/// use form_manager_core::utils::text::split_tokens;
///
/// let tokens: Vec<&str> = split_tokens("  btn  btn-primary\tlarge ").collect();
/// assert_eq!(tokens, ["btn", "btn-primary", "large"]);
/// ```
pub fn split_tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split_whitespace()
}
