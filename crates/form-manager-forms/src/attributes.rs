//! Attribute values.
//!
//! An HTML attribute is either free text, a boolean flag, or a list of
//! whitespace-separated tokens (the `class` attribute). [`AttributeValue`]
//! makes that distinction explicit so the renderer can switch on it, and
//! [`TokenSet`] keeps token lists deduplicated in first-seen order.

use std::fmt;

use indexmap::IndexSet;

use form_manager_core::utils::text::split_tokens;
use form_manager_core::{FormError, FormResult};

/// A deduplicated, insertion-ordered set of attribute tokens.
///
/// Every input string is split on whitespace, so `"a b"` and `["a", "b"]`
/// produce the same set.
///
/// # Examples
///
/// ```
/// use form_manager_forms::attributes::TokenSet;
///
/// let mut classes = TokenSet::from("btn btn-primary");
/// classes.extend(TokenSet::from(["btn", "large"]));
/// assert_eq!(classes.join(), "btn btn-primary large");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: IndexSet<String>,
}

impl TokenSet {
    /// Creates an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every token found in `s`. Returns `true` if anything was new.
    pub fn insert(&mut self, s: &str) -> bool {
        let mut added = false;
        for token in split_tokens(s) {
            added |= self.tokens.insert(token.to_string());
        }
        added
    }

    /// Adds all tokens of `other` that are not already present (set union).
    pub fn extend(&mut self, other: Self) {
        self.tokens.extend(other.tokens);
    }

    /// Removes all tokens of `other` (set difference), keeping the order of
    /// the remaining tokens.
    pub fn remove_all(&mut self, other: &Self) {
        self.tokens.retain(|token| !other.tokens.contains(token));
    }

    /// Returns `true` if `token` is in the set.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Returns the number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the set holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Joins the tokens with single spaces.
    pub fn join(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join())
    }
}

impl<S: AsRef<str>> FromIterator<S> for TokenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item.as_ref());
        }
        set
    }
}

impl From<&str> for TokenSet {
    fn from(s: &str) -> Self {
        std::iter::once(s).collect()
    }
}

impl From<String> for TokenSet {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&String> for TokenSet {
    fn from(s: &String) -> Self {
        Self::from(s.as_str())
    }
}

impl<S: AsRef<str>> From<Vec<S>> for TokenSet {
    fn from(items: Vec<S>) -> Self {
        items.into_iter().collect()
    }
}

impl<S: AsRef<str>> From<&[S]> for TokenSet {
    fn from(items: &[S]) -> Self {
        items.iter().collect()
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for TokenSet {
    fn from(items: [S; N]) -> Self {
        items.into_iter().collect()
    }
}

/// The value of one HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A text value, rendered as `name="value"` after escaping.
    Text(String),
    /// A boolean flag: `true` renders as a bare `name`, `false` renders nothing.
    Flag(bool),
    /// A token list, rendered as its tokens joined by single spaces.
    Tokens(TokenSet),
}

impl AttributeValue {
    /// Returns the text of a [`Text`](Self::Text) value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Flag(_) | Self::Tokens(_) => None,
        }
    }

    /// Returns the flag of a [`Flag`](Self::Flag) value.
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Text(_) | Self::Tokens(_) => None,
        }
    }

    /// Converts a JSON value into an attribute value.
    ///
    /// Strings become text, booleans become flags, numbers become their
    /// decimal text, and arrays of scalars become token sets. `null` yields
    /// `Ok(None)`: it carries no value to store.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MalformedAttributeValue`] for objects and for
    /// arrays containing objects or arrays.
    pub fn from_json(name: &str, value: &serde_json::Value) -> FormResult<Option<Self>> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(None),
            Value::Bool(flag) => Ok(Some(Self::Flag(*flag))),
            Value::Number(n) => Ok(Some(Self::Text(n.to_string()))),
            Value::String(s) => Ok(Some(Self::Text(s.clone()))),
            Value::Array(items) => {
                let mut tokens = TokenSet::new();
                for item in items {
                    match item {
                        Value::String(s) => {
                            tokens.insert(s);
                        }
                        Value::Number(n) => {
                            tokens.insert(&n.to_string());
                        }
                        Value::Bool(b) => {
                            tokens.insert(&b.to_string());
                        }
                        Value::Null => {}
                        Value::Array(_) | Value::Object(_) => {
                            return Err(FormError::MalformedAttributeValue {
                                name: name.to_string(),
                                reason: "token lists may only contain scalars".to_string(),
                            });
                        }
                    }
                }
                Ok(Some(Self::Tokens(tokens)))
            }
            Value::Object(_) => Err(FormError::MalformedAttributeValue {
                name: name.to_string(),
                reason: "objects cannot be rendered as attribute values".to_string(),
            }),
        }
    }

    /// Like [`from_json`](Self::from_json), but coerces malformed values to
    /// their compact JSON text instead of failing.
    pub fn from_json_lossy(name: &str, value: &serde_json::Value) -> Option<Self> {
        match Self::from_json(name, value) {
            Ok(converted) => converted,
            Err(err) => {
                tracing::debug!(attribute = name, error = %err, "coercing attribute value to text");
                Some(Self::Text(value.to_string()))
            }
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for AttributeValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<bool> for AttributeValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<TokenSet> for AttributeValue {
    fn from(tokens: TokenSet) -> Self {
        Self::Tokens(tokens)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(tokens: Vec<String>) -> Self {
        Self::Tokens(tokens.into())
    }
}

macro_rules! text_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

text_from_display!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, char);
