use std::fmt;

/// Value of an element attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Boolean attribute, present without a value (`disabled`, `autofocus`).
    Flag,
    /// Attribute with a textual value.
    Text(String),
}

impl AttrValue {
    /// The textual value, or `None` for flags.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Flag => None,
            AttrValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Flag => Ok(()),
            AttrValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Text(value.to_string())
    }
}
