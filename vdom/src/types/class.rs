use std::fmt;

use serde::{Deserialize, Deserializer};

/// An ordered set of CSS class names.
///
/// Insertion order is preserved and duplicates are dropped, so merging
/// fixed classes with variant classes never repeats a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated class string.
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        list.extend_str(classes);
        list
    }

    pub fn push(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() && !self.0.contains(&class) {
            self.0.push(class);
        }
    }

    /// Add every class from a whitespace-separated string.
    pub fn extend_str(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            self.push(class);
        }
    }

    /// Append another list, skipping names already present.
    pub fn merge(mut self, other: &ClassList) -> Self {
        for class in &other.0 {
            self.push(class.clone());
        }
        self
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        Self::parse(classes)
    }
}

impl From<String> for ClassList {
    fn from(classes: String) -> Self {
        Self::parse(&classes)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.extend_str(item.as_ref());
        }
        list
    }
}

// Themes write classes either as "a b c" or ["a", "b c"].
impl<'de> Deserialize<'de> for ClassList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(s) => ClassList::parse(&s),
            Raw::Many(v) => v.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_duplicates_and_blanks() {
        let list = ClassList::parse("  a b  a c ");
        assert_eq!(list.to_string(), "a b c");
    }

    #[test]
    fn test_merge_keeps_order() {
        let list = ClassList::parse("x y").merge(&ClassList::parse("y z"));
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }
}
