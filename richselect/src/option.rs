//! Option model and flattening of grouped options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scalar value carried by an option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl OptionValue {
    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Null => Ok(()),
            OptionValue::Bool(b) => write!(f, "{b}"),
            OptionValue::Int(i) => write!(f, "{i}"),
            OptionValue::Float(x) => write!(f, "{x}"),
            OptionValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(value.into())
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

/// A selectable option, or a group of options when `children` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub value: OptionValue,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SelectOption>>,
}

impl SelectOption {
    pub fn new(value: impl Into<OptionValue>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            children: None,
        }
    }

    /// A group labelled `text` holding `children`.
    pub fn group(text: impl Into<String>, children: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            value: OptionValue::Null,
            text: text.into(),
            children: Some(children.into_iter().collect()),
        }
    }

    /// Whether this entry is a group header rather than a selectable option.
    ///
    /// An empty `children` list still makes a group.
    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }

    pub fn has_value(&self, value: &OptionValue) -> bool {
        &self.value == value
    }
}

impl<V: Into<OptionValue>, T: Into<String>> From<(V, T)> for SelectOption {
    fn from((value, text): (V, T)) -> Self {
        SelectOption::new(value, text)
    }
}

/// Ordered option sequence; order drives display and highlight indices.
pub type OptionList = Vec<SelectOption>;

/// One row of the flattened option list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlatEntry<'a> {
    /// Non-interactive group header. Consumes no highlight index.
    Group(&'a SelectOption),
    /// Selectable option with its zero-based highlight index.
    Option {
        option: &'a SelectOption,
        index: usize,
    },
}

impl<'a> FlatEntry<'a> {
    pub fn option(&self) -> &'a SelectOption {
        match *self {
            FlatEntry::Group(option) => option,
            FlatEntry::Option { option, .. } => option,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match *self {
            FlatEntry::Group(_) => None,
            FlatEntry::Option { index, .. } => Some(index),
        }
    }
}

/// Flatten groups into a single list.
///
/// Each group emits its header followed by its children. Only one level is
/// expanded: a child that is itself a group becomes a header whose own
/// children are not shown.
pub fn flatten(options: &[SelectOption]) -> Vec<FlatEntry<'_>> {
    let mut entries = Vec::with_capacity(options.len());
    let mut next_index = 0;

    for option in options {
        push_entry(&mut entries, option, &mut next_index);
        if let Some(children) = &option.children {
            for child in children {
                push_entry(&mut entries, child, &mut next_index);
            }
        }
    }

    entries
}

fn push_entry<'a>(entries: &mut Vec<FlatEntry<'a>>, option: &'a SelectOption, next_index: &mut usize) {
    if option.is_group() {
        entries.push(FlatEntry::Group(option));
    } else {
        entries.push(FlatEntry::Option {
            option,
            index: *next_index,
        });
        *next_index += 1;
    }
}

/// Number of selectable (non-header) entries after flattening.
pub fn selectable_count(options: &[SelectOption]) -> usize {
    flatten(options)
        .iter()
        .filter(|entry| entry.index().is_some())
        .count()
}

/// Default label resolver for options and group headers.
///
/// Uses the option's own text, then its value, then the first child's text.
pub fn guess_option_text(option: &SelectOption) -> String {
    if !option.text.is_empty() {
        return option.text.clone();
    }
    if !option.value.is_null() {
        return option.value.to_string();
    }
    option
        .children
        .as_ref()
        .and_then(|children| children.first())
        .map(|first| first.text.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_deserializes_untagged() {
        let values: Vec<OptionValue> = serde_json::from_str(r#"[null, true, 3, 1.5, "x"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                OptionValue::Null,
                OptionValue::Bool(true),
                OptionValue::Int(3),
                OptionValue::Float(1.5),
                OptionValue::Str("x".into()),
            ]
        );
    }

    #[test]
    fn test_flatten_counts_children_across_groups() {
        let options = vec![
            SelectOption::group("G1", [SelectOption::new("a", "a"), SelectOption::new("b", "b")]),
            SelectOption::new("c", "c"),
            SelectOption::group("G2", Vec::<SelectOption>::new()),
            SelectOption::group(
                "G3",
                [
                    SelectOption::new("d", "d"),
                    SelectOption::new("e", "e"),
                    SelectOption::new("f", "f"),
                ],
            ),
        ];

        assert_eq!(selectable_count(&options), 6);

        let indices = |options: &[SelectOption]| {
            flatten(options).iter().map(|e| e.index()).collect::<Vec<_>>()
        };
        let expected = vec![
            None,
            Some(0),
            Some(1),
            Some(2),
            None,
            None,
            Some(3),
            Some(4),
            Some(5),
        ];
        assert_eq!(indices(&options), expected);
        assert_eq!(indices(&options), expected);

        let labels: Vec<_> = flatten(&options).iter().map(|e| e.option().text.as_str()).collect();
        assert_eq!(labels, vec!["G1", "a", "b", "c", "G2", "G3", "d", "e", "f"]);
    }

    #[test]
    fn test_guess_text_fallbacks() {
        assert_eq!(guess_option_text(&SelectOption::new(1, "One")), "One");
        assert_eq!(guess_option_text(&SelectOption::new(7, "")), "7");

        let unlabelled = SelectOption::group("", [SelectOption::new(1, "First")]);
        assert_eq!(guess_option_text(&unlabelled), "First");
    }
}
