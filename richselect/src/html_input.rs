//! Props shared by every HTML-input-like component.

use std::fmt;

use serde::Deserialize;
use vdom::Element;

use crate::classes::{ComponentClasses, ResolvedClasses, Theme};

/// A `tabindex` value, given as a number or verbatim string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TabIndex {
    Number(i64),
    Text(String),
}

impl fmt::Display for TabIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabIndex::Number(n) => write!(f, "{n}"),
            TabIndex::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TabIndex {
    fn from(value: i64) -> Self {
        TabIndex::Number(value)
    }
}

impl From<&str> for TabIndex {
    fn from(value: &str) -> Self {
        TabIndex::Text(value.to_string())
    }
}

/// Generic HTML input props.
///
/// Unset props are left off the rendered element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HtmlInputProps {
    pub id: Option<String>,
    pub name: Option<String>,
    pub disabled: bool,
    pub readonly: bool,
    pub autofocus: bool,
    pub required: bool,
    pub tabindex: Option<TabIndex>,
    /// Active theme variant.
    pub variant: Option<String>,
    /// Explicit classes; when unset the theme's classes for the component apply.
    pub classes: Option<ComponentClasses>,
}

impl HtmlInputProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    pub fn autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn tabindex(mut self, tabindex: impl Into<TabIndex>) -> Self {
        self.tabindex = Some(tabindex.into());
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn classes(mut self, classes: ComponentClasses) -> Self {
        self.classes = Some(classes);
        self
    }

    /// Resolve the classes this component renders with.
    ///
    /// Explicit `classes` win; otherwise the theme's entry for
    /// `component_name` is used, or no classes at all when the theme has none.
    pub fn resolve_classes(&self, theme: &Theme, component_name: &str) -> ResolvedClasses {
        let classes = match &self.classes {
            Some(classes) => classes.clone(),
            None => theme.component(component_name).cloned().unwrap_or_else(|| {
                log::debug!("theme has no classes for {component_name}, rendering unstyled");
                ComponentClasses::default()
            }),
        };
        ResolvedClasses::new(classes, self.variant.clone())
    }

    /// Write the input attributes onto `element`.
    pub fn apply(&self, element: Element) -> Element {
        self.apply_to_button(element)
            .flag_if("readonly", self.readonly)
            .flag_if("required", self.required)
    }

    /// Write the attributes a `<button>` accepts.
    ///
    /// `readonly` and `required` only apply to form fields and are skipped.
    pub fn apply_to_button(&self, element: Element) -> Element {
        element
            .attr_opt("id", self.id.as_deref())
            .attr_opt("name", self.name.as_deref())
            .attr_opt("tabindex", self.tabindex.as_ref().map(ToString::to_string))
            .flag_if("disabled", self.disabled)
            .flag_if("autofocus", self.autofocus)
    }
}
