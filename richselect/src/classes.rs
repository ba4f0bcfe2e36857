//! Class themes.
//!
//! A [`Theme`] maps component names to their [`ComponentClasses`]. The host
//! resolves the classes for a component once, together with its active
//! variant, and hands the resulting [`ResolvedClasses`] to the renderer.
//!
//! # Example
//!
//! ```ignore
//! let theme = Theme::from_json_str(r#"{
//!     "TRichSelect": {
//!         "classes": { "wrapper": "relative" },
//!         "variants": { "danger": { "selectButton": "border-red-500" } }
//!     }
//! }"#)?;
//! let classes = theme.require("TRichSelect")?.clone().with_variant_active("danger");
//! ```

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;
use vdom::ClassList;

use crate::error::{ConfigError, Result};

/// Component name the rich select registers its classes under.
pub const RICH_SELECT: &str = "TRichSelect";

/// Resolves an element name (`wrapper`, `selectButton`, ...) to classes.
pub trait ClassResolver: Send + Sync {
    fn resolve(&self, element: &str) -> ClassList;
}

impl<F> ClassResolver for F
where
    F: Fn(&str) -> ClassList + Send + Sync,
{
    fn resolve(&self, element: &str) -> ClassList {
        self(element)
    }
}

/// Classes for every element of one component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentClasses {
    /// Base classes per element.
    pub classes: BTreeMap<String, ClassList>,
    /// Classes always applied, whatever the variant.
    pub fixed_classes: BTreeMap<String, ClassList>,
    /// Per-variant overrides of the base classes.
    pub variants: BTreeMap<String, BTreeMap<String, ClassList>>,
}

impl ComponentClasses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class(mut self, element: impl Into<String>, classes: impl Into<ClassList>) -> Self {
        self.classes.insert(element.into(), classes.into());
        self
    }

    pub fn fixed(mut self, element: impl Into<String>, classes: impl Into<ClassList>) -> Self {
        self.fixed_classes.insert(element.into(), classes.into());
        self
    }

    pub fn variant(
        mut self,
        variant: impl Into<String>,
        element: impl Into<String>,
        classes: impl Into<ClassList>,
    ) -> Self {
        self.variants
            .entry(variant.into())
            .or_default()
            .insert(element.into(), classes.into());
        self
    }

    /// Classes for `element` under the given variant.
    ///
    /// Fixed classes come first. A variant that defines the element replaces
    /// its base classes; otherwise the base classes apply.
    pub fn resolve(&self, element: &str, variant: Option<&str>) -> ClassList {
        let fixed = self.fixed_classes.get(element).cloned().unwrap_or_default();

        let overridden = variant
            .and_then(|v| self.variants.get(v))
            .and_then(|classes| classes.get(element));

        let chosen = overridden.or_else(|| self.classes.get(element));
        log::trace!(
            "resolve classes element={} variant={:?} overridden={}",
            element,
            variant,
            overridden.is_some()
        );

        match chosen {
            Some(classes) => fixed.merge(classes),
            None => fixed,
        }
    }

    /// Pair these classes with an active variant.
    pub fn with_variant_active(self, variant: impl Into<String>) -> ResolvedClasses {
        ResolvedClasses {
            classes: self,
            variant: Some(variant.into()),
        }
    }

    /// Default classes for the rich select.
    pub fn rich_select_defaults() -> Self {
        Self::new()
            .class("wrapper", "relative")
            .class("buttonWrapper", "inline-block relative w-full")
            .class(
                "selectButton",
                "w-full flex text-left justify-between items-center px-3 py-2 text-black \
                 bg-white border border-gray-300 rounded shadow-sm focus:border-blue-500 \
                 focus:outline-none disabled:opacity-50 disabled:cursor-not-allowed",
            )
            .class("selectButtonLabel", "block truncate")
            .class("selectButtonPlaceholder", "block truncate text-gray-400")
            .class("selectButtonIcon", "fill-current flex-shrink-0 ml-1 h-4 w-4")
            .class(
                "selectButtonClearIconWrapper",
                "flex flex-shrink-0 items-center justify-center ml-1 rounded hover:bg-gray-100",
            )
            .class("selectButtonClearIcon", "fill-current h-3 w-3")
            .class(
                "dropdown",
                "absolute w-full z-10 -mt-1 border-b border-l border-r rounded-b shadow-sm \
                 bg-white border-gray-300",
            )
            .class("dropdownFeedback", "pb-2 px-3 text-sm text-gray-400")
            .class("optionsList", "list-none overflow-auto")
            .class("searchWrapper", "inline-block w-full p-2")
            .class(
                "searchBox",
                "inline-block w-full px-3 py-2 text-sm border border-gray-300 rounded \
                 shadow-sm focus:outline-none focus:border-blue-500 bg-gray-50",
            )
            .class("optgroup", "text-gray-400 uppercase text-xs py-1 px-2 font-semibold")
            .class("option", "")
            .class("highlightedOption", "bg-blue-100")
            .class("selectedOption", "font-semibold bg-blue-500 text-white")
            .class("selectedHighlightedOption", "font-semibold bg-blue-600 text-white")
            .class("optionContent", "flex justify-between items-center px-3 py-2")
            .class("optionLabel", "truncate block")
            .class("selectedIcon", "fill-current h-4 w-4")
    }
}

/// Component classes plus the variant active for one rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedClasses {
    pub classes: ComponentClasses,
    pub variant: Option<String>,
}

impl ResolvedClasses {
    pub fn new(classes: ComponentClasses, variant: Option<String>) -> Self {
        Self { classes, variant }
    }
}

impl ClassResolver for ResolvedClasses {
    fn resolve(&self, element: &str) -> ClassList {
        self.classes.resolve(element, self.variant.as_deref())
    }
}

/// Component name to component classes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    components: BTreeMap<String, ComponentClasses>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::empty().with_component(RICH_SELECT, ComponentClasses::rich_select_defaults())
    }
}

impl Theme {
    /// A theme that defines no components.
    pub fn empty() -> Self {
        Self {
            components: BTreeMap::new(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let theme: Theme = serde_json::from_str(json)?;
        log::debug!("loaded theme with {} component(s)", theme.components.len());
        Ok(theme)
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    pub fn with_component(mut self, name: impl Into<String>, classes: ComponentClasses) -> Self {
        self.components.insert(name.into(), classes);
        self
    }

    /// Overlay `other` on this theme; its components replace ours.
    pub fn extend(mut self, other: Theme) -> Self {
        self.components.extend(other.components);
        self
    }

    pub fn component(&self, name: &str) -> Option<&ComponentClasses> {
        self.components.get(name)
    }

    pub fn require(&self, name: &str) -> Result<&ComponentClasses> {
        self.component(name)
            .ok_or_else(|| ConfigError::UnknownComponent(name.to_string()))
    }

    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_classes_prefix_base() {
        let classes = ComponentClasses::new()
            .fixed("wrapper", "relative")
            .class("wrapper", "w-full");
        assert_eq!(classes.resolve("wrapper", None).to_string(), "relative w-full");
    }

    #[test]
    fn test_variant_falls_back_to_base() {
        let classes = ComponentClasses::new()
            .class("wrapper", "base")
            .class("dropdown", "panel")
            .variant("danger", "wrapper", "red");
        assert_eq!(classes.resolve("wrapper", Some("danger")).to_string(), "red");
        assert_eq!(classes.resolve("dropdown", Some("danger")).to_string(), "panel");
        assert_eq!(classes.resolve("wrapper", Some("unknown")).to_string(), "base");
    }

    #[test]
    fn test_unknown_element_is_empty() {
        assert!(ComponentClasses::new().resolve("nothing", None).is_empty());
    }
}
