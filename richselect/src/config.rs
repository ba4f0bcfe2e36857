//! Rich select configuration.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::classes::{ClassResolver, RICH_SELECT, Theme};
use crate::error::Result;
use crate::html_input::HtmlInputProps;

/// Maximum height of the options list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MaxHeight {
    /// Pixels.
    Px(u32),
    /// Any CSS length, or digits meaning pixels.
    Css(String),
    /// No limit.
    None,
}

impl Default for MaxHeight {
    fn default() -> Self {
        MaxHeight::Px(300)
    }
}

impl MaxHeight {
    /// CSS value for `max-height`, if any.
    ///
    /// Pixel values and all-digit strings get a `px` suffix, other strings
    /// pass through unchanged.
    pub fn normalized(&self) -> Option<String> {
        match self {
            MaxHeight::Px(px) => Some(format!("{px}px")),
            MaxHeight::Css(css) if css.is_empty() => None,
            MaxHeight::Css(css) if css.bytes().all(|b| b.is_ascii_digit()) => Some(format!("{css}px")),
            MaxHeight::Css(css) => Some(css.clone()),
            MaxHeight::None => None,
        }
    }
}

impl fmt::Display for MaxHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized().unwrap_or_default())
    }
}

impl From<u32> for MaxHeight {
    fn from(px: u32) -> Self {
        MaxHeight::Px(px)
    }
}

impl From<&str> for MaxHeight {
    fn from(css: &str) -> Self {
        MaxHeight::Css(css.to_string())
    }
}

/// Configuration for a rich select, resolved by the host before rendering.
///
/// `classes` is any [`ClassResolver`]: theme classes resolved from the input
/// props by default, or a host closure mapping element names to classes.
///
/// # Example
///
/// ```ignore
/// let config = RichSelectConfig::new()
///     .input(HtmlInputProps::new().id("country").name("country"))
///     .placeholder("Choose a country")
///     .clearable(true)
///     .max_height("20rem")
///     .classes(|element: &str| ClassList::parse(&format!("rs-{element}")));
/// ```
#[derive(Clone)]
pub struct RichSelectConfig {
    pub input: HtmlInputProps,
    pub classes: Arc<dyn ClassResolver>,
    pub placeholder: Option<String>,
    pub search_box_placeholder: String,
    pub searching_text: String,
    pub no_results_text: String,
    pub max_height: MaxHeight,
    pub clearable: bool,
    pub hide_search_box: bool,
}

impl Default for RichSelectConfig {
    fn default() -> Self {
        Self {
            input: HtmlInputProps::default(),
            classes: Arc::new(HtmlInputProps::default().resolve_classes(&Theme::default(), RICH_SELECT)),
            placeholder: None,
            search_box_placeholder: "Search...".into(),
            searching_text: "Searching...".into(),
            no_results_text: "No results found".into(),
            max_height: MaxHeight::default(),
            clearable: false,
            hide_search_box: false,
        }
    }
}

impl fmt::Debug for RichSelectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RichSelectConfig")
            .field("input", &self.input)
            .field("placeholder", &self.placeholder)
            .field("search_box_placeholder", &self.search_box_placeholder)
            .field("searching_text", &self.searching_text)
            .field("no_results_text", &self.no_results_text)
            .field("max_height", &self.max_height)
            .field("clearable", &self.clearable)
            .field("hide_search_box", &self.hide_search_box)
            .finish_non_exhaustive()
    }
}

impl RichSelectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from JSON, resolving classes against `theme`.
    ///
    /// Missing fields take their defaults; `"maxHeight": null` removes the
    /// height limit.
    pub fn from_json_str(json: &str, theme: &Theme) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Ok(raw.into_config(theme))
    }

    /// Set the input props and re-resolve classes against the default theme.
    pub fn input(self, input: HtmlInputProps) -> Self {
        self.input_with_theme(input, &Theme::default())
    }

    /// Set the input props and resolve classes against `theme`.
    pub fn input_with_theme(mut self, input: HtmlInputProps, theme: &Theme) -> Self {
        self.classes = Arc::new(input.resolve_classes(theme, RICH_SELECT));
        self.input = input;
        self
    }

    /// Replace the class resolver.
    pub fn classes(mut self, classes: impl ClassResolver + 'static) -> Self {
        self.classes = Arc::new(classes);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn search_box_placeholder(mut self, text: impl Into<String>) -> Self {
        self.search_box_placeholder = text.into();
        self
    }

    pub fn searching_text(mut self, text: impl Into<String>) -> Self {
        self.searching_text = text.into();
        self
    }

    pub fn no_results_text(mut self, text: impl Into<String>) -> Self {
        self.no_results_text = text.into();
        self
    }

    pub fn max_height(mut self, max_height: impl Into<MaxHeight>) -> Self {
        self.max_height = max_height.into();
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn hide_search_box(mut self, hide: bool) -> Self {
        self.hide_search_box = hide;
        self
    }

    pub fn disabled(&self) -> bool {
        self.input.disabled
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    #[serde(flatten)]
    input: HtmlInputProps,
    placeholder: Option<String>,
    search_box_placeholder: Option<String>,
    searching_text: Option<String>,
    no_results_text: Option<String>,
    max_height: MaxHeight,
    clearable: bool,
    hide_search_box: bool,
}

impl RawConfig {
    fn into_config(self, theme: &Theme) -> RichSelectConfig {
        let defaults = RichSelectConfig::default();
        RichSelectConfig {
            classes: Arc::new(self.input.resolve_classes(theme, RICH_SELECT)),
            input: self.input,
            placeholder: self.placeholder,
            search_box_placeholder: self
                .search_box_placeholder
                .unwrap_or(defaults.search_box_placeholder),
            searching_text: self.searching_text.unwrap_or(defaults.searching_text),
            no_results_text: self.no_results_text.unwrap_or(defaults.no_results_text),
            max_height: self.max_height,
            clearable: self.clearable,
            hide_search_box: self.hide_search_box,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_height_normalization() {
        assert_eq!(MaxHeight::Px(300).normalized().as_deref(), Some("300px"));
        assert_eq!(MaxHeight::from("250").normalized().as_deref(), Some("250px"));
        assert_eq!(MaxHeight::from("20rem").normalized().as_deref(), Some("20rem"));
        assert_eq!(MaxHeight::from("").normalized(), None);
        assert_eq!(MaxHeight::None.normalized(), None);
    }
}
