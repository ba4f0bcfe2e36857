//! Rich select: a searchable single-select dropdown rendered as an element tree.
//!
//! The host owns all state. Each state change it builds a [`SelectSnapshot`],
//! calls [`render`] (or [`RichSelectRenderer::render`]) and diffs the
//! resulting [`vdom::Element`] tree against the previous one. User
//! interaction reaches the host through the callbacks in [`SelectHandlers`].

pub mod classes;
pub mod config;
pub mod error;
pub mod handlers;
pub mod html_input;
pub mod icons;
pub mod option;
pub mod render;
pub mod snapshot;

pub use classes::{ClassResolver, ComponentClasses, RICH_SELECT, ResolvedClasses, Theme};
pub use config::{MaxHeight, RichSelectConfig};
pub use error::ConfigError;
pub use handlers::{Intent, NavKey, SelectHandlers};
pub use html_input::{HtmlInputProps, TabIndex};
pub use option::{
    FlatEntry, OptionList, OptionValue, SelectOption, flatten, guess_option_text, selectable_count,
};
pub use render::{RichSelectRenderer, render};
pub use snapshot::SelectSnapshot;
