//! Builds the rich select element tree.
//!
//! ```text
//! wrapper
//! ├── buttonWrapper
//! │   └── selectButton ── label | placeholder, clear icon | chevron
//! └── dropdown (display: none unless shown)
//!     ├── searchWrapper ── searchBox        (unless hidden)
//!     └── feedback | optionsList ── optgroup / option rows
//! ```

use vdom::{ClassList, Element, EventContext, EventKind};

use crate::classes::ClassResolver;
use crate::config::RichSelectConfig;
use crate::handlers::{SelectHandlers, forward};
use crate::icons;
use crate::option::{FlatEntry, SelectOption, flatten};
use crate::snapshot::SelectSnapshot;

/// Renders a rich select from a configuration and a callback bundle.
///
/// # Example
///
/// ```ignore
/// let renderer = RichSelectRenderer::new(
///     RichSelectConfig::new().placeholder("Pick one"),
///     SelectHandlers::from_intents(move |intent| tx.send(intent).ok()),
/// );
/// let tree = renderer.render(&snapshot);
/// ```
#[derive(Debug, Clone)]
pub struct RichSelectRenderer {
    config: RichSelectConfig,
    handlers: SelectHandlers,
}

impl RichSelectRenderer {
    pub fn new(config: RichSelectConfig, handlers: SelectHandlers) -> Self {
        Self { config, handlers }
    }

    pub fn config(&self) -> &RichSelectConfig {
        &self.config
    }

    pub fn handlers(&self) -> &SelectHandlers {
        &self.handlers
    }

    /// Build the tree for one snapshot.
    pub fn render(&self, snapshot: &SelectSnapshot) -> Element {
        render(&self.config, snapshot, &self.handlers)
    }
}

/// Build the rich select tree.
///
/// Pure in its inputs: the same snapshot always yields the same structure,
/// and no callback runs until the host dispatches an event.
pub fn render(config: &RichSelectConfig, snapshot: &SelectSnapshot, handlers: &SelectHandlers) -> Element {
    log::debug!(
        "RichSelect::render id={:?} show={} searching={} options={} highlighted={:?}",
        config.input.id,
        snapshot.show,
        snapshot.searching,
        snapshot.filtered_options.len(),
        snapshot.highlighted
    );

    Builder {
        config,
        snapshot,
        handlers,
    }
    .wrapper()
}

struct Builder<'a> {
    config: &'a RichSelectConfig,
    snapshot: &'a SelectSnapshot,
    handlers: &'a SelectHandlers,
}

impl Builder<'_> {
    fn class(&self, element: &str) -> ClassList {
        self.config.classes.resolve(element)
    }

    fn wrapper(&self) -> Element {
        Element::div()
            .node_ref("wrapper")
            .classes(self.class("wrapper"))
            .child(self.button_wrapper())
            .child(self.dropdown())
    }

    fn button_wrapper(&self) -> Element {
        Element::div()
            .node_ref("buttonWrapper")
            .classes(self.class("buttonWrapper"))
            .child(self.select_button())
    }

    fn select_button(&self) -> Element {
        let disabled = self.config.disabled();
        let selection = self.snapshot.selection.as_ref();

        let text = match selection {
            Some(option) => self.button_label(option),
            None => self.button_placeholder(),
        };

        let icon = match selection {
            Some(_) if self.config.clearable && !disabled => self.clear_icon(),
            _ => self.select_icon(),
        };

        // The search box owns blur while it is shown.
        let blur = self.handlers.on_blur.clone();
        let hide_search_box = self.config.hide_search_box;

        let value = self
            .snapshot
            .current_value()
            .filter(|value| !value.is_null())
            .map(ToString::to_string);

        self.config
            .input
            .apply_to_button(Element::button())
            .node_ref("selectButton")
            .attr("type", "button")
            .attr_opt("value", value)
            .classes(self.class("selectButton"))
            .on(EventKind::Click, forward(&self.handlers.on_click))
            .on(EventKind::Focus, forward(&self.handlers.on_focus))
            .on_handler(EventKind::KeyDown, self.handlers.keydown())
            .on(EventKind::Blur, move |cx| {
                if !hide_search_box {
                    return;
                }
                if let Some(blur) = &blur {
                    blur(cx);
                }
            })
            .on(EventKind::MouseDown, EventContext::prevent_default)
            .child(text)
            .child(icon)
    }

    fn button_label(&self, option: &SelectOption) -> Element {
        Element::span()
            .node_ref("selectButtonLabel")
            .classes(self.class("selectButtonLabel"))
            .text(option.text.clone())
    }

    fn button_placeholder(&self) -> Element {
        // A non-breaking space keeps the button from collapsing.
        let text = match self.config.placeholder.as_deref() {
            Some(placeholder) if !placeholder.is_empty() => placeholder.to_string(),
            _ => "\u{a0}".to_string(),
        };

        Element::span()
            .node_ref("selectButtonPlaceholder")
            .classes(self.class("selectButtonPlaceholder"))
            .text(text)
    }

    fn select_icon(&self) -> Element {
        icons::chevron(self.class("selectButtonIcon")).node_ref("selectButtonIcon")
    }

    fn clear_icon(&self) -> Element {
        Element::span()
            .node_ref("selectButtonClearIcon")
            .classes(self.class("selectButtonClearIconWrapper"))
            .on(EventKind::Click, forward(&self.handlers.on_clear))
            .child(icons::cross(self.class("selectButtonClearIcon")))
    }

    fn dropdown(&self) -> Element {
        let mut dropdown = Element::div()
            .node_ref("dropdown")
            .classes(self.class("dropdown"));

        if !self.snapshot.show {
            dropdown = dropdown.style_prop("display", "none");
        }

        if !self.config.hide_search_box {
            dropdown = dropdown.child(self.search_wrapper());
        }

        let content = if self.snapshot.searching {
            self.feedback(&self.config.searching_text)
        } else if self.snapshot.filtered_options.is_empty() {
            self.feedback(&self.config.no_results_text)
        } else {
            self.options_list()
        };

        dropdown.child(content)
    }

    fn search_wrapper(&self) -> Element {
        Element::div()
            .node_ref("searchWrapper")
            .classes(self.class("searchWrapper"))
            .child(self.search_box())
    }

    fn search_box(&self) -> Element {
        let search = self.handlers.on_search.clone();

        Element::input()
            .node_ref("searchBox")
            .classes(self.class("searchBox"))
            .attr("value", self.snapshot.query.as_str())
            .attr("placeholder", self.config.search_box_placeholder.as_str())
            .on_handler(EventKind::KeyDown, self.handlers.keydown())
            .on(EventKind::Blur, forward(&self.handlers.on_blur))
            .on(EventKind::Input, move |cx| {
                let Some(text) = cx.value().map(str::to_string) else {
                    return;
                };
                if let Some(search) = &search {
                    search(cx, &text);
                }
            })
    }

    fn feedback(&self, text: &str) -> Element {
        Element::div()
            .node_ref("dropdownFeedback")
            .classes(self.class("dropdownFeedback"))
            .text(text)
    }

    fn options_list(&self) -> Element {
        let entries = flatten(&self.snapshot.filtered_options);
        log::trace!(
            "RichSelect::options_list {} option(s) flattened to {} row(s)",
            self.snapshot.filtered_options.len(),
            entries.len()
        );

        let rows = entries.into_iter().map(|entry| match entry {
            FlatEntry::Group(group) => self.optgroup(group),
            FlatEntry::Option { option, index } => self.option(option, index),
        });

        Element::ul()
            .node_ref("optionsList")
            .attr("tabindex", -1)
            .classes(self.class("optionsList"))
            .style_opt("max-height", self.config.max_height.normalized())
            .children(rows.collect::<Vec<_>>())
    }

    fn optgroup(&self, group: &SelectOption) -> Element {
        Element::li()
            .node_ref("optgroup")
            .data("type", "optgroup")
            .classes(self.class("optgroup"))
            .text((self.handlers.option_text)(group))
    }

    fn option(&self, option: &SelectOption, index: usize) -> Element {
        let selected = self.snapshot.is_selected(option);
        let highlighted = self.snapshot.is_highlighted(index);

        let class = match (selected, highlighted) {
            (true, true) => "selectedHighlightedOption",
            (false, true) => "highlightedOption",
            (true, false) => "selectedOption",
            (false, false) => "option",
        };

        let over = self.handlers.on_highlight.clone();
        let leave = self.handlers.on_highlight.clone();
        let choose = self.handlers.on_choose.clone();
        let chosen = option.clone();

        Element::li()
            .node_ref("option")
            .data("type", "option")
            .classes(self.class(class))
            .on(EventKind::MouseOver, move |_| {
                if let Some(highlight) = &over {
                    highlight(Some(index));
                }
            })
            .on(EventKind::MouseLeave, move |_| {
                if let Some(highlight) = &leave {
                    highlight(None);
                }
            })
            .on(EventKind::MouseDown, EventContext::prevent_default)
            .on(EventKind::Click, move |cx| {
                cx.prevent_default();
                if let Some(choose) = &choose {
                    choose(cx, &chosen);
                }
            })
            .child(self.option_content(option, selected))
    }

    fn option_content(&self, option: &SelectOption, selected: bool) -> Element {
        let mut content = Element::div()
            .node_ref("optionContent")
            .classes(self.class("optionContent"))
            .child(
                Element::span()
                    .node_ref("optionLabel")
                    .classes(self.class("optionLabel"))
                    .text(option.text.clone()),
            );

        if selected {
            content = content.child(icons::checkmark(self.class("selectedIcon")).node_ref("selectedIcon"));
        }

        content
    }
}
