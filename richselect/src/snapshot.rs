//! UI state read by the renderer.

use crate::option::{OptionValue, SelectOption};

/// Snapshot of the host's select state for one render.
///
/// The host owns and mutates this state; the renderer only reads it. When
/// `highlighted` is set it should index the flattened selectable options,
/// but an out-of-range value simply highlights nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectSnapshot {
    /// The selected option.
    pub selection: Option<SelectOption>,
    /// The current value. Falls back to the selection's value when unset.
    pub value: Option<OptionValue>,
    /// Search box text.
    pub query: String,
    /// Highlighted index into the flattened selectable options.
    pub highlighted: Option<usize>,
    /// Whether the dropdown panel is visible.
    pub show: bool,
    /// Whether a search is in flight.
    pub searching: bool,
    /// Options left after the host's filtering, in display order.
    pub filtered_options: Vec<SelectOption>,
}

impl SelectSnapshot {
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            filtered_options: options.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn selection(mut self, option: SelectOption) -> Self {
        self.selection = Some(option);
        self
    }

    pub fn value(mut self, value: impl Into<OptionValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn highlighted(mut self, index: usize) -> Self {
        self.highlighted = Some(index);
        self
    }

    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn searching(mut self, searching: bool) -> Self {
        self.searching = searching;
        self
    }

    /// The value options are compared against to decide which is selected.
    pub fn current_value(&self) -> Option<&OptionValue> {
        self.value
            .as_ref()
            .or_else(|| self.selection.as_ref().map(|option| &option.value))
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.current_value()
            .is_some_and(|value| option.has_value(value))
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted == Some(index)
    }
}
