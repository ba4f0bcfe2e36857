//! Callbacks the renderer wires into the tree.
//!
//! The renderer never calls these itself; it binds them to element events
//! and the host's event delivery invokes them.

use std::fmt;
use std::sync::Arc;

use vdom::{EventContext, Handler, Key};

use crate::option::{SelectOption, guess_option_text};

/// Keys the select reacts to, mapped once from raw keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    Enter,
    Other,
}

impl From<Key> for NavKey {
    fn from(key: Key) -> Self {
        match key {
            Key::Up => NavKey::ArrowUp,
            Key::Down => NavKey::ArrowDown,
            Key::Enter => NavKey::Enter,
            _ => NavKey::Other,
        }
    }
}

/// What the user asked the select to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Trigger clicked: open or toggle the dropdown.
    Toggle,
    Focus,
    Blur,
    /// Move the highlight up and open.
    ArrowUp,
    /// Move the highlight down and open.
    ArrowDown,
    /// Confirm the highlighted or selected option.
    Confirm,
    /// Clear the selection.
    Clear,
    /// An option was picked.
    Choose(SelectOption),
    /// Search text changed.
    Search(String),
    /// Highlight moved to an index, or cleared.
    Highlight(Option<usize>),
}

pub type ChooseHandler = Arc<dyn Fn(&mut EventContext, &SelectOption) + Send + Sync>;
pub type SearchHandler = Arc<dyn Fn(&mut EventContext, &str) + Send + Sync>;
pub type HighlightHandler = Arc<dyn Fn(Option<usize>) + Send + Sync>;
pub type OptionText = Arc<dyn Fn(&SelectOption) -> String + Send + Sync>;

/// Callback bundle handed to the renderer.
///
/// Unset callbacks are no-ops.
#[derive(Clone)]
pub struct SelectHandlers {
    pub on_click: Option<Handler>,
    pub on_focus: Option<Handler>,
    pub on_blur: Option<Handler>,
    pub on_arrow_up: Option<Handler>,
    pub on_arrow_down: Option<Handler>,
    pub on_enter: Option<Handler>,
    pub on_clear: Option<Handler>,
    pub on_choose: Option<ChooseHandler>,
    pub on_search: Option<SearchHandler>,
    pub on_highlight: Option<HighlightHandler>,
    /// Label resolver for group headers.
    pub option_text: OptionText,
}

impl Default for SelectHandlers {
    fn default() -> Self {
        Self {
            on_click: None,
            on_focus: None,
            on_blur: None,
            on_arrow_up: None,
            on_arrow_down: None,
            on_enter: None,
            on_clear: None,
            on_choose: None,
            on_search: None,
            on_highlight: None,
            option_text: Arc::new(guess_option_text),
        }
    }
}

impl fmt::Debug for SelectHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectHandlers")
            .field("on_click", &self.on_click.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_arrow_up", &self.on_arrow_up.is_some())
            .field("on_arrow_down", &self.on_arrow_down.is_some())
            .field("on_enter", &self.on_enter.is_some())
            .field("on_clear", &self.on_clear.is_some())
            .field("on_choose", &self.on_choose.is_some())
            .field("on_search", &self.on_search.is_some())
            .field("on_highlight", &self.on_highlight.is_some())
            .finish_non_exhaustive()
    }
}

impl SelectHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route every callback to a single intent sink.
    pub fn from_intents<F>(sink: F) -> Self
    where
        F: Fn(Intent) + Send + Sync + 'static,
    {
        let sink = Arc::new(sink);
        let emit = |intent: Intent| {
            let sink = sink.clone();
            move |_: &mut EventContext| sink(intent.clone())
        };

        let choose = sink.clone();
        let search = sink.clone();
        let highlight = sink.clone();

        Self::new()
            .on_click(emit(Intent::Toggle))
            .on_focus(emit(Intent::Focus))
            .on_blur(emit(Intent::Blur))
            .on_arrow_up(emit(Intent::ArrowUp))
            .on_arrow_down(emit(Intent::ArrowDown))
            .on_enter(emit(Intent::Confirm))
            .on_clear(emit(Intent::Clear))
            .on_choose(move |_, option| choose(Intent::Choose(option.clone())))
            .on_search(move |_, text| search(Intent::Search(text.to_string())))
            .on_highlight(move |index| highlight(Intent::Highlight(index)))
    }

    pub fn on_click(mut self, f: impl Fn(&mut EventContext) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(f));
        self
    }

    pub fn on_focus(mut self, f: impl Fn(&mut EventContext) + Send + Sync + 'static) -> Self {
        self.on_focus = Some(Arc::new(f));
        self
    }

    pub fn on_blur(mut self, f: impl Fn(&mut EventContext) + Send + Sync + 'static) -> Self {
        self.on_blur = Some(Arc::new(f));
        self
    }

    pub fn on_arrow_up(mut self, f: impl Fn(&mut EventContext) + Send + Sync + 'static) -> Self {
        self.on_arrow_up = Some(Arc::new(f));
        self
    }

    pub fn on_arrow_down(mut self, f: impl Fn(&mut EventContext) + Send + Sync + 'static) -> Self {
        self.on_arrow_down = Some(Arc::new(f));
        self
    }

    pub fn on_enter(mut self, f: impl Fn(&mut EventContext) + Send + Sync + 'static) -> Self {
        self.on_enter = Some(Arc::new(f));
        self
    }

    pub fn on_clear(mut self, f: impl Fn(&mut EventContext) + Send + Sync + 'static) -> Self {
        self.on_clear = Some(Arc::new(f));
        self
    }

    pub fn on_choose(
        mut self,
        f: impl Fn(&mut EventContext, &SelectOption) + Send + Sync + 'static,
    ) -> Self {
        self.on_choose = Some(Arc::new(f));
        self
    }

    pub fn on_search(mut self, f: impl Fn(&mut EventContext, &str) + Send + Sync + 'static) -> Self {
        self.on_search = Some(Arc::new(f));
        self
    }

    pub fn on_highlight(mut self, f: impl Fn(Option<usize>) + Send + Sync + 'static) -> Self {
        self.on_highlight = Some(Arc::new(f));
        self
    }

    pub fn option_text(mut self, f: impl Fn(&SelectOption) -> String + Send + Sync + 'static) -> Self {
        self.option_text = Arc::new(f);
        self
    }

    /// Element handler mapping navigation keys to the arrow and enter callbacks.
    ///
    /// Shared by the trigger button and the search box.
    pub(crate) fn keydown(&self) -> Handler {
        let up = self.on_arrow_up.clone();
        let down = self.on_arrow_down.clone();
        let enter = self.on_enter.clone();

        Arc::new(move |cx: &mut EventContext| {
            let Some(key) = cx.key() else {
                return;
            };
            let handler = match NavKey::from(key) {
                NavKey::ArrowDown => &down,
                NavKey::ArrowUp => &up,
                NavKey::Enter => &enter,
                NavKey::Other => return,
            };
            if let Some(handler) = handler {
                handler(cx);
            }
        })
    }
}

/// Element handler invoking an optional callback.
pub(crate) fn forward(callback: &Option<Handler>) -> impl Fn(&mut EventContext) + Send + Sync + 'static {
    let callback = callback.clone();
    move |cx: &mut EventContext| {
        if let Some(callback) = &callback {
            callback(cx);
        }
    }
}
