use std::fmt;
use std::sync::Arc;

/// Event kinds an element can bind handlers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseOver,
    MouseLeave,
    MouseDown,
    KeyDown,
    Blur,
    Focus,
    Input,
}

impl EventKind {
    /// DOM event name, as written in `on:<name>` bindings.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::MouseOver => "mouseover",
            EventKind::MouseLeave => "mouseleave",
            EventKind::MouseDown => "mousedown",
            EventKind::KeyDown => "keydown",
            EventKind::Blur => "blur",
            EventKind::Focus => "focus",
            EventKind::Input => "input",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Events delivered to an element by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press on the focused element
    Key { key: Key, modifiers: Modifiers },
    /// Primary-button click
    Click,
    /// Pointer entered the element
    MouseOver,
    /// Pointer left the element
    MouseLeave,
    /// Primary button pressed, before the click fires
    MouseDown,
    /// Element gained focus
    Focus,
    /// Element lost focus
    Blur,
    /// Text input value changed
    Input { value: String },
}

impl Event {
    pub fn key(key: Key) -> Self {
        Event::Key {
            key,
            modifiers: Modifiers::none(),
        }
    }

    pub fn click() -> Self {
        Event::Click
    }

    pub fn mouse_down() -> Self {
        Event::MouseDown
    }

    pub fn input(value: impl Into<String>) -> Self {
        Event::Input {
            value: value.into(),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Key { .. } => EventKind::KeyDown,
            Event::Click => EventKind::Click,
            Event::MouseOver => EventKind::MouseOver,
            Event::MouseLeave => EventKind::MouseLeave,
            Event::MouseDown => EventKind::MouseDown,
            Event::Focus => EventKind::Focus,
            Event::Blur => EventKind::Blur,
            Event::Input { .. } => EventKind::Input,
        }
    }
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    F(u8),
    /// A key the host reported but that has no mapping here.
    Unidentified,
}

impl Key {
    /// Map a DOM `KeyboardEvent.keyCode` to a key.
    pub fn from_key_code(code: u32) -> Self {
        match code {
            8 => Key::Backspace,
            9 => Key::Tab,
            13 => Key::Enter,
            27 => Key::Escape,
            32 => Key::Char(' '),
            33 => Key::PageUp,
            34 => Key::PageDown,
            35 => Key::End,
            36 => Key::Home,
            37 => Key::Left,
            38 => Key::Up,
            39 => Key::Right,
            40 => Key::Down,
            45 => Key::Insert,
            46 => Key::Delete,
            48..=57 | 65..=90 => char::from_u32(code)
                .map(|c| Key::Char(c.to_ascii_lowercase()))
                .unwrap_or(Key::Unidentified),
            112..=123 => Key::F((code - 111) as u8),
            _ => Key::Unidentified,
        }
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// An event being delivered, plus the state handlers may change.
#[derive(Debug, Clone)]
pub struct EventContext {
    pub event: Event,
    default_prevented: bool,
}

impl EventContext {
    pub fn new(event: Event) -> Self {
        Self {
            event,
            default_prevented: false,
        }
    }

    /// Suppress the host's default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// The key of a `Key` event.
    pub fn key(&self) -> Option<Key> {
        match &self.event {
            Event::Key { key, .. } => Some(*key),
            _ => None,
        }
    }

    /// The new text of an `Input` event.
    pub fn value(&self) -> Option<&str> {
        match &self.event {
            Event::Input { value } => Some(value),
            _ => None,
        }
    }
}

/// A handler bound to an element event.
pub type Handler = Arc<dyn Fn(&mut EventContext) + Send + Sync>;

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::Insert => Key::Insert,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unidentified,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::KeyEvent> for Event {
    fn from(ev: crossterm::event::KeyEvent) -> Self {
        Event::Key {
            key: ev.code.into(),
            modifiers: ev.modifiers.into(),
        }
    }
}

