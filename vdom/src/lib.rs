pub mod element;
pub mod event;
pub mod html;
pub mod types;

pub use element::{find_all_by_ref, find_by_ref, find_element, Content, Element};
pub use event::{Event, EventContext, EventKind, Handler, Key, Modifiers};
pub use html::{to_html, Html};
pub use types::*;
