use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::Content;
use crate::event::{Event, EventContext, EventKind, Handler};
use crate::types::{AttrValue, ClassList};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,
    /// Host-side reference name (`selectButton`, `dropdown`, ...).
    pub node_ref: Option<String>,

    // Markup
    pub attrs: BTreeMap<String, AttrValue>,
    pub classes: ClassList,
    /// Inline style overrides, property name to value.
    pub style: BTreeMap<String, String>,
    /// Custom data, rendered as `data-<key>` attributes.
    pub data: BTreeMap<String, String>,

    // Content
    pub content: Content,

    // Interaction
    pub handlers: Vec<(EventKind, Handler)>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".into(),
            node_ref: None,
            attrs: BTreeMap::new(),
            classes: ClassList::new(),
            style: BTreeMap::new(),
            data: BTreeMap::new(),
            content: Content::None,
            handlers: Vec::new(),
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers: Vec<EventKind> = self.handlers.iter().map(|(kind, _)| *kind).collect();
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("node_ref", &self.node_ref)
            .field("attrs", &self.attrs)
            .field("classes", &self.classes)
            .field("style", &self.style)
            .field("data", &self.data)
            .field("content", &self.content)
            .field("handlers", &handlers)
            .finish()
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn input() -> Self {
        Self::new("input")
    }

    pub fn ul() -> Self {
        Self::new("ul")
    }

    pub fn li() -> Self {
        Self::new("li")
    }

    pub fn svg() -> Self {
        Self::new("svg")
    }

    pub fn path() -> Self {
        Self::new("path")
    }

    pub fn polygon() -> Self {
        Self::new("polygon")
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn node_ref(mut self, node_ref: impl Into<String>) -> Self {
        self.node_ref = Some(node_ref.into());
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set an attribute only when a value is present.
    pub fn attr_opt<V: Into<AttrValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set a boolean attribute.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), AttrValue::Flag);
        self
    }

    /// Set a boolean attribute when `on` is true, remove it otherwise.
    pub fn flag_if(mut self, name: impl Into<String>, on: bool) -> Self {
        let name = name.into();
        if on {
            self.attrs.insert(name, AttrValue::Flag);
        } else {
            self.attrs.remove(&name);
        }
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// Textual value of an attribute.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(AttrValue::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.extend_str(&class.into());
        self
    }

    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = self.classes.merge(&classes);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    // Inline style
    pub fn style_prop(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(name.into(), value.into());
        self
    }

    /// Set a style property only when a value is present.
    pub fn style_opt(self, name: impl Into<String>, value: Option<String>) -> Self {
        match value {
            Some(value) => self.style_prop(name, value),
            None => self,
        }
    }

    pub fn style_value(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }

    pub fn children_slice(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Handlers
    pub fn on<F>(mut self, kind: EventKind, handler: F) -> Self
    where
        F: Fn(&mut EventContext) + Send + Sync + 'static,
    {
        self.handlers.push((kind, Arc::new(handler)));
        self
    }

    /// Bind an already shared handler.
    pub fn on_handler(mut self, kind: EventKind, handler: Handler) -> Self {
        self.handlers.push((kind, handler));
        self
    }

    pub fn handles(&self, kind: EventKind) -> bool {
        self.handlers.iter().any(|(k, _)| *k == kind)
    }

    /// Deliver an event to this element.
    ///
    /// Every handler bound to the event's kind runs in binding order.
    /// Events do not bubble to ancestors.
    pub fn dispatch(&self, event: Event) -> EventContext {
        let kind = event.kind();
        let mut cx = EventContext::new(event);
        let mut ran = 0;
        for (bound, handler) in &self.handlers {
            if *bound == kind {
                handler(&mut cx);
                ran += 1;
            }
        }
        log::trace!("dispatch {} on {} ran {} handler(s)", kind, self.id, ran);
        cx
    }
}
