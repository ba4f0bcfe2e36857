//! HTML serialization of an element tree.
//!
//! Output is deterministic: attributes are written in name order, followed
//! by `class`, `style` and `data-*`. Handlers and host refs are not part of
//! the markup.

use std::fmt::{self, Write};

use crate::element::{Content, Element};

const VOID_TAGS: &[&str] = &["input", "path", "polygon", "br", "img"];

/// Serialize an element and its descendants to HTML.
pub fn to_html(root: &Element) -> String {
    Html(root).to_string()
}

/// Displays an element tree as HTML.
pub struct Html<'a>(pub &'a Element);

impl fmt::Display for Html<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(self.0, f)
    }
}

fn write_element(el: &Element, out: &mut impl Write) -> fmt::Result {
    write!(out, "<{}", el.tag)?;

    for (name, value) in &el.attrs {
        write!(out, " {name}")?;
        if let Some(text) = value.as_str() {
            write!(out, "=\"{}\"", escape(text, true))?;
        }
    }

    if !el.classes.is_empty() {
        write!(out, " class=\"{}\"", escape(&el.classes.to_string(), true))?;
    }

    if !el.style.is_empty() {
        let style = el
            .style
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(out, " style=\"{}\"", escape(&style, true))?;
    }

    for (key, value) in &el.data {
        write!(out, " data-{}=\"{}\"", key, escape(value, true))?;
    }

    if VOID_TAGS.contains(&el.tag.as_str()) && el.content.is_none() {
        return out.write_str(" />");
    }

    out.write_char('>')?;
    match &el.content {
        Content::None => {}
        Content::Text(text) => out.write_str(&escape(text, false))?,
        Content::Children(children) => {
            for child in children {
                write_element(child, out)?;
            }
        }
    }
    write!(out, "</{}>", el.tag)
}

fn escape(text: &str, attr: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attr => escaped.push_str("&quot;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text_and_nbsp() {
        assert_eq!(escape("a < b & \u{a0}", false), "a &lt; b &amp; &nbsp;");
        assert_eq!(escape("\"q\"", false), "\"q\"");
        assert_eq!(escape("\"q\"", true), "&quot;q&quot;");
    }
}
