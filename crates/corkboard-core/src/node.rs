//! Render tree produced by components.
//!
//! A [`Node`] is an inert description of markup: tag, attributes, class
//! tokens, children. Components build one per render; the presentation
//! layer (HTML writer, egui widgets) consumes it.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use serde::Serialize;

use crate::style::ClassList;

/// Attribute value: either a string or a bare boolean attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Flag,
}

/// An element in the render tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: BTreeMap<&'static str, AttrValue>,
    pub classes: ClassList,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: BTreeMap::new(),
            classes: ClassList::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.insert(name, AttrValue::Text(value.into()));
        self
    }

    /// Set a boolean attribute; `false` leaves it absent.
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.insert(name, AttrValue::Flag);
        }
        self
    }

    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up a text attribute.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self.attrs.get(name) {
            Some(AttrValue::Text(v)) => Some(v),
            _ => None,
        }
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Concatenated text content of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

/// A node in the render tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Serialize to HTML markup.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// Elements that never carry children or a closing tag.
const VOID_TAGS: [&str; 4] = ["input", "br", "hr", "img"];

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => write_escaped(f, text),
            Node::Element(el) => fmt::Display::fmt(el, f),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if !self.classes.is_empty() {
            f.write_str(" class=\"")?;
            write_escaped(f, &self.classes.to_string())?;
            f.write_char('"')?;
        }
        for (name, value) in &self.attrs {
            match value {
                AttrValue::Flag => write!(f, " {name}")?,
                AttrValue::Text(v) => {
                    write!(f, " {name}=\"")?;
                    write_escaped(f, v)?;
                    f.write_char('"')?;
                }
            }
        }
        f.write_char('>')?;
        if VOID_TAGS.contains(&self.tag) {
            return Ok(());
        }
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

pub(crate) fn write_escaped(out: &mut impl Write, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&#39;")?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}
