//! Label: associates content with a control through the control's id.

use crate::node::{Element, Node};
use crate::style::{ClassList, LABEL_CLASS};

/// A form label bound to the control whose id is `html_for`.
///
/// Both fields are required, so they are constructor arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    html_for: String,
    children: Node,
}

impl Label {
    pub fn new(html_for: impl Into<String>, children: impl Into<Node>) -> Self {
        Self {
            html_for: html_for.into(),
            children: children.into(),
        }
    }

    pub fn html_for(&self) -> &str {
        &self.html_for
    }

    pub fn content(&self) -> &Node {
        &self.children
    }

    pub fn render(&self) -> Node {
        Element::new("label")
            .classes(ClassList::new().with(LABEL_CLASS))
            .attr("for", self.html_for.clone())
            .child(self.children.clone())
            .into()
    }
}
