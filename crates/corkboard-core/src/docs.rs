//! Documentation metadata: prop tables, examples, combination grids.
//!
//! This is data for a documentation renderer. [`ComponentDoc::render`]
//! builds a plain render tree of it so the docs binary can dump HTML without
//! a separate templating layer.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::checkbox::{Checkbox, CheckboxChange};
use crate::event::Callback;
use crate::label::Label;
use crate::node::{Element, Node};
use crate::style::{ClassList, MouseCursor, Shape};
use crate::touchable::Touchable;

/// One row of a prop table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDoc {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub type_desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl PropDoc {
    pub fn new(name: &'static str, type_desc: impl Into<String>) -> Self {
        Self {
            name,
            type_desc: type_desc.into(),
            default_value: None,
            required: false,
            description: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// A titled example with its source snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleDoc {
    pub heading: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

/// Everything documented about one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentDoc {
    pub name: &'static str,
    pub description: &'static str,
    pub props: Vec<PropDoc>,
    pub examples: Vec<ExampleDoc>,
    /// Rendered previews, e.g. every combination of a component's options.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub previews: Vec<Node>,
}

impl ComponentDoc {
    /// Look up a prop row by name.
    pub fn prop(&self, name: &str) -> Option<&PropDoc> {
        self.props.iter().find(|p| p.name == name)
    }

    /// Render as a documentation card.
    pub fn render(&self) -> Node {
        let mut card = Element::new("section")
            .classes(ClassList::new().with("card"))
            .attr("id", self.name.to_lowercase())
            .child(Element::new("h2").child(self.name))
            .child(Element::new("p").child(self.description))
            .child(self.render_prop_table());

        for example in &self.examples {
            card = card
                .child(Element::new("h3").child(example.heading))
                .child(Element::new("p").child(example.description))
                .child(Element::new("pre").child(Element::new("code").child(example.code.trim())));
        }

        if !self.previews.is_empty() {
            card = card.child(
                Element::new("div")
                    .classes(ClassList::new().with("combinations"))
                    .children(self.previews.iter().cloned()),
            );
        }
        card.into()
    }

    fn render_prop_table(&self) -> Element {
        let header = ["Name", "Type", "Default", "Required", "Description"]
            .into_iter()
            .fold(Element::new("tr"), |row, h| row.child(Element::new("th").child(h)));

        let rows = self.props.iter().map(|prop| {
            let cell = |text: &str| Node::from(Element::new("td").child(text));
            Node::from(Element::new("tr").children([
                Node::from(Element::new("td").child(Element::new("code").child(prop.name))),
                cell(prop.type_desc.as_str()),
                cell(prop.default_value.as_deref().unwrap_or("")),
                cell(if prop.required { "yes" } else { "" }),
                cell(prop.description.unwrap_or("")),
            ]))
        });

        Element::new("table")
            .classes(ClassList::new().with("props"))
            .child(header)
            .children(rows)
    }
}

/// Named axes of values whose cartesian product is rendered side by side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Combination {
    axes: Vec<(&'static str, Vec<Value>)>,
}

impl Combination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an axis. Values that fail to serialize are skipped.
    pub fn axis<V: Serialize>(mut self, name: &'static str, values: impl IntoIterator<Item = V>) -> Self {
        let values = values
            .into_iter()
            .filter_map(|v| match serde_json::to_value(v) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("skipping unserializable value on axis {name}: {e}");
                    None
                }
            })
            .collect();
        self.axes.push((name, values));
        self
    }

    /// Number of assignments (product of axis lengths).
    pub fn len(&self) -> usize {
        if self.axes.is_empty() {
            return 0;
        }
        self.axes.iter().map(|(_, values)| values.len()).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every assignment in row-major order: the last axis varies fastest.
    pub fn iter(&self) -> impl Iterator<Item = Map<String, Value>> + '_ {
        (0..self.len()).map(move |mut index| {
            let mut assignment = Map::new();
            for (name, values) in self.axes.iter().rev() {
                let value = values[index % values.len()].clone();
                index /= values.len();
                assignment.insert((*name).to_string(), value);
            }
            assignment
        })
    }
}

pub fn touchable_doc() -> ComponentDoc {
    let shapes = Shape::ALL
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(" | ");
    let cursors = MouseCursor::ALL
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(" | ");

    let previews = Shape::ALL
        .iter()
        .map(|&shape| {
            Touchable::new()
                .shape(shape)
                .full_width(false)
                .child(shape.class())
                .render()
        })
        .collect();

    ComponentDoc {
        name: "Touchable",
        description: "A focusable, clickable region. Clicks and Space/Enter key presses call on_touch.",
        props: vec![
            PropDoc::new("children", "Node"),
            PropDoc::new("full_width", "bool").default_value("true"),
            PropDoc::new("mouse_cursor", cursors).default_value("\"pointer\""),
            PropDoc::new("on_mouse_enter", "Fn(HoverEvent)"),
            PropDoc::new("on_mouse_leave", "Fn(HoverEvent)"),
            PropDoc::new("on_touch", "Fn(ActivationEvent)"),
            PropDoc::new("shape", shapes).default_value("\"square\""),
        ],
        examples: vec![ExampleDoc {
            heading: "Example: Pill",
            description: "Keyboard users can activate a touchable with Space or Enter once it has focus.",
            code: r#"
Touchable::new()
    .shape(Shape::Pill)
    .mouse_cursor(MouseCursor::Grab)
    .full_width(false)
    .on_touch(|_: ActivationEvent| log::info!("touched"))
    .child("Drag me")
"#,
        }],
        previews,
    }
}

pub fn label_doc() -> ComponentDoc {
    ComponentDoc {
        name: "Label",
        description: "Associates content with a form control, so clicking the label focuses the control.",
        props: vec![
            PropDoc::new("children", "Node").required(),
            PropDoc::new("html_for", "String")
                .required()
                .description("Id of the control this label describes."),
        ],
        examples: Vec::new(),
        previews: vec![Label::new("usa", "United States of America").render()],
    }
}

pub fn checkbox_doc() -> ComponentDoc {
    let noop: Callback<CheckboxChange> = Callback::new(|_| {});
    let previews = Checkbox::combinations(noop)
        .iter()
        .map(Checkbox::render)
        .collect();

    ComponentDoc {
        name: "Checkbox",
        description: "We recommend using a Checkbox over a Switch when you have a long list (>3) of toggles.",
        props: vec![
            PropDoc::new("checked", "bool").default_value("false"),
            PropDoc::new("disabled", "bool").default_value("false"),
            PropDoc::new("id", "String").required(),
            PropDoc::new("indeterminate", "bool")
                .default_value("false")
                .description(
                    "Indeterminism is purely presentational: the value of a checkbox and its indeterminism are independent.",
                ),
            PropDoc::new("name", "String"),
            PropDoc::new("on_change", "Fn(CheckboxChange { event, checked })").required(),
            PropDoc::new("size", "\"sm\" | \"md\"")
                .default_value("\"md\"")
                .description("\"sm\" is 16px and \"md\" is 24px"),
        ],
        examples: vec![
            ExampleDoc {
                heading: "Example: Accessibility",
                description: "Provide accessible labels to make checkboxes usable. Padding instead of margin around the label enlarges the clickable area.",
                code: r#"
let checked = Rc::new(Cell::new(true));
let state = Rc::clone(&checked);
Element::new("div")
    .child(Checkbox::new("usa", move |c: CheckboxChange| state.set(c.checked))
        .name("usa")
        .checked(checked.get())
        .render())
    .child(Label::new("usa", "United States of America").render())
"#,
            },
            ExampleDoc {
                heading: "Example: Labeled stack",
                description: "Lots of checkboxes can be stacked on top of one another.",
                code: r#"
let row = |id: &str, label: &str| {
    Element::new("div")
        .child(Checkbox::new(id, |_: CheckboxChange| {}).checked(true).render())
        .child(Label::new(id, label).render())
};
Element::new("div")
    .child(row("email", "Email"))
    .child(row("push", "Mobile push"))
    .child(row("pidgeon", "Carrier pidgeon"))
"#,
            },
        ],
        previews,
    }
}

/// Docs for every component, in display order.
pub fn all_docs() -> Vec<ComponentDoc> {
    vec![touchable_doc(), label_doc(), checkbox_doc()]
}
