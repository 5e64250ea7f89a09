//! Checkbox: a native checkbox input with a styled visual box.
//!
//! `checked` and `indeterminate` are independent. Indeterminate only changes
//! the look (a dash instead of a check); the value reported on change is
//! always derived from `checked`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::docs::Combination;
use crate::event::{Callback, KeyboardEvent, SPACE_CHAR_CODE, SourceEvent};
use crate::node::{Element, Node};
use crate::style::{CheckboxSize, ClassList, StyleError, StyleResult};

/// Payload passed to `on_change`.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxChange {
    pub event: SourceEvent,
    pub checked: bool,
}

/// Mark drawn inside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Glyph {
    Check,
    Dash,
}

/// Optional presentation state of a checkbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CheckboxOptions {
    pub checked: bool,
    pub disabled: bool,
    pub indeterminate: bool,
    pub size: CheckboxSize,
}

impl CheckboxOptions {
    /// Class tokens of the visual box.
    pub fn resolve_classes(&self) -> ClassList {
        let mut classes = ClassList::new();
        classes.push("box");
        classes.push(self.size.class());
        classes.push_if("checked", self.checked || self.indeterminate);
        classes.push_if("disabled", self.disabled);
        classes.push_if("indeterminate", self.indeterminate);
        classes
    }

    pub fn glyph(&self) -> Option<Glyph> {
        if self.indeterminate {
            Some(Glyph::Dash)
        } else if self.checked {
            Some(Glyph::Check)
        } else {
            None
        }
    }
}

/// A checkbox control.
#[derive(Debug, Clone)]
pub struct Checkbox {
    id: String,
    name: Option<String>,
    options: CheckboxOptions,
    on_change: Callback<CheckboxChange>,
}

impl Checkbox {
    pub fn new(id: impl Into<String>, on_change: impl Into<Callback<CheckboxChange>>) -> Self {
        Self {
            id: id.into(),
            name: None,
            options: CheckboxOptions::default(),
            on_change: on_change.into(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn options(mut self, options: CheckboxOptions) -> Self {
        self.options = options;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.options.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.options.disabled = disabled;
        self
    }

    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.options.indeterminate = indeterminate;
        self
    }

    pub fn size(mut self, size: CheckboxSize) -> Self {
        self.options.size = size;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get_options(&self) -> CheckboxOptions {
        self.options
    }

    pub fn resolve_classes(&self) -> ClassList {
        self.options.resolve_classes()
    }

    pub fn render(&self) -> Node {
        let mut input = Element::new("input")
            .classes(ClassList::new().with("input"))
            .attr("type", "checkbox")
            .attr("id", self.id.clone())
            .flag("checked", self.options.checked)
            .flag("disabled", self.options.disabled);
        if let Some(name) = &self.name {
            input = input.attr("name", name.clone());
        }

        let mut visual = Element::new("div").classes(self.resolve_classes());
        if let Some(glyph) = self.options.glyph() {
            let icon = match glyph {
                Glyph::Check => "check",
                Glyph::Dash => "dash",
            };
            visual = visual.child(Element::new("span").attr("data-icon", icon));
        }

        Element::new("div")
            .classes(ClassList::new().with("checkbox"))
            .child(input)
            .child(visual)
            .into()
    }

    /// Handle the native input toggling.
    ///
    /// Emits the flipped value and returns it; disabled checkboxes emit
    /// nothing.
    pub fn handle_change(&self, event: impl Into<SourceEvent>) -> Option<bool> {
        if self.options.disabled {
            return None;
        }
        let checked = !self.options.checked;
        log::debug!("checkbox {} changed to {}", self.id, checked);
        self.on_change.emit(CheckboxChange {
            event: event.into(),
            checked,
        });
        Some(checked)
    }

    /// Handle a key press while focused: space toggles, like a native input.
    pub fn handle_key_press(&self, event: &mut KeyboardEvent) -> Option<bool> {
        if event.char_code != SPACE_CHAR_CODE || self.options.disabled {
            return None;
        }
        event.prevent_default();
        self.handle_change(event.clone())
    }

    /// The checked x disabled x indeterminate x size grid used by the docs,
    /// with ids `example-{i}`.
    pub fn combinations(on_change: impl Into<Callback<CheckboxChange>>) -> Vec<Checkbox> {
        let on_change = on_change.into();
        checkbox_grid()
            .iter()
            .enumerate()
            .filter_map(|(i, assignment)| match options_from_assignment(assignment) {
                Ok(options) => {
                    Some(Checkbox::new(format!("example-{i}"), on_change.clone()).options(options))
                }
                Err(e) => {
                    log::warn!("skipping checkbox combination {i}: {e}");
                    None
                }
            })
            .collect()
    }
}

/// Options for one grid assignment; unknown axes are rejected.
pub fn options_from_assignment(assignment: Map<String, Value>) -> StyleResult<CheckboxOptions> {
    serde_json::from_value(Value::Object(assignment)).map_err(|e| StyleError::Config(e.to_string()))
}

/// Axes of the documentation grid.
pub fn checkbox_grid() -> Combination {
    Combination::new()
        .axis("checked", [false, true])
        .axis("disabled", [false, true])
        .axis("indeterminate", [false, true])
        .axis("size", [CheckboxSize::Sm, CheckboxSize::Md])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PointerEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, Callback<CheckboxChange>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let cb = Callback::new(move |c: CheckboxChange| sink.borrow_mut().push(c.checked));
        (log, cb)
    }

    #[test]
    fn test_box_classes() {
        let (_, cb) = recorder();
        let cases = [
            (false, false, false, CheckboxSize::Md, vec!["box", "md"], None),
            (true, false, false, CheckboxSize::Sm, vec!["box", "sm", "checked"], Some(Glyph::Check)),
            (
                false,
                false,
                true,
                CheckboxSize::Md,
                vec!["box", "md", "checked", "indeterminate"],
                Some(Glyph::Dash),
            ),
            (
                true,
                true,
                true,
                CheckboxSize::Sm,
                vec!["box", "sm", "checked", "disabled", "indeterminate"],
                Some(Glyph::Dash),
            ),
            (false, true, false, CheckboxSize::Md, vec!["box", "md", "disabled"], None),
        ];

        for (checked, disabled, indeterminate, size, classes, glyph) in cases {
            let checkbox = Checkbox::new("c", cb.clone())
                .checked(checked)
                .disabled(disabled)
                .indeterminate(indeterminate)
                .size(size);
            assert_eq!(checkbox.resolve_classes().as_slice(), classes.as_slice());
            assert_eq!(checkbox.get_options().glyph(), glyph);
        }
    }

    #[test]
    fn test_change_flips_checked() {
        let (log, cb) = recorder();
        Checkbox::new("a", cb.clone()).handle_change(PointerEvent::default());
        Checkbox::new("a", cb).checked(true).handle_change(PointerEvent::default());
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[test]
    fn test_indeterminate_does_not_change_value() {
        let (log, cb) = recorder();
        let checkbox = Checkbox::new("a", cb).indeterminate(true);
        assert_eq!(checkbox.handle_change(PointerEvent::default()), Some(true));
        assert_eq!(*log.borrow(), vec![true]);
    }

    #[test]
    fn test_disabled_emits_nothing() {
        let (log, cb) = recorder();
        let checkbox = Checkbox::new("a", cb).disabled(true);
        assert_eq!(checkbox.handle_change(PointerEvent::default()), None);

        let mut space = KeyboardEvent::from_char(' ');
        assert_eq!(checkbox.handle_key_press(&mut space), None);
        assert!(!space.default_prevented());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_space_toggles() {
        let (log, cb) = recorder();
        let checkbox = Checkbox::new("a", cb);

        let mut enter = KeyboardEvent::from_char('\r');
        assert_eq!(checkbox.handle_key_press(&mut enter), None);
        assert!(!enter.default_prevented());

        let mut space = KeyboardEvent::from_char(' ');
        assert_eq!(checkbox.handle_key_press(&mut space), Some(true));
        assert!(space.default_prevented());
        assert_eq!(*log.borrow(), vec![true]);
    }

    #[test]
    fn test_render() {
        let (_, cb) = recorder();
        let node = Checkbox::new("usa", cb).name("usa").checked(true).render();
        assert_eq!(
            node.to_html(),
            concat!(
                r#"<div class="checkbox">"#,
                r#"<input class="input" checked id="usa" name="usa" type="checkbox">"#,
                r#"<div class="box md checked"><span data-icon="check"></span></div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_bad_assignment_is_rejected() {
        let mut assignment = Map::new();
        assignment.insert("size".into(), serde_json::json!("xl"));
        assert!(matches!(options_from_assignment(assignment), Err(StyleError::Config(_))));

        let mut assignment = Map::new();
        assignment.insert("color".into(), serde_json::json!("red"));
        assert!(options_from_assignment(assignment).is_err());

        let mut assignment = Map::new();
        assignment.insert("checked".into(), serde_json::json!(true));
        assert_eq!(
            options_from_assignment(assignment).unwrap(),
            CheckboxOptions {
                checked: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_combinations() {
        let (_, cb) = recorder();
        let grid = Checkbox::combinations(cb);
        assert_eq!(grid.len(), 16);
        assert_eq!(grid[0].id(), "example-0");
        assert_eq!(grid[0].get_options(), CheckboxOptions {
            size: CheckboxSize::Sm,
            ..Default::default()
        });
        assert_eq!(grid[1].get_options().size, CheckboxSize::Md);
        assert_eq!(grid[15].id(), "example-15");
        assert_eq!(grid[15].get_options(), CheckboxOptions {
            checked: true,
            disabled: true,
            indeterminate: true,
            size: CheckboxSize::Md,
        });
    }
}
