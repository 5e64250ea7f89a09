//! Touchable: a focusable, clickable region.
//!
//! Normalizes three kinds of platform input into the caller's callbacks:
//!
//! - **Click** anywhere inside the region fires `on_touch`
//! - **Space/Enter** while focused fires `on_touch` and suppresses the
//!   platform default (page scroll on space)
//! - **Pointer enter/leave** are forwarded as-is
//!
//! The component holds no state of its own. Handlers read the props the
//! value was built with, so a fresh `Touchable` per render always dispatches
//! against current props.

use serde::{Deserialize, Serialize};

use crate::event::{ActivationEvent, Callback, HoverEvent, KeyboardEvent, PointerEvent};
use crate::node::{Element, Node};
use crate::style::{
    ClassList, FULL_WIDTH_CLASS, MouseCursor, Shape, StyleError, StyleResult, TOUCHABLE_CLASS,
};

/// Presentation options of a touchable region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TouchableStyle {
    pub full_width: bool,
    pub mouse_cursor: MouseCursor,
    pub shape: Shape,
}

impl Default for TouchableStyle {
    fn default() -> Self {
        Self {
            full_width: true,
            mouse_cursor: MouseCursor::Pointer,
            shape: Shape::Square,
        }
    }
}

impl TouchableStyle {
    /// Parse style options from JSON, e.g. `{"shape": "pill", "fullWidth": false}`.
    ///
    /// Omitted fields take their defaults.
    pub fn from_json(json: &str) -> StyleResult<Self> {
        serde_json::from_str(json).map_err(|e| StyleError::Config(e.to_string()))
    }

    /// Resolve the class tokens for these options.
    ///
    /// Always `touchable`, then the cursor token, then the shape token, then
    /// `fullWidth` when set.
    pub fn resolve_classes(&self) -> ClassList {
        let mut classes = ClassList::new();
        classes.push(TOUCHABLE_CLASS);
        classes.push(self.mouse_cursor.class());
        classes.push(self.shape.class());
        classes.push_if(FULL_WIDTH_CLASS, self.full_width);
        classes
    }
}

/// A touchable region and the callbacks it dispatches to.
#[derive(Debug, Clone, Default)]
pub struct Touchable {
    style: TouchableStyle,
    on_touch: Option<Callback<ActivationEvent>>,
    on_mouse_enter: Option<Callback<HoverEvent>>,
    on_mouse_leave: Option<Callback<HoverEvent>>,
    children: Vec<Node>,
}

impl Touchable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: TouchableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.style.full_width = full_width;
        self
    }

    pub fn mouse_cursor(mut self, cursor: MouseCursor) -> Self {
        self.style.mouse_cursor = cursor;
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.style.shape = shape;
        self
    }

    pub fn on_touch(mut self, cb: impl Into<Callback<ActivationEvent>>) -> Self {
        self.on_touch = Some(cb.into());
        self
    }

    pub fn on_mouse_enter(mut self, cb: impl Into<Callback<HoverEvent>>) -> Self {
        self.on_mouse_enter = Some(cb.into());
        self
    }

    pub fn on_mouse_leave(mut self, cb: impl Into<Callback<HoverEvent>>) -> Self {
        self.on_mouse_leave = Some(cb.into());
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

    pub fn get_style(&self) -> TouchableStyle {
        self.style
    }

    pub fn resolve_classes(&self) -> ClassList {
        self.style.resolve_classes()
    }

    /// Render the region: a `div` with button role in the tab order.
    pub fn render(&self) -> Node {
        Element::new("div")
            .classes(self.resolve_classes())
            .attr("role", "button")
            .attr("tabindex", "0")
            .children(self.children.iter().cloned())
            .into()
    }

    /// Handle a click inside the region. Returns whether `on_touch` fired.
    pub fn handle_click(&self, event: PointerEvent) -> bool {
        let Some(on_touch) = &self.on_touch else {
            return false;
        };
        log::debug!("touchable activated by click at ({}, {})", event.x, event.y);
        on_touch.emit(ActivationEvent {
            event: event.into(),
        });
        true
    }

    /// Handle a key press while focused. Returns whether `on_touch` fired.
    ///
    /// Only space and enter activate, and only when `on_touch` is set. In
    /// that case the default action is suppressed before the callback runs;
    /// every other key leaves the event untouched.
    pub fn handle_key_press(&self, event: &mut KeyboardEvent) -> bool {
        let Some(on_touch) = &self.on_touch else {
            return false;
        };
        if !event.is_activation_key() {
            log::trace!("touchable ignoring key code {}", event.char_code);
            return false;
        }
        event.prevent_default();
        log::debug!("touchable activated by key code {}", event.char_code);
        on_touch.emit(ActivationEvent {
            event: event.clone().into(),
        });
        true
    }

    /// Forward a pointer-enter to `on_mouse_enter`, if set.
    pub fn handle_mouse_enter(&self, event: PointerEvent) {
        if let Some(cb) = &self.on_mouse_enter {
            cb.emit(HoverEvent { event });
        }
    }

    /// Forward a pointer-leave to `on_mouse_leave`, if set.
    pub fn handle_mouse_leave(&self, event: PointerEvent) {
        if let Some(cb) = &self.on_mouse_leave {
            cb.emit(HoverEvent { event });
        }
    }
}
