//! Platform events and the callback type components dispatch them through.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Character code of the space bar.
pub const SPACE_CHAR_CODE: u32 = 32;
/// Character code of the enter/return key.
pub const ENTER_CHAR_CODE: u32 = 13;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A pointer event delivered to a component (click, enter, leave).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }
}

/// A key press delivered to a focused component.
///
/// Mirrors the platform's key-press event: a character code plus a flag
/// recording whether a handler asked to suppress the default action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardEvent {
    pub char_code: u32,
    pub modifiers: Modifiers,
    default_prevented: bool,
}

impl KeyboardEvent {
    pub fn new(char_code: u32) -> Self {
        Self {
            char_code,
            ..Default::default()
        }
    }

    /// Key press for a character; `'\n'` and `'\r'` map to enter.
    pub fn from_char(c: char) -> Self {
        match c {
            '\n' | '\r' => Self::new(ENTER_CHAR_CODE),
            c => Self::new(c as u32),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Ask the platform not to perform its default action for this key.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether this key activates a focused control (space or enter).
    pub fn is_activation_key(&self) -> bool {
        matches!(self.char_code, SPACE_CHAR_CODE | ENTER_CHAR_CODE)
    }
}

/// The platform event a synthetic event was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SourceEvent {
    Pointer(PointerEvent),
    Keyboard(KeyboardEvent),
}

impl From<PointerEvent> for SourceEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}

impl From<KeyboardEvent> for SourceEvent {
    fn from(event: KeyboardEvent) -> Self {
        Self::Keyboard(event)
    }
}

/// Payload passed to `on_touch`: "this control was invoked".
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationEvent {
    pub event: SourceEvent,
}

/// Payload passed to hover callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverEvent {
    pub event: PointerEvent,
}

/// A caller-supplied callback.
///
/// Cheap to clone; components invoke it and never keep it past the call.
pub struct Callback<T>(Rc<dyn Fn(T)>);

impl<T> Callback<T> {
    pub fn new(f: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn emit(&self, value: T) {
        (self.0)(value)
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for Callback<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

impl<T, F: Fn(T) + 'static> From<F> for Callback<T> {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
