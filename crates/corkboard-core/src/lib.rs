//! Corkboard Core Library
//!
//! Platform-agnostic component model for the Corkboard widgets: style
//! tokens, a render tree, and the Touchable, Label and Checkbox components
//! with their event handling.

pub mod checkbox;
pub mod docs;
pub mod event;
pub mod label;
pub mod node;
pub mod style;
pub mod touchable;

pub use checkbox::{Checkbox, CheckboxChange, CheckboxOptions, Glyph};
pub use docs::{ComponentDoc, Combination, ExampleDoc, PropDoc, all_docs};
pub use event::{
    ActivationEvent, Callback, ENTER_CHAR_CODE, HoverEvent, KeyboardEvent, Modifiers, MouseButton,
    PointerEvent, SPACE_CHAR_CODE, SourceEvent,
};
pub use label::Label;
pub use node::{AttrValue, Element, Node};
pub use style::{CheckboxSize, ClassList, MouseCursor, Shape, StyleError, StyleResult};
pub use touchable::{Touchable, TouchableStyle};
