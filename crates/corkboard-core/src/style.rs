//! Style enumerations and the class-token tables they resolve through.
//!
//! Every enumerated option maps to exactly one class token. The tables are
//! plain `const` arrays indexed by discriminant, so lookups never allocate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing style options from strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("Unknown shape: {0}")]
    UnknownShape(String),
    #[error("Unknown mouse cursor: {0}")]
    UnknownCursor(String),
    #[error("Unknown checkbox size: {0}")]
    UnknownSize(String),
    #[error("Invalid style configuration: {0}")]
    Config(String),
}

/// Result type for style parsing.
pub type StyleResult<T> = Result<T, StyleError>;

/// Base token carried by every touchable region.
pub const TOUCHABLE_CLASS: &str = "touchable";
/// Token added when a touchable stretches to its container.
pub const FULL_WIDTH_CLASS: &str = "fullWidth";
/// Token carried by every label.
pub const LABEL_CLASS: &str = "label";

const SHAPE_CLASSES: [&str; 8] = [
    "square",
    "rounded",
    "pill",
    "circle",
    "roundedTop",
    "roundedBottom",
    "roundedLeft",
    "roundedRight",
];

const CURSOR_CLASSES: [&str; 8] = [
    "copy", "grab", "grabbing", "move", "noDrop", "pointer", "zoomIn", "zoomOut",
];

const SIZE_CLASSES: [&str; 2] = ["sm", "md"];

/// Outline of an interactive region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shape {
    #[default]
    Square,
    Rounded,
    Pill,
    Circle,
    RoundedTop,
    RoundedBottom,
    RoundedLeft,
    RoundedRight,
}

impl Shape {
    /// All shapes, in table order.
    pub const ALL: [Shape; 8] = [
        Shape::Square,
        Shape::Rounded,
        Shape::Pill,
        Shape::Circle,
        Shape::RoundedTop,
        Shape::RoundedBottom,
        Shape::RoundedLeft,
        Shape::RoundedRight,
    ];

    /// Class token for this shape.
    pub const fn class(self) -> &'static str {
        SHAPE_CLASSES[self as usize]
    }
}

/// Mouse cursor shown while hovering an interactive region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MouseCursor {
    Copy,
    Grab,
    Grabbing,
    Move,
    NoDrop,
    #[default]
    Pointer,
    ZoomIn,
    ZoomOut,
}

impl MouseCursor {
    /// All cursors, in table order.
    pub const ALL: [MouseCursor; 8] = [
        MouseCursor::Copy,
        MouseCursor::Grab,
        MouseCursor::Grabbing,
        MouseCursor::Move,
        MouseCursor::NoDrop,
        MouseCursor::Pointer,
        MouseCursor::ZoomIn,
        MouseCursor::ZoomOut,
    ];

    /// Class token for this cursor.
    pub const fn class(self) -> &'static str {
        CURSOR_CLASSES[self as usize]
    }
}

/// Checkbox box size. `Sm` is 16px, `Md` is 24px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckboxSize {
    Sm,
    #[default]
    Md,
}

impl CheckboxSize {
    pub const ALL: [CheckboxSize; 2] = [CheckboxSize::Sm, CheckboxSize::Md];

    /// Class token for this size.
    pub const fn class(self) -> &'static str {
        SIZE_CLASSES[self as usize]
    }

    /// Edge length in pixels.
    pub const fn pixels(self) -> f32 {
        match self {
            CheckboxSize::Sm => 16.0,
            CheckboxSize::Md => 24.0,
        }
    }
}

macro_rules! token_conversions {
    ($ty:ty, $err:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.class())
            }
        }

        impl FromStr for $ty {
            type Err = StyleError;

            fn from_str(s: &str) -> StyleResult<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.class() == s)
                    .ok_or_else(|| StyleError::$err(s.to_string()))
            }
        }
    };
}

token_conversions!(Shape, UnknownShape);
token_conversions!(MouseCursor, UnknownCursor);
token_conversions!(CheckboxSize, UnknownSize);

/// An ordered set of class tokens.
///
/// Insertion order is kept so rendered output is stable; duplicates are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClassList(Vec<&'static str>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token unless already present.
    pub fn push(&mut self, token: &'static str) {
        if !self.0.contains(&token) {
            self.0.push(token);
        }
    }

    /// Add a token only when `condition` holds.
    pub fn push_if(&mut self, token: &'static str, condition: bool) {
        if condition {
            self.push(token);
        }
    }

    /// Builder form of [`ClassList::push`].
    pub fn with(mut self, token: &'static str) -> Self {
        self.push(token);
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| *t == token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'static str] {
        &self.0
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl<'a> IntoIterator for &'a ClassList {
    type Item = &'static str;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, &'static str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique_per_table() {
        for (i, a) in Shape::ALL.iter().enumerate() {
            for b in &Shape::ALL[i + 1..] {
                assert_ne!(a.class(), b.class());
            }
        }
        for (i, a) in MouseCursor::ALL.iter().enumerate() {
            for b in &MouseCursor::ALL[i + 1..] {
                assert_ne!(a.class(), b.class());
            }
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Shape::default(), Shape::Square);
        assert_eq!(MouseCursor::default(), MouseCursor::Pointer);
        assert_eq!(CheckboxSize::default(), CheckboxSize::Md);
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("noDrop".parse::<MouseCursor>(), Ok(MouseCursor::NoDrop));
        assert_eq!("roundedLeft".parse::<Shape>(), Ok(Shape::RoundedLeft));
        assert_eq!("sm".parse::<CheckboxSize>(), Ok(CheckboxSize::Sm));
        assert_eq!(
            "hexagon".parse::<Shape>(),
            Err(StyleError::UnknownShape("hexagon".to_string()))
        );
        assert_eq!(
            "no-drop".parse::<MouseCursor>(),
            Err(StyleError::UnknownCursor("no-drop".to_string()))
        );
    }

    #[test]
    fn test_serde_names_match_class_tokens() {
        for shape in Shape::ALL {
            let json = serde_json::to_string(&shape).unwrap();
            assert_eq!(json, format!("\"{}\"", shape.class()));
        }
        for cursor in MouseCursor::ALL {
            let json = serde_json::to_string(&cursor).unwrap();
            assert_eq!(json, format!("\"{}\"", cursor.class()));
        }
    }

    #[test]
    fn test_class_list_ignores_duplicates() {
        let mut list = ClassList::new();
        list.push("a");
        list.push("b");
        list.push("a");
        list.push_if("c", false);
        assert_eq!(list.as_slice(), &["a", "b"]);
        assert_eq!(list.to_string(), "a b");
    }

    #[test]
    fn test_checkbox_pixels() {
        assert_eq!(CheckboxSize::Sm.pixels(), 16.0);
        assert_eq!(CheckboxSize::Md.pixels(), 24.0);
    }
}
