//! egui renditions of the Corkboard widgets.
//!
//! Each widget wraps the matching `corkboard-core` component and feeds it
//! egui input, so activation rules and class/style tables live in one place:
//!
//! - **Touchable**: focusable, clickable region (Space/Enter activate)
//! - **Label**: text that focuses and activates the control it names
//! - **Checkbox**: 16px/24px box with check and dash glyphs

pub mod checkbox;
pub mod input;
pub mod label;
pub mod touchable;

pub use checkbox::{CheckboxResponse, CheckboxWidget};
pub use input::{key_char_code, keyboard_event, pointer_event};
pub use label::LabelWidget;
pub use touchable::{TouchableResponse, TouchableWidget, cursor_icon, shape_corner_radius};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Corner radius of `Rounded` and the rounded sides of half-rounded shapes
    pub const CORNER_RADIUS: u8 = 8;
    /// Radius large enough for egui to clamp into a full pill/circle
    pub const PILL_RADIUS: u8 = u8::MAX;
    /// Padding inside a touchable region
    pub const TOUCHABLE_PADDING: i8 = 8;
    /// Corner radius of the checkbox box
    pub const CHECKBOX_RADIUS: u8 = 4;
    /// Gap between a label and its control
    pub const LABEL_GAP: f32 = 8.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Checked/active fill
    pub const ACCENT: Color32 = Color32::from_rgb(51, 51, 51);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Disabled fill
    pub const DISABLED_BG: Color32 = Color32::from_rgb(239, 239, 239);
    /// Keyboard focus ring
    pub const FOCUS_RING: Color32 = Color32::from_rgb(59, 130, 246);
}
