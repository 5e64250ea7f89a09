//! Touchable region for egui.

use std::hash::Hash;

use corkboard_core::{MouseCursor, Shape, Touchable};
use egui::{Color32, CornerRadius, CursorIcon, Frame, Id, Margin, Response, Sense, Stroke, StrokeKind, Ui};

use crate::input::{dispatch_keys, pointer_event};
use crate::{sizing, theme};

/// Corner radius drawn for each shape.
pub fn shape_corner_radius(shape: Shape) -> CornerRadius {
    let r = sizing::CORNER_RADIUS;
    let (nw, ne, sw, se) = match shape {
        Shape::Square => (0, 0, 0, 0),
        Shape::Rounded => (r, r, r, r),
        Shape::Pill | Shape::Circle => {
            let p = sizing::PILL_RADIUS;
            (p, p, p, p)
        }
        Shape::RoundedTop => (r, r, 0, 0),
        Shape::RoundedBottom => (0, 0, r, r),
        Shape::RoundedLeft => (r, 0, r, 0),
        Shape::RoundedRight => (0, r, 0, r),
    };
    CornerRadius { nw, ne, sw, se }
}

/// egui cursor shown for each mouse cursor option.
pub fn cursor_icon(cursor: MouseCursor) -> CursorIcon {
    match cursor {
        MouseCursor::Copy => CursorIcon::Copy,
        MouseCursor::Grab => CursorIcon::Grab,
        MouseCursor::Grabbing => CursorIcon::Grabbing,
        MouseCursor::Move => CursorIcon::Move,
        MouseCursor::NoDrop => CursorIcon::NoDrop,
        MouseCursor::Pointer => CursorIcon::PointingHand,
        MouseCursor::ZoomIn => CursorIcon::ZoomIn,
        MouseCursor::ZoomOut => CursorIcon::ZoomOut,
    }
}

/// Result of showing a [`TouchableWidget`].
pub struct TouchableResponse<R> {
    /// Whatever the contents closure returned
    pub inner: R,
    /// Response covering the whole region
    pub response: Response,
    /// Whether `on_touch` fired this frame
    pub activated: bool,
}

/// A [`Touchable`] shown as an egui region around arbitrary contents.
pub struct TouchableWidget {
    id_salt: Id,
    touchable: Touchable,
}

impl TouchableWidget {
    /// `id_salt` must be unique among siblings and stable across frames.
    pub fn new(id_salt: impl Hash, touchable: Touchable) -> Self {
        Self {
            id_salt: Id::new(id_salt),
            touchable,
        }
    }

    /// Show the region and dispatch this frame's input to the touchable.
    pub fn show<R>(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> TouchableResponse<R> {
        let id = ui.make_persistent_id(self.id_salt);
        let style = self.touchable.get_style();
        let mut activated = false;

        // Keys first: a consumed Space/Enter must not also become egui's
        // synthetic click when the region is interacted with below.
        dispatch_keys(ui, id, |event| {
            activated |= self.touchable.handle_key_press(event);
        });

        let background = ui.painter().add(egui::Shape::Noop);
        let inner = Frame::new()
            .inner_margin(Margin::same(sizing::TOUCHABLE_PADDING))
            .show(ui, |ui| {
                if style.full_width {
                    ui.set_min_width(ui.available_width());
                }
                add_contents(ui)
            });

        let rect = inner.response.rect;
        let response = ui.interact(rect, id, Sense::click());
        let modifiers = ui.ctx().input(|i| i.modifiers);

        let hovered = response.hovered();
        let was_hovered = ui.ctx().data(|d| d.get_temp::<bool>(id)).unwrap_or(false);
        if hovered != was_hovered {
            ui.ctx().data_mut(|d| d.insert_temp(id, hovered));
            let event = pointer_event(response.hover_pos(), modifiers);
            if hovered {
                self.touchable.handle_mouse_enter(event);
            } else {
                self.touchable.handle_mouse_leave(event);
            }
        }

        if response.clicked() {
            let event = pointer_event(response.interact_pointer_pos(), modifiers);
            activated |= self.touchable.handle_click(event);
        }

        if ui.is_rect_visible(rect) {
            let radius = shape_corner_radius(style.shape);
            let fill = if hovered {
                theme::HOVER_BG
            } else {
                Color32::TRANSPARENT
            };
            ui.painter()
                .set(background, egui::Shape::rect_filled(rect, radius, fill));
            if response.has_focus() {
                ui.painter().rect_stroke(
                    rect,
                    radius,
                    Stroke::new(2.0, theme::FOCUS_RING),
                    StrokeKind::Inside,
                );
            }
        }

        let response = response.on_hover_cursor(cursor_icon(style.mouse_cursor));
        TouchableResponse {
            inner: inner.inner,
            response,
            activated,
        }
    }
}
