//! Checkbox for egui.

use corkboard_core::{Checkbox, ENTER_CHAR_CODE, Glyph};
use egui::{Color32, CornerRadius, CursorIcon, Pos2, Response, Sense, Stroke, StrokeKind, Ui, vec2};

use crate::input::{dispatch_keys, pointer_event};
use crate::label::{register_control, take_activation};
use crate::{sizing, theme};

/// Result of showing a [`CheckboxWidget`].
pub struct CheckboxResponse {
    pub response: Response,
    /// The value emitted through `on_change` this frame, if any
    pub changed: Option<bool>,
}

/// A [`Checkbox`] drawn as a square box with a check or dash glyph.
pub struct CheckboxWidget {
    checkbox: Checkbox,
}

impl CheckboxWidget {
    pub fn new(checkbox: Checkbox) -> Self {
        Self { checkbox }
    }

    pub fn show(self, ui: &mut Ui) -> CheckboxResponse {
        let options = self.checkbox.get_options();
        let id = ui.make_persistent_id(("corkboard-checkbox", self.checkbox.id()));
        register_control(ui.ctx(), self.checkbox.id(), id);

        let mut changed = None;
        dispatch_keys(ui, id, |event| {
            changed = changed.or(self.checkbox.handle_key_press(event));
            // Enter does nothing on a native checkbox; egui would click it.
            if event.char_code == ENTER_CHAR_CODE && !options.disabled {
                event.prevent_default();
            }
        });

        let px = options.size.pixels();
        let (rect, _) = ui.allocate_exact_size(vec2(px, px), Sense::hover());
        let sense = if options.disabled {
            Sense::hover()
        } else {
            Sense::click()
        };
        let response = ui.interact(rect, id, sense);
        let modifiers = ui.ctx().input(|i| i.modifiers);

        if response.clicked() {
            let event = pointer_event(response.interact_pointer_pos(), modifiers);
            changed = changed.or(self.checkbox.handle_change(event));
        }
        if take_activation(ui.ctx(), id) {
            changed = changed.or(self.checkbox.handle_change(pointer_event(None, modifiers)));
        }

        if ui.is_rect_visible(rect) {
            let radius = CornerRadius::same(sizing::CHECKBOX_RADIUS);
            let filled = options.checked || options.indeterminate;
            let fill = if options.disabled {
                theme::DISABLED_BG
            } else if filled {
                theme::ACCENT
            } else {
                Color32::WHITE
            };
            let painter = ui.painter();
            painter.rect_filled(rect, radius, fill);

            if !filled {
                let border = if response.hovered() {
                    theme::TEXT_MUTED
                } else {
                    theme::BORDER
                };
                painter.rect_stroke(rect, radius, Stroke::new(2.0, border), StrokeKind::Inside);
            }

            let glyph_color = if options.disabled {
                theme::TEXT_MUTED
            } else {
                Color32::WHITE
            };
            let stroke = Stroke::new(px / 8.0, glyph_color);
            let at = |x: f32, y: f32| Pos2::new(rect.left() + x * px, rect.top() + y * px);
            match options.glyph() {
                Some(Glyph::Check) => {
                    painter.line_segment([at(0.25, 0.5), at(0.42, 0.68)], stroke);
                    painter.line_segment([at(0.42, 0.68), at(0.75, 0.32)], stroke);
                }
                Some(Glyph::Dash) => {
                    painter.line_segment([at(0.25, 0.5), at(0.75, 0.5)], stroke);
                }
                None => {}
            }

            if response.has_focus() {
                painter.rect_stroke(
                    rect.expand(2.0),
                    radius,
                    Stroke::new(2.0, theme::FOCUS_RING),
                    StrokeKind::Outside,
                );
            }
        }

        let response = if options.disabled {
            response
        } else {
            response.on_hover_cursor(CursorIcon::PointingHand)
        };
        CheckboxResponse { response, changed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corkboard_core::{Callback, CheckboxChange, Label};
    use egui::{Event, Key, Modifiers, RawInput};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn run(ctx: &egui::Context, add: impl FnMut(&mut Ui)) {
        run_with(ctx, Vec::new(), add);
    }

    fn run_with(ctx: &egui::Context, events: Vec<Event>, mut add: impl FnMut(&mut Ui)) {
        let input = RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add(ui));
        });
    }

    fn key(key: Key) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_focused_enter_does_not_toggle() {
        let ctx = egui::Context::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let on_change = Callback::new(move |c: CheckboxChange| sink.borrow_mut().push(c.checked));

        let mut checkbox_id = None;
        run(&ctx, |ui| {
            let shown = CheckboxWidget::new(Checkbox::new("terms", on_change.clone())).show(ui);
            checkbox_id = Some(shown.response.id);
        });
        ctx.memory_mut(|m| m.request_focus(checkbox_id.unwrap()));

        let mut changed = Some(false);
        run_with(&ctx, vec![key(Key::Enter)], |ui| {
            changed = CheckboxWidget::new(Checkbox::new("terms", on_change.clone())).show(ui).changed;
        });
        assert_eq!(changed, None);
        assert!(log.borrow().is_empty());

        run_with(&ctx, vec![key(Key::Space)], |ui| {
            changed = CheckboxWidget::new(Checkbox::new("terms", on_change.clone())).show(ui).changed;
        });
        assert_eq!(changed, Some(true));
        assert_eq!(*log.borrow(), vec![true]);
    }

    #[test]
    fn test_label_click_toggles_named_checkbox() {
        let ctx = egui::Context::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let on_change = Callback::new(move |c: CheckboxChange| sink.borrow_mut().push(c.checked));

        let mut checkbox_id = None;
        run(&ctx, |ui| {
            let shown = CheckboxWidget::new(Checkbox::new("usa", on_change.clone())).show(ui);
            checkbox_id = Some(shown.response.id);
        });
        let control = checkbox_id.unwrap();

        // What a label click leaves behind for the control it names.
        ctx.data_mut(|d| d.insert_temp(control.with("label-activation"), true));

        let mut changed = None;
        run(&ctx, |ui| {
            changed = CheckboxWidget::new(Checkbox::new("usa", on_change.clone())).show(ui).changed;
            crate::LabelWidget::new(&Label::new("usa", "United States")).show(ui);
        });

        assert_eq!(changed, Some(true));
        assert_eq!(*log.borrow(), vec![true]);
    }

    #[test]
    fn test_disabled_checkbox_ignores_label_activation() {
        let ctx = egui::Context::default();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let on_change = Callback::new(move |c: CheckboxChange| sink.borrow_mut().push(c.checked));

        let mut checkbox_id = None;
        run(&ctx, |ui| {
            let shown = CheckboxWidget::new(Checkbox::new("a", on_change.clone()).disabled(true)).show(ui);
            checkbox_id = Some(shown.response.id);
        });
        ctx.data_mut(|d| d.insert_temp(checkbox_id.unwrap().with("label-activation"), true));
        run(&ctx, |ui| {
            CheckboxWidget::new(Checkbox::new("a", on_change.clone()).disabled(true)).show(ui);
        });

        assert!(log.borrow().is_empty());
    }
}
