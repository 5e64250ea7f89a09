//! Label for egui, with native label semantics: clicking it focuses and
//! activates the control it names.
//!
//! Only controls that register themselves can be named. Of the Corkboard
//! widgets that is the checkbox; a touchable is not a labelable control.

use corkboard_core::Label;
use egui::{Context, CursorIcon, Id, Response, RichText, Sense, Ui};

use crate::theme;

/// Where a control was last shown.
#[derive(Debug, Clone, Copy)]
struct Registration {
    control: Id,
    pass: u64,
}

fn control_key(html_for: &str) -> Id {
    Id::new(("corkboard-control", html_for))
}

fn activation_key(control: Id) -> Id {
    control.with("label-activation")
}

/// Make a control reachable by labels naming `html_for`. Call every frame.
pub(crate) fn register_control(ctx: &Context, html_for: &str, id: Id) {
    let registration = Registration {
        control: id,
        pass: ctx.cumulative_pass_nr(),
    };
    ctx.data_mut(|d| d.insert_temp(control_key(html_for), registration));
}

/// The control registered under `html_for`, if it was shown this pass or the
/// previous one. A label drawn before its control sees last pass's entry.
fn live_control(ctx: &Context, html_for: &str) -> Option<Id> {
    let registration = ctx.data(|d| d.get_temp::<Registration>(control_key(html_for)))?;
    (ctx.cumulative_pass_nr() <= registration.pass + 1).then_some(registration.control)
}

/// Whether a label activated `control` since it last checked.
pub(crate) fn take_activation(ctx: &Context, control: Id) -> bool {
    ctx.data_mut(|d| d.remove_temp::<bool>(activation_key(control)))
        .unwrap_or(false)
}

/// A [`Label`] shown as clickable text.
pub struct LabelWidget<'a> {
    label: &'a Label,
}

impl<'a> LabelWidget<'a> {
    pub fn new(label: &'a Label) -> Self {
        Self { label }
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let text = self.label.content().text_content();
        let response = ui.add(
            egui::Label::new(RichText::new(text).color(theme::TEXT))
                .sense(Sense::click())
                .selectable(false),
        );

        if response.clicked() {
            match live_control(ui.ctx(), self.label.html_for()) {
                Some(control) => {
                    ui.ctx().memory_mut(|m| m.request_focus(control));
                    ui.ctx().data_mut(|d| d.insert_temp(activation_key(control), true));
                }
                None => log::debug!("label for {:?} has no control on screen", self.label.html_for()),
            }
        }

        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_is_taken_once() {
        let ctx = Context::default();
        let control = Id::new("control");
        register_control(&ctx, "usa", control);

        assert_eq!(live_control(&ctx, "usa"), Some(control));
        assert!(!take_activation(&ctx, control));

        ctx.data_mut(|d| d.insert_temp(activation_key(control), true));
        assert!(take_activation(&ctx, control));
        assert!(!take_activation(&ctx, control));
    }

    #[test]
    fn test_control_not_shown_is_not_targeted() {
        let ctx = Context::default();
        let control = Id::new("control");
        let _ = ctx.run(Default::default(), |ctx| register_control(ctx, "usa", control));

        // Drawn in the previous pass: still reachable.
        let _ = ctx.run(Default::default(), |ctx| {
            assert_eq!(live_control(ctx, "usa"), Some(control));
        });
        // Gone for a whole pass: stale.
        let _ = ctx.run(Default::default(), |ctx| {
            assert_eq!(live_control(ctx, "usa"), None);
        });
        assert_eq!(live_control(&ctx, "canada"), None);
    }
}
