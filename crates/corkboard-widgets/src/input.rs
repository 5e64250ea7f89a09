//! Conversion from egui input to Corkboard platform events.

use corkboard_core::{ENTER_CHAR_CODE, KeyboardEvent, Modifiers, PointerEvent, SPACE_CHAR_CODE};
use egui::{Event, Id, Key, Pos2, Ui};

/// Character code a key press produces, as a browser key-press would report it.
///
/// Keys that produce no character report 0.
pub fn key_char_code(key: Key, shift: bool) -> u32 {
    match key {
        Key::Space => SPACE_CHAR_CODE,
        Key::Enter => ENTER_CHAR_CODE,
        Key::Tab => 9,
        _ => {
            let mut chars = key.name().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if shift => c.to_ascii_uppercase() as u32,
                (Some(c), None) => c.to_ascii_lowercase() as u32,
                _ => 0,
            }
        }
    }
}

pub fn modifiers(m: egui::Modifiers) -> Modifiers {
    Modifiers {
        shift: m.shift,
        ctrl: m.ctrl,
        alt: m.alt,
        meta: m.mac_cmd,
    }
}

pub fn keyboard_event(key: Key, m: egui::Modifiers) -> KeyboardEvent {
    KeyboardEvent::new(key_char_code(key, m.shift)).with_modifiers(modifiers(m))
}

pub fn pointer_event(pos: Option<Pos2>, m: egui::Modifiers) -> PointerEvent {
    let pos = pos.unwrap_or(Pos2::ZERO);
    PointerEvent {
        modifiers: modifiers(m),
        ..PointerEvent::at(pos.x, pos.y)
    }
}

/// Feed this frame's key presses to `handler` while `id` has focus.
///
/// Keys whose default the handler prevents are consumed, so egui does not
/// act on them as well (e.g. its own Space/Enter click on focused widgets).
/// Must run before the widget calls `interact` for the frame.
pub(crate) fn dispatch_keys(ui: &Ui, id: Id, mut handler: impl FnMut(&mut KeyboardEvent)) {
    if !ui.ctx().memory(|m| m.has_focus(id)) {
        return;
    }
    let presses: Vec<(Key, egui::Modifiers)> = ui.ctx().input(|i| {
        i.events
            .iter()
            .filter_map(|e| match e {
                Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => Some((*key, *modifiers)),
                _ => None,
            })
            .collect()
    });

    for (key, m) in presses {
        let mut event = keyboard_event(key, m);
        handler(&mut event);
        if event.default_prevented() {
            ui.ctx().input_mut(|i| i.consume_key(m, key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_char_codes() {
        assert_eq!(key_char_code(Key::Space, false), 32);
        assert_eq!(key_char_code(Key::Enter, false), 13);
        assert_eq!(key_char_code(Key::A, false), 97);
        assert_eq!(key_char_code(Key::A, true), 65);
        assert_eq!(key_char_code(Key::Escape, false), 0);
    }

    #[test]
    fn test_keyboard_event_modifiers() {
        let event = keyboard_event(Key::Enter, egui::Modifiers::SHIFT);
        assert!(event.is_activation_key());
        assert!(event.modifiers.shift);
        assert!(!event.modifiers.ctrl);
    }
}
