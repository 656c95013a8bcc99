//! Native → engine binding tables.
//!
//! Two fixed tables decide what the engine can report:
//! - [`EVENT_BINDINGS`]: native event class → [`EventKind`] + label
//! - [`KEY_BINDINGS`]: native key code → [`Key`] + label
//!
//! Native ids are unique within each table, so lookup order never matters. A miss is
//! not an error: it means the native signal has no place in the engine vocabulary.
//! Lookups hand out `&'static` views into the tables; nothing is allocated.

use crate::event::{Event, EventKind, Key};
use crate::native::{event_type, keycode, NativeEvent};

/// Maps a native event class to an engine event kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventBinding {
    pub native: u32,
    pub kind: EventKind,
    pub label: &'static str,
}

/// Maps a native key code to an engine key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    pub native: i32,
    pub key: Key,
    pub label: &'static str,
}

pub static EVENT_BINDINGS: &[EventBinding] = &[
    EventBinding {
        native: event_type::QUIT,
        kind: EventKind::Shutdown,
        label: "shutdown",
    },
    EventBinding {
        native: event_type::KEY_UP,
        kind: EventKind::Released,
        label: "released",
    },
    EventBinding {
        native: event_type::KEY_DOWN,
        kind: EventKind::Pressed,
        label: "pressed",
    },
];

pub static KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding { native: keycode::UP, key: Key::Up, label: "up" },
    KeyBinding { native: keycode::DOWN, key: Key::Down, label: "down" },
    KeyBinding { native: keycode::LEFT, key: Key::Left, label: "left" },
    KeyBinding { native: keycode::RIGHT, key: Key::Right, label: "right" },
    KeyBinding { native: keycode::SPACE, key: Key::Pause, label: "pause" },
    KeyBinding { native: keycode::ESCAPE, key: Key::Select, label: "select" },
    KeyBinding { native: keycode::A, key: Key::Button1, label: "button1" },
    KeyBinding { native: keycode::D, key: Key::Button2, label: "button2" },
];

/// Find the binding for a native event class.
pub fn lookup_event(native: u32) -> Option<&'static EventBinding> {
    EVENT_BINDINGS.iter().find(|b| b.native == native)
}

/// Find the binding for a native key code.
pub fn lookup_key(native: i32) -> Option<&'static KeyBinding> {
    KEY_BINDINGS.iter().find(|b| b.native == native)
}

/// Translate one native event into a normalized [`Event`].
///
/// Returns `None` when the event (or, for key events, its key code) has no binding.
pub fn translate(native: &NativeEvent) -> Option<Event> {
    let bound = lookup_event(native.kind)?;

    match bound.kind {
        EventKind::Shutdown => Some(Event {
            msg: bound.label.to_owned(),
            kind: bound.kind,
            key: Key::NoButton,
        }),
        EventKind::Pressed | EventKind::Released => {
            let key = lookup_key(native.keycode?)?;
            Some(Event {
                msg: format!("{}_{}", key.label, bound.label),
                kind: bound.kind,
                key: key.key,
            })
        }
        EventKind::NoEvent => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_ids_are_unique() {
        for (i, b) in EVENT_BINDINGS.iter().enumerate() {
            assert!(EVENT_BINDINGS[i + 1..].iter().all(|o| o.native != b.native));
        }
        for (i, b) in KEY_BINDINGS.iter().enumerate() {
            assert!(KEY_BINDINGS[i + 1..].iter().all(|o| o.native != b.native));
        }
    }

    #[test]
    fn no_binding_maps_to_a_sentinel() {
        assert!(EVENT_BINDINGS.iter().all(|b| b.kind != EventKind::NoEvent));
        assert!(KEY_BINDINGS.iter().all(|b| b.key != Key::NoButton));
    }

    #[test]
    fn lookups_hit_and_miss() {
        assert_eq!(lookup_event(event_type::QUIT).map(|b| b.kind), Some(EventKind::Shutdown));
        assert_eq!(lookup_event(event_type::MOUSE_MOTION), None);
        assert_eq!(lookup_key(keycode::SPACE).map(|b| b.key), Some(Key::Pause));
        assert_eq!(lookup_key(keycode::W), None);
    }

    #[test]
    fn lookup_returns_a_view_into_the_table() {
        let hit = lookup_key(keycode::D).unwrap();
        assert!(std::ptr::eq(hit, &KEY_BINDINGS[7]));
    }

    #[test]
    fn shutdown_has_no_key() {
        let ev = translate(&NativeEvent::quit()).unwrap();
        assert_eq!(ev.kind, EventKind::Shutdown);
        assert_eq!(ev.key, Key::NoButton);
        assert_eq!(ev.msg, "shutdown");
    }

    #[test]
    fn every_bound_key_translates_both_ways() {
        for kb in KEY_BINDINGS {
            let down = translate(&NativeEvent::key_down(kb.native)).unwrap();
            assert_eq!(down.msg, format!("{}_pressed", kb.label));
            assert_eq!((down.kind, down.key), (EventKind::Pressed, kb.key));

            let up = translate(&NativeEvent::key_up(kb.native)).unwrap();
            assert_eq!(up.msg, format!("{}_released", kb.label));
            assert_eq!((up.kind, up.key), (EventKind::Released, kb.key));
        }
    }

    #[test]
    fn unbound_inputs_are_not_representable() {
        assert_eq!(translate(&NativeEvent::other(event_type::WINDOW)), None);
        assert_eq!(translate(&NativeEvent::other(event_type::TEXT_INPUT)), None);
        assert_eq!(lookup_event(event_type::TEXT_INPUT), None);
        assert_eq!(translate(&NativeEvent::key_down(keycode::W)), None);
        assert_eq!(translate(&NativeEvent::other(event_type::KEY_DOWN)), None);
    }
}
