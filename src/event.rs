//! Normalized events.
//!
//! Gate reports input as a single small value type ([`Event`]) built from two closed
//! vocabularies: what happened ([`EventKind`]) and which key was involved ([`Key`]).
//! Nothing in here refers to the native backend; see [`crate::native`] for that side.
//!
//! ## Value conventions
//! - A fresh [`Event`] is **neutral**: `kind = NoEvent`, `key = NoButton`, empty `msg`.
//! - `NoEvent` is never produced by translating a real native event. It only means
//!   "nothing usable was reported" (no input, or input outside the vocabulary).
//! - `NoButton` marks events with no key attached, such as [`EventKind::Shutdown`].
//! - `msg` is a display string: `"shutdown"` for shutdown, `"<key>_<kind>"` for keys
//!   (e.g. `"up_pressed"`). Callers should check `msg` is non-empty before acting on it.

use serde::{Deserialize, Serialize};

/// What a normalized event represents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Sentinel: no usable event.
    #[default]
    NoEvent,
    /// A key went down.
    Pressed,
    /// A key went up.
    Released,
    /// The window system asked the application to quit.
    Shutdown,
}

/// Engine-level key identifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Sentinel: no key involved.
    #[default]
    NoButton,
    Up,
    Down,
    Left,
    Right,
    Pause,
    Select,
    Button1,
    Button2,
}

/// One normalized event, recreated on every poll.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Human-readable label (empty for the neutral event).
    pub msg: String,
    /// Event class.
    pub kind: EventKind,
    /// Key involved, or [`Key::NoButton`].
    pub key: Key,
}

impl Event {
    /// `true` for the neutral default value.
    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.kind == EventKind::NoEvent && self.key == Key::NoButton && self.msg.is_empty()
    }

    /// `true` when a driving loop should stop.
    #[inline]
    pub fn is_shutdown(&self) -> bool {
        self.kind == EventKind::Shutdown
    }

    /// Reset to the neutral default in place, keeping the `msg` allocation.
    pub fn clear(&mut self) {
        self.msg.clear();
        self.kind = EventKind::NoEvent;
        self.key = Key::NoButton;
    }
}
