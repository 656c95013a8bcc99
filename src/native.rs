//! Native-side vocabulary.
//!
//! Backends hand the engine raw events as [`NativeEvent`] values: an event-class id
//! plus, for keyboard events, a key code. The ids below use the SDL2 numbering so
//! the SDL backend passes them through untouched; other backends (the virtual one,
//! for instance) simply speak the same numbers.

use std::fmt;

/// Native event-class ids (SDL2 `SDL_EventType` values).
pub mod event_type {
    pub const QUIT: u32 = 0x100;
    pub const WINDOW: u32 = 0x200;
    pub const KEY_DOWN: u32 = 0x300;
    pub const KEY_UP: u32 = 0x301;
    pub const TEXT_INPUT: u32 = 0x303;
    pub const MOUSE_MOTION: u32 = 0x400;
}

/// Native key codes (SDL2 `SDL_Keycode` values).
pub mod keycode {
    pub const ESCAPE: i32 = 0x1B;
    pub const SPACE: i32 = 0x20;
    pub const A: i32 = 0x61;
    pub const D: i32 = 0x64;
    pub const W: i32 = 0x77;
    pub const RIGHT: i32 = 0x4000_004F;
    pub const LEFT: i32 = 0x4000_0050;
    pub const DOWN: i32 = 0x4000_0051;
    pub const UP: i32 = 0x4000_0052;
}

/// One raw event as pulled from a backend queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeEvent {
    /// Event-class id (see [`event_type`]).
    pub kind: u32,
    /// Key code for keyboard events, `None` otherwise.
    pub keycode: Option<i32>,
}

impl NativeEvent {
    /// A quit request.
    pub const fn quit() -> Self {
        Self {
            kind: event_type::QUIT,
            keycode: None,
        }
    }

    pub const fn key_down(code: i32) -> Self {
        Self {
            kind: event_type::KEY_DOWN,
            keycode: Some(code),
        }
    }

    pub const fn key_up(code: i32) -> Self {
        Self {
            kind: event_type::KEY_UP,
            keycode: Some(code),
        }
    }

    /// Any other native event class, with no key payload.
    pub const fn other(kind: u32) -> Self {
        Self {
            kind,
            keycode: None,
        }
    }
}

/// Library version triple, used for the compiled-vs-linked check at init.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl Version {
    pub const fn new(major: u8, minor: u8, patch: u8) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
