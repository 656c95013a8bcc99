//! Subsystem capability table.
//!
//! Maps the lowercase option names accepted at init (`"video"`, `"audio"`, …) to
//! [`InitFlags`] bits. The bit values match SDL2's `SDL_INIT_*` constants so they can
//! be handed to `SDL_Init` directly.

use bitflags::bitflags;

bitflags! {
    /// Subsystems to bring up when the engine initializes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InitFlags: u32 {
        const TIMER = 0x0000_0001;
        const AUDIO = 0x0000_0010;
        /// Video implies events.
        const VIDEO = 0x0000_0020;
        /// Joystick implies events.
        const JOYSTICK = 0x0000_0200;
        const HAPTIC = 0x0000_1000;
        /// Game controller implies joystick.
        const GAMECONTROLLER = 0x0000_2000;
        const EVENTS = 0x0000_4000;
        const SENSOR = 0x0000_8000;
        const EVERYTHING = Self::TIMER.bits()
            | Self::AUDIO.bits()
            | Self::VIDEO.bits()
            | Self::EVENTS.bits()
            | Self::JOYSTICK.bits()
            | Self::HAPTIC.bits()
            | Self::GAMECONTROLLER.bits()
            | Self::SENSOR.bits();
    }
}

impl Default for InitFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// One named capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capability {
    /// Lowercase token as written in an init string.
    pub name: &'static str,
    pub flags: InitFlags,
}

/// Every recognized init token.
pub static CAPABILITIES: &[Capability] = &[
    Capability { name: "timer", flags: InitFlags::TIMER },
    Capability { name: "audio", flags: InitFlags::AUDIO },
    Capability { name: "video", flags: InitFlags::VIDEO },
    Capability { name: "events", flags: InitFlags::EVENTS },
    Capability { name: "joystick", flags: InitFlags::JOYSTICK },
    Capability { name: "gamecontroller", flags: InitFlags::GAMECONTROLLER },
    Capability { name: "haptic", flags: InitFlags::HAPTIC },
    Capability { name: "everything", flags: InitFlags::EVERYTHING },
];

/// Exact-match lookup of a lowercase token.
pub fn lookup(name: &str) -> Option<InitFlags> {
    CAPABILITIES
        .iter()
        .find(|cap| cap.name == name)
        .map(|cap| cap.flags)
}
