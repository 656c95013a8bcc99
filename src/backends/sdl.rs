//! SDL2 backend.
//!
//! Talks to SDL through the raw `sdl2::sys` bindings rather than the safe `sdl2`
//! wrappers, because the engine needs two things the wrappers hide:
//! - `SDL_Init` with an arbitrary flag mask (the wrappers init one subsystem at a time)
//! - the raw `SDL_Event::type_` of *every* event, including ones the engine won't map
//!
//! The safe crate is still used for `get_error` and the runtime version query.
//!
//! This backend owns no Rust-side state; SDL itself is
//! process-global, so only one `SdlBackend` should be driven at a time.

use crate::backends::Backend;
use crate::capability::InitFlags;
use crate::config::{WindowConfig, WindowPosition};
use crate::native::{event_type, NativeEvent, Version};

use sdl2::sys;
use std::ffi::CString;
use std::mem::MaybeUninit;
use std::os::raw::c_int;
use std::ptr::NonNull;

// Local constants (SDL_video.h); the generated bindings expose these as enums or
// not at all depending on the sdl2-sys version.
const WINDOWPOS_CENTERED: c_int = 0x2FFF_0000;
const WINDOW_OPENGL: u32 = 0x0000_0002;

/// Native SDL window handle.
#[derive(Debug)]
pub struct SdlWindow(NonNull<sys::SDL_Window>);

#[derive(Debug, Default)]
pub struct SdlBackend;

impl SdlBackend {
    pub fn new() -> Self {
        Self
    }

    fn position(pos: WindowPosition) -> (c_int, c_int) {
        match pos {
            WindowPosition::Centered => (WINDOWPOS_CENTERED, WINDOWPOS_CENTERED),
            WindowPosition::At { x, y } => (x, y),
        }
    }
}

impl Backend for SdlBackend {
    type Window = SdlWindow;

    fn name(&self) -> &str {
        "sdl2"
    }

    fn compiled_version(&self) -> Version {
        Version::new(
            sys::SDL_MAJOR_VERSION as u8,
            sys::SDL_MINOR_VERSION as u8,
            sys::SDL_PATCHLEVEL as u8,
        )
    }

    fn linked_version(&self) -> Version {
        let v = sdl2::version::version();
        Version::new(v.major, v.minor, v.patch)
    }

    fn init(&mut self, flags: InitFlags) -> Result<(), String> {
        let rc = unsafe { sys::SDL_Init(flags.bits()) };
        if rc != 0 {
            return Err(sdl2::get_error());
        }
        Ok(())
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<SdlWindow, String> {
        let title = CString::new(config.title.as_str())
            .map_err(|_| "window title contains a NUL byte".to_owned())?;
        let width = c_int::try_from(config.width).map_err(|e| format!("width: {e}"))?;
        let height = c_int::try_from(config.height).map_err(|e| format!("height: {e}"))?;
        let (x, y) = Self::position(config.position);

        let flags = if config.opengl { WINDOW_OPENGL } else { 0 };

        let raw = unsafe { sys::SDL_CreateWindow(title.as_ptr(), x, y, width, height, flags) };
        NonNull::new(raw).map(SdlWindow).ok_or_else(sdl2::get_error)
    }

    fn poll_event(&mut self) -> Option<NativeEvent> {
        let mut raw = MaybeUninit::<sys::SDL_Event>::uninit();
        // SDL fills the event only when it returns 1.
        if unsafe { sys::SDL_PollEvent(raw.as_mut_ptr()) } == 0 {
            return None;
        }
        let raw = unsafe { raw.assume_init() };

        let kind = unsafe { raw.type_ };
        let keycode = match kind {
            event_type::KEY_DOWN | event_type::KEY_UP => Some(unsafe { raw.key.keysym.sym }),
            _ => None,
        };

        Some(NativeEvent { kind, keycode })
    }

    fn destroy_window(&mut self, window: SdlWindow) {
        unsafe { sys::SDL_DestroyWindow(window.0.as_ptr()) };
    }

    fn quit(&mut self) {
        // SDL_Quit is a no-op when nothing is up.
        unsafe { sys::SDL_Quit() };
    }
}
