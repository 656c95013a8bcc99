//! Native backends for `gate`.
//!
//! A backend owns the native library: it brings subsystems up and down, creates
//! the window, and pulls raw events off the native queue. The [`Engine`](crate::Engine)
//! drives it and does all translation itself.
//!
//! # Feature flags
//! - **`sdl`** enables [`sdl::SdlBackend`] (links SDL2 through the `sdl2` crate).
//! - **`bundled`** builds SDL2 from source instead of linking the system library.
//!
//! [`virtual_input::VirtualBackend`] is always available; it has no native
//! dependency and is what tests and demos run on.

use crate::capability::InitFlags;
use crate::config::WindowConfig;
use crate::native::{NativeEvent, Version};

#[cfg(feature = "sdl")]
#[cfg_attr(docsrs, doc(cfg(feature = "sdl")))]
pub mod sdl;
pub mod virtual_input;

/// The native library behind the engine.
///
/// Errors are returned as the native library's own message text; the engine wraps
/// them into [`EngineError`](crate::EngineError).
pub trait Backend {
    /// Native window handle. Dropping it must not destroy the window;
    /// [`Backend::destroy_window`] does that.
    type Window;

    /// Short name for logs.
    fn name(&self) -> &str;

    /// Version the crate was built against.
    fn compiled_version(&self) -> Version;

    /// Version found at runtime.
    fn linked_version(&self) -> Version;

    /// Bring up the requested subsystems. An empty set is valid.
    fn init(&mut self, flags: InitFlags) -> Result<(), String>;

    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window, String>;

    /// Pull at most one pending native event. Never blocks.
    fn poll_event(&mut self) -> Option<NativeEvent>;

    fn destroy_window(&mut self, window: Self::Window);

    /// Shut every subsystem down. Must be safe to call when nothing is initialized.
    fn quit(&mut self);
}
