//! Gate: a minimal window/input layer.
//!
//! Hides a native multimedia library behind a three-call lifecycle
//! (`init` / `read_event` / `uninit`) and turns its window-system and keyboard
//! events into a small engine vocabulary: [`Event`], [`EventKind`], [`Key`].
//!
//! ```
//! use gate::backends::virtual_input::VirtualBackend;
//! use gate::native::keycode;
//! use gate::{Engine, EventKind, Key, Lifecycle};
//!
//! let mut engine = Engine::new(VirtualBackend::new());
//! engine.init("video events").expect("virtual init");
//!
//! engine.backend_mut().key_down(keycode::UP);
//! let ev = engine.poll_event().expect("one native event");
//! assert_eq!((ev.kind, ev.key), (EventKind::Pressed, Key::Up));
//! assert_eq!(ev.msg, "up_pressed");
//!
//! engine.uninit();
//! ```
//!
//! ## Diagnostics
//! Non-fatal problems (unknown init options, a compiled/linked library version
//! mismatch) are reported at `warn` level through the [`log`] facade. Nothing reaches
//! stderr unless the host installs a logger; the demos call `env_logger::init()`,
//! which writes to stderr and honors `RUST_LOG`. Callers that want unknown options
//! without a logger can use [`options::parse_detailed`].

pub mod backends;
pub mod binding;
pub mod capability;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod native;
pub mod options;

pub use backends::Backend;
pub use capability::InitFlags;
pub use config::{EngineConfig, WindowConfig, WindowPosition};
#[cfg(feature = "sdl")]
pub use engine::create;
pub use engine::{Engine, Lifecycle};
pub use error::{ConfigError, EngineError};
pub use event::*;
