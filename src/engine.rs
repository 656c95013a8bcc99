//! The engine: lifecycle plus event translation over a [`Backend`].
//!
//! ```text
//! Uninitialized --init(ok)--> Initialized --uninit--> Uninitialized
//!       ^   \--init(err)--/                               (uninit is idempotent)
//! ```
//!
//! There is no hidden global instance. The caller creates one engine (see
//! `create` for the SDL one), owns it, and tears it down with [`Lifecycle::uninit`]
//! or by dropping it.

use crate::backends::Backend;
use crate::binding;
use crate::capability::InitFlags;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::event::Event;
use crate::options;

/// The `init → read_event* → uninit` surface a main loop drives.
pub trait Lifecycle {
    /// Parse `options`, bring up the native subsystems and open the window.
    fn init(&mut self, options: &str) -> Result<(), EngineError>;

    /// Reset `event` to neutral, then pull and translate at most one native event.
    ///
    /// Returns `false` when no native event was pending. Returns `true` when one was
    /// consumed, even if it had no binding; in that case `event` stays neutral.
    fn read_event(&mut self, event: &mut Event) -> bool;

    /// Close the window (if any) and shut every subsystem down. Idempotent.
    fn uninit(&mut self);
}

pub struct Engine<B: Backend> {
    backend: B,
    config: EngineConfig,
    /// Subsystems currently up. `Some` iff `window` is `Some`.
    subsystem: Option<InitFlags>,
    window: Option<B::Window>,
}

impl<B: Backend> Engine<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, EngineConfig::default())
    }

    pub fn with_config(backend: B, config: EngineConfig) -> Self {
        Self {
            backend,
            config,
            subsystem: None,
            window: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.window.is_some()
    }

    /// Subsystems brought up by the last successful `init`.
    pub fn subsystems(&self) -> Option<InitFlags> {
        self.subsystem
    }

    pub fn window(&self) -> Option<&B::Window> {
        self.window.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// [`Lifecycle::read_event`] as an `Option`: `None` when nothing was pending.
    pub fn poll_event(&mut self) -> Option<Event> {
        let mut event = Event::default();
        self.read_event(&mut event).then_some(event)
    }

    fn check_versions(&self) {
        let compiled = self.backend.compiled_version();
        let linked = self.backend.linked_version();
        if compiled != linked {
            log::warn!(
                "{} version mismatch: compiled against {compiled}, linked {linked}",
                self.backend.name()
            );
        }
    }
}

impl<B: Backend> Lifecycle for Engine<B> {
    fn init(&mut self, init_options: &str) -> Result<(), EngineError> {
        if self.subsystem.is_some() {
            return Err(EngineError::AlreadyInitialized);
        }

        self.check_versions();

        let flags = options::parse(init_options);
        if let Err(msg) = self.backend.init(flags) {
            log::error!("[{}] subsystem init failed: {msg}", self.backend.name());
            return Err(EngineError::SubsystemInit(msg));
        }

        let window_config = &self.config.window;
        match self.backend.create_window(window_config) {
            Ok(window) => {
                log::info!(
                    "[{}] up: subsystems={flags:?} window={}x{} {:?}",
                    self.backend.name(),
                    window_config.width,
                    window_config.height,
                    window_config.title,
                );
                self.subsystem = Some(flags);
                self.window = Some(window);
                Ok(())
            }
            Err(msg) => {
                log::error!("[{}] window creation failed: {msg}", self.backend.name());
                // Roll the subsystems back so a failed init leaves nothing running.
                self.backend.quit();
                Err(EngineError::WindowCreation(msg))
            }
        }
    }

    fn read_event(&mut self, event: &mut Event) -> bool {
        event.clear();

        let Some(native) = self.backend.poll_event() else {
            return false;
        };

        #[cfg(feature = "debug-log")]
        log::trace!(
            "[{}/POLL] type=0x{:04x} keycode={:?}",
            self.backend.name(),
            native.kind,
            native.keycode
        );

        match binding::translate(&native) {
            Some(translated) => *event = translated,
            None => log::debug!(
                "unbound native event type=0x{:04x} keycode={:?}",
                native.kind,
                native.keycode
            ),
        }
        true
    }

    fn uninit(&mut self) {
        if let Some(window) = self.window.take() {
            self.backend.destroy_window(window);
        }
        self.backend.quit();
        if self.subsystem.take().is_some() {
            log::info!("[{}] down", self.backend.name());
        }
    }
}

impl<B: Backend> Drop for Engine<B> {
    fn drop(&mut self) {
        if self.subsystem.is_some() || self.window.is_some() {
            self.uninit();
        }
    }
}

/// The SDL-backed engine.
#[cfg(feature = "sdl")]
#[cfg_attr(docsrs, doc(cfg(feature = "sdl")))]
pub fn create() -> Engine<crate::backends::sdl::SdlBackend> {
    Engine::new(crate::backends::sdl::SdlBackend::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::virtual_input::VirtualBackend;
    use crate::config::WindowConfig;
    use crate::event::{EventKind, Key};
    use crate::native::{event_type, keycode, NativeEvent, Version};
    use std::cell::Cell;
    use std::rc::Rc;

    fn ready() -> Engine<VirtualBackend> {
        let mut engine = Engine::new(VirtualBackend::new());
        engine.init("video").unwrap();
        engine
    }

    #[test]
    fn init_passes_parsed_flags_and_window_config() {
        let engine = ready();
        assert!(engine.is_initialized());
        assert_eq!(engine.subsystems(), Some(InitFlags::VIDEO));
        assert_eq!(engine.backend().last_flags(), Some(InitFlags::VIDEO));
        assert_eq!(engine.backend().last_window(), Some(&WindowConfig::default()));
        assert_eq!(engine.backend().open_windows(), 1);
    }

    #[test]
    fn second_init_is_rejected_without_a_second_window() {
        let mut engine = ready();
        assert_eq!(engine.init("video"), Err(EngineError::AlreadyInitialized));
        assert_eq!(engine.backend().init_calls(), 1);
        assert_eq!(engine.backend().open_windows(), 1);
    }

    #[test]
    fn window_failure_rolls_subsystem_back() {
        let mut engine = Engine::new(VirtualBackend::new().fail_window("no display"));
        let err = engine.init("video").unwrap_err();
        assert_eq!(err, EngineError::WindowCreation("no display".into()));
        assert!(!engine.is_initialized());
        assert!(!engine.backend().subsystem_up());
        assert_eq!(engine.backend().quit_calls(), 1);

        // Nothing is held, so a retry is allowed.
        assert!(matches!(engine.init("video"), Err(EngineError::WindowCreation(_))));
    }

    #[test]
    fn read_event_clears_stale_payload() {
        let mut engine = ready();
        let mut ev = Event {
            msg: "stale".into(),
            kind: EventKind::Pressed,
            key: Key::Up,
        };
        assert!(!engine.read_event(&mut ev));
        assert!(ev.is_neutral());
    }

    #[test]
    fn unbound_key_code_on_known_class_is_reported_empty() {
        let mut engine = ready();
        engine.backend_mut().key_down(keycode::W);
        engine.backend_mut().feed(NativeEvent::other(event_type::KEY_UP));

        assert_eq!(engine.poll_event(), Some(Event::default()));
        assert_eq!(engine.poll_event(), Some(Event::default()));
        assert_eq!(engine.poll_event(), None);
    }

    #[test]
    fn custom_window_config_reaches_the_backend() {
        let mut config = EngineConfig::default();
        config.window.title = "arcade".into();
        config.window.width = 320;
        let mut engine = Engine::with_config(VirtualBackend::new(), config);
        engine.init("").unwrap();

        let window = engine.window().unwrap();
        assert_eq!(window.title, "arcade");
        assert_eq!((window.width, window.height), (320, 480));
        assert_eq!(engine.subsystems(), Some(InitFlags::empty()));
        assert_eq!(engine.config().window.title, "arcade");
    }

    /// Records teardown calls somewhere that outlives the engine.
    #[derive(Default)]
    struct Tracked {
        destroyed: Rc<Cell<usize>>,
        quits: Rc<Cell<usize>>,
    }

    impl Backend for Tracked {
        type Window = ();

        fn name(&self) -> &str {
            "tracked"
        }
        fn compiled_version(&self) -> Version {
            Version::new(1, 0, 0)
        }
        fn linked_version(&self) -> Version {
            Version::new(1, 0, 0)
        }
        fn init(&mut self, _flags: InitFlags) -> Result<(), String> {
            Ok(())
        }
        fn create_window(&mut self, _config: &WindowConfig) -> Result<(), String> {
            Ok(())
        }
        fn poll_event(&mut self) -> Option<NativeEvent> {
            None
        }
        fn destroy_window(&mut self, _window: ()) {
            self.destroyed.set(self.destroyed.get() + 1);
        }
        fn quit(&mut self) {
            self.quits.set(self.quits.get() + 1);
        }
    }

    #[test]
    fn drop_releases_a_live_engine() {
        let backend = Tracked::default();
        let (destroyed, quits) = (backend.destroyed.clone(), backend.quits.clone());

        let mut engine = Engine::new(backend);
        engine.init("everything").unwrap();
        drop(engine);

        assert_eq!(destroyed.get(), 1);
        assert_eq!(quits.get(), 1);
    }

    #[test]
    fn drop_after_uninit_does_nothing_more() {
        let backend = Tracked::default();
        let quits = backend.quits.clone();

        let mut engine = Engine::new(backend);
        engine.init("video").unwrap();
        engine.uninit();
        drop(engine);

        assert_eq!(quits.get(), 1);
    }

    #[test]
    fn never_initialized_engine_drops_quietly() {
        let backend = Tracked::default();
        let quits = backend.quits.clone();
        drop(Engine::new(backend));
        assert_eq!(quits.get(), 0);
    }
}
