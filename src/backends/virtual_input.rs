//! Scriptable in-memory backend.
//!
//! [`VirtualBackend`] queues native events fed by the caller and replays them one per
//! poll. Failures can be injected at subsystem init or window creation, and the
//! backend counts what the engine asked of it, so lifecycle behavior can be checked
//! without a display.

use crate::backends::Backend;
use crate::capability::InitFlags;
use crate::config::WindowConfig;
use crate::native::{NativeEvent, Version};
use std::collections::VecDeque;

/// Version reported by a virtual backend unless overridden.
pub const VIRTUAL_VERSION: Version = Version::new(2, 0, 0);

/// Handle to a virtual window.
#[derive(Debug, PartialEq, Eq)]
pub struct VirtualWindow {
    pub id: u32,
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug)]
pub struct VirtualBackend {
    queue: VecDeque<NativeEvent>,
    linked: Version,
    init_error: Option<String>,
    window_error: Option<String>,
    next_window: u32,
    subsystem_up: bool,
    open_windows: usize,
    init_calls: usize,
    quit_calls: usize,
    last_flags: Option<InitFlags>,
    last_window: Option<WindowConfig>,
}

impl Default for VirtualBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualBackend {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            linked: VIRTUAL_VERSION,
            init_error: None,
            window_error: None,
            next_window: 1,
            subsystem_up: false,
            open_windows: 0,
            init_calls: 0,
            quit_calls: 0,
            last_flags: None,
            last_window: None,
        }
    }

    /// Make every subsystem init fail with `msg`.
    pub fn fail_init(mut self, msg: &str) -> Self {
        self.init_error = Some(msg.to_owned());
        self
    }

    /// Make every window creation fail with `msg`.
    pub fn fail_window(mut self, msg: &str) -> Self {
        self.window_error = Some(msg.to_owned());
        self
    }

    /// Report a different runtime version than [`VIRTUAL_VERSION`].
    pub fn with_linked_version(mut self, linked: Version) -> Self {
        self.linked = linked;
        self
    }

    /// Inject a raw native event.
    pub fn feed(&mut self, event: NativeEvent) {
        self.queue.push_back(event);
    }

    pub fn quit_signal(&mut self) {
        self.feed(NativeEvent::quit());
    }

    pub fn key_down(&mut self, code: i32) {
        self.feed(NativeEvent::key_down(code));
    }

    pub fn key_up(&mut self, code: i32) {
        self.feed(NativeEvent::key_up(code));
    }

    /// Events still waiting to be polled.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn subsystem_up(&self) -> bool {
        self.subsystem_up
    }

    pub fn open_windows(&self) -> usize {
        self.open_windows
    }

    pub fn init_calls(&self) -> usize {
        self.init_calls
    }

    pub fn quit_calls(&self) -> usize {
        self.quit_calls
    }

    /// Flags passed to the most recent init attempt.
    pub fn last_flags(&self) -> Option<InitFlags> {
        self.last_flags
    }

    /// Config passed to the most recent window creation attempt.
    pub fn last_window(&self) -> Option<&WindowConfig> {
        self.last_window.as_ref()
    }
}

impl Backend for VirtualBackend {
    type Window = VirtualWindow;

    fn name(&self) -> &str {
        "virtual"
    }

    fn compiled_version(&self) -> Version {
        VIRTUAL_VERSION
    }

    fn linked_version(&self) -> Version {
        self.linked
    }

    fn init(&mut self, flags: InitFlags) -> Result<(), String> {
        self.init_calls += 1;
        self.last_flags = Some(flags);
        if let Some(msg) = &self.init_error {
            return Err(msg.clone());
        }
        self.subsystem_up = true;
        Ok(())
    }

    fn create_window(&mut self, config: &WindowConfig) -> Result<VirtualWindow, String> {
        self.last_window = Some(config.clone());
        if let Some(msg) = &self.window_error {
            return Err(msg.clone());
        }
        if !self.subsystem_up {
            return Err("subsystem not initialized".to_owned());
        }

        let id = self.next_window;
        self.next_window += 1;
        self.open_windows += 1;
        Ok(VirtualWindow {
            id,
            title: config.title.clone(),
            width: config.width,
            height: config.height,
        })
    }

    fn poll_event(&mut self) -> Option<NativeEvent> {
        self.queue.pop_front()
    }

    fn destroy_window(&mut self, _window: VirtualWindow) {
        self.open_windows = self.open_windows.saturating_sub(1);
    }

    fn quit(&mut self) {
        self.quit_calls += 1;
        self.subsystem_up = false;
    }
}
