//! Engine configuration.
//!
//! Everything has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! [window]
//! title = "demo"
//! width = 800
//! height = 600
//! position = { at = { x = 10, y = 20 } }
//! opengl = false
//! ```
//!
//! Key and event bindings are fixed and are not configurable here.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TITLE: &str = "SDL window";
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

/// Where the window is placed on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowPosition {
    #[default]
    Centered,
    At { x: i32, y: i32 },
}

/// Geometry and title of the single engine window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub position: WindowPosition,
    /// Request an OpenGL-capable window.
    pub opengl: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            position: WindowPosition::Centered,
            opengl: true,
        }
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub window: WindowConfig,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
