use thiserror::Error;

/// Startup failures reported by [`Lifecycle::init`](crate::Lifecycle::init).
///
/// Every variant formats to a non-empty message, so `err.to_string()` can be used
/// directly as the diagnostic shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("subsystem init failed: {0}")]
    SubsystemInit(String),

    #[error("window creation failed: {0}")]
    WindowCreation(String),

    #[error("engine is already initialized")]
    AlreadyInitialized,
}

/// Failures loading an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
