// src/error.rs
use thiserror::Error;

/// Errors raised by contexts, strategy selection and configuration
#[derive(Debug, Error)]
pub enum StrategyError {
    /// The business operation was invoked before any strategy was set
    #[error("no strategy configured on context")]
    NoStrategy,

    /// Selector text did not name a known strategy
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Writing the result to the output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or deserialized
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, StrategyError>;
