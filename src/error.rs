//! src/error.rs

use std::io;
use thiserror::Error;

/// The primary error type for the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),

    #[error("Git Error: {0}")]
    Git(#[from] git2::Error),

    #[error("could not find merge base with main/master")]
    NoUpstream,

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Event channel closed unexpectedly")]
    EventChannelClosed,

    #[error("failed to create fixup commit: {0}")]
    FixupFailed(String),
}

/// A specialized `Result` type for application functions.
pub type AppResult<T> = Result<T, AppError>;
