//! Error types for CueForge

use thiserror::Error;

/// Core error type
///
/// Configuration variants fail fast at rule/engine construction.
/// Boundary variants (`Playback`, `Speech`, `Haptic`) are never propagated
/// out of `trigger`; they are routed to the failure sink instead.
#[derive(Error, Debug)]
pub enum CueError {
    #[error("Invalid frequency: {0} Hz")]
    InvalidFrequency(f64),

    #[error("Invalid parameter: {0}")]
    InvalidParam(String),

    #[error("Channel pool too small: {0} (need at least 2)")]
    PoolTooSmall(usize),

    #[error("Playback error: {0}")]
    Playback(String),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("Haptic error: {0}")]
    Haptic(String),

    #[error("Audio file error: {0}")]
    AudioFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type CueResult<T> = Result<T, CueError>;
