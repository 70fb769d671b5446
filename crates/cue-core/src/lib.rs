//! cue-core: shared vocabulary for the CueForge feedback dispatcher
//!
//! Event model, haptic pulse kinds, boundary service traits, engine
//! configuration and error types shared by every CueForge crate.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ Input source │────▶│ cue-engine   │────▶│ Boundary services │
//! │ (UI, sensor) │     │ trigger()    │     │ audio/speech/     │
//! └──────────────┘     │              │     │ haptic (injected) │
//!                      │ cue-rules    │     └──────────────────┘
//!                      │ cue-synth    │
//!                      └──────────────┘
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod haptic;
pub mod services;

// Re-exports
pub use config::EngineConfig;
pub use error::{CueError, CueResult};
pub use event::{
    DEFAULT_FRAME_SECS, GestureKind, GestureSample, InteractionEvent, MotionSample, tags,
};
pub use haptic::HapticPulse;
pub use services::{
    AudioOutput, AudioSource, ChannelId, FailureSink, HapticService, LogSink, MotionSource,
    Services, SpeechService,
};
