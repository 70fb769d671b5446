//! Boundary service seams
//!
//! The dispatcher consumes narrow injected services: audio output, speech
//! synthesis, haptic motor, motion sensor feed. None of them are
//! reimplemented in-tree; the engine is constructed over trait objects so
//! tests substitute deterministic fakes.

use std::fmt;
use std::sync::Arc;

use crossbeam_channel::Receiver;

use crate::error::CueError;
use crate::event::MotionSample;
use crate::haptic::HapticPulse;

/// Index of a playback channel in the pool
pub type ChannelId = usize;

// ═══════════════════════════════════════════════════════════════════════════════
// AUDIO SOURCE
// ═══════════════════════════════════════════════════════════════════════════════

/// What a channel plays: an opaque asset identifier resolved by the output
/// service, or a raw PCM buffer (16-bit LE signed, mono, 44.1 kHz)
#[derive(Clone, PartialEq)]
pub enum AudioSource {
    Asset(String),
    Buffer(Vec<u8>),
}

impl fmt::Debug for AudioSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioSource::Asset(path) => write!(f, "Asset({path:?})"),
            AudioSource::Buffer(pcm) => write!(f, "Buffer({} bytes)", pcm.len()),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// BOUNDARY SERVICES
// ═══════════════════════════════════════════════════════════════════════════════

/// Audio output device seam
///
/// Starting playback on a busy channel replaces what it was playing;
/// queueing and mixing are out of scope for the device contract.
pub trait AudioOutput: Send + Sync {
    /// Start playback on a channel. Must not block on completion.
    fn play(
        &self,
        channel: ChannelId,
        source: &AudioSource,
        volume: f32,
        pitch: f32,
    ) -> Result<(), CueError>;

    /// Stop whatever the channel is playing
    fn stop(&self, channel: ChannelId) -> Result<(), CueError>;

    /// Release resources held for the channel. Called once at disposal.
    fn dispose(&self, channel: ChannelId);
}

/// Text-to-speech seam. Language is fixed at service construction.
pub trait SpeechService: Send + Sync {
    /// Queue text for synthesis. Fire-and-forget; the service owns queueing.
    fn speak(&self, text: &str) -> Result<(), CueError>;
}

/// Haptic motor seam
pub trait HapticService: Send + Sync {
    fn vibrate(&self, pulse: HapticPulse) -> Result<(), CueError>;
}

/// Continuous accelerometer feed
///
/// The stream is lazy, infinite and non-restartable; the receiver returned
/// by `subscribe` is the subscription handle, and the listener cancels by
/// abandoning it.
pub trait MotionSource: Send {
    fn subscribe(&mut self) -> Receiver<MotionSample>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// FAILURE SINK
// ═══════════════════════════════════════════════════════════════════════════════

/// Observability seam for boundary failures swallowed by `trigger`
///
/// One failing action must not block later rules or future events, so
/// service errors never reach the caller; they land here instead.
pub trait FailureSink: Send + Sync {
    fn report(&self, error: &CueError);
}

/// Default sink: routes failures to the log
#[derive(Debug, Default)]
pub struct LogSink;

impl FailureSink for LogSink {
    fn report(&self, error: &CueError) {
        log::warn!("feedback action failed: {error}");
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SERVICE BUNDLE
// ═══════════════════════════════════════════════════════════════════════════════

/// Bundle of injected boundary services handed to the engine at construction
#[derive(Clone)]
pub struct Services {
    pub output: Arc<dyn AudioOutput>,
    pub speech: Arc<dyn SpeechService>,
    pub haptics: Arc<dyn HapticService>,
    pub failures: Arc<dyn FailureSink>,
}

impl Services {
    /// Bundle the three feedback services with the default log sink
    pub fn new(
        output: Arc<dyn AudioOutput>,
        speech: Arc<dyn SpeechService>,
        haptics: Arc<dyn HapticService>,
    ) -> Self {
        Self {
            output,
            speech,
            haptics,
            failures: Arc::new(LogSink),
        }
    }

    /// Replace the failure sink
    pub fn with_failure_sink(mut self, sink: Arc<dyn FailureSink>) -> Self {
        self.failures = sink;
        self
    }
}
