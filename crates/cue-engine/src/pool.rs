//! Playback channel pool
//!
//! Fixed set of reusable output channels. A channel holds at most one
//! active playback; starting a new one on a busy channel preempts it
//! (last-write-wins, no queueing, no mixing).
//!
//! Each channel's state sits behind its own lock, so concurrent triggers
//! targeting different channels proceed independently while same-channel
//! starts/stops never interleave.

use std::sync::Arc;

use parking_lot::Mutex;

use cue_core::{AudioOutput, AudioSource, ChannelId, CueError, CueResult};

/// Reserved channel for synthesized tones
pub const TONE_CHANNEL: ChannelId = 0;

/// Minimum number of channels in a pool
pub const MIN_POOL_SIZE: usize = 2;

// ═══════════════════════════════════════════════════════════════════════════════
// CHANNEL STATE
// ═══════════════════════════════════════════════════════════════════════════════

/// Lightweight record of what a channel is playing (the PCM bytes
/// themselves stay with the output service)
#[derive(Debug, Clone, PartialEq, Eq)]
enum ActiveSource {
    Asset(String),
    Buffer { bytes: usize },
}

impl ActiveSource {
    fn summarize(source: &AudioSource) -> Self {
        match source {
            AudioSource::Asset(path) => ActiveSource::Asset(path.clone()),
            AudioSource::Buffer(pcm) => ActiveSource::Buffer { bytes: pcm.len() },
        }
    }
}

#[derive(Debug, Default)]
struct ChannelSlot {
    active: Option<ActiveSource>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// CHANNEL POOL
// ═══════════════════════════════════════════════════════════════════════════════

/// Fixed-size pool of playback channels over one audio output service
pub struct ChannelPool {
    output: Arc<dyn AudioOutput>,
    channels: Vec<Mutex<ChannelSlot>>,
}

impl ChannelPool {
    /// Create a pool of `size` channels (minimum [`MIN_POOL_SIZE`])
    pub fn new(output: Arc<dyn AudioOutput>, size: usize) -> CueResult<Self> {
        if size < MIN_POOL_SIZE {
            return Err(CueError::PoolTooSmall(size));
        }

        let channels = (0..size).map(|_| Mutex::new(ChannelSlot::default())).collect();
        Ok(Self { output, channels })
    }

    /// Number of channels
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Always false; pools cannot be constructed empty
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Channel index for a rule priority
    #[inline]
    pub fn channel_for(&self, priority: u32) -> ChannelId {
        priority as usize % self.channels.len()
    }

    /// Start playback, preempting whatever the channel held.
    ///
    /// The previous playback is stopped best-effort first; a failing stop
    /// is logged and does not block the new start.
    pub fn play(
        &self,
        channel: ChannelId,
        source: AudioSource,
        volume: f32,
        pitch: f32,
    ) -> CueResult<()> {
        let mut slot = self.channels[channel].lock();

        if let Some(previous) = slot.active.take() {
            log::debug!("channel {channel} preempting {previous:?}");
            if let Err(err) = self.output.stop(channel) {
                log::warn!("stop before preempt failed on channel {channel}: {err}");
            }
        }

        self.output.play(channel, &source, volume, pitch)?;
        slot.active = Some(ActiveSource::summarize(&source));
        Ok(())
    }

    /// Stop whatever the channel is playing
    pub fn stop(&self, channel: ChannelId) -> CueResult<()> {
        let mut slot = self.channels[channel].lock();
        slot.active = None;
        self.output.stop(channel)
    }

    /// Whether a channel currently holds a playback
    pub fn is_busy(&self, channel: ChannelId) -> bool {
        self.channels[channel].lock().active.is_some()
    }

    /// Number of channels currently holding a playback
    pub fn active_count(&self) -> usize {
        self.channels
            .iter()
            .filter(|slot| slot.lock().active.is_some())
            .count()
    }

    /// Stop every active playback and release all channel resources
    pub fn dispose(&self) {
        for (channel, slot) in self.channels.iter().enumerate() {
            let mut slot = slot.lock();
            if slot.active.take().is_some() {
                if let Err(err) = self.output.stop(channel) {
                    log::warn!("stop during dispose failed on channel {channel}: {err}");
                }
            }
            self.output.dispose(channel);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
