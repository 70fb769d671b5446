//! Reference boundary-service implementations
//!
//! Log-only stand-ins for headless runs and demos. Real integrations
//! (platform audio, TTS, haptic motors) live outside this workspace and
//! implement the same traits.

use cue_core::{
    AudioOutput, AudioSource, ChannelId, CueResult, HapticPulse, HapticService, SpeechService,
};

/// Audio output that logs instead of playing
#[derive(Debug, Default)]
pub struct NullAudioOutput;

impl AudioOutput for NullAudioOutput {
    fn play(
        &self,
        channel: ChannelId,
        source: &AudioSource,
        volume: f32,
        pitch: f32,
    ) -> CueResult<()> {
        log::info!("play {source:?} on channel {channel} (volume {volume:.2}, pitch {pitch:.2})");
        Ok(())
    }

    fn stop(&self, channel: ChannelId) -> CueResult<()> {
        log::info!("stop channel {channel}");
        Ok(())
    }

    fn dispose(&self, channel: ChannelId) {
        log::debug!("dispose channel {channel}");
    }
}

/// Speech service that logs instead of speaking
#[derive(Debug)]
pub struct NullSpeech {
    language: String,
}

impl NullSpeech {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl Default for NullSpeech {
    fn default() -> Self {
        Self::new("en-US")
    }
}

impl SpeechService for NullSpeech {
    fn speak(&self, text: &str) -> CueResult<()> {
        log::info!("speak [{}]: {text:?}", self.language);
        Ok(())
    }
}

/// Haptic service that logs instead of vibrating
#[derive(Debug, Default)]
pub struct NullHaptic;

impl HapticService for NullHaptic {
    fn vibrate(&self, pulse: HapticPulse) -> CueResult<()> {
        log::info!("haptic pulse: {}", pulse.display_name());
        Ok(())
    }
}
