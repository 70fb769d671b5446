//! WAV dump for synthesized tones
//!
//! Debug/auditioning aid: the engine itself hands PCM buffers straight to
//! the audio output service and never touches disk.

use std::path::Path;

use cue_core::{CueError, CueResult};
use hound::{SampleFormat, WavSpec, WavWriter};

use crate::tone::SAMPLE_RATE;

/// Write a mono 16-bit LE PCM buffer (as produced by
/// [`generate_sine_wave`](crate::generate_sine_wave)) to a WAV file.
///
/// A trailing odd byte is rejected as an invalid buffer.
pub fn write_wav(path: &Path, pcm: &[u8]) -> CueResult<()> {
    if pcm.len() % 2 != 0 {
        return Err(CueError::InvalidParam(format!(
            "PCM buffer has odd length: {}",
            pcm.len()
        )));
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer =
        WavWriter::create(path, spec).map_err(|e| CueError::AudioFile(e.to_string()))?;
    for chunk in pcm.chunks_exact(2) {
        let sample = i16::from_le_bytes([chunk[0], chunk[1]]);
        writer
            .write_sample(sample)
            .map_err(|e| CueError::AudioFile(e.to_string()))?;
    }
    writer
        .finalize()
        .map_err(|e| CueError::AudioFile(e.to_string()))?;

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
