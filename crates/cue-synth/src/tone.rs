//! Sine-wave PCM generation
//!
//! Deterministic, allocation-per-call synthesis: no oscillator state, no
//! caching, no side effects.

/// Output sample rate for synthesized tones (Hz)
pub const SAMPLE_RATE: u32 = 44_100;

/// Peak amplitude of the 16-bit output
const AMPLITUDE: f64 = 32_767.0;

/// Number of samples in a tone of `duration_ms` milliseconds:
/// `round(44100 * duration_ms / 1000)`.
///
/// Rounding is half away from zero, matching the amplitude rounding below.
#[inline]
pub fn sample_count(duration_ms: u32) -> usize {
    ((SAMPLE_RATE as u64 * duration_ms as u64 + 500) / 1000) as usize
}

/// Generate the i16 samples of a pure sine tone.
///
/// Total over the documented domain (`frequency_hz > 0`); a zero duration
/// yields an empty vec rather than an error. Each sample is
/// `sin(2π·f·i/44100) * 32767` rounded half away from zero (`f64::round`)
/// and clamped to the i16 range, so decoded values sit within ±1 of the
/// exact waveform. Overflow cannot occur: sine is bounded to [-1, 1].
pub fn sine_samples(frequency_hz: f64, duration_ms: u32) -> Vec<i16> {
    let count = sample_count(duration_ms);
    let step = std::f64::consts::TAU * frequency_hz / SAMPLE_RATE as f64;

    let mut samples = Vec::with_capacity(count);
    for i in 0..count {
        let value = ((i as f64 * step).sin() * AMPLITUDE).round();
        samples.push(value.clamp(i16::MIN as f64, i16::MAX as f64) as i16);
    }
    samples
}

/// Generate a 16-bit little-endian signed PCM buffer (mono, 44.1 kHz) for
/// a pure sine tone. Two bytes per sample; see [`sine_samples`] for the
/// numeric contract.
pub fn generate_sine_wave(frequency_hz: f64, duration_ms: u32) -> Vec<u8> {
    let samples = sine_samples(frequency_hz, duration_ms);

    let mut buffer = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        buffer.extend_from_slice(&sample.to_le_bytes());
    }
    buffer
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
