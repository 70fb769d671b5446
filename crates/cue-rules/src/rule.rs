//! Feedback rule definition
//!
//! Rules are immutable values: a predicate over interaction events, the
//! action to execute on a match, and the priority/layering/haptic settings
//! the dispatcher consults.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use cue_core::{CueError, CueResult, HapticPulse, InteractionEvent};

/// Predicate evaluated against each incoming event.
///
/// Must be pure, total and side-effect-free: it observes nothing beyond the
/// event argument, always terminates and never panics.
pub type RulePredicate = Arc<dyn Fn(&InteractionEvent) -> bool + Send + Sync>;

// ═══════════════════════════════════════════════════════════════════════════════
// FEEDBACK ACTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Feedback produced when a rule matches
///
/// A closed variant set with exhaustive handling at dispatch time; adding a
/// kind is a compile-time checked change, not a new subclass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedbackAction {
    /// Play a named audio asset
    PlayClip {
        /// Opaque asset identifier, resolved by the output service
        path: String,
        /// Linear gain (0.0 silent, 1.0 unity)
        volume: f32,
        /// Playback-rate multiplier (1.0 = recorded speed)
        pitch: f32,
    },
    /// Synthesize and play a sine tone
    PlayTone { frequency_hz: f64, duration_ms: u32 },
    /// Hand text to the speech service
    Speak { text: String },
}

impl FeedbackAction {
    /// Play action at unity volume and pitch
    pub fn clip(path: impl Into<String>) -> Self {
        FeedbackAction::PlayClip {
            path: path.into(),
            volume: 1.0,
            pitch: 1.0,
        }
    }

    /// Tone action; fails fast on a non-positive or non-finite frequency
    pub fn tone(frequency_hz: f64, duration_ms: u32) -> CueResult<Self> {
        let action = FeedbackAction::PlayTone {
            frequency_hz,
            duration_ms,
        };
        action.validate()?;
        Ok(action)
    }

    /// Speech action
    pub fn speak(text: impl Into<String>) -> Self {
        FeedbackAction::Speak { text: text.into() }
    }

    /// Fail-fast parameter validation, also re-run at engine construction
    pub fn validate(&self) -> CueResult<()> {
        match self {
            FeedbackAction::PlayClip {
                path,
                volume,
                pitch,
            } => {
                if path.is_empty() {
                    return Err(CueError::InvalidParam("clip path is empty".to_string()));
                }
                if !volume.is_finite() || *volume < 0.0 {
                    return Err(CueError::InvalidParam(format!(
                        "volume out of range: {volume}"
                    )));
                }
                if !pitch.is_finite() || *pitch <= 0.0 {
                    return Err(CueError::InvalidParam(format!(
                        "pitch out of range: {pitch}"
                    )));
                }
                Ok(())
            }
            FeedbackAction::PlayTone { frequency_hz, .. } => {
                if !frequency_hz.is_finite() || *frequency_hz <= 0.0 {
                    return Err(CueError::InvalidFrequency(*frequency_hz));
                }
                Ok(())
            }
            FeedbackAction::Speak { .. } => Ok(()),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RULE
// ═══════════════════════════════════════════════════════════════════════════════

/// A (predicate, action, priority, layering flag, haptic pulse) tuple
///
/// `priority` orders evaluation (lower first; equal priorities keep
/// insertion order) and selects the playback channel via
/// `priority % pool_size`. When `allow_layering` is false the dispatcher
/// stops at this rule once it fires (first-match-wins default).
#[derive(Clone)]
pub struct Rule {
    pub action: FeedbackAction,
    pub priority: u32,
    pub allow_layering: bool,
    pub haptic: Option<HapticPulse>,
    pub predicate: RulePredicate,
}

impl Rule {
    /// Create a rule; fails fast on invalid action parameters
    pub fn new(
        action: FeedbackAction,
        predicate: impl Fn(&InteractionEvent) -> bool + Send + Sync + 'static,
    ) -> CueResult<Self> {
        action.validate()?;
        Ok(Self {
            action,
            priority: 0,
            allow_layering: false,
            haptic: None,
            predicate: Arc::new(predicate),
        })
    }

    // === Builder methods ===

    /// Set evaluation priority (lower evaluates first)
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Allow later rules to fire for the same event
    pub fn with_layering(mut self, allow: bool) -> Self {
        self.allow_layering = allow;
        self
    }

    /// Request a haptic pulse alongside the action
    pub fn with_haptic(mut self, pulse: HapticPulse) -> Self {
        self.haptic = Some(pulse);
        self
    }

    /// Override the clip volume (no effect on tone/speech actions)
    pub fn with_volume(mut self, volume: f32) -> Self {
        if let FeedbackAction::PlayClip { volume: v, .. } = &mut self.action {
            *v = volume;
        }
        self
    }

    /// Override the clip pitch (no effect on tone/speech actions)
    pub fn with_pitch(mut self, pitch: f32) -> Self {
        if let FeedbackAction::PlayClip { pitch: p, .. } = &mut self.action {
            *p = pitch;
        }
        self
    }

    // === Query methods ===

    /// Evaluate the predicate against an event
    #[inline]
    pub fn matches(&self, event: &InteractionEvent) -> bool {
        (self.predicate)(event)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("action", &self.action)
            .field("priority", &self.priority)
            .field("allow_layering", &self.allow_layering)
            .field("haptic", &self.haptic)
            .finish_non_exhaustive()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
