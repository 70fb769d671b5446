//! Interaction event model
//!
//! Events are the input vocabulary of the dispatcher: one value per
//! dispatch call, produced by the UI/gesture layer, the motion listener or
//! application code, and never retained after evaluation.

use serde::{Deserialize, Serialize};

/// Inter-frame duration assumed when a gesture sample carries no timestamp
/// delta. Legacy capture layers report movement deltas once per UI frame at
/// ~60 Hz; the real inter-sample delta is authoritative when present.
pub const DEFAULT_FRAME_SECS: f32 = 0.016;

/// Well-known event tags consumed by the stock rule catalog
pub mod tags {
    pub const SHAKE: &str = "shake";
    pub const BEEP: &str = "beep";
    pub const SUCCESS: &str = "success";
}

// ═══════════════════════════════════════════════════════════════════════════════
// GESTURE SAMPLES
// ═══════════════════════════════════════════════════════════════════════════════

/// Gesture classification reported by the capture layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum GestureKind {
    #[default]
    Tap = 0,
    Swipe = 1,
    Pan = 2,
    LongPress = 3,
}

impl GestureKind {
    /// Convert from u8 index
    #[inline]
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => GestureKind::Tap,
            1 => GestureKind::Swipe,
            2 => GestureKind::Pan,
            3 => GestureKind::LongPress,
            _ => GestureKind::Tap,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            GestureKind::Tap => "Tap",
            GestureKind::Swipe => "Swipe",
            GestureKind::Pan => "Pan",
            GestureKind::LongPress => "Long Press",
        }
    }
}

/// One gesture sample: movement delta plus optional timing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    /// Gesture classification
    pub kind: GestureKind,
    /// Horizontal movement delta since the previous sample
    pub dx: f32,
    /// Vertical movement delta since the previous sample
    pub dy: f32,
    /// Seconds since the previous sample, when the capture layer provides it
    pub elapsed_secs: Option<f32>,
}

impl GestureSample {
    /// Create a sample without timing information
    pub fn new(kind: GestureKind, dx: f32, dy: f32) -> Self {
        Self {
            kind,
            dx,
            dy,
            elapsed_secs: None,
        }
    }

    /// Attach the measured inter-sample delta
    pub fn with_elapsed(mut self, secs: f32) -> Self {
        self.elapsed_secs = Some(secs);
        self
    }

    /// Magnitude of the movement delta
    #[inline]
    pub fn magnitude(&self) -> f32 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    /// Velocity in units per second.
    ///
    /// Uses the measured inter-sample delta when present; otherwise falls
    /// back to the fixed [`DEFAULT_FRAME_SECS`] frame assumption.
    #[inline]
    pub fn velocity(&self) -> f32 {
        let dt = match self.elapsed_secs {
            Some(secs) if secs > 0.0 => secs,
            _ => DEFAULT_FRAME_SECS,
        };
        self.magnitude() / dt
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// MOTION SAMPLES
// ═══════════════════════════════════════════════════════════════════════════════

/// Raw 3-axis accelerometer sample
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MotionSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl MotionSample {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Largest absolute acceleration across the three axes
    #[inline]
    pub fn max_axis(&self) -> f32 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// INTERACTION EVENT
// ═══════════════════════════════════════════════════════════════════════════════

/// Input event consumed by one dispatch call
///
/// A closed union over every payload the dispatcher understands; predicates
/// match exhaustively against it, so a wrong variant is a non-match rather
/// than a runtime type error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InteractionEvent {
    /// Trigger with no payload
    NoData,
    /// Named tag such as "shake" or "beep"
    Named(String),
    /// One gesture sample
    Gesture(GestureSample),
    /// Named application state
    State(String),
}

impl InteractionEvent {
    /// Create a named-tag event
    pub fn named(tag: impl Into<String>) -> Self {
        InteractionEvent::Named(tag.into())
    }

    /// Create an application-state event
    pub fn state(tag: impl Into<String>) -> Self {
        InteractionEvent::State(tag.into())
    }

    /// Check for a specific named tag
    #[inline]
    pub fn is_named(&self, tag: &str) -> bool {
        matches!(self, InteractionEvent::Named(name) if name == tag)
    }

    /// Check for a specific application state
    #[inline]
    pub fn is_state(&self, tag: &str) -> bool {
        matches!(self, InteractionEvent::State(name) if name == tag)
    }

    /// The gesture payload, if this is a gesture event
    #[inline]
    pub fn gesture(&self) -> Option<&GestureSample> {
        match self {
            InteractionEvent::Gesture(sample) => Some(sample),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
