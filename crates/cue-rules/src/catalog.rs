//! Stock rule catalog
//!
//! Named constructors for common interaction patterns, each returning a
//! fully configured [`Rule`]:
//!
//! | Constructor       | Action   | Default asset/param         | Haptic    |
//! |-------------------|----------|-----------------------------|-----------|
//! | `swipe(min_vel)`  | PlayClip | "swipe.mp3", pitch scales with min_vel | Light |
//! | `tap()`           | PlayClip | "click.mp3"                 | Selection |
//! | `shake()`         | PlayClip | "shake.mp3"                 | Heavy     |
//! | `state_success()` | PlayClip | "success.mp3"               | Medium    |
//! | `announce(text)`  | Speak    | caller-supplied text        | Light     |
//! | `beep(freq)`      | PlayTone | 200 ms at `freq` Hz         | Light     |
//!
//! Every constructor defaults to first-match-wins (`allow_layering =
//! false`); use the [`Rule`] builders to adjust.

use std::sync::Arc;

use cue_core::{CueResult, GestureKind, HapticPulse, InteractionEvent};

// Well-known tags live next to the event model
pub use cue_core::event::tags;

use crate::rule::{FeedbackAction, Rule};

/// Default beep length (ms)
pub const DEFAULT_BEEP_MS: u32 = 200;

/// Fires for any gesture whose velocity reaches `min_velocity` (inclusive).
///
/// Pitch rises with the configured threshold: `1.0 + min_velocity / 1000`.
/// Velocity uses the sample's own timestamp delta when present, else the
/// fixed frame fallback (see [`cue_core::DEFAULT_FRAME_SECS`]).
pub fn swipe(min_velocity: f32) -> Rule {
    Rule {
        action: FeedbackAction::PlayClip {
            path: "swipe.mp3".to_string(),
            volume: 1.0,
            pitch: 1.0 + min_velocity / 1000.0,
        },
        priority: 1,
        allow_layering: false,
        haptic: Some(HapticPulse::Light),
        predicate: Arc::new(move |event| {
            event
                .gesture()
                .is_some_and(|sample| sample.velocity() >= min_velocity)
        }),
    }
}

/// Fires for a bare trigger (`NoData`) or any tap gesture
pub fn tap() -> Rule {
    Rule {
        action: FeedbackAction::clip("click.mp3"),
        priority: 2,
        allow_layering: false,
        haptic: Some(HapticPulse::Selection),
        predicate: Arc::new(|event| {
            matches!(event, InteractionEvent::NoData)
                || event
                    .gesture()
                    .is_some_and(|sample| sample.kind == GestureKind::Tap)
        }),
    }
}

/// Fires only for the `"shake"` tag (as synthesized by the motion listener)
pub fn shake() -> Rule {
    Rule {
        action: FeedbackAction::clip("shake.mp3"),
        priority: 3,
        allow_layering: false,
        haptic: Some(HapticPulse::Heavy),
        predicate: Arc::new(|event| event.is_named(tags::SHAKE)),
    }
}

/// Fires for the `"success"` tag or application state
pub fn state_success() -> Rule {
    Rule {
        action: FeedbackAction::clip("success.mp3"),
        priority: 4,
        allow_layering: false,
        haptic: Some(HapticPulse::Medium),
        predicate: Arc::new(|event| {
            event.is_named(tags::SUCCESS) || event.is_state(tags::SUCCESS)
        }),
    }
}

/// Speaks `text` for every event (combine with layering or place last)
pub fn announce(text: impl Into<String>) -> Rule {
    Rule {
        action: FeedbackAction::speak(text),
        priority: 5,
        allow_layering: false,
        haptic: Some(HapticPulse::Light),
        predicate: Arc::new(|_| true),
    }
}

/// Plays a 200 ms sine tone on the `"beep"` tag.
///
/// Fails fast on a non-positive frequency.
pub fn beep(frequency_hz: f64) -> CueResult<Rule> {
    beep_for(frequency_hz, DEFAULT_BEEP_MS)
}

/// [`beep`] with an explicit duration
pub fn beep_for(frequency_hz: f64, duration_ms: u32) -> CueResult<Rule> {
    Ok(Rule {
        action: FeedbackAction::tone(frequency_hz, duration_ms)?,
        priority: 0,
        allow_layering: false,
        haptic: Some(HapticPulse::Light),
        predicate: Arc::new(|event| event.is_named(tags::BEEP)),
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use cue_core::{DEFAULT_FRAME_SECS, GestureSample};

    fn gesture(kind: GestureKind, dx: f32, dy: f32) -> InteractionEvent {
        InteractionEvent::Gesture(GestureSample::new(kind, dx, dy))
    }

    #[test]
    fn test_swipe_boundary_is_inclusive() {
        let rule = swipe(600.0);

        // Delta magnitude exactly 600 * 0.016 = 9.6 sits on the threshold
        let at_boundary = gesture(GestureKind::Swipe, 600.0 * DEFAULT_FRAME_SECS, 0.0);
        assert!(rule.matches(&at_boundary));

        let below = gesture(GestureKind::Swipe, 600.0 * DEFAULT_FRAME_SECS - 0.01, 0.0);
        assert!(!rule.matches(&below));
    }

    #[test]
    fn test_swipe_honors_real_timestamp_delta() {
        let rule = swipe(600.0);

        // 9.6 units over 0.032 s is only 300 u/s — too slow despite the
        // delta that would pass under the frame fallback
        let slow = InteractionEvent::Gesture(
            GestureSample::new(GestureKind::Swipe, 9.6, 0.0).with_elapsed(0.032),
        );
        assert!(!rule.matches(&slow));

        let fast = InteractionEvent::Gesture(
            GestureSample::new(GestureKind::Swipe, 9.6, 0.0).with_elapsed(0.008),
        );
        assert!(rule.matches(&fast));
    }

    #[test]
    fn test_swipe_pitch_scales_with_threshold() {
        let rule = swipe(600.0);
        match rule.action {
            FeedbackAction::PlayClip { ref path, pitch, .. } => {
                assert_eq!(path, "swipe.mp3");
                assert!((pitch - 1.6).abs() < 1e-6);
            }
            _ => panic!("swipe should be a clip action"),
        }
    }

    #[test]
    fn test_swipe_matches_any_gesture_kind() {
        let rule = swipe(100.0);
        assert!(rule.matches(&gesture(GestureKind::Pan, 50.0, 0.0)));
    }

    #[test]
    fn test_tap_matches_nodata_and_tap_gestures() {
        let rule = tap();

        assert!(rule.matches(&InteractionEvent::NoData));
        assert!(rule.matches(&gesture(GestureKind::Tap, 0.0, 0.0)));
        assert!(!rule.matches(&gesture(GestureKind::Swipe, 10.0, 0.0)));
        assert!(!rule.matches(&InteractionEvent::named(tags::SUCCESS)));
    }

    #[test]
    fn test_shake_matches_only_shake_tag() {
        let rule = shake();

        assert!(rule.matches(&InteractionEvent::named(tags::SHAKE)));
        assert!(!rule.matches(&InteractionEvent::named("wobble")));
        assert!(!rule.matches(&InteractionEvent::state(tags::SHAKE)));
        assert!(!rule.matches(&gesture(GestureKind::Swipe, 100.0, 0.0)));
        assert_eq!(rule.haptic, Some(HapticPulse::Heavy));
    }

    #[test]
    fn test_state_success_matches_tag_and_state() {
        let rule = state_success();

        assert!(rule.matches(&InteractionEvent::named(tags::SUCCESS)));
        assert!(rule.matches(&InteractionEvent::state(tags::SUCCESS)));
        assert!(!rule.matches(&InteractionEvent::named("failure")));
        assert!(!rule.matches(&InteractionEvent::NoData));
    }

    #[test]
    fn test_announce_matches_everything() {
        let rule = announce("saved");

        assert!(rule.matches(&InteractionEvent::NoData));
        assert!(rule.matches(&InteractionEvent::named("anything")));
        assert!(rule.matches(&gesture(GestureKind::LongPress, 1.0, 1.0)));
        assert_eq!(
            rule.action,
            FeedbackAction::Speak {
                text: "saved".to_string()
            }
        );
    }

    #[test]
    fn test_beep_defaults() {
        let rule = beep(880.0).unwrap();

        assert!(rule.matches(&InteractionEvent::named(tags::BEEP)));
        assert!(!rule.matches(&InteractionEvent::NoData));
        assert_eq!(
            rule.action,
            FeedbackAction::PlayTone {
                frequency_hz: 880.0,
                duration_ms: DEFAULT_BEEP_MS,
            }
        );
        assert_eq!(rule.priority, 0);
    }

    #[test]
    fn test_beep_rejects_bad_frequency() {
        assert!(beep(0.0).is_err());
        assert!(beep(-220.0).is_err());
        assert!(beep_for(440.0, 50).is_ok());
    }
}
