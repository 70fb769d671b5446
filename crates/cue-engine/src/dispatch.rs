//! Dispatch engine
//!
//! Owns the finalized rule catalog and channel pool; evaluates rules
//! strictly sequentially against each incoming event and executes matched
//! actions through the boundary services.
//!
//! `trigger` never raises for a well-formed catalog and event: boundary
//! failures are routed to the failure sink so one failing action cannot
//! block later rules or future events.

use std::sync::Arc;

use cue_core::{
    AudioSource, ChannelId, CueResult, EngineConfig, InteractionEvent, MotionSource, Services,
};
use cue_rules::{FeedbackAction, Rule};
use cue_synth::generate_sine_wave;

use crate::motion::MotionListener;
use crate::pool::{ChannelPool, TONE_CHANNEL};

// ═══════════════════════════════════════════════════════════════════════════════
// ENGINE CORE (shared with the motion listener thread)
// ═══════════════════════════════════════════════════════════════════════════════

/// Dispatch state shared between the caller's thread and the motion
/// listener thread. Immutable after construction apart from the channel
/// slots, which serialize behind their own locks.
pub(crate) struct EngineCore {
    rules: Vec<Rule>,
    pool: ChannelPool,
    services: Services,
    master_volume: f32,
}

impl EngineCore {
    pub(crate) fn trigger(&self, event: &InteractionEvent) {
        for rule in &self.rules {
            if !rule.matches(event) {
                continue;
            }

            self.execute(rule);

            if let Some(pulse) = rule.haptic {
                if let Err(err) = self.services.haptics.vibrate(pulse) {
                    self.services.failures.report(&err);
                }
            }

            if !rule.allow_layering {
                break;
            }
        }
    }

    fn execute(&self, rule: &Rule) {
        let result = match &rule.action {
            FeedbackAction::PlayClip {
                path,
                volume,
                pitch,
            } => {
                let channel = self.pool.channel_for(rule.priority);
                log::debug!(
                    "rule (priority {}) plays {path:?} on channel {channel}",
                    rule.priority
                );
                self.pool.play(
                    channel,
                    AudioSource::Asset(path.clone()),
                    volume * self.master_volume,
                    *pitch,
                )
            }
            FeedbackAction::PlayTone {
                frequency_hz,
                duration_ms,
            } => {
                let pcm = generate_sine_wave(*frequency_hz, *duration_ms);
                log::debug!(
                    "rule (priority {}) plays {frequency_hz} Hz tone ({duration_ms} ms) on channel {TONE_CHANNEL}",
                    rule.priority
                );
                self.pool
                    .play(TONE_CHANNEL, AudioSource::Buffer(pcm), self.master_volume, 1.0)
            }
            FeedbackAction::Speak { text } => self.services.speech.speak(text),
        };

        if let Err(err) = result {
            self.services.failures.report(&err);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DISPATCH ENGINE
// ═══════════════════════════════════════════════════════════════════════════════

/// Rule-driven feedback dispatcher
///
/// Constructed once over a finalized catalog; rules cannot be added or
/// removed afterwards. Disposal (explicit or on drop) cancels the motion
/// listener and releases every playback channel.
pub struct DispatchEngine {
    core: Arc<EngineCore>,
    listener: Option<MotionListener>,
    config: EngineConfig,
    disposed: bool,
}

impl DispatchEngine {
    /// Build an engine over a finalized catalog.
    ///
    /// Fails fast on invalid configuration or rule parameters. The catalog
    /// is stably sorted by priority, so equal priorities keep their
    /// insertion order.
    pub fn new(rules: Vec<Rule>, config: EngineConfig, services: Services) -> CueResult<Self> {
        config.validate()?;
        for rule in &rules {
            rule.action.validate()?;
        }

        let mut rules = rules;
        rules.sort_by_key(|rule| rule.priority);

        let pool = ChannelPool::new(services.output.clone(), config.pool_size)?;
        let core = Arc::new(EngineCore {
            rules,
            pool,
            services,
            master_volume: config.master_volume,
        });

        log::info!(
            "dispatch engine started ({} rules, {} channels)",
            core.rules.len(),
            config.pool_size
        );

        Ok(Self {
            core,
            listener: None,
            config,
            disposed: false,
        })
    }

    /// Attach a motion source; qualifying samples feed synthetic `"shake"`
    /// events back into the dispatch path. Replaces any previous source.
    pub fn attach_motion_source(&mut self, source: impl MotionSource + 'static) -> CueResult<()> {
        if let Some(listener) = self.listener.take() {
            listener.cancel();
        }

        self.listener = Some(MotionListener::spawn(
            Arc::clone(&self.core),
            source,
            self.config.shake_threshold,
        )?);
        Ok(())
    }

    /// Evaluate all rules against one event
    pub fn trigger(&self, event: &InteractionEvent) {
        self.core.trigger(event);
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // QUERY METHODS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Number of rules in the catalog
    pub fn rule_count(&self) -> usize {
        self.core.rules.len()
    }

    /// Number of playback channels
    pub fn pool_size(&self) -> usize {
        self.core.pool.len()
    }

    /// Number of channels currently holding a playback
    pub fn active_channel_count(&self) -> usize {
        self.core.pool.active_count()
    }

    /// Whether a channel currently holds a playback
    pub fn is_channel_busy(&self, channel: ChannelId) -> bool {
        self.core.pool.is_busy(channel)
    }

    /// Engine configuration (fixed at construction)
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether a motion listener is currently attached
    pub fn has_motion_listener(&self) -> bool {
        self.listener.is_some()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════════

    /// Cancel the motion listener and release all channels.
    ///
    /// Idempotent; also runs on drop. After this returns, no further shake
    /// events are dispatched even if the motion source keeps producing.
    pub fn dispose(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.cancel();
        }

        if !self.disposed {
            self.disposed = true;
            self.core.pool.dispose();
            log::info!("dispatch engine stopped");
        }
    }
}

impl Drop for DispatchEngine {
    fn drop(&mut self) {
        self.dispose();
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
