//! Minimal end-to-end demo: stock catalog over the log-only backends.
//!
//! Run with: `RUST_LOG=debug cargo run -p cue-engine --example feedback_demo`

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use cue_core::{
    EngineConfig, GestureKind, GestureSample, InteractionEvent, MotionSample, Services,
};
use cue_engine::{DispatchEngine, NullAudioOutput, NullHaptic, NullSpeech, QueueMotionSource};
use cue_rules::catalog;

fn main() {
    env_logger::init();

    let config = EngineConfig::default();
    let services = Services::new(
        Arc::new(NullAudioOutput),
        Arc::new(NullSpeech::new(&config.speech_language)),
        Arc::new(NullHaptic),
    );

    let rules = vec![
        catalog::tap(),
        catalog::swipe(600.0),
        catalog::shake(),
        catalog::state_success(),
        catalog::beep(880.0).expect("880 Hz is a valid beep frequency"),
    ];

    let mut engine =
        DispatchEngine::new(rules, config, services).expect("engine construction failed");

    let source = QueueMotionSource::new();
    let accelerometer = source.sender();
    engine
        .attach_motion_source(source)
        .expect("motion listener failed to start");

    // UI-style triggers
    engine.trigger(&InteractionEvent::NoData);
    engine.trigger(&InteractionEvent::Gesture(GestureSample::new(
        GestureKind::Swipe,
        14.0,
        5.0,
    )));
    engine.trigger(&InteractionEvent::named("beep"));
    engine.trigger(&InteractionEvent::state("success"));

    // Sensor-style trigger: one quiet sample, one hard shake
    accelerometer.send(MotionSample::new(0.3, -0.8, 9.8)).ok();
    accelerometer.send(MotionSample::new(2.0, 21.5, 3.0)).ok();
    thread::sleep(Duration::from_millis(100));

    engine.dispose();
}
