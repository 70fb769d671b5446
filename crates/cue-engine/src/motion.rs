//! Motion listener
//!
//! Background classification of raw accelerometer samples: any axis whose
//! absolute acceleration exceeds the shake threshold synthesizes a
//! `Named("shake")` event and feeds it back into the dispatch path.
//!
//! The listener owns a dedicated thread for the lifetime of its engine.
//! Cancellation is immediate: once `cancel` returns the thread has been
//! joined, so no further shake events are dispatched even while the
//! underlying source keeps producing samples.

use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender, bounded, select, unbounded};

use cue_core::{CueResult, InteractionEvent, MotionSample, MotionSource, tags};

use crate::dispatch::EngineCore;

// ═══════════════════════════════════════════════════════════════════════════════
// MOTION LISTENER
// ═══════════════════════════════════════════════════════════════════════════════

pub(crate) struct MotionListener {
    cancel_tx: Sender<()>,
    handle: JoinHandle<()>,
}

impl MotionListener {
    /// Subscribe to the source and start classifying on a background thread
    pub(crate) fn spawn(
        core: Arc<EngineCore>,
        mut source: impl MotionSource + 'static,
        threshold: f32,
    ) -> CueResult<Self> {
        let samples = source.subscribe();
        let (cancel_tx, cancel_rx) = bounded::<()>(0);

        let handle = std::thread::Builder::new()
            .name("cue-motion".to_string())
            .spawn(move || run(core, samples, cancel_rx, threshold))?;

        log::debug!("motion listener started (threshold {threshold})");
        Ok(Self { cancel_tx, handle })
    }

    /// Cancel the subscription and join the listener thread.
    ///
    /// After this returns no further shake events are dispatched.
    pub(crate) fn cancel(self) {
        // Dropping the sender disconnects the cancel channel, which the
        // listener loop observes on its next select
        drop(self.cancel_tx);
        let _ = self.handle.join();
        log::debug!("motion listener cancelled");
    }
}

fn run(
    core: Arc<EngineCore>,
    samples: Receiver<MotionSample>,
    cancel_rx: Receiver<()>,
    threshold: f32,
) {
    let shake = InteractionEvent::named(tags::SHAKE);

    loop {
        select! {
            recv(cancel_rx) -> _ => break,
            recv(samples) -> msg => match msg {
                Ok(sample) => {
                    if sample.max_axis() > threshold {
                        log::debug!("shake classified (peak axis {:.1})", sample.max_axis());
                        core.trigger(&shake);
                    }
                }
                // Source disconnected; the stream is non-restartable
                Err(_) => break,
            },
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// QUEUE-BACKED SOURCE
// ═══════════════════════════════════════════════════════════════════════════════

/// Channel-backed motion source.
///
/// Adapter seam for sensor callbacks: hand [`QueueMotionSource::sender`] to
/// the platform layer and push samples from any thread. Also serves as the
/// deterministic source for tests.
pub struct QueueMotionSource {
    tx: Sender<MotionSample>,
    rx: Receiver<MotionSample>,
}

impl QueueMotionSource {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Producer handle for feeding samples into the subscription
    pub fn sender(&self) -> Sender<MotionSample> {
        self.tx.clone()
    }
}

impl Default for QueueMotionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionSource for QueueMotionSource {
    fn subscribe(&mut self) -> Receiver<MotionSample> {
        self.rx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_source_delivers_samples() {
        let mut source = QueueMotionSource::new();
        let feed = source.sender();
        let samples = source.subscribe();

        feed.send(MotionSample::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(samples.recv().unwrap(), MotionSample::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_subscription_survives_source_drop_until_sender_drops() {
        let mut source = QueueMotionSource::new();
        let feed = source.sender();
        let samples = source.subscribe();
        drop(source);

        feed.send(MotionSample::new(0.0, 16.0, 0.0)).unwrap();
        assert!(samples.recv().is_ok());

        drop(feed);
        assert!(samples.recv().is_err());
    }
}
