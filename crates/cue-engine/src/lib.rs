//! cue-engine: rule dispatch over a pooled playback surface
//!
//! Owns the finalized rule catalog and the channel pool; evaluates rules in
//! priority order against each incoming event and executes matched actions
//! through the injected boundary services.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      DISPATCH ARCHITECTURE                       │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │   Caller thread                    Listener thread               │
//! │   ┌─────────────────┐             ┌──────────────────┐          │
//! │   │ trigger(event)  │             │ MotionListener   │          │
//! │   │                 │◀───shake────│ |a| > threshold  │          │
//! │   └───────┬─────────┘             └──────────────────┘          │
//! │           │ first matching rule (or all, with layering)         │
//! │           ▼                                                      │
//! │   ┌─────────────────┐   clip/tone   ┌──────────────────┐        │
//! │   │ Rule catalog    │──────────────▶│ ChannelPool      │        │
//! │   │ (priority order)│               │ [priority % N]   │        │
//! │   └───────┬─────────┘               └──────────────────┘        │
//! │           │ speech / haptics                                     │
//! │           ▼                                                      │
//! │   injected boundary services (fire-and-forget)                   │
//! │                                                                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod backends;
pub mod dispatch;
pub mod motion;
pub mod pool;

// Re-exports
pub use backends::{NullAudioOutput, NullHaptic, NullSpeech};
pub use dispatch::DispatchEngine;
pub use motion::QueueMotionSource;
pub use pool::{ChannelPool, MIN_POOL_SIZE, TONE_CHANNEL};
