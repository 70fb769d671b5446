//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::error::{CueError, CueResult};

/// Dispatch engine settings (serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of playback channels in the pool (minimum 2)
    pub pool_size: usize,
    /// Acceleration magnitude above which a shake event is synthesized
    pub shake_threshold: f32,
    /// Language handed to the speech service at construction
    pub speech_language: String,
    /// Master gain applied on top of each rule's own volume
    pub master_volume: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pool_size: 4,
            shake_threshold: 15.0,
            speech_language: "en-US".to_string(),
            master_volume: 1.0,
        }
    }
}

impl EngineConfig {
    /// Fail-fast validation, run at engine construction
    pub fn validate(&self) -> CueResult<()> {
        if self.pool_size < 2 {
            return Err(CueError::PoolTooSmall(self.pool_size));
        }
        if !self.master_volume.is_finite() || self.master_volume < 0.0 {
            return Err(CueError::InvalidParam(format!(
                "master volume out of range: {}",
                self.master_volume
            )));
        }
        if !self.shake_threshold.is_finite() || self.shake_threshold <= 0.0 {
            return Err(CueError::InvalidParam(format!(
                "shake threshold out of range: {}",
                self.shake_threshold
            )));
        }
        Ok(())
    }
}
