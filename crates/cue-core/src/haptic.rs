//! Haptic pulse kinds

use serde::{Deserialize, Serialize};

/// Haptic pulse strength requested alongside a matched rule
///
/// Ordered weakest to strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum HapticPulse {
    /// Subtle tick for selection changes
    #[default]
    Selection = 0,
    /// Light impact
    Light = 1,
    /// Medium impact
    Medium = 2,
    /// Heavy impact
    Heavy = 3,
}

impl HapticPulse {
    /// Convert from u8 index
    #[inline]
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => HapticPulse::Selection,
            1 => HapticPulse::Light,
            2 => HapticPulse::Medium,
            3 => HapticPulse::Heavy,
            _ => HapticPulse::Selection,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            HapticPulse::Selection => "Selection",
            HapticPulse::Light => "Light",
            HapticPulse::Medium => "Medium",
            HapticPulse::Heavy => "Heavy",
        }
    }
}
