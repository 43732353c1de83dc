//! Visualizer settings stored in `config.yaml`

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_DATASET_LEN, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_SPEED_MS};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Shape of the generated dataset
    pub dataset: DatasetConfig,
    /// Autoplay timing
    pub playback: PlaybackConfig,
}

/// Dataset generation section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Number of bars
    pub len: usize,
    /// Smallest generated value (inclusive)
    pub min_value: u32,
    /// Largest generated value (inclusive)
    pub max_value: u32,
    /// Fixed RNG seed for reproducible datasets; random each run when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_DATASET_LEN,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            seed: None,
        }
    }
}

impl DatasetConfig {
    /// Value range with bounds ordered and kept strictly positive
    pub fn value_range(&self) -> RangeInclusive<u32> {
        let lo = self.min_value.min(self.max_value).max(1);
        let hi = self.min_value.max(self.max_value).max(lo);
        lo..=hi
    }
}

/// Playback section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay per animation phase in milliseconds
    pub speed_ms: u32,
    /// Lower bound of the speed slider
    pub min_speed_ms: u32,
    /// Upper bound of the speed slider
    pub max_speed_ms: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
            min_speed_ms: 10,
            max_speed_ms: 2000,
        }
    }
}

impl PlaybackConfig {
    /// Slider bounds, ordered and at least 1 ms
    pub fn speed_range(&self) -> RangeInclusive<u32> {
        let lo = self.min_speed_ms.min(self.max_speed_ms).max(1);
        let hi = self.min_speed_ms.max(self.max_speed_ms).max(lo);
        lo..=hi
    }

    /// Configured speed clamped into [`Self::speed_range`]
    pub fn validated_speed_ms(&self) -> u32 {
        let range = self.speed_range();
        self.speed_ms.clamp(*range.start(), *range.end())
    }
}
