use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::Item;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub capacity: Option<usize>,

    #[serde(default = "default_columns")]
    pub columns: usize,

    #[serde(default = "default_slot_size")]
    pub slot_size: f32,

    #[serde(default)]
    pub label: LabelConfig,

    #[serde(default)]
    pub starting_items: Vec<Item>,
}

/// Timing of the selection label: shown at full alpha, held, then faded in steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,

    #[serde(default = "default_fade_step")]
    pub fade_step: f32,

    #[serde(default = "default_step_interval_ms")]
    pub step_interval_ms: u64,
}

pub const MIN_FADE_STEP: f32 = 0.01;
pub const MAX_FADE_STEP: f32 = 1.0;

impl LabelConfig {
    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    /// Fade step clamped to the usable range
    pub fn fade_step(&self) -> f32 {
        self.fade_step.clamp(MIN_FADE_STEP, MAX_FADE_STEP)
    }
}

// Default values
fn default_columns() -> usize {
    4
}

fn default_slot_size() -> f32 {
    48.0
}

fn default_hold_ms() -> u64 {
    2000
}

fn default_fade_step() -> f32 {
    0.1
}

fn default_step_interval_ms() -> u64 {
    100
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            hold_ms: default_hold_ms(),
            fade_step: default_fade_step(),
            step_interval_ms: default_step_interval_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: None,
            columns: default_columns(),
            slot_size: default_slot_size(),
            label: LabelConfig::default(),
            starting_items: Vec::new(),
        }
    }
}
