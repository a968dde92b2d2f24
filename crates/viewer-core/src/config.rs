use crate::constants::*;
use crate::pose::Pose;
use serde::Deserialize;
use std::time::Duration;

/// Tunables for one viewer instance. Every field has a default, so hosts
/// only need to pass the values they want to change.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    pub revert_delay_ms: u64,
    pub revert_move_ms: u64,
    pub brake_move_ms: u64,
    pub default_move_ms: u64,
    pub home_shortcut_move_ms: u64,
    pub floor_y: f32,
    pub max_speed_mph: f32,
    pub calibration_speed_mph: f32,
    pub base_rate: f32,
    pub default_home: Pose,
    pub default_drive: Pose,
    pub scenery_seed: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            revert_delay_ms: REVERT_DELAY.as_millis() as u64,
            revert_move_ms: REVERT_MOVE.as_millis() as u64,
            brake_move_ms: BRAKE_MOVE.as_millis() as u64,
            default_move_ms: DEFAULT_MOVE.as_millis() as u64,
            home_shortcut_move_ms: HOME_SHORTCUT_MOVE.as_millis() as u64,
            floor_y: floor_y(),
            max_speed_mph: MAX_SPEED_MPH,
            calibration_speed_mph: CALIBRATION_SPEED_MPH,
            base_rate: BASE_RATE,
            default_home: Pose::from_arrays(DEFAULT_HOME_POSITION, DEFAULT_PRESET_TARGET),
            default_drive: Pose::from_arrays(DEFAULT_DRIVE_POSITION, DEFAULT_PRESET_TARGET),
            scenery_seed: 42,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn revert_delay(&self) -> Duration {
        Duration::from_millis(self.revert_delay_ms)
    }

    pub fn revert_move(&self) -> Duration {
        Duration::from_millis(self.revert_move_ms)
    }

    pub fn brake_move(&self) -> Duration {
        Duration::from_millis(self.brake_move_ms)
    }

    pub fn default_move(&self) -> Duration {
        Duration::from_millis(self.default_move_ms)
    }

    pub fn home_shortcut_move(&self) -> Duration {
        Duration::from_millis(self.home_shortcut_move_ms)
    }
}

/// Host-supplied milliseconds as a duration; negative or NaN becomes zero.
pub fn millis(ms: f64) -> Duration {
    if ms.is_nan() || ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::MAX)
}
