//! Showroom/drive and day/night state plus the lighting each combination
//! selects. Lighting is looked up from a fixed table; the renderer only
//! consumes it.

use crate::constants::*;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SceneMode {
    Showroom,
    Drive,
}

/// Toggles and colours the renderer applies to the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lighting {
    pub ground_visible: bool,
    pub road_visible: bool,
    pub spotlights_visible: bool,
    pub ambient_intensity: f32,
    pub background: u32,
    pub fog: u32,
}

pub const SHOWROOM_LIGHTING: Lighting = Lighting {
    ground_visible: true,
    road_visible: false,
    spotlights_visible: true,
    ambient_intensity: SHOWROOM_AMBIENT,
    background: SHOWROOM_BACKGROUND,
    fog: SHOWROOM_BACKGROUND,
};

pub const DRIVE_DAY_LIGHTING: Lighting = Lighting {
    ground_visible: false,
    road_visible: true,
    spotlights_visible: false,
    ambient_intensity: DAY_AMBIENT,
    background: DAY_SKY,
    fog: DAY_SKY,
};

pub const DRIVE_NIGHT_LIGHTING: Lighting = Lighting {
    ground_visible: false,
    road_visible: true,
    spotlights_visible: false,
    ambient_intensity: NIGHT_AMBIENT,
    background: NIGHT_SKY,
    fog: NIGHT_SKY,
};

/// Showroom lighting is fixed; the day flag only matters on the road.
pub fn lighting_for(mode: SceneMode, day: bool) -> Lighting {
    match (mode, day) {
        (SceneMode::Showroom, _) => SHOWROOM_LIGHTING,
        (SceneMode::Drive, true) => DRIVE_DAY_LIGHTING,
        (SceneMode::Drive, false) => DRIVE_NIGHT_LIGHTING,
    }
}

#[derive(Clone, Debug)]
pub struct Environment {
    mode: SceneMode,
    day: bool,
    lighting: Lighting,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            mode: SceneMode::Showroom,
            day: true,
            lighting: SHOWROOM_LIGHTING,
        }
    }
}

impl Environment {
    pub fn enter_showroom(&mut self) {
        self.mode = SceneMode::Showroom;
        self.apply();
    }

    pub fn enter_drive(&mut self) {
        self.mode = SceneMode::Drive;
        self.apply();
    }

    pub fn set_day_mode(&mut self, day: bool) {
        self.day = day;
        self.apply();
    }

    /// Flip day/night and return the new day flag.
    pub fn toggle_day_night(&mut self) -> bool {
        self.set_day_mode(!self.day);
        self.day
    }

    fn apply(&mut self) {
        self.lighting = lighting_for(self.mode, self.day);
    }

    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    pub fn is_driving(&self) -> bool {
        self.mode == SceneMode::Drive
    }

    pub fn is_day(&self) -> bool {
        self.day
    }

    pub fn lighting(&self) -> Lighting {
        self.lighting
    }
}

