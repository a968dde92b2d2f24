use std::time::Duration;

// Shared tuning constants used by both web and native frontends.

// Persistence keys
pub const PRESETS_KEY: &str = "cameraPresets";
pub const LEGACY_HOME_KEY: &str = "cameraHome";

// Well-known preset names
pub const HOME: &str = "Home";
pub const DRIVE: &str = "Drive";

// Default poses seeded when the store has no entry for them
pub const DEFAULT_HOME_POSITION: [f32; 3] = [-4.358_857_4, 1.579_708_4, 3.222_751_7];
pub const DEFAULT_DRIVE_POSITION: [f32; 3] = [0.129_095_92, 2.215_759_8, -5.849_405_8];
pub const DEFAULT_PRESET_TARGET: [f32; 3] = [0.0, 0.0, 0.0];

// Speed model
pub const MAX_SPEED_MPH: f32 = 75.0;
pub const CALIBRATION_SPEED_MPH: f32 = 50.0; // speed that maps to exactly BASE_RATE
pub const BASE_RATE: f32 = 0.3; // road units per frame at calibration speed

// Camera moves
pub const DEFAULT_MOVE: Duration = Duration::from_millis(1000);
pub const BRAKE_MOVE: Duration = Duration::from_millis(1200);
pub const REVERT_MOVE: Duration = Duration::from_millis(800);
pub const HOME_SHORTCUT_MOVE: Duration = Duration::from_millis(800);
pub const REVERT_DELAY: Duration = Duration::from_millis(1000);

// Floor limit for camera and orbit target
pub const GROUND_Y: f32 = -0.5;
pub const FLOOR_EPSILON: f32 = 0.01;

// Drive scenery layout
pub const LANE_MARKING_COUNT: usize = 20;
pub const LANE_SPACING: f32 = 10.0;
pub const TREES_PER_SIDE: usize = 10;
pub const TREE_SPACING: f32 = 20.0;
pub const TREE_BASE_OFFSET_X: f32 = 6.0;
pub const TREE_OFFSET_JITTER_X: f32 = 2.0;
pub const TREE_Y: f32 = 0.5;
pub const SCENERY_START_Z: f32 = -50.0; // first item z, also the wrap threshold
pub const LANE_WRAP: f32 = 100.0;
pub const TREE_WRAP: f32 = 200.0;
pub const WHEEL_BASE_SPIN: f32 = 0.05; // radians per frame, even when parked
pub const WHEEL_SPEED_SPIN: f32 = 0.33; // extra spin per unit of animation speed

// Colors (0xRRGGBB)
pub const SHOWROOM_BACKGROUND: u32 = 0x1a1a1a;
pub const DAY_SKY: u32 = 0x87ceeb;
pub const NIGHT_SKY: u32 = 0x0a0a2e;

// Ambient intensities
pub const SHOWROOM_AMBIENT: f32 = 0.2;
pub const DAY_AMBIENT: f32 = 0.6;
pub const NIGHT_AMBIENT: f32 = 0.3;

#[inline]
pub fn floor_y() -> f32 {
    GROUND_Y + FLOOR_EPSILON
}
