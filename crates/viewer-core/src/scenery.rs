//! Bookkeeping for the drive scene: lane markings and roadside trees that
//! scroll past the parked car, and the wheel spin applied every frame.
//!
//! Positions are produced here and applied to meshes by the renderer.

use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveScenery {
    /// z coordinate of each lane marking.
    pub lane_z: Vec<f32>,
    /// Position of each tree, left row first.
    pub trees: Vec<Vec3>,
    /// Total road distance scrolled since entering Drive.
    pub road_offset: f32,
    /// Wheel rotation to add this frame (radians).
    pub wheel_spin: f32,
}

impl DriveScenery {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let lane_z = (0..LANE_MARKING_COUNT)
            .map(|i| i as f32 * LANE_SPACING + SCENERY_START_Z)
            .collect();
        let mut trees = Vec::with_capacity(TREES_PER_SIDE * 2);
        for side in [-1.0_f32, 1.0] {
            for i in 0..TREES_PER_SIDE {
                let x = side * (TREE_BASE_OFFSET_X + rng.gen::<f32>() * TREE_OFFSET_JITTER_X);
                let z = i as f32 * TREE_SPACING + SCENERY_START_Z;
                trees.push(Vec3::new(x, TREE_Y, z));
            }
        }
        Self {
            lane_z,
            trees,
            road_offset: 0.0,
            wheel_spin: WHEEL_BASE_SPIN,
        }
    }

    pub fn reset_road(&mut self) {
        self.road_offset = 0.0;
    }

    /// Advance one frame. Nothing scrolls unless driving with a positive
    /// animation speed; the wheels always turn at least at the base rate.
    pub fn advance(&mut self, driving: bool, animation_speed: f32) {
        self.wheel_spin = WHEEL_BASE_SPIN;
        if !driving || animation_speed <= 0.0 {
            return;
        }
        self.road_offset += animation_speed;
        for z in &mut self.lane_z {
            *z -= animation_speed;
            if *z < SCENERY_START_Z {
                *z += LANE_WRAP;
            }
        }
        for tree in &mut self.trees {
            tree.z -= animation_speed;
            if tree.z < SCENERY_START_Z {
                tree.z += TREE_WRAP;
            }
        }
        self.wheel_spin += animation_speed * WHEEL_SPEED_SPIN;
    }
}
