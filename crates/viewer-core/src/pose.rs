//! Camera poses and the small amount of math done on them.
//!
//! A [`Pose`] is a plain value: presets, tweens and the live camera each hold
//! their own copy, so nothing is aliased between them.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera position plus the orbit look-at target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub target: Vec3,
}

impl Pose {
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    pub fn from_arrays(position: [f32; 3], target: [f32; 3]) -> Self {
        Self::new(Vec3::from_array(position), Vec3::from_array(target))
    }

    /// Independently lerp position and target by `t`.
    pub fn lerp(&self, end: &Pose, t: f32) -> Pose {
        Pose {
            position: self.position.lerp(end.position, t),
            target: self.target.lerp(end.target, t),
        }
    }

    /// Raise the vertical coordinate of the position and the target to
    /// `floor_y` where they sit below it. Horizontal coordinates are left
    /// untouched. Returns whether anything moved.
    pub fn clamp_to_floor(&mut self, floor_y: f32) -> bool {
        let mut changed = false;
        if self.position.y < floor_y {
            self.position.y = floor_y;
            changed = true;
        }
        if self.target.y < floor_y {
            self.target.y = floor_y;
            changed = true;
        }
        changed
    }

    pub fn approx_eq(&self, other: &Pose, max_abs_diff: f32) -> bool {
        self.position.abs_diff_eq(other.position, max_abs_diff)
            && self.target.abs_diff_eq(other.target, max_abs_diff)
    }
}

/// Quadratic ease-in-out over normalized time.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// A vector as hosts hand it to us: either `[x, y, z]` or `{ x, y, z }`.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(untagged)]
pub enum VecInput {
    Array([f32; 3]),
    Object { x: f32, y: f32, z: f32 },
}

impl From<VecInput> for Vec3 {
    fn from(v: VecInput) -> Self {
        match v {
            VecInput::Array(a) => Vec3::from_array(a),
            VecInput::Object { x, y, z } => Vec3::new(x, y, z),
        }
    }
}

/// Possibly incomplete pose supplied when saving a preset.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct PoseInput {
    #[serde(default)]
    pub position: Option<VecInput>,
    #[serde(default)]
    pub target: Option<VecInput>,
}

impl PoseInput {
    /// Fill whichever half is missing from `live`.
    pub fn merge_with(self, live: &Pose) -> Pose {
        Pose {
            position: self.position.map(Vec3::from).unwrap_or(live.position),
            target: self.target.map(Vec3::from).unwrap_or(live.target),
        }
    }

    /// Both halves present, no fallback needed.
    pub fn complete(self) -> Option<Pose> {
        match (self.position, self.target) {
            (Some(p), Some(t)) => Some(Pose::new(p.into(), t.into())),
            _ => None,
        }
    }
}

impl From<Pose> for PoseInput {
    fn from(p: Pose) -> Self {
        Self {
            position: Some(VecInput::Array(p.position.to_array())),
            target: Some(VecInput::Array(p.target.to_array())),
        }
    }
}

/// Human readable description of the live camera, used by the info panel
/// and the copy-to-clipboard hook.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraReadout {
    pub position: Vec3,
    pub target: Vec3,
    pub distance: f32,
    pub azimuth_deg: f32,
    pub polar_deg: f32,
}

impl From<&Pose> for CameraReadout {
    fn from(pose: &Pose) -> Self {
        let offset = pose.position - pose.target;
        let distance = offset.length();
        // Same spherical convention as an orbit control: azimuth around +Y
        // measured from +Z, polar angle measured down from +Y.
        let azimuth = offset.x.atan2(offset.z);
        let polar = if distance > 0.0 {
            (offset.y / distance).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };
        Self {
            position: pose.position,
            target: pose.target,
            distance,
            azimuth_deg: azimuth.to_degrees(),
            polar_deg: polar.to_degrees(),
        }
    }
}
