// Scene mode lighting table and the drive scenery animator.

mod common;

use common::*;
use viewer_core::constants::{LANE_MARKING_COUNT, TREES_PER_SIDE, WHEEL_BASE_SPIN};
use viewer_core::{
    lighting_for, DriveScenery, Environment, SceneMode, DRIVE_DAY_LIGHTING, DRIVE_NIGHT_LIGHTING,
    SHOWROOM_LIGHTING,
};

#[test]
fn lighting_table_lookup() {
    assert_eq!(lighting_for(SceneMode::Showroom, true), SHOWROOM_LIGHTING);
    assert_eq!(lighting_for(SceneMode::Showroom, false), SHOWROOM_LIGHTING);
    assert_eq!(lighting_for(SceneMode::Drive, true), DRIVE_DAY_LIGHTING);
    assert_eq!(lighting_for(SceneMode::Drive, false), DRIVE_NIGHT_LIGHTING);
    assert!(DRIVE_DAY_LIGHTING.road_visible && !DRIVE_DAY_LIGHTING.spotlights_visible);
    assert!(SHOWROOM_LIGHTING.ground_visible && !SHOWROOM_LIGHTING.road_visible);
}

#[test]
fn night_toggle_in_showroom_keeps_showroom_lighting() {
    let mut env = Environment::default();
    assert!(env.is_day());
    assert!(!env.toggle_day_night());
    assert_eq!(env.lighting(), SHOWROOM_LIGHTING);
    env.enter_drive();
    assert_eq!(env.lighting(), DRIVE_NIGHT_LIGHTING);
    env.set_day_mode(true);
    assert_eq!(env.lighting(), DRIVE_DAY_LIGHTING);
}

#[test]
fn showroom_and_drive_are_exclusive_and_idempotent() {
    let mut env = Environment::default();
    env.enter_drive();
    env.enter_drive();
    assert!(env.is_driving());
    assert_eq!(env.mode(), SceneMode::Drive);
    env.enter_showroom();
    env.enter_showroom();
    assert!(!env.is_driving());
    assert_eq!(env.lighting(), SHOWROOM_LIGHTING);
}

#[test]
fn scenery_layout_is_seeded_and_deterministic() {
    let a = DriveScenery::new(7);
    let b = DriveScenery::new(7);
    assert_eq!(a.lane_z.len(), LANE_MARKING_COUNT);
    assert_eq!(a.trees.len(), TREES_PER_SIDE * 2);
    assert!(approx(a.lane_z[0], -50.0));
    assert!(approx(a.lane_z[19], 140.0));
    for (ta, tb) in a.trees.iter().zip(&b.trees) {
        assert_eq!(ta, tb);
    }
    for tree in &a.trees[..TREES_PER_SIDE] {
        assert!(tree.x <= -6.0 && tree.x >= -8.0);
    }
    for tree in &a.trees[TREES_PER_SIDE..] {
        assert!(tree.x >= 6.0 && tree.x <= 8.0);
    }
}

#[test]
fn scenery_only_scrolls_while_driving() {
    let mut s = DriveScenery::new(1);
    let before = s.lane_z.clone();
    s.advance(false, 0.3);
    assert_eq!(s.lane_z, before);
    assert!(approx(s.wheel_spin, WHEEL_BASE_SPIN));

    s.advance(true, 0.0);
    assert_eq!(s.lane_z, before);

    s.advance(true, 0.3);
    assert!(approx(s.road_offset, 0.3));
    assert!(approx(s.lane_z[1], before[1] - 0.3));
    assert!(approx(s.wheel_spin, WHEEL_BASE_SPIN + 0.3 * 0.33));
}

#[test]
fn scenery_wraps_behind_the_car() {
    let mut s = DriveScenery::new(1);
    // The first marking starts exactly on the wrap threshold.
    s.advance(true, 0.5);
    assert!(approx(s.lane_z[0], -50.5 + 100.0));
    assert!(approx(s.trees[0].z, -50.5 + 200.0));
    s.reset_road();
    assert_eq!(s.road_offset, 0.0);
}
