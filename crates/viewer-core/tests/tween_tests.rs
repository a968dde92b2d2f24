// Camera tween timing, easing and cancellation.

mod common;

use common::*;
use glam::Vec3;
use instant::Instant;
use std::sync::Arc;
use std::task::Poll;
use viewer_core::{ease_in_out_quad, CameraTweener, Pose, TweenOutcome, TweenStep};

fn origin() -> Pose {
    Pose::new(Vec3::ZERO, Vec3::ZERO)
}

#[test]
fn easing_hits_endpoints_and_midpoint() {
    assert!(approx(ease_in_out_quad(0.0), 0.0));
    assert!(approx(ease_in_out_quad(0.25), 0.125));
    assert!(approx(ease_in_out_quad(0.5), 0.5));
    assert!(approx(ease_in_out_quad(0.75), 0.875));
    assert!(approx(ease_in_out_quad(1.0), 1.0));
}

#[test]
fn easing_is_monotonic() {
    let mut prev = ease_in_out_quad(0.0);
    for i in 1..=100 {
        let v = ease_in_out_quad(i as f32 / 100.0);
        assert!(v >= prev, "easing decreased at step {i}");
        prev = v;
    }
}

#[test]
fn tween_interpolates_position_and_target_independently() {
    let t0 = Instant::now();
    let mut tweener = CameraTweener::new();
    let mut camera = origin();
    let end = Pose::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 4.0, 0.0));
    let handle = tweener.start(&mut camera, end, ms(1000), t0);

    assert_eq!(tweener.step(&mut camera, t0 + ms(250)), TweenStep::Moving);
    assert!(approx(camera.position.x, 1.25));
    assert!(approx(camera.target.y, 0.5));

    assert_eq!(tweener.step(&mut camera, t0 + ms(500)), TweenStep::Moving);
    assert!(approx(camera.position.x, 5.0));
    assert!(approx(camera.target.y, 2.0));
    assert!(handle.outcome().is_none());

    assert_eq!(tweener.step(&mut camera, t0 + ms(1000)), TweenStep::Arrived);
    assert_eq!(camera, end);
    assert_eq!(handle.outcome(), Some(TweenOutcome::Arrived));
    assert_eq!(tweener.step(&mut camera, t0 + ms(1100)), TweenStep::Idle);
}

#[test]
fn zero_duration_resolves_at_end_pose_immediately() {
    let t0 = Instant::now();
    let mut tweener = CameraTweener::new();
    let mut camera = origin();
    let end = Pose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ONE);
    let mut handle = tweener.start(&mut camera, end, ms(0), t0);
    assert_eq!(camera, end);
    assert!(!tweener.is_active());
    assert_eq!(poll_once(&mut handle), Poll::Ready(TweenOutcome::Arrived));
}

#[test]
fn starting_a_second_tween_cancels_the_first() {
    let t0 = Instant::now();
    let mut tweener = CameraTweener::new();
    let mut camera = origin();
    let end_a = Pose::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO);
    let end_b = Pose::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 1.0, 0.0));

    let mut a = tweener.start(&mut camera, end_a, ms(1000), t0);
    let wake = Arc::new(CountingWake::default());
    assert_eq!(poll_with(&mut a, &wake), Poll::Pending);

    tweener.step(&mut camera, t0 + ms(100));
    let mut b = tweener.start(&mut camera, end_b, ms(500), t0 + ms(100));

    assert_eq!(wake.count(), 1);
    assert_eq!(poll_once(&mut a), Poll::Ready(TweenOutcome::Cancelled));
    assert!(!camera.approx_eq(&end_a, EPS));
    assert_eq!(poll_once(&mut b), Poll::Pending);

    assert_eq!(tweener.step(&mut camera, t0 + ms(600)), TweenStep::Arrived);
    assert_eq!(camera, end_b);
    assert_eq!(poll_once(&mut b), Poll::Ready(TweenOutcome::Arrived));
    // The cancelled handle keeps its outcome.
    assert_eq!(a.outcome(), Some(TweenOutcome::Cancelled));
}

#[test]
fn cancel_without_active_tween_is_noop() {
    let mut tweener = CameraTweener::new();
    assert!(!tweener.cancel());
}

#[test]
fn arrival_wakes_the_awaiting_task() {
    let t0 = Instant::now();
    let mut tweener = CameraTweener::new();
    let mut camera = origin();
    let mut handle = tweener.start(&mut camera, Pose::new(Vec3::X, Vec3::ZERO), ms(200), t0);
    let wake = Arc::new(CountingWake::default());
    assert_eq!(poll_with(&mut handle, &wake), Poll::Pending);
    tweener.step(&mut camera, t0 + ms(100));
    assert_eq!(wake.count(), 0);
    tweener.step(&mut camera, t0 + ms(200));
    assert_eq!(wake.count(), 1);
}
