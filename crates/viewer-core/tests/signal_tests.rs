// Speed mapping, value coercion and signal routing.

mod common;

use common::*;
use viewer_core::constants::BASE_RATE;
use viewer_core::{SignalRoute, SignalRouter, SignalValue, SpeedModel};

fn model() -> SpeedModel {
    SpeedModel::new(75.0, 50.0, BASE_RATE)
}

fn num(n: f64) -> SignalValue {
    SignalValue::Number(n)
}

fn speed_after(raw: SignalValue) -> (f32, f32) {
    let mut m = model();
    m.set_speed(&raw);
    (m.speed(), m.animation_speed())
}

#[test]
fn speed_calibration_points() {
    assert_eq!(speed_after(num(0.0)), (0.0, 0.0));
    let (s, a) = speed_after(num(50.0));
    assert!(approx(s, 50.0));
    assert!(approx(a, BASE_RATE));
    let (s, a) = speed_after(num(75.0));
    assert!(approx(s, 75.0));
    assert!(approx(a, 1.5 * BASE_RATE));
}

#[test]
fn speed_is_clamped_to_legal_range() {
    assert_eq!(speed_after(num(-10.0)).0, 0.0);
    assert_eq!(speed_after(num(1000.0)).0, 75.0);
    assert!(approx(speed_after(num(1000.0)).1, 1.5 * BASE_RATE));
}

#[test]
fn non_numeric_speed_becomes_zero() {
    assert_eq!(speed_after("abc".into()), (0.0, 0.0));
    assert_eq!(speed_after(SignalValue::Null), (0.0, 0.0));
    assert_eq!(speed_after(num(f64::NAN)), (0.0, 0.0));
    assert!(approx(speed_after(" 25 ".into()).0, 25.0));
}

#[test]
fn animation_speed_is_monotonic_in_speed() {
    let mut prev = -1.0;
    for mph in 0..=80 {
        let (_, a) = speed_after(num(mph as f64));
        assert!(a >= prev, "animation speed decreased at {mph} mph");
        prev = a;
    }
}

#[test]
fn brake_flag_coercion() {
    assert!(num(1.0).as_flag());
    assert!(SignalValue::from(true).as_flag());
    assert!(SignalValue::from("1").as_flag());
    assert!(num(2.0).as_flag());
    assert!(!num(0.0).as_flag());
    assert!(!SignalValue::from(false).as_flag());
    assert!(!SignalValue::from("abc").as_flag());
    assert!(!SignalValue::from("").as_flag());
    assert!(!SignalValue::Null.as_flag());
}

#[test]
fn signal_value_display_matches_toast_text() {
    assert_eq!(num(1.0).to_string(), "1");
    assert_eq!(num(2.5).to_string(), "2.5");
    assert_eq!(SignalValue::from(true).to_string(), "true");
    assert_eq!(SignalValue::from("on").to_string(), "on");
    assert_eq!(SignalValue::Null.to_string(), "null");
}

#[test]
fn routing_is_case_insensitive_substring() {
    let router = SignalRouter::default();
    assert_eq!(router.route("Park_Brake"), Some(SignalRoute::ParkingBrake));
    assert_eq!(router.route("PARKING"), Some(SignalRoute::ParkingBrake));
    assert_eq!(router.route("VehicleSpeed"), Some(SignalRoute::Speed));
    assert_eq!(router.route("wheel_velocity"), Some(SignalRoute::Speed));
    assert_eq!(router.route("headlights"), Some(SignalRoute::Notify));
}

#[test]
fn park_wins_over_speed() {
    let router = SignalRouter::default();
    assert_eq!(router.route("park_speed_lock"), Some(SignalRoute::ParkingBrake));
    assert_eq!(router.route("velocity_park"), Some(SignalRoute::ParkingBrake));
}

#[test]
fn empty_name_is_ignored() {
    assert_eq!(SignalRouter::default().route(""), None);
}

#[test]
fn infinite_speed_text_clamps_like_a_number() {
    assert!(approx(speed_after("Infinity".into()).0, 75.0));
    assert!(approx(speed_after(" +Infinity ".into()).0, 75.0));
    assert_eq!(speed_after("-Infinity".into()).0, 0.0);
    assert_eq!(speed_after(num(f64::INFINITY)).0, 75.0);
    // Only the JavaScript spelling counts as infinite.
    assert_eq!(speed_after("inf".into()), (0.0, 0.0));
    assert!(SignalValue::from("Infinity").as_flag());
}

#[test]
fn negative_max_speed_pins_speed_at_zero() {
    let mut m = SpeedModel::new(-1.0, 50.0, BASE_RATE);
    m.set_speed(&num(10.0));
    assert_eq!((m.speed(), m.animation_speed()), (0.0, 0.0));

    let mut m = SpeedModel::new(f32::NAN, 50.0, BASE_RATE);
    m.set_speed(&num(10.0));
    assert_eq!(m.speed(), 0.0);
}
