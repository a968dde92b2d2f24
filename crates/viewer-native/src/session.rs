use glam::Vec3;
use viewer_core::{Pose, SignalValue};

/// One scripted host action.
#[derive(Clone, Debug)]
pub enum Step {
    Signal(&'static str, SignalValue),
    OrbitStart,
    OrbitDrag(Pose),
    OrbitEnd,
    ToggleDayNight,
}

/// A timeline of host actions, keyed by seconds since startup.
pub struct Session {
    steps: Vec<(f32, Step)>,
    next: usize,
}

impl Session {
    pub fn new(mut steps: Vec<(f32, Step)>) -> Self {
        steps.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { steps, next: 0 }
    }

    /// Brake release, a speed ramp to the top speed, a manual orbit that
    /// gets reverted, then braking back to Home.
    pub fn drive_and_park() -> Self {
        let mut steps = vec![(1.0, Step::Signal("park_brake", SignalValue::Number(0.0)))];
        for i in 0..=15 {
            let mph = i as f64 * 5.0;
            steps.push((2.5 + i as f32 * 0.2, Step::Signal("vehicle_speed", mph.into())));
        }
        let orbit = [
            Pose::new(Vec3::new(3.0, 2.0, -4.0), Vec3::ZERO),
            Pose::new(Vec3::new(5.0, 1.0, 0.0), Vec3::ZERO),
            Pose::new(Vec3::new(4.0, -1.0, 3.0), Vec3::new(0.0, -1.0, 0.0)),
        ];
        steps.push((6.0, Step::OrbitStart));
        for (i, pose) in orbit.into_iter().enumerate() {
            steps.push((6.1 + i as f32 * 0.1, Step::OrbitDrag(pose)));
        }
        steps.push((6.5, Step::OrbitEnd));
        steps.push((8.5, Step::ToggleDayNight));
        steps.push((9.0, Step::Signal("headlights", true.into())));
        steps.push((9.5, Step::Signal("vehicle_speed", SignalValue::Number(0.0))));
        steps.push((10.0, Step::Signal("park_brake", SignalValue::Bool(true))));
        Self::new(steps)
    }

    /// Steps due at or before `t` seconds.
    pub fn due(&mut self, t: f32) -> Vec<Step> {
        let mut out = Vec::new();
        while let Some((at, step)) = self.steps.get(self.next) {
            if *at > t {
                break;
            }
            out.push(step.clone());
            self.next += 1;
        }
        out
    }

    pub fn last_time(&self) -> f32 {
        self.steps.last().map(|(t, _)| *t).unwrap_or(0.0)
    }
}
