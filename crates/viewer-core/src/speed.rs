use crate::signal::SignalValue;

/// Maps the external speed signal (mph) onto the scene animation rate.
///
/// The mapping is linear: 0 mph is still, the calibration speed runs at
/// `base_rate`, and the legal maximum runs proportionally faster.
#[derive(Clone, Debug)]
pub struct SpeedModel {
    max_mph: f32,
    calibration_mph: f32,
    base_rate: f32,
    speed_mph: f32,
    animation_speed: f32,
}

impl SpeedModel {
    /// A negative or NaN `max_mph` is treated as 0.
    pub fn new(max_mph: f32, calibration_mph: f32, base_rate: f32) -> Self {
        Self {
            max_mph: max_mph.max(0.0),
            calibration_mph,
            base_rate,
            speed_mph: 0.0,
            animation_speed: 0.0,
        }
    }

    /// Clamp `raw` to `[0, max]` and derive the animation speed. Values that
    /// are not numbers count as 0; infinities clamp to the nearest bound.
    pub fn set_speed(&mut self, raw: &SignalValue) {
        let mph = raw.as_number_or_zero() as f32;
        self.speed_mph = mph.clamp(0.0, self.max_mph);
        self.animation_speed = if self.calibration_mph > 0.0 {
            (self.speed_mph / self.calibration_mph) * self.base_rate
        } else {
            0.0
        };
    }

    pub fn speed(&self) -> f32 {
        self.speed_mph
    }

    pub fn animation_speed(&self) -> f32 {
        self.animation_speed
    }
}
