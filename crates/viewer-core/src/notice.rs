use crate::signal::SignalValue;
use std::fmt;

/// User-facing side effects queued by the controller. The host drains them
/// and shows each one as a short toast.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    PresetSaved(String),
    PresetNotFound(String),
    MovedTo(String),
    BrakeReleased { drive_found: bool },
    BrakeEngaged { home_found: bool },
    Reverting(String),
    Speed(f32),
    Signal { name: String, value: SignalValue },
    NoHome,
    DayMode(bool),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PresetSaved(name) => write!(f, "{} saved", name),
            Notice::PresetNotFound(_) => f.write_str("Preset not found"),
            Notice::MovedTo(name) => write!(f, "Moved to {}", name),
            Notice::BrakeReleased { drive_found: true } => {
                f.write_str("park_brake released — entering Drive view")
            }
            Notice::BrakeReleased { drive_found: false } => {
                f.write_str("park_brake released — Drive preset not found")
            }
            Notice::BrakeEngaged { home_found: true } => {
                f.write_str("park_brake engaged — entering Home view")
            }
            Notice::BrakeEngaged { home_found: false } => {
                f.write_str("park_brake engaged — Home preset not found")
            }
            Notice::Reverting(name) => write!(f, "Reverting to {} view", name),
            Notice::Speed(mph) => write!(f, "Speed: {:.0} mph", mph),
            Notice::Signal { name, value } => write!(f, "{}: {}", name, value),
            Notice::NoHome => f.write_str("No Home set"),
            Notice::DayMode(true) => f.write_str("Switched to Day Mode"),
            Notice::DayMode(false) => f.write_str("Switched to Night Mode"),
        }
    }
}
