//! Named vehicle signals and how they are routed.
//!
//! Routing is a first-match-wins list of name predicates. The default list
//! checks parking brake before speed, so a name such as `park_speed_lock`
//! is treated as a parking-brake signal. Names matching nothing are passed
//! through as plain notifications.

use smallvec::SmallVec;
use std::fmt;

/// Loosely typed value carried by an external signal.
#[derive(Clone, Debug, PartialEq)]
pub enum SignalValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Null,
}

impl SignalValue {
    /// Numeric reading of the value; unparseable text is NaN. Text follows
    /// JavaScript number syntax for infinities, so only `Infinity` (signed
    /// or not) reads as infinite.
    pub fn as_number(&self) -> f64 {
        match self {
            SignalValue::Number(n) => *n,
            SignalValue::Bool(b) => f64::from(u8::from(*b)),
            SignalValue::Null => 0.0,
            SignalValue::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return 0.0;
                }
                match s.parse::<f64>() {
                    Ok(n) if n.is_finite() => n,
                    Ok(n) if s.trim_start_matches(['+', '-']) == "Infinity" => n,
                    _ => f64::NAN,
                }
            }
        }
    }

    /// Numeric reading with NaN replaced by zero.
    pub fn as_number_or_zero(&self) -> f64 {
        let n = self.as_number();
        if n.is_nan() {
            0.0
        } else {
            n
        }
    }

    /// Truthiness of the numeric reading: anything but zero or NaN.
    pub fn as_flag(&self) -> bool {
        self.as_number_or_zero() != 0.0
    }
}

impl fmt::Display for SignalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalValue::Number(n) => write!(f, "{}", n),
            SignalValue::Bool(b) => write!(f, "{}", b),
            SignalValue::Text(s) => f.write_str(s),
            SignalValue::Null => f.write_str("null"),
        }
    }
}

impl From<f64> for SignalValue {
    fn from(n: f64) -> Self {
        SignalValue::Number(n)
    }
}

impl From<bool> for SignalValue {
    fn from(b: bool) -> Self {
        SignalValue::Bool(b)
    }
}

impl From<&str> for SignalValue {
    fn from(s: &str) -> Self {
        SignalValue::Text(s.to_owned())
    }
}

impl From<String> for SignalValue {
    fn from(s: String) -> Self {
        SignalValue::Text(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalRoute {
    ParkingBrake,
    Speed,
    Notify,
}

impl SignalRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalRoute::ParkingBrake => "parkingBrake",
            SignalRoute::Speed => "speed",
            SignalRoute::Notify => "notify",
        }
    }
}

#[derive(Clone, Copy)]
struct Rule {
    matches: fn(&str) -> bool,
    route: SignalRoute,
}

fn is_park(name: &str) -> bool {
    name.contains("park")
}

fn is_speed(name: &str) -> bool {
    name.contains("speed") || name.contains("velocity")
}

#[derive(Clone)]
pub struct SignalRouter {
    rules: SmallVec<[Rule; 4]>,
}

impl Default for SignalRouter {
    fn default() -> Self {
        let mut rules = SmallVec::new();
        rules.push(Rule {
            matches: is_park,
            route: SignalRoute::ParkingBrake,
        });
        rules.push(Rule {
            matches: is_speed,
            route: SignalRoute::Speed,
        });
        Self { rules }
    }
}

impl SignalRouter {
    /// Route by case-insensitive substring match. Empty names are ignored.
    pub fn route(&self, name: &str) -> Option<SignalRoute> {
        if name.is_empty() {
            return None;
        }
        let lowered = name.to_lowercase();
        let route = self
            .rules
            .iter()
            .find(|rule| (rule.matches)(&lowered))
            .map(|rule| rule.route)
            .unwrap_or(SignalRoute::Notify);
        Some(route)
    }
}
