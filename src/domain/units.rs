// Temperature units and conversions
use crate::domain::error::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Unit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn code(self) -> &'static str {
        match self {
            Unit::Celsius => "C",
            Unit::Fahrenheit => "F",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Celsius,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Unit {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "celsius" => Ok(Unit::Celsius),
            "f" | "fahrenheit" => Ok(Unit::Fahrenheit),
            _ => Err(DashboardError::UnsupportedUnit(s.to_string())),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.code().to_string()
    }
}

pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Convert a Celsius value into the unit the dashboard is showing
pub fn to_display(celsius: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Celsius => celsius,
        Unit::Fahrenheit => to_fahrenheit(celsius),
    }
}

/// Inverse of [`to_display`]
pub fn from_display(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Celsius => value,
        Unit::Fahrenheit => to_celsius(value),
    }
}

/// Round to two decimals, ties away from zero.
///
/// A scaled value within a few ULPs of a half is treated as a decimal tie
/// (35.285 is 3528.4999... once scaled) and rounded away from zero. Anything
/// further from the half rounds normally. Negative zero is folded to zero.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let magnitude = scaled.abs();
    let distance_to_tie = (magnitude.fract() - 0.5).abs();
    let rounded_magnitude = if distance_to_tie <= 4.0 * f64::EPSILON * magnitude {
        magnitude.trunc() + 1.0
    } else {
        magnitude.round()
    };
    let rounded = rounded_magnitude.copysign(scaled) / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_display_is_identity() {
        for c in [-2.0, -0.2, 0.0, 1.3, 3.0] {
            assert_eq!(to_display(c, Unit::Celsius), c);
        }
    }

    #[test]
    fn test_fahrenheit_display() {
        assert_eq!(to_display(0.0, Unit::Fahrenheit), 32.0);
        assert_eq!(to_display(100.0, Unit::Fahrenheit), 212.0);
        assert!((to_display(-0.2, Unit::Fahrenheit) - 31.64).abs() < 1e-9);
        assert!((to_display(2.3, Unit::Fahrenheit) - 36.14).abs() < 1e-9);
    }

    #[test]
    fn test_to_celsius_inverts_conversion() {
        assert_eq!(to_celsius(212.0), 100.0);
        assert_eq!(to_celsius(32.0), 0.0);
        for c in [-2.0, -0.2, 0.0, 2.3] {
            assert!((to_celsius(to_fahrenheit(c)) - c).abs() < 1e-9);
            assert!((from_display(to_display(c, Unit::Fahrenheit), Unit::Fahrenheit) - c).abs() < 1e-9);
            assert_eq!(from_display(c, Unit::Celsius), c);
        }
    }

    #[test]
    fn test_round2_ties_away_from_zero() {
        assert_eq!(round2(1.825), 1.83);
        assert_eq!(round2(35.285), 35.29);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(-0.2), -0.2);
        assert_eq!(round2(31.604), 31.6);
    }

    #[test]
    fn test_round2_leaves_near_ties_alone() {
        assert_eq!(round2(0.0049999999996), 0.0);
        assert_eq!(round2(-0.0049999999996), 0.0);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(1.234999999), 1.23);
    }

    #[test]
    fn test_round2_folds_negative_zero() {
        let rounded = round2(-0.001);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!("C".parse::<Unit>(), Ok(Unit::Celsius));
        assert_eq!("fahrenheit".parse::<Unit>(), Ok(Unit::Fahrenheit));
        assert_eq!(
            "K".parse::<Unit>(),
            Err(DashboardError::UnsupportedUnit("K".to_string()))
        );
    }
}
