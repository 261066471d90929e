//! # Unit Types
//!
//! Closed unit vocabularies for each physical dimension, with conversion to
//! and from the canonical SI unit of that dimension.
//!
//! ## Design Philosophy
//!
//! Every dimension gets a small enum rather than free-form strings, so a
//! unit-mismatch bug is a construction-time error instead of a runtime
//! formula defect. Each variant carries its exact multiplicative scale
//! factor to SI, and all conversion routes through the SI unit as the hub:
//!
//! - Force → newton
//! - Length → meter
//! - Moment of inertia → m⁴
//! - Stress / yield → pascal
//! - Elastic or shear modulus → pascal
//! - Angle → radian
//!
//! No rounding happens here; display rounding belongs to [`crate::format`].
//!
//! ## Example
//!
//! ```rust
//! use enge_core::units::{ForceUnit, LengthUnit};
//!
//! let p_n = ForceUnit::KN.to_si(1.5);
//! assert_eq!(p_n, 1500.0);
//!
//! let l_m = LengthUnit::Mm.to_si(2000.0);
//! assert_eq!(l_m, 2.0);
//! ```

use serde::{Deserialize, Serialize};

/// Standard gravity used for kilogram-force conversions (N per kgf)
pub const KGF_TO_N: f64 = 9.80665;

/// Force units, canonical SI unit: newton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ForceUnit {
    /// Newton
    #[default]
    #[serde(rename = "N")]
    N,
    /// Kilonewton
    #[serde(rename = "kN")]
    KN,
    /// Kilogram-force
    #[serde(rename = "kgf")]
    Kgf,
}

impl ForceUnit {
    /// Scale factor from this unit to newtons
    pub fn si_factor(self) -> f64 {
        match self {
            ForceUnit::N => 1.0,
            ForceUnit::KN => 1_000.0,
            ForceUnit::Kgf => KGF_TO_N,
        }
    }
}

/// Length units, canonical SI unit: meter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Millimeter
    #[default]
    #[serde(rename = "mm")]
    Mm,
    /// Meter
    #[serde(rename = "m")]
    M,
}

impl LengthUnit {
    /// Scale factor from this unit to meters
    pub fn si_factor(self) -> f64 {
        match self {
            LengthUnit::Mm => 1e-3,
            LengthUnit::M => 1.0,
        }
    }
}

/// Area moment of inertia units, canonical SI unit: m⁴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InertiaUnit {
    /// Millimeter to the fourth
    #[default]
    #[serde(rename = "mm4")]
    Mm4,
    /// Meter to the fourth
    #[serde(rename = "m4")]
    M4,
}

impl InertiaUnit {
    /// Scale factor from this unit to m⁴
    pub fn si_factor(self) -> f64 {
        match self {
            InertiaUnit::Mm4 => 1e-12,
            InertiaUnit::M4 => 1.0,
        }
    }
}

/// Stress / yield-stress units, canonical SI unit: pascal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StressUnit {
    /// Megapascal
    #[default]
    #[serde(rename = "MPa")]
    MPa,
    /// Pascal
    #[serde(rename = "Pa")]
    Pa,
}

impl StressUnit {
    /// Scale factor from this unit to pascals
    pub fn si_factor(self) -> f64 {
        match self {
            StressUnit::MPa => 1e6,
            StressUnit::Pa => 1.0,
        }
    }
}

/// Modulus (elastic or shear) units, canonical SI unit: pascal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModulusUnit {
    /// Gigapascal
    #[default]
    #[serde(rename = "GPa")]
    GPa,
    /// Megapascal
    #[serde(rename = "MPa")]
    MPa,
    /// Pascal
    #[serde(rename = "Pa")]
    Pa,
}

impl ModulusUnit {
    /// Scale factor from this unit to pascals
    pub fn si_factor(self) -> f64 {
        match self {
            ModulusUnit::GPa => 1e9,
            ModulusUnit::MPa => 1e6,
            ModulusUnit::Pa => 1.0,
        }
    }
}

macro_rules! impl_conversions {
    ($type:ty) => {
        impl $type {
            /// Convert a value in this unit to the canonical SI unit
            pub fn to_si(self, value: f64) -> f64 {
                value * self.si_factor()
            }

            /// Convert a value in the canonical SI unit back to this unit
            pub fn from_si(self, value: f64) -> f64 {
                value / self.si_factor()
            }
        }
    };
}

impl_conversions!(ForceUnit);
impl_conversions!(LengthUnit);
impl_conversions!(InertiaUnit);
impl_conversions!(StressUnit);
impl_conversions!(ModulusUnit);

/// Convert degrees to radians
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Convert radians to degrees
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_force_to_si() {
        assert_eq!(ForceUnit::N.to_si(1000.0), 1000.0);
        assert_eq!(ForceUnit::KN.to_si(1.5), 1500.0);
        assert_relative_eq!(ForceUnit::Kgf.to_si(10.0), 98.0665);
    }

    #[test]
    fn test_length_to_si() {
        assert_eq!(LengthUnit::Mm.to_si(2000.0), 2.0);
        assert_eq!(LengthUnit::M.to_si(2.0), 2.0);
    }

    #[test]
    fn test_inertia_to_si() {
        assert_relative_eq!(InertiaUnit::Mm4.to_si(8_000_000.0), 8e-6);
        assert_eq!(InertiaUnit::M4.to_si(8e-6), 8e-6);
    }

    #[test]
    fn test_stress_and_modulus_to_si() {
        assert_eq!(StressUnit::MPa.to_si(250.0), 250e6);
        assert_eq!(StressUnit::Pa.to_si(250e6), 250e6);
        assert_eq!(ModulusUnit::GPa.to_si(200.0), 200e9);
        assert_eq!(ModulusUnit::MPa.to_si(200_000.0), 200e9);
    }

    #[test]
    fn test_round_trip_all_units() {
        for unit in [ForceUnit::N, ForceUnit::KN, ForceUnit::Kgf] {
            assert_relative_eq!(unit.from_si(unit.to_si(123.456)), 123.456);
        }
        for unit in [LengthUnit::Mm, LengthUnit::M] {
            assert_relative_eq!(unit.from_si(unit.to_si(123.456)), 123.456);
        }
        for unit in [InertiaUnit::Mm4, InertiaUnit::M4] {
            assert_relative_eq!(unit.from_si(unit.to_si(123.456)), 123.456);
        }
        for unit in [StressUnit::MPa, StressUnit::Pa] {
            assert_relative_eq!(unit.from_si(unit.to_si(123.456)), 123.456);
        }
        for unit in [ModulusUnit::GPa, ModulusUnit::MPa, ModulusUnit::Pa] {
            assert_relative_eq!(unit.from_si(unit.to_si(123.456)), 123.456);
        }
    }

    #[test]
    fn test_sign_preserved() {
        assert_eq!(LengthUnit::Mm.to_si(-500.0), -0.5);
        assert_eq!(ForceUnit::KN.to_si(0.0), 0.0);
    }

    #[test]
    fn test_degrees_radians() {
        assert_relative_eq!(degrees_to_radians(180.0), std::f64::consts::PI);
        assert_relative_eq!(degrees_to_radians(90.0), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(radians_to_degrees(std::f64::consts::PI), 180.0);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ForceUnit::KN).unwrap();
        assert_eq!(json, "\"kN\"");

        let roundtrip: ForceUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, ForceUnit::KN);

        let json = serde_json::to_string(&ModulusUnit::GPa).unwrap();
        assert_eq!(json, "\"GPa\"");
    }
}
