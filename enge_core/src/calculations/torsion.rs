//! # Shaft Torsion Calculation
//!
//! Torsion of a solid or hollow circular shaft. The torque is formed from a
//! force on a lever arm, T = F·a·sin(φ), with φ defaulting to 90° (force
//! perpendicular to the arm).
//!
//! The shear-yield reference is optional: without it the engine still
//! reports stress, twist and rigidity, but refuses to invent a pass/fail
//! verdict - `status` and `fs_obt` stay absent.
//!
//! ## Example
//!
//! ```rust
//! use enge_core::calculations::torsion::{self, TorsionInputs};
//!
//! let inputs = TorsionInputs {
//!     force: Some(500.0),
//!     arm: Some(200.0),
//!     outer_diameter: Some(30.0),
//!     length: Some(1000.0),
//!     shear_modulus: Some(80.0),
//!     ..Default::default()
//! };
//!
//! assert!(torsion::validate(&inputs).is_valid());
//! let output = torsion::calculate(&torsion::to_si(&inputs));
//! assert!(output.torque_nm > 0.0);
//! assert!(output.status.is_none()); // no shear yield supplied
//! ```

use serde::{Deserialize, Serialize};

use super::status_text;
use crate::errors::{
    optional_positive, optional_well_formed, require_positive, ValidationError,
};
use crate::units::{degrees_to_radians, radians_to_degrees, ForceUnit, LengthUnit, ModulusUnit, StressUnit};

/// Raw torsion inputs: optional field values plus the selected unit per
/// dimensioned field. `Default` pre-fills the conventional φ = 90° and
/// FS = 1.5.
///
/// ## JSON Example
///
/// ```json
/// {
///   "force": 500.0, "force_unit": "N",
///   "arm": 200.0, "arm_unit": "mm",
///   "phi_deg": 90.0,
///   "outer_diameter": 30.0, "outer_diameter_unit": "mm",
///   "is_hollow": true,
///   "inner_diameter": 20.0, "inner_diameter_unit": "mm",
///   "length": 1000.0, "length_unit": "mm",
///   "shear_modulus": 80.0, "shear_modulus_unit": "GPa",
///   "shear_yield": 180.0, "shear_yield_unit": "MPa",
///   "fs": 1.5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorsionInputs {
    /// Applied force F
    pub force: Option<f64>,
    pub force_unit: ForceUnit,

    /// Lever arm a
    pub arm: Option<f64>,
    pub arm_unit: LengthUnit,

    /// Application angle φ between force and arm (degrees)
    pub phi_deg: Option<f64>,

    /// Outer diameter D
    pub outer_diameter: Option<f64>,
    pub outer_diameter_unit: LengthUnit,

    /// Hollow section flag; selects the polar-moment formula
    pub is_hollow: bool,

    /// Inner diameter d, required only when hollow
    pub inner_diameter: Option<f64>,
    pub inner_diameter_unit: LengthUnit,

    /// Shaft length L
    pub length: Option<f64>,
    pub length_unit: LengthUnit,

    /// Shear modulus G
    pub shear_modulus: Option<f64>,
    pub shear_modulus_unit: ModulusUnit,

    /// Shear yield stress τ_y, optional
    pub shear_yield: Option<f64>,
    pub shear_yield_unit: StressUnit,

    /// Safety factor against τ_y
    pub fs: Option<f64>,
}

impl Default for TorsionInputs {
    fn default() -> Self {
        TorsionInputs {
            force: None,
            force_unit: ForceUnit::N,
            arm: None,
            arm_unit: LengthUnit::Mm,
            phi_deg: Some(90.0),
            outer_diameter: None,
            outer_diameter_unit: LengthUnit::Mm,
            is_hollow: false,
            inner_diameter: None,
            inner_diameter_unit: LengthUnit::Mm,
            length: None,
            length_unit: LengthUnit::Mm,
            shear_modulus: None,
            shear_modulus_unit: ModulusUnit::GPa,
            shear_yield: None,
            shear_yield_unit: StressUnit::MPa,
            fs: Some(1.5),
        }
    }
}

/// Per-field validation errors; `Default` (all `None`) means valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TorsionErrors {
    pub force: Option<ValidationError>,
    pub arm: Option<ValidationError>,
    pub phi_deg: Option<ValidationError>,
    pub outer_diameter: Option<ValidationError>,
    pub inner_diameter: Option<ValidationError>,
    pub length: Option<ValidationError>,
    pub shear_modulus: Option<ValidationError>,
    pub shear_yield: Option<ValidationError>,
    pub fs: Option<ValidationError>,
}

impl TorsionErrors {
    /// True when no field carries an error.
    pub fn is_valid(&self) -> bool {
        *self == TorsionErrors::default()
    }
}

/// Torsion inputs normalized to SI units. A solid shaft carries an inner
/// diameter of 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorsionInputSi {
    pub force_n: f64,
    pub arm_m: f64,
    pub phi_rad: f64,
    pub outer_diameter_m: f64,
    pub inner_diameter_m: f64,
    pub length_m: f64,
    pub shear_modulus_pa: f64,
    pub shear_yield_pa: Option<f64>,
    pub fs: f64,
    pub is_hollow: bool,
}

/// Torsion results. `status` and `fs_obt` are present only when a shear
/// yield was supplied; `torsional_rigidity` only when the twist is nonzero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorsionOutput {
    /// Echo of the converted force (N)
    pub converted_force_n: f64,
    /// Echo of the converted arm (m)
    pub converted_arm_m: f64,
    /// Torque T = F·a·sin(φ) (N·m)
    pub torque_nm: f64,
    /// Polar moment of inertia J (m⁴)
    pub polar_moment_m4: f64,
    /// Shear stress τ = T·(D/2)/J (Pa)
    pub tau_pa: f64,
    pub tau_mpa: f64,
    /// Twist angle θ = TL/(JG) (rad)
    pub theta_rad: f64,
    pub theta_deg: f64,
    /// Torsional rigidity T/θ (N·m/rad)
    pub torsional_rigidity: Option<f64>,
    pub status: Option<String>,
    /// Obtained safety factor τ_y/τ
    pub fs_obt: Option<f64>,
}

/// Validate raw inputs field by field.
///
/// F, a, D, L, G and FS must be present and positive. When the section is
/// hollow the inner diameter must additionally stay strictly below the
/// outer one, compared in meters so mixed units cannot mask the violation.
pub fn validate(inputs: &TorsionInputs) -> TorsionErrors {
    let outer_m = inputs
        .outer_diameter
        .map(|d| inputs.outer_diameter_unit.to_si(d));
    let inner_m = if inputs.is_hollow {
        inputs
            .inner_diameter
            .map(|d| inputs.inner_diameter_unit.to_si(d))
    } else {
        None
    };

    let inner_diameter = if !inputs.is_hollow {
        None
    } else {
        match (inputs.inner_diameter, inner_m, outer_m) {
            (None, _, _) => Some(ValidationError::MissingValue),
            (Some(v), _, _) if v <= 0.0 => Some(ValidationError::NotPositive),
            (Some(_), Some(d_inner), Some(d_outer)) if d_inner >= d_outer => {
                Some(ValidationError::InnerNotSmaller)
            }
            _ => None,
        }
    };

    TorsionErrors {
        force: require_positive(inputs.force),
        arm: require_positive(inputs.arm),
        phi_deg: optional_well_formed(inputs.phi_deg),
        outer_diameter: require_positive(inputs.outer_diameter),
        inner_diameter,
        length: require_positive(inputs.length),
        shear_modulus: require_positive(inputs.shear_modulus),
        shear_yield: optional_positive(inputs.shear_yield),
        fs: require_positive(inputs.fs),
    }
}

/// Convert raw inputs to SI. Missing optionals take their conventional
/// defaults (φ = 90°, FS = 1.5) or 0.0.
pub fn to_si(inputs: &TorsionInputs) -> TorsionInputSi {
    TorsionInputSi {
        force_n: inputs.force_unit.to_si(inputs.force.unwrap_or(0.0)),
        arm_m: inputs.arm_unit.to_si(inputs.arm.unwrap_or(0.0)),
        phi_rad: degrees_to_radians(inputs.phi_deg.unwrap_or(90.0)),
        outer_diameter_m: inputs
            .outer_diameter_unit
            .to_si(inputs.outer_diameter.unwrap_or(0.0)),
        inner_diameter_m: if inputs.is_hollow {
            inputs
                .inner_diameter_unit
                .to_si(inputs.inner_diameter.unwrap_or(0.0))
        } else {
            0.0
        },
        length_m: inputs.length_unit.to_si(inputs.length.unwrap_or(0.0)),
        shear_modulus_pa: inputs
            .shear_modulus_unit
            .to_si(inputs.shear_modulus.unwrap_or(0.0)),
        shear_yield_pa: inputs
            .shear_yield
            .map(|v| inputs.shear_yield_unit.to_si(v)),
        fs: inputs.fs.unwrap_or(1.5),
        is_hollow: inputs.is_hollow,
    }
}

/// Closed-form torsion evaluation on SI inputs.
pub fn calculate(si: &TorsionInputSi) -> TorsionOutput {
    let torque_nm = si.force_n * si.arm_m * si.phi_rad.sin();
    let d4 = si.outer_diameter_m.powi(4);
    let inner4 = si.inner_diameter_m.powi(4);
    let polar_moment_m4 = if si.is_hollow {
        std::f64::consts::PI * (d4 - inner4) / 32.0
    } else {
        std::f64::consts::PI * d4 / 32.0
    };
    let c = si.outer_diameter_m / 2.0;
    let tau_pa = torque_nm * c / polar_moment_m4;
    let theta_rad = torque_nm * si.length_m / (polar_moment_m4 * si.shear_modulus_pa);
    let theta_deg = radians_to_degrees(theta_rad);

    let status = si.shear_yield_pa.map(|tau_y| {
        let tau_adm = tau_y / si.fs;
        status_text(tau_pa <= tau_adm).to_string()
    });
    let fs_obt = match si.shear_yield_pa {
        Some(tau_y) if tau_pa > 0.0 => Some(tau_y / tau_pa),
        _ => None,
    };
    let torsional_rigidity = if theta_rad != 0.0 {
        Some(torque_nm / theta_rad)
    } else {
        None
    };

    TorsionOutput {
        converted_force_n: si.force_n,
        converted_arm_m: si.arm_m,
        torque_nm,
        polar_moment_m4,
        tau_pa,
        tau_mpa: StressUnit::MPa.from_si(tau_pa),
        theta_rad,
        theta_deg,
        torsional_rigidity,
        status,
        fs_obt,
    }
}
