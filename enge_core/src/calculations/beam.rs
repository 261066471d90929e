//! # Beam Deflection Calculation
//!
//! Cantilever beam under a point load at the free end, checked against a
//! deflection limit of L/400 and against the admissible bending stress.
//!
//! ## Assumptions
//!
//! - Prismatic section, linear-elastic material
//! - Tip point load P, deflection δ = PL³/(3EI)
//! - Extreme-fiber distance c supplied directly (no section database)
//!
//! ## Example
//!
//! ```rust
//! use enge_core::calculations::beam::{self, BeamInputs};
//! use enge_core::units::{ForceUnit, InertiaUnit, LengthUnit, ModulusUnit, StressUnit};
//!
//! let inputs = BeamInputs {
//!     p: Some(1000.0),
//!     p_unit: ForceUnit::N,
//!     l: Some(2.0),
//!     l_unit: LengthUnit::M,
//!     c: Some(50.0),
//!     c_unit: LengthUnit::Mm,
//!     i: Some(8_000_000.0),
//!     i_unit: InertiaUnit::Mm4,
//!     fy: Some(250.0),
//!     fy_unit: StressUnit::MPa,
//!     e: Some(200.0),
//!     e_unit: ModulusUnit::GPa,
//!     fs_adm: Some(1.5),
//!     material: None,
//! };
//!
//! assert_eq!(beam::validate(&inputs), Default::default());
//! let output = beam::format_for_ui(&beam::calculate(&beam::to_si(&inputs)));
//! assert_eq!(output.status_deflection, "OK");
//! ```

use serde::{Deserialize, Serialize};

use super::{safe_div, status_text};
use crate::errors::{require_positive, ValidationError};
use crate::units::{ForceUnit, InertiaUnit, LengthUnit, ModulusUnit, StressUnit};

/// Inertia values converting below this SI magnitude are rejected as a
/// likely unit mismatch (e.g. a m⁴ figure typed into a mm⁴ field).
pub const MIN_INERTIA_M4: f64 = 1e-18;

/// Raw beam inputs: optional field values plus the selected unit per
/// dimensioned field. Replaced wholesale on every edit (copy-with-field-
/// changed), never mutated in place.
///
/// ## JSON Example
///
/// ```json
/// {
///   "p": 1000.0, "p_unit": "N",
///   "l": 2000.0, "l_unit": "mm",
///   "c": 50.0, "c_unit": "mm",
///   "i": 8000000.0, "i_unit": "mm4",
///   "fy": 250.0, "fy_unit": "MPa",
///   "e": 200.0, "e_unit": "GPa",
///   "fs_adm": 1.5,
///   "material": "SAE 1045"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BeamInputs {
    /// Applied point load P
    pub p: Option<f64>,
    pub p_unit: ForceUnit,

    /// Beam length L
    pub l: Option<f64>,
    pub l_unit: LengthUnit,

    /// Distance from neutral axis to extreme fiber c
    pub c: Option<f64>,
    pub c_unit: LengthUnit,

    /// Area moment of inertia I
    pub i: Option<f64>,
    pub i_unit: InertiaUnit,

    /// Yield stress fy
    pub fy: Option<f64>,
    pub fy_unit: StressUnit,

    /// Elastic modulus E
    pub e: Option<f64>,
    pub e_unit: ModulusUnit,

    /// Admissible safety factor (dimensionless)
    pub fs_adm: Option<f64>,

    /// Material name used to pre-fill fy and E, kept for display only
    pub material: Option<String>,
}

/// Per-field validation errors; `Default` (all `None`) means valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BeamErrors {
    pub p: Option<ValidationError>,
    pub l: Option<ValidationError>,
    pub c: Option<ValidationError>,
    pub i: Option<ValidationError>,
    pub fy: Option<ValidationError>,
    pub e: Option<ValidationError>,
    pub fs_adm: Option<ValidationError>,
}

impl BeamErrors {
    /// True when no field carries an error.
    pub fn is_valid(&self) -> bool {
        *self == BeamErrors::default()
    }
}

/// Beam inputs normalized to SI units (N, m, m⁴, Pa).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamInputSi {
    pub p_n: f64,
    pub l_m: f64,
    pub c_m: f64,
    pub i_m4: f64,
    pub fy_pa: f64,
    pub e_pa: f64,
    pub fs_adm: f64,
}

/// Raw SI results (deflections in meters, stresses in pascals).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamOutputSi {
    /// Obtained deflection δ = PL³/(3EI) (m)
    pub delta_obt_m: f64,
    /// Admissible deflection L/400 (m)
    pub delta_adm_m: f64,
    /// Maximum moment M = PL (N·m)
    pub m_max_nm: f64,
    /// Bending stress σ = Mc/I (Pa)
    pub sigma_pa: f64,
    /// Admissible stress fy/FS (Pa)
    pub fy_adm_pa: f64,
    pub check_deflection: bool,
    pub check_stress: bool,
    /// Obtained-over-admissible deflection, in percent
    pub percent_delta: f64,
    /// Obtained safety factor fy/σ
    pub fs_obtained: f64,
}

/// Display-unit results with pass/fail verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamOutput {
    pub delta_obt_mm: f64,
    pub delta_adm_mm: f64,
    pub m_max_nm: f64,
    pub sigma_mpa: f64,
    pub fy_adm_mpa: f64,
    pub check_deflection: bool,
    pub check_stress: bool,
    pub percent_delta: f64,
    pub fs_obtained: f64,
    pub status_deflection: String,
    pub status_stress: String,
}

/// Validate raw inputs field by field.
///
/// Every field must be present and strictly positive. An inertia value whose
/// SI magnitude falls below [`MIN_INERTIA_M4`] is rejected even when
/// positive.
pub fn validate(inputs: &BeamInputs) -> BeamErrors {
    BeamErrors {
        p: require_positive(inputs.p),
        l: require_positive(inputs.l),
        c: require_positive(inputs.c),
        i: require_positive(inputs.i).or(validate_inertia_magnitude(inputs.i, inputs.i_unit)),
        fy: require_positive(inputs.fy),
        e: require_positive(inputs.e),
        fs_adm: require_positive(inputs.fs_adm),
    }
}

pub(crate) fn validate_inertia_magnitude(
    value: Option<f64>,
    unit: InertiaUnit,
) -> Option<ValidationError> {
    match value {
        Some(v) if v > 0.0 && unit.to_si(v) < MIN_INERTIA_M4 => {
            Some(ValidationError::MagnitudeTooSmall)
        }
        _ => None,
    }
}

/// Convert raw inputs to SI. Missing optionals default to 0.0; on the valid
/// path this never happens because [`validate`] rejects absence first.
pub fn to_si(inputs: &BeamInputs) -> BeamInputSi {
    BeamInputSi {
        p_n: inputs.p_unit.to_si(inputs.p.unwrap_or(0.0)),
        l_m: inputs.l_unit.to_si(inputs.l.unwrap_or(0.0)),
        c_m: inputs.c_unit.to_si(inputs.c.unwrap_or(0.0)),
        i_m4: inputs.i_unit.to_si(inputs.i.unwrap_or(0.0)),
        fy_pa: inputs.fy_unit.to_si(inputs.fy.unwrap_or(0.0)),
        e_pa: inputs.e_unit.to_si(inputs.e.unwrap_or(0.0)),
        fs_adm: inputs.fs_adm.unwrap_or(0.0),
    }
}

/// Closed-form evaluation on SI inputs. Pure and deterministic; zero
/// denominators yield 0.0 per the crate's numeric-safety policy.
pub fn calculate(si: &BeamInputSi) -> BeamOutputSi {
    let delta_obt_m = safe_div(si.p_n * si.l_m.powi(3), 3.0 * si.e_pa * si.i_m4);
    let m_max_nm = si.p_n * si.l_m;
    let sigma_pa = safe_div(m_max_nm * si.c_m, si.i_m4);
    let fy_adm_pa = safe_div(si.fy_pa, si.fs_adm);
    let delta_adm_m = safe_div(si.l_m, 400.0);
    let check_deflection = delta_obt_m <= delta_adm_m;
    let check_stress = sigma_pa <= fy_adm_pa;
    let percent_delta = safe_div(delta_obt_m, delta_adm_m) * 100.0;
    let fs_obtained = safe_div(si.fy_pa, sigma_pa);

    BeamOutputSi {
        delta_obt_m,
        delta_adm_m,
        m_max_nm,
        sigma_pa,
        fy_adm_pa,
        check_deflection,
        check_stress,
        percent_delta,
        fs_obtained,
    }
}

/// Map SI results to display units and attach the verdict strings.
pub fn format_for_ui(output: &BeamOutputSi) -> BeamOutput {
    BeamOutput {
        delta_obt_mm: LengthUnit::Mm.from_si(output.delta_obt_m),
        delta_adm_mm: LengthUnit::Mm.from_si(output.delta_adm_m),
        m_max_nm: output.m_max_nm,
        sigma_mpa: StressUnit::MPa.from_si(output.sigma_pa),
        fy_adm_mpa: StressUnit::MPa.from_si(output.fy_adm_pa),
        check_deflection: output.check_deflection,
        check_stress: output.check_stress,
        percent_delta: output.percent_delta,
        fs_obtained: output.fs_obtained,
        status_deflection: status_text(output.check_deflection).to_string(),
        status_stress: status_text(output.check_stress).to_string(),
    }
}
