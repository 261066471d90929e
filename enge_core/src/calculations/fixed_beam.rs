//! # Fixed-Fixed Beam Calculation
//!
//! Beam with both ends built in, loaded by a central point load. Same input
//! shape as [`crate::calculations::beam`], but a structurally distinct
//! boundary-condition case:
//!
//! - δ = PL³/(192EI)
//! - M_max = PL/8
//!
//! The two engines deliberately keep separate formula code; they share only
//! the unit-conversion primitives and the numeric-safety policy.

use serde::{Deserialize, Serialize};

use super::beam::validate_inertia_magnitude;
use super::{safe_div, status_text};
use crate::errors::{require_positive, ValidationError};
use crate::units::{ForceUnit, InertiaUnit, LengthUnit, ModulusUnit, StressUnit};

/// Raw fixed-fixed beam inputs: optional field values plus the selected unit
/// per dimensioned field.
///
/// ## JSON Example
///
/// ```json
/// {
///   "p": 1000.0, "p_unit": "N",
///   "l": 2000.0, "l_unit": "mm",
///   "c": 50.0, "c_unit": "mm",
///   "i": 8000000.0, "i_unit": "mm4",
///   "fy": 360.0, "fy_unit": "MPa",
///   "e": 200.0, "e_unit": "GPa",
///   "fs_adm": 2.0,
///   "material": "SAE 1045 Trefilado"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FixedBeamInputs {
    /// Central point load P
    pub p: Option<f64>,
    pub p_unit: ForceUnit,

    /// Span between the fixed ends L
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
pub struct FixedBeamErrors {
    pub p: Option<ValidationError>,
    pub l: Option<ValidationError>,
    pub c: Option<ValidationError>,
    pub i: Option<ValidationError>,
    pub fy: Option<ValidationError>,
    pub e: Option<ValidationError>,
    pub fs_adm: Option<ValidationError>,
}

impl FixedBeamErrors {
    /// True when no field carries an error.
    pub fn is_valid(&self) -> bool {
        *self == FixedBeamErrors::default()
    }
}

/// Fixed-fixed beam inputs normalized to SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedBeamInputSi {
    pub p_n: f64,
    pub l_m: f64,
    pub c_m: f64,
    pub i_m4: f64,
    pub fy_pa: f64,
    pub e_pa: f64,
    pub fs_adm: f64,
}

/// Raw SI results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedBeamOutputSi {
    /// Obtained deflection δ = PL³/(192EI) (m)
    pub delta_obt_m: f64,
    /// Admissible deflection L/400 (m)
    pub delta_adm_m: f64,
    /// Maximum moment M = PL/8 (N·m)
    pub m_max_nm: f64,
    /// Bending stress σ = Mc/I (Pa)
    pub sigma_pa: f64,
    /// Admissible stress fy/FS (Pa)
    pub fy_adm_pa: f64,
    pub check_deflection: bool,
    pub check_stress: bool,
    pub percent_delta: f64,
    pub fs_obtained: f64,
}

/// Display-unit results with pass/fail verdicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedBeamOutput {
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

/// Validate raw inputs field by field; same rules as the cantilever case.
pub fn validate(inputs: &FixedBeamInputs) -> FixedBeamErrors {
    FixedBeamErrors {
        p: require_positive(inputs.p),
        l: require_positive(inputs.l),
        c: require_positive(inputs.c),
        i: require_positive(inputs.i).or(validate_inertia_magnitude(inputs.i, inputs.i_unit)),
        fy: require_positive(inputs.fy),
        e: require_positive(inputs.e),
        fs_adm: require_positive(inputs.fs_adm),
    }
}

/// Convert raw inputs to SI. Missing optionals default to 0.0.
pub fn to_si(inputs: &FixedBeamInputs) -> FixedBeamInputSi {
    FixedBeamInputSi {
        p_n: inputs.p_unit.to_si(inputs.p.unwrap_or(0.0)),
        l_m: inputs.l_unit.to_si(inputs.l.unwrap_or(0.0)),
        c_m: inputs.c_unit.to_si(inputs.c.unwrap_or(0.0)),
        i_m4: inputs.i_unit.to_si(inputs.i.unwrap_or(0.0)),
        fy_pa: inputs.fy_unit.to_si(inputs.fy.unwrap_or(0.0)),
        e_pa: inputs.e_unit.to_si(inputs.e.unwrap_or(0.0)),
        fs_adm: inputs.fs_adm.unwrap_or(0.0),
    }
}

/// Closed-form evaluation for the fixed-fixed boundary condition.
pub fn calculate(si: &FixedBeamInputSi) -> FixedBeamOutputSi {
    let delta_obt_m = safe_div(si.p_n * si.l_m.powi(3), 192.0 * si.e_pa * si.i_m4);
    let m_max_nm = safe_div(si.p_n * si.l_m, 8.0);
    let sigma_pa = safe_div(m_max_nm * si.c_m, si.i_m4);
    let fy_adm_pa = safe_div(si.fy_pa, si.fs_adm);
    let delta_adm_m = safe_div(si.l_m, 400.0);
    let check_deflection = delta_obt_m <= delta_adm_m;
    let check_stress = sigma_pa <= fy_adm_pa;
    let percent_delta = safe_div(delta_obt_m, delta_adm_m) * 100.0;
    let fs_obtained = safe_div(si.fy_pa, sigma_pa);

    FixedBeamOutputSi {
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
pub fn format_for_ui(output: &FixedBeamOutputSi) -> FixedBeamOutput {
    FixedBeamOutput {
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_inputs() -> FixedBeamInputs {
        FixedBeamInputs {
            p: Some(1000.0),
            p_unit: ForceUnit::N,
            l: Some(2000.0),
            l_unit: LengthUnit::Mm,
            c: Some(50.0),
            c_unit: LengthUnit::Mm,
            i: Some(8_000_000.0),
            i_unit: InertiaUnit::Mm4,
            fy: Some(360.0),
            fy_unit: StressUnit::MPa,
            e: Some(200.0),
            e_unit: ModulusUnit::GPa,
            fs_adm: Some(2.0),
            material: Some("SAE 1045 Trefilado".to_string()),
        }
    }

    #[test]
    fn test_reference_case() {
        let inputs = test_inputs();
        assert!(validate(&inputs).is_valid());

        let output = format_for_ui(&calculate(&to_si(&inputs)));

        assert_relative_eq!(output.delta_obt_mm, 3.2552083333, epsilon = 1e-6);
        assert_relative_eq!(output.delta_adm_mm, 5.0, epsilon = 1e-9);
        assert_relative_eq!(output.m_max_nm, 250.0, epsilon = 1e-9);
        assert_relative_eq!(output.sigma_mpa, 1.5625, epsilon = 1e-9);
        assert_relative_eq!(output.fy_adm_mpa, 180.0, epsilon = 1e-9);
        assert!(output.check_deflection);
        assert!(output.check_stress);
        assert_relative_eq!(output.percent_delta, 65.1041666666, epsilon = 1e-6);
        assert_relative_eq!(output.fs_obtained, 230.4, epsilon = 1e-9);
        assert_eq!(output.status_deflection, "OK");
        assert_eq!(output.status_stress, "OK");
    }

    #[test]
    fn test_stiffer_than_cantilever() {
        // Same section and load as the cantilever case: the built-in ends
        // must deflect far less (factor 64 between 3EI and 192EI).
        let si = to_si(&test_inputs());
        let fixed = calculate(&si);
        let cantilever = crate::calculations::beam::calculate(
            &crate::calculations::beam::BeamInputSi {
                p_n: si.p_n,
                l_m: si.l_m,
                c_m: si.c_m,
                i_m4: si.i_m4,
                fy_pa: si.fy_pa,
                e_pa: si.e_pa,
                fs_adm: si.fs_adm,
            },
        );
        assert_relative_eq!(
            cantilever.delta_obt_m / fixed.delta_obt_m,
            64.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_missing_and_non_positive_fields() {
        let inputs = FixedBeamInputs {
            c: None,
            fs_adm: Some(0.0),
            ..test_inputs()
        };
        let errors = validate(&inputs);
        assert_eq!(errors.c, Some(ValidationError::MissingValue));
        assert_eq!(errors.fs_adm, Some(ValidationError::NotPositive));
        assert!(!errors.is_valid());
    }

    #[test]
    fn test_tiny_inertia_flagged() {
        let inputs = FixedBeamInputs {
            i: Some(1e-7),
            i_unit: InertiaUnit::Mm4,
            ..test_inputs()
        };
        assert_eq!(
            validate(&inputs).i,
            Some(ValidationError::MagnitudeTooSmall)
        );
    }

    #[test]
    fn test_idempotent_validate_and_calculate() {
        let inputs = test_inputs();
        assert_eq!(validate(&inputs), validate(&inputs));
        let si = to_si(&inputs);
        assert_eq!(calculate(&si), calculate(&si));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let inputs = test_inputs();
        let json = serde_json::to_string_pretty(&inputs).unwrap();
        let roundtrip: FixedBeamInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(inputs, roundtrip);
    }
}
