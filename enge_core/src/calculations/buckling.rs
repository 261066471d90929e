//! # Column Buckling Calculation
//!
//! Axial buckling capacity of a column, classified by slenderness into a
//! yielding-governed or elastic-buckling-governed regime.
//!
//! This engine works in the section-table units engineers type them in
//! (mm, mm², mm⁴, GPa, MPa); only the modulus is rescaled internally so the
//! Euler stress comes out in MPa.
//!
//! ## Example
//!
//! ```rust
//! use enge_core::calculations::buckling::{self, BucklingInputs};
//!
//! let inputs = BucklingInputs {
//!     l_mm: Some(3000.0),
//!     k: Some(1.0),
//!     a_mm2: Some(1000.0),
//!     ix_mm4: Some(500_000.0),
//!     iy_mm4: Some(200_000.0),
//!     e_gpa: Some(200.0),
//!     fy_mpa: Some(250.0),
//!     gamma_m: Some(1.1),
//!     lambda_lim: Some(105.0),
//!     n_applied_n: Some(50_000.0),
//!     theta_deg: Some(0.0),
//! };
//!
//! assert!(buckling::validate(&inputs).is_valid());
//! let output = buckling::calculate(&buckling::resolve(&inputs));
//! assert!(output.lambda_crit > 0.0);
//! ```

use serde::{Deserialize, Serialize};

use super::{safe_div, status_text};
use crate::errors::{
    optional_well_formed, require_non_negative, require_positive, ValidationError,
};
use crate::units::degrees_to_radians;

/// Effective-length factors for the standard end-condition cases. Callers
/// pick one of these for `k`; the engine never interprets end-condition
/// names itself.
pub const STANDARD_K_FACTORS: [f64; 8] = [0.5, 0.65, 0.7, 0.8, 1.0, 1.2, 2.0, 2.1];

/// Regime label when yielding governs (λ_crit ≤ λ_lim)
pub const REGIME_YIELDING: &str = "Baixa esbeltez - ruptura por escoamento";
/// Regime label when elastic buckling governs (λ_crit > λ_lim)
pub const REGIME_ELASTIC: &str = "Alta esbeltez - ruptura por flambagem elástica";

// Gravity constant used only for the auxiliary kgf outputs
const KGF_N: f64 = 9.81;

/// Raw buckling inputs, one optional value per field.
///
/// ## JSON Example
///
/// ```json
/// {
///   "l_mm": 3000.0, "k": 1.0, "a_mm2": 1000.0,
///   "ix_mm4": 500000.0, "iy_mm4": 200000.0,
///   "e_gpa": 200.0, "fy_mpa": 250.0,
///   "gamma_m": 1.1, "lambda_lim": 105.0,
///   "n_applied_n": 50000.0, "theta_deg": 0.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BucklingInputs {
    /// Column length L (mm)
    pub l_mm: Option<f64>,
    /// Effective-length factor k, from [`STANDARD_K_FACTORS`]
    pub k: Option<f64>,
    /// Cross-sectional area A (mm²)
    pub a_mm2: Option<f64>,
    /// Moment of inertia about x (mm⁴)
    pub ix_mm4: Option<f64>,
    /// Moment of inertia about y (mm⁴)
    pub iy_mm4: Option<f64>,
    /// Elastic modulus E (GPa)
    pub e_gpa: Option<f64>,
    /// Yield stress fy (MPa)
    pub fy_mpa: Option<f64>,
    /// Partial safety factor γ_M
    pub gamma_m: Option<f64>,
    /// Slenderness limit λ_lim between yielding and elastic buckling
    pub lambda_lim: Option<f64>,
    /// Applied axial load N (N); zero means "not yet loaded"
    pub n_applied_n: Option<f64>,
    /// Inclination angle θ (degrees), only for the inclined-force output
    pub theta_deg: Option<f64>,
}

/// Per-field validation errors; `Default` (all `None`) means valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BucklingErrors {
    pub l_mm: Option<ValidationError>,
    pub k: Option<ValidationError>,
    pub a_mm2: Option<ValidationError>,
    pub ix_mm4: Option<ValidationError>,
    pub iy_mm4: Option<ValidationError>,
    pub e_gpa: Option<ValidationError>,
    pub fy_mpa: Option<ValidationError>,
    pub gamma_m: Option<ValidationError>,
    pub lambda_lim: Option<ValidationError>,
    pub n_applied_n: Option<ValidationError>,
    pub theta_deg: Option<ValidationError>,
}

impl BucklingErrors {
    /// True when no field carries an error.
    pub fn is_valid(&self) -> bool {
        *self == BucklingErrors::default()
    }
}

/// Resolved buckling inputs with all fields present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucklingInput {
    pub l_mm: f64,
    pub k: f64,
    pub a_mm2: f64,
    pub ix_mm4: f64,
    pub iy_mm4: f64,
    pub e_gpa: f64,
    pub fy_mpa: f64,
    pub gamma_m: f64,
    pub lambda_lim: f64,
    pub n_applied_n: f64,
    pub theta_deg: f64,
}

/// Axis whose slenderness governs the capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CriticalAxis {
    #[serde(rename = "x")]
    X,
    #[serde(rename = "y")]
    Y,
}

impl std::fmt::Display for CriticalAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CriticalAxis::X => write!(f, "x"),
            CriticalAxis::Y => write!(f, "y"),
        }
    }
}

/// Buckling results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucklingOutput {
    /// Effective length KL (mm)
    pub kl_mm: f64,
    /// Radius of gyration about x (mm)
    pub rx_mm: f64,
    /// Radius of gyration about y (mm)
    pub ry_mm: f64,
    pub lambda_x: f64,
    pub lambda_y: f64,
    /// Governing slenderness max(λx, λy)
    pub lambda_crit: f64,
    /// Axis attaining λ_crit; x wins exact ties
    pub critical_axis: CriticalAxis,
    /// Failure-regime description
    pub regime: String,
    /// Euler critical stress π²E/λ² (MPa)
    pub sigma_cr_mpa: f64,
    /// Critical load σ_cr·A (N)
    pub n_cr_n: f64,
    /// Design capacity N_Rd (N)
    pub n_rd_n: f64,
    /// N_applied / N_Rd; zero when not yet loaded
    pub utilization: f64,
    /// N_Rd expressed in kgf
    pub force_kgf: f64,
    /// N_Rd in kgf, derated for an inclined load path
    pub force_kgf_incl: f64,
    /// "OK" when utilization ≤ 1
    pub status: String,
}

/// Validate raw inputs field by field.
///
/// All geometric and material fields must be present and strictly positive.
/// The applied load may be zero (not yet loaded) but never negative, and the
/// inclination angle only needs to be a well-formed number.
pub fn validate(inputs: &BucklingInputs) -> BucklingErrors {
    BucklingErrors {
        l_mm: require_positive(inputs.l_mm),
        k: require_positive(inputs.k),
        a_mm2: require_positive(inputs.a_mm2),
        ix_mm4: require_positive(inputs.ix_mm4),
        iy_mm4: require_positive(inputs.iy_mm4),
        e_gpa: require_positive(inputs.e_gpa),
        fy_mpa: require_positive(inputs.fy_mpa),
        gamma_m: require_positive(inputs.gamma_m),
        lambda_lim: require_positive(inputs.lambda_lim),
        n_applied_n: require_non_negative(inputs.n_applied_n),
        theta_deg: optional_well_formed(inputs.theta_deg),
    }
}

/// Fill absent fields with 0.0, producing a computable input. Only
/// meaningful once [`validate`] has passed.
pub fn resolve(inputs: &BucklingInputs) -> BucklingInput {
    BucklingInput {
        l_mm: inputs.l_mm.unwrap_or(0.0),
        k: inputs.k.unwrap_or(0.0),
        a_mm2: inputs.a_mm2.unwrap_or(0.0),
        ix_mm4: inputs.ix_mm4.unwrap_or(0.0),
        iy_mm4: inputs.iy_mm4.unwrap_or(0.0),
        e_gpa: inputs.e_gpa.unwrap_or(0.0),
        fy_mpa: inputs.fy_mpa.unwrap_or(0.0),
        gamma_m: inputs.gamma_m.unwrap_or(0.0),
        lambda_lim: inputs.lambda_lim.unwrap_or(0.0),
        n_applied_n: inputs.n_applied_n.unwrap_or(0.0),
        theta_deg: inputs.theta_deg.unwrap_or(0.0),
    }
}

/// Closed-form buckling evaluation. Pure and deterministic; zero
/// denominators yield 0.0 per the crate's numeric-safety policy.
pub fn calculate(input: &BucklingInput) -> BucklingOutput {
    let kl_mm = input.k * input.l_mm;
    let rx_mm = (input.ix_mm4 / input.a_mm2).sqrt();
    let ry_mm = (input.iy_mm4 / input.a_mm2).sqrt();
    let lambda_x = safe_div(kl_mm, rx_mm);
    let lambda_y = safe_div(kl_mm, ry_mm);
    let lambda_crit = lambda_x.max(lambda_y);
    let critical_axis = if lambda_x >= lambda_y {
        CriticalAxis::X
    } else {
        CriticalAxis::Y
    };

    let yielding_governs = lambda_crit <= input.lambda_lim;
    let regime = if yielding_governs {
        REGIME_YIELDING
    } else {
        REGIME_ELASTIC
    };

    let e_mpa = input.e_gpa * 1000.0;
    let sigma_cr_mpa = safe_div(
        std::f64::consts::PI * std::f64::consts::PI * e_mpa,
        lambda_crit * lambda_crit,
    );
    let n_cr_n = sigma_cr_mpa * input.a_mm2;
    let n_rd_n = if yielding_governs {
        safe_div(input.a_mm2 * input.fy_mpa, input.gamma_m)
    } else {
        safe_div(n_cr_n, input.gamma_m)
    };

    let utilization = if input.n_applied_n <= 0.0 {
        0.0
    } else {
        safe_div(input.n_applied_n, n_rd_n)
    };

    let force_kgf = safe_div(n_rd_n, KGF_N);
    let r_crit_mm = safe_div(kl_mm, lambda_crit);
    let theta_rad = degrees_to_radians(input.theta_deg);
    let ratio = if r_crit_mm == 0.0 {
        0.0
    } else {
        theta_rad.sin() * input.l_mm / r_crit_mm
    };
    let force_kgf_incl = safe_div(force_kgf, ratio + 1.0);

    BucklingOutput {
        kl_mm,
        rx_mm,
        ry_mm,
        lambda_x,
        lambda_y,
        lambda_crit,
        critical_axis,
        regime: regime.to_string(),
        sigma_cr_mpa,
        n_cr_n,
        n_rd_n,
        utilization,
        force_kgf,
        force_kgf_incl,
        status: status_text(utilization <= 1.0).to_string(),
    }
}
