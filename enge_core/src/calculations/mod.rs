//! # Structural Calculations
//!
//! The four calculation engines. Each engine is independent and follows the
//! same pipeline shape:
//!
//! - `*Inputs` - raw field values (`Option<f64>`) plus a unit tag per
//!   dimensioned field (JSON-serializable)
//! - `*Errors` - per-field validation errors; the all-`None` default means
//!   the inputs are valid
//! - `*InputSi` - the same fields normalized to canonical SI units
//! - `*OutputSi` / `*Output` - raw SI results and their display-unit mapping
//! - `validate` / `to_si` / `calculate` / `format_for_ui` - pure functions
//!
//! The engines share the unit-conversion primitives and the numeric-safety
//! policy below, nothing else: each boundary-condition case keeps its own
//! formula code.
//!
//! ## Available Calculations
//!
//! - [`beam`] - cantilever beam deflection under a point load
//! - [`fixed_beam`] - fixed-fixed beam under a central point load
//! - [`buckling`] - column buckling capacity
//! - [`torsion`] - circular shaft torsion

pub mod beam;
pub mod buckling;
pub mod fixed_beam;
pub mod torsion;

/// Pass verdict rendered to the user
pub const STATUS_OK: &str = "OK";
/// Fail verdict rendered to the user
pub const STATUS_FAILED: &str = "FALHOU";

/// Map a boolean check onto its display verdict.
pub fn status_text(passes: bool) -> &'static str {
    if passes {
        STATUS_OK
    } else {
        STATUS_FAILED
    }
}

/// Division that yields 0.0 on a zero denominator instead of a fault.
///
/// The engines recalculate on every keystroke, so a half-typed input must
/// never take the pipeline down. The trade-off is that a degenerate input
/// and a true zero result are indistinguishable in the output.
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_div() {
        assert_eq!(safe_div(10.0, 4.0), 2.5);
        assert_eq!(safe_div(10.0, 0.0), 0.0);
        assert_eq!(safe_div(0.0, 0.0), 0.0);
        assert_eq!(safe_div(-9.0, 3.0), -3.0);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(true), "OK");
        assert_eq!(status_text(false), "FALHOU");
    }
}
