//! # Validation Errors
//!
//! Field-scoped validation errors shared by all four calculation engines.
//!
//! Every engine exposes a `*Errors` struct mapping its field names to
//! `Option<ValidationError>`; the all-`None` default is the sentinel for
//! "inputs are valid". Errors are non-fatal: they block computation for the
//! current recalculation cycle only and clear as soon as the offending field
//! is corrected. There is no unrecoverable error class in this crate.
//!
//! The `Display` text of each variant is the user-facing message, in the
//! application's language.
//!
//! ## Example
//!
//! ```rust
//! use enge_core::errors::{require_positive, ValidationError};
//!
//! assert_eq!(require_positive(None), Some(ValidationError::MissingValue));
//! assert_eq!(require_positive(Some(-2.0)), Some(ValidationError::NotPositive));
//! assert_eq!(require_positive(Some(10.0)), None);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// The field has no value at all
    #[error("Informe um valor.")]
    MissingValue,

    /// The field requires a strictly positive value
    #[error("Use um valor maior que zero.")]
    NotPositive,

    /// The field allows zero but not a negative value
    #[error("Use um valor maior ou igual a zero.")]
    Negative,

    /// The value is well-formed but not a number (NaN)
    #[error("Informe um valor válido.")]
    NotANumber,

    /// Hollow-shaft cross-field check: inner diameter must stay below the outer
    #[error("Use d menor que D.")]
    InnerNotSmaller,

    /// The value converts to an SI magnitude near machine epsilon,
    /// signaling a likely unit mismatch
    #[error("Valor muito pequeno. Verifique a unidade.")]
    MagnitudeTooSmall,
}

/// Require a present, strictly positive value.
pub fn require_positive(value: Option<f64>) -> Option<ValidationError> {
    match value {
        None => Some(ValidationError::MissingValue),
        Some(v) if v <= 0.0 => Some(ValidationError::NotPositive),
        Some(_) => None,
    }
}

/// Require a present, non-negative value (zero is legitimate).
pub fn require_non_negative(value: Option<f64>) -> Option<ValidationError> {
    match value {
        None => Some(ValidationError::MissingValue),
        Some(v) if v < 0.0 => Some(ValidationError::Negative),
        Some(_) => None,
    }
}

/// Accept an absent value, but reject NaN when one is supplied.
pub fn optional_well_formed(value: Option<f64>) -> Option<ValidationError> {
    match value {
        None => None,
        Some(v) if v.is_nan() => Some(ValidationError::NotANumber),
        Some(_) => None,
    }
}

/// Accept an absent value, but require positivity when one is supplied.
pub fn optional_positive(value: Option<f64>) -> Option<ValidationError> {
    match value {
        None => None,
        Some(v) if v <= 0.0 => Some(ValidationError::NotPositive),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive(None), Some(ValidationError::MissingValue));
        assert_eq!(require_positive(Some(0.0)), Some(ValidationError::NotPositive));
        assert_eq!(require_positive(Some(-1.0)), Some(ValidationError::NotPositive));
        assert_eq!(require_positive(Some(0.001)), None);
    }

    #[test]
    fn test_require_non_negative() {
        assert_eq!(require_non_negative(None), Some(ValidationError::MissingValue));
        assert_eq!(require_non_negative(Some(-0.1)), Some(ValidationError::Negative));
        assert_eq!(require_non_negative(Some(0.0)), None);
        assert_eq!(require_non_negative(Some(5.0)), None);
    }

    #[test]
    fn test_optional_rules() {
        assert_eq!(optional_positive(None), None);
        assert_eq!(optional_positive(Some(0.0)), Some(ValidationError::NotPositive));
        assert_eq!(optional_positive(Some(1.0)), None);

        assert_eq!(optional_well_formed(None), None);
        assert_eq!(optional_well_formed(Some(f64::NAN)), Some(ValidationError::NotANumber));
        assert_eq!(optional_well_formed(Some(-90.0)), None);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(ValidationError::MissingValue.to_string(), "Informe um valor.");
        assert_eq!(
            ValidationError::NotPositive.to_string(),
            "Use um valor maior que zero."
        );
        assert_eq!(ValidationError::InnerNotSmaller.to_string(), "Use d menor que D.");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let error = ValidationError::MagnitudeTooSmall;
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }
}
