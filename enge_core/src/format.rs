//! # Display Formatting
//!
//! Numeric-to-text formatting for presentation layers, parameterized by
//! decimal-place count. Values within 1e-9 of zero snap to exactly zero so
//! tiny floating-point residue never renders as "-0.000000001".

/// Format a value with up to `decimals` decimal places, trimming trailing
/// zeros (and the separator itself when nothing remains after it).
///
/// # Example
///
/// ```rust
/// use enge_core::format::format_number;
///
/// assert_eq!(format_number(3.2552083333, 2), "3.26");
/// assert_eq!(format_number(5.0, 2), "5");
/// assert_eq!(format_number(1e-12, 2), "0");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let safe = if value.abs() < 1e-9 { 0.0 } else { value };
    if decimals == 0 {
        return format!("{safe:.0}");
    }
    let rendered = format!("{safe:.decimals$}");
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_decimals() {
        assert_eq!(format_number(12.3456, 2), "12.35");
        assert_eq!(format_number(12.3456, 3), "12.346");
    }

    #[test]
    fn test_trims_trailing_zeros() {
        assert_eq!(format_number(5.0, 2), "5");
        assert_eq!(format_number(5.10, 2), "5.1");
    }

    #[test]
    fn test_near_zero_snaps_to_zero() {
        assert_eq!(format_number(1e-12, 4), "0");
        assert_eq!(format_number(-1e-10, 2), "0");
    }

    #[test]
    fn test_zero_decimals() {
        assert_eq!(format_number(12.7, 0), "13");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_number(-3.25, 2), "-3.25");
    }
}
