//! # Numeric Parsing
//!
//! Turns free-form decimal text into an optional value. Input comes from
//! text fields where both `.` and `,` are in use as the decimal separator,
//! so the comma is substituted before parsing.
//!
//! Absent or unparsable text yields `None`, never zero - callers must not
//! conflate "no input" with "input of zero".

/// Parse decimal text into a value, accepting comma or dot as the
/// decimal separator.
///
/// # Example
///
/// ```rust
/// use enge_core::parse::parse_decimal;
///
/// assert_eq!(parse_decimal(" 12,5 "), Some(12.5));
/// assert_eq!(parse_decimal("12.5"), Some(12.5));
/// assert_eq!(parse_decimal(""), None);
/// assert_eq!(parse_decimal("abc"), None);
/// ```
pub fn parse_decimal(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_separator() {
        assert_eq!(parse_decimal("1234.56"), Some(1234.56));
    }

    #[test]
    fn test_comma_separator() {
        assert_eq!(parse_decimal("1234,56"), Some(1234.56));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(parse_decimal("  42  "), Some(42.0));
        assert_eq!(parse_decimal("\t3,5\n"), Some(3.5));
    }

    #[test]
    fn test_empty_is_absent_not_zero() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
    }

    #[test]
    fn test_garbage_is_absent() {
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("12.3.4"), None);
        assert_eq!(parse_decimal("1,2,3"), None);
    }

    #[test]
    fn test_negative_and_zero() {
        assert_eq!(parse_decimal("-5,5"), Some(-5.5));
        assert_eq!(parse_decimal("0"), Some(0.0));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_decimal("8e6"), Some(8_000_000.0));
    }
}
