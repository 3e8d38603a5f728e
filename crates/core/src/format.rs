//! Shared numeric display formatting
//!
//! Every converter renders values through the same rule so results read
//! consistently across tools. The rule only affects the textual presentation;
//! the underlying numeric result is never rounded.

/// Magnitudes below this render in exponential notation
const EXP_LOWER_BOUND: f64 = 1e-4;
/// Magnitudes at or above this render in exponential notation
const EXP_UPPER_BOUND: f64 = 1e9;

/// Format a finite value for display.
///
/// - `0` renders as `"0"`
/// - magnitudes below 1e-4 or at/above 1e9 render in exponential notation
///   with 4 fractional digits
/// - everything else renders with up to 6 fractional digits, trimmed of
///   insignificant trailing zeros
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude < EXP_LOWER_BOUND || magnitude >= EXP_UPPER_BOUND {
        return format!("{:.4e}", value);
    }

    let fixed = format!("{:.6}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_renders_bare() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn test_small_value_is_exponential() {
        assert_eq!(format_value(0.00003), "3.0000e-5");
    }

    #[test]
    fn test_large_value_is_exponential() {
        assert_eq!(format_value(2_500_000_000.0), "2.5000e9");
    }

    #[test]
    fn test_boundary_values() {
        // 1e-4 itself is still plain; 1e9 itself is exponential.
        assert_eq!(format_value(0.0001), "0.0001");
        assert_eq!(format_value(1_000_000_000.0), "1.0000e9");
    }

    #[test]
    fn test_plain_value_keeps_significant_digits() {
        assert_eq!(format_value(123.456789), "123.456789");
    }

    #[test]
    fn test_plain_value_trims_trailing_zeros() {
        assert_eq!(format_value(1.5), "1.5");
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(0.25), "0.25");
    }

    #[test]
    fn test_plain_value_rounds_to_six_fractional_digits() {
        assert_eq!(format_value(1.23456789), "1.234568");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_value(-1.5), "-1.5");
        assert_eq!(format_value(-0.00003), "-3.0000e-5");
    }
}
