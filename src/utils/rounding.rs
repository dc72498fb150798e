//! Rounding Utilities
//!
//! Adjusted yields are reported to two decimal places.

/// Round to 2 decimal places from the exact decimal value of `value`.
///
/// Rounding goes through fixed-point formatting, which expands the double
/// exactly, so 2.675 (stored just below) gives 2.67. Exact ties go to even.
/// NaN and infinities pass through unchanged.
pub fn round_to_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    format!("{:.2}", value).parse().unwrap_or(value)
}
