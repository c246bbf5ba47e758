//! Numeric formatting matching the default C stream output of a `double`.
//!
//! Values are printed like `printf("%g")`: six significant digits, trailing
//! zeros removed, and scientific notation with a signed two-digit exponent
//! when the decimal exponent is below -4 or at least 6.

/// Significant digits used by the default float formatting.
const PRECISION: i32 = 6;

/// Format `value` the way `%g` with the default precision does.
///
/// # Examples
///
/// ```
/// use point_grouper::io::format::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333");
/// assert_eq!(format_number(1234567.0), "1.23457e+06");
/// assert_eq!(format_number(0.00001), "1e-05");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Exponent after rounding to PRECISION significant digits
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..PRECISION).contains(&exponent) {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
