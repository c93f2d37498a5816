//! Number and identifier formatting for QASM text.
//!
//! Output must not depend on the host's float printing defaults, so numbers
//! are rendered with a fixed count of significant digits in the style of
//! `printf("%g")`: fixed notation for moderate exponents, scientific
//! otherwise, trailing zeros trimmed. Fixed notation always keeps one digit
//! after the point (`1.0`, not `1`).

use std::f64::consts::PI;

/// Format `value` with `precision` significant digits.
///
/// Both zeros print as `0.0`. Non-finite values print as Rust formats them;
/// the emitter rejects them before they reach the text.
pub fn format_float(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let precision = precision.max(1);

    // Round once in scientific form; the exponent of the rounded value decides
    // the notation.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let digits = i64::try_from(precision).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= digits {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa, false),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(digits - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}"), true)
    }
}

/// Strip trailing zeros after the decimal point.
fn trim_fraction(text: &str, keep_one: bool) -> String {
    if !text.contains('.') {
        return if keep_one {
            format!("{text}.0")
        } else {
            text.to_string()
        };
    }
    let trimmed = text.trim_end_matches('0');
    match trimmed.strip_suffix('.') {
        Some(integral) if keep_one => format!("{integral}.0"),
        Some(integral) => integral.to_string(),
        None => trimmed.to_string(),
    }
}

/// Format an angle in radians as a multiple of pi.
///
/// Zero prints as `0`; everything else as `pi*<half turns>`.
pub fn format_angle(radians: f64, precision: usize) -> String {
    let turns = radians / PI;
    if turns == 0.0 {
        "0".to_string()
    } else {
        format!("pi*{}", format_float(turns, precision))
    }
}

/// Whether `id` matches the QASM identifier grammar `[a-z][a-zA-Z0-9_]*`.
pub fn is_valid_qasm_id(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
