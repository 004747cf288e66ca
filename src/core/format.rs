//! printf-style numeric formatting for report lines.
//!
//! Rust's `{:.3e}` renders `1.0e3`; the report contract wants the C form
//! `1.000e+03` (explicit exponent sign, at least two exponent digits).

/// Format like C's `%.3e`: three fractional digits, signed two-digit
/// exponent (`6.282e+04`, `1.300e-04`). Non-finite values render
/// printf-style as `inf`, `-inf` or `nan`.
pub fn sci3(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    let formatted = format!("{value:.3e}");
    let (mantissa, exp) = formatted.split_once('e').unwrap();
    let exp: i32 = exp.parse().unwrap();
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.abs())
}

/// Format like C's `%.3f`.
pub fn fixed3(value: f64) -> String {
    format!("{value:.3}")
}

/// Float display for the echo lines: shortest round-trip digits, keeping a
/// decimal point on integral values (`10.0`, not `10`). Magnitudes outside
/// [1e-4, 1e16) render in signed exponent form (`1e+16`, `1e-05`).
pub fn echo_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    let abs = value.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let formatted = format!("{value:e}");
        let (mantissa, exp) = formatted.split_once('e').unwrap();
        let exp: i32 = exp.parse().unwrap();
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exp.abs());
    }

    if value == value.trunc() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

// =============================================================================
// TESTS
// =============================================================================
