//! Display formatting for converted values
//!
//! All rounding goes through Rust's fixed-precision float formatting, which
//! rounds the exact binary value, so output is identical on every platform.

/// Format a table value by magnitude bucket.
///
/// | \|r\|            | format                                  |
/// |------------------|-----------------------------------------|
/// | >= 1,000,000     | integer, thousands-separated            |
/// | >= 1,000         | 1 decimal, thousands-separated, stripped |
/// | >= 1             | 3 decimals, stripped                    |
/// | >= 0.001         | 5 decimals, stripped                    |
/// | otherwise        | 6 decimals, stripped                    |
pub fn format_display(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }

    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        group_thousands(&format!("{:.0}", value))
    } else if magnitude >= 1_000.0 {
        strip_trailing_zeros(group_thousands(&format!("{:.1}", value)))
    } else if magnitude >= 1.0 {
        strip_trailing_zeros(format!("{:.3}", value))
    } else if magnitude >= 0.001 {
        strip_trailing_zeros(format!("{:.5}", value))
    } else {
        strip_trailing_zeros(format!("{:.6}", value))
    }
}

/// Insert a comma every three digits of the integer part.
///
/// Accepts an optional leading sign and an optional fractional part,
/// which are passed through untouched.
pub fn group_thousands(s: &str) -> String {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int_part, frac_part) = match rest.find('.') {
        Some(pos) => rest.split_at(pos),
        None => (rest, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}{}", sign, grouped, frac_part)
}

/// "nan", "inf" or "-inf"
fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

/// Drop trailing zeros after the decimal point, then a dangling point
fn strip_trailing_zeros(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// C-style `%g`: `precision` significant digits, scientific notation when
/// the exponent is below -4 or at least `precision`, trailing zeros removed.
pub fn format_general(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }

    let precision = precision.max(1);
    // Scientific form gives the exponent after rounding to `precision` digits
    let sci = format!("{:.*e}", precision - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= precision as i32 {
        let mantissa = strip_trailing_zeros(mantissa.to_string());
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        strip_trailing_zeros(format!("{:.*}", decimals, value))
    }
}

/// Echo a parsed input value: shortest round-trip digits, always with a
/// decimal point ("60.0"), exponent form outside [1e-4, 1e16).
pub fn format_input(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }

    let magnitude = value.abs();
    if value == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let s = value.to_string();
        if s.contains('.') { s } else { format!("{}.0", s) }
    } else {
        let sci = format!("{:e}", value);
        match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let exp: i32 = exp.parse().unwrap_or(0);
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            None => sci,
        }
    }
}
