//! Numeric display formatting.

/// Default display policy for bar values.
///
/// Integral values render without a decimal point (`10.0` -> `"10"`). Everything else renders
/// with up to two fractional digits, trimming trailing zeros and a dangling point
/// (`3.140` -> `"3.14"`, `0.50` -> `"0.5"`).
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        return format!("{}", v as i64);
    }
    let mut s = format!("{v:.2}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" { "0".to_string() } else { s }
}

/// Canonical stringification for numbers that land in labels or attribute values.
///
/// Unlike [`format_value`] this does not round: non-integral values keep their shortest
/// round-trippable decimal form.
pub fn fmt_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        return format!("{}", v as i64);
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}
