//! Best-effort conversions for untrusted JSON values.

use serde_json::Value;

/// Largest integer a JSON number can carry without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// JSON type name for diagnostics.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Coerce to a finite number, falling back to 0.
///
/// Follows the usual loose numeric conversion of JSON clients:
///
/// - numbers pass through
/// - strings are trimmed and parsed as decimal, or as unsigned `0x`/`0o`/`0b`
///   integers (blank strings are 0)
/// - booleans become 1 or 0
/// - a one-element array converts its element; an empty array is 0
/// - everything else, and any non-finite result, is 0
pub fn to_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_numeric(s),
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [item @ (Value::Number(_) | Value::String(_) | Value::Array(_))] => to_number(item),
            _ => 0.0,
        },
        Value::Null | Value::Object(_) => 0.0,
    };

    if n.is_finite() {
        n
    } else {
        0.0
    }
}

fn parse_numeric(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return trimmed.parse::<f64>().unwrap_or(0.0),
    };
    // Digits only after the prefix; `from_str_radix` would take a `+`.
    let digits = &trimmed[2..];
    if digits.starts_with('+') {
        return 0.0;
    }
    u64::from_str_radix(digits, radix).map_or(0.0, |n| n as f64)
}

/// Accept only JSON numbers holding a positive integer (`3` or `3.0`).
pub fn positive_integer(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };

    if let Some(u) = n.as_u64() {
        return (u > 0).then_some(u);
    }

    let f = n.as_f64()?;
    (f.fract() == 0.0 && f > 0.0 && f <= MAX_SAFE_INTEGER).then_some(f as u64)
}
