//! Text formatting shared by the CSS serializer.

use std::fmt::Write as _;

/// Format a number the way the browser-side renderer prints it.
///
/// Integral values carry no fractional part and `-0` collapses to `0`.
/// Non-finite values use the ECMAScript spellings.
pub fn fmt_number(v: f64) -> String {
    let mut out = String::new();
    write_number(&mut out, v);
    out
}

/// Append [`fmt_number`] output to `out` without an intermediate allocation.
pub fn write_number(out: &mut String, v: f64) {
    if v.is_nan() {
        out.push_str("NaN");
    } else if v.is_infinite() {
        out.push_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
    } else if v == 0.0 {
        out.push('0');
    } else {
        let _ = write!(out, "{v}");
    }
}

/// Escape a value for use inside a double-quoted CSS attribute selector.
pub fn escape_attr_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/format.rs"]
mod tests;
