/// Formats a number the way JavaScript's `String(number)` does.
///
/// Rust's `Display` already produces the shortest round-trip decimal, which
/// is what JS uses between `1e-6` and `1e21`. Outside that range JS switches
/// to exponent notation with an explicit `+` on positive exponents.
pub fn js_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }

    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }

    if value == 0.0 {
        return "0".into();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string() {
        assert_eq!(js_string(7.5), "7.5");
        assert_eq!(js_string(100.0), "100");
        assert_eq!(js_string(0.0), "0");
        assert_eq!(js_string(-0.0), "0");
        assert_eq!(js_string(-2.25), "-2.25");
        assert_eq!(js_string(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(js_string(0.000001), "0.000001");
        assert_eq!(js_string(1.5e-7), "1.5e-7");
        assert_eq!(js_string(1e20), "100000000000000000000");
        assert_eq!(js_string(1e21), "1e+21");
        assert_eq!(js_string(-2.5e22), "-2.5e+22");
    }

    #[test]
    fn test_js_string_special_values() {
        assert_eq!(js_string(f64::NAN), "NaN");
        assert_eq!(js_string(f64::INFINITY), "Infinity");
        assert_eq!(js_string(f64::NEG_INFINITY), "-Infinity");
    }
}
