use super::js_string;

/// Enough fractional digits to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Formats a number with a fixed number of decimal places, matching
/// JavaScript's `Number.prototype.toFixed`.
///
/// Rounding is done on the exact decimal expansion of the value and ties
/// go to the larger magnitude, so `to_fixed(0.25, 1)` is `"0.3"` while
/// `to_fixed(0.35, 1)` is `"0.3"` because `0.35` is stored slightly below
/// the midpoint. Values of `1e21` and above are not expanded and fall back
/// to the plain JS number string, as does `NaN`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return js_string(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(digits).is_some_and(|&d| d >= b'5') {
        round_up(&mut kept);
    }

    let split = kept.len() - digits;
    let whole = render_digits(&kept[..split]);
    if digits == 0 {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{}", render_digits(&kept[split..]))
    }
}

fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }

    digits.insert(0, 1);
}

fn render_digits(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}
