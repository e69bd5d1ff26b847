use std::fmt::Display;

use crate::formatters::{js_string, to_fixed};

/// The number of real world hours in a single Alex hour.
pub const CONVERSION_FACTOR: f64 = 2.718;

/// A number of "Alex hours".
///
/// The value may be `NaN`, which is what unparsable input turns into. It is
/// never rejected; [`Hours::has_time`] simply treats it as "no time".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hours(f64);

impl Hours {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Parses a string with the same leniency as JavaScript's `parseFloat`:
    /// leading whitespace is skipped, the longest numeric prefix is used and
    /// anything after it is ignored. Input without a numeric prefix yields
    /// `NaN`.
    pub fn parse(input: &str) -> Self {
        Self(parse_float(input))
    }

    /// Builds the initial value for a view from its optional path parameter.
    pub fn from_param(param: Option<&str>) -> Self {
        Self::parse(param.unwrap_or("0"))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn has_time(&self) -> bool {
        self.0 > 0.0 && !self.0.is_nan()
    }

    pub fn real_world(&self) -> f64 {
        self.0 * CONVERSION_FACTOR
    }

    /// The real world hours to one decimal place, when there is any time to
    /// convert.
    pub fn converted(&self) -> Option<String> {
        self.has_time().then(|| to_fixed(self.real_world(), 1))
    }

    /// The string written back into a number input. Browsers sanitise `NaN`
    /// to an empty field, so we do the same.
    pub fn input_value(&self) -> String {
        if self.0.is_nan() {
            String::new()
        } else {
            js_string(self.0)
        }
    }
}

impl From<&str> for Hours {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl Display for Hours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", js_string(self.0))
    }
}

fn parse_float(input: &str) -> f64 {
    let trimmed = input.trim_start_matches(is_js_whitespace);
    let bytes = trimmed.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if trimmed[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    if bytes.get(end) == Some(&b'.') {
        let fraction_digits = count_digits(&bytes[end + 1..]);
        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if !bytes[..end].iter().any(u8::is_ascii_digit) {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }

        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}
