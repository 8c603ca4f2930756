//! Extraction primitives over free-text identifiers.
//!
//! Identifiers are trimmed of surrounding whitespace before extraction.
//! Digit runs are ASCII only.

/// Uppercase and drop everything that is not an ASCII letter or digit.
pub fn fold(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

/// Numeric value of an identifier or of a digit run inside one.
///
/// Pure digit runs keep every digit, so long serial-style runs never collide
/// through rounding. Other numeric spellings (`"2.5"`, `"1e3"`) are finite
/// `f64`. Equality is by value across both forms.
#[derive(Debug, Clone)]
pub enum Number {
    /// Digits with leading zeros removed; zero is `"0"`.
    Integer(String),
    Real(f64),
}

impl Number {
    /// Build from an ASCII digit run (`"007"` → `7`).
    pub fn integer(digits: &str) -> Self {
        let significant = digits.trim_start_matches('0');
        if significant.is_empty() {
            Self::Integer("0".to_owned())
        } else {
            Self::Integer(significant.to_owned())
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Real(left), Self::Real(right)) => left == right,
            (Self::Integer(digits), Self::Real(real)) | (Self::Real(real), Self::Integer(digits)) => {
                whole_digits(*real).is_some_and(|whole| whole == *digits)
            }
        }
    }
}

/// Exact decimal digits of a non-negative whole `f64`.
fn whole_digits(value: f64) -> Option<String> {
    if value == 0.0 {
        return Some("0".to_owned());
    }
    (value > 0.0 && value.fract() == 0.0).then(|| format!("{value:.0}"))
}

/// Parse the whole identifier as a number (`"02"` → 2, `"2A"` → none).
pub fn parse_number(value: &str) -> Option<Number> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return Some(Number::integer(trimmed));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Number::Real)
}

/// Maximal run of digits at the start of the identifier.
pub fn leading_digits(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    let end = trimmed
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(trimmed.len());
    non_empty(&trimmed[..end])
}

/// Maximal run of digits at the end of the identifier.
pub fn trailing_digits(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    let start = trimmed
        .rfind(|ch: char| !ch.is_ascii_digit())
        .map_or(0, |idx| idx + char_len_at(trimmed, idx));
    non_empty(&trimmed[start..])
}

/// Numeric value of the trailing digit run, falling back to the whole
/// identifier parsed as a number when there is no trailing digit.
pub fn trailing_number(value: &str) -> Option<Number> {
    trailing_digits(value)
        .map(Number::integer)
        .or_else(|| parse_number(value))
}

/// Numeric value of the leading digit run, with the same fallback as
/// [`trailing_number`].
pub fn leading_number(value: &str) -> Option<Number> {
    leading_digits(value)
        .map(Number::integer)
        .or_else(|| parse_number(value))
}

/// Maximal trailing run of one or more digits followed by one or more
/// ASCII letters (`"PFL6A"` → `"6A"`, `"CT10AB"` → `"10AB"`).
pub fn trailing_alnum_suffix(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    let bytes = trimmed.as_bytes();
    let mut idx = bytes.len();
    while idx > 0 && bytes[idx - 1].is_ascii_alphabetic() {
        idx -= 1;
    }
    if idx == bytes.len() {
        return None;
    }
    let letters_start = idx;
    while idx > 0 && bytes[idx - 1].is_ascii_digit() {
        idx -= 1;
    }
    if idx == letters_start {
        return None;
    }
    Some(&trimmed[idx..])
}

/// First maximal digit run anywhere in the identifier (`"MGS1A"` → `"1"`).
pub fn first_digit_run(value: &str) -> Option<&str> {
    let start = value.find(|ch: char| ch.is_ascii_digit())?;
    let rest = &value[start..];
    let end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    non_empty(&rest[..end])
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

fn char_len_at(value: &str, idx: usize) -> usize {
    value[idx..].chars().next().map_or(1, char::len_utf8)
}
