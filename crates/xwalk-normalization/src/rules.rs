//! Equivalence relations over generator identifiers.
//!
//! Each rule answers "are these two identifiers the same generator?" given
//! that the facility keys already agree. Rules are symmetric and never fail.

use crate::extract::{
    Number, first_digit_run, fold, leading_number, parse_number, trailing_alnum_suffix,
    trailing_number,
};

/// Signature shared by every rule.
pub type Equivalence = fn(&str, &str) -> bool;

/// Exact string equality.
pub fn identity(left: &str, right: &str) -> bool {
    left == right
}

/// Equality after uppercasing and dropping non-alphanumerics. Identifiers
/// that fold to nothing (pure punctuation) never match.
pub fn folded(left: &str, right: &str) -> bool {
    let left = fold(left);
    !left.is_empty() && left == fold(right)
}

/// Both identifiers parse as numbers with the same value (`"02"` ≡ `"2"`).
pub fn numeric_value(left: &str, right: &str) -> bool {
    same_number(parse_number(left), parse_number(right))
}

/// Trailing digit runs carry the same numeric value (`"NO.6"` ≡ `"6"`).
pub fn trailing_digits_value(left: &str, right: &str) -> bool {
    same_number(trailing_number(left), trailing_number(right))
}

/// Leading digit runs carry the same numeric value (`"7-STG"` ≡ `"7S"`).
pub fn leading_digits_value(left: &str, right: &str) -> bool {
    same_number(leading_number(left), leading_number(right))
}

/// Identical trailing digits-then-letters suffix (`"PFL6A"` ≡ `"6A"`).
/// Compared literally, not numerically.
pub fn trailing_suffix(left: &str, right: &str) -> bool {
    same_text(trailing_alnum_suffix(left), trailing_alnum_suffix(right))
}

/// Identical first embedded digit run (`"MGS1A"` ≡ `"MGS1"`).
pub fn any_digit_run(left: &str, right: &str) -> bool {
    same_text(first_digit_run(left), first_digit_run(right))
}

fn same_number(left: Option<Number>, right: Option<Number>) -> bool {
    matches!((left, right), (Some(l), Some(r)) if l == r)
}

fn same_text(left: Option<&str>, right: Option<&str>) -> bool {
    matches!((left, right), (Some(l), Some(r)) if l == r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_case_sensitive() {
        assert!(identity("UN14", "UN14"));
        assert!(!identity("UN14", "un14"));
    }

    #[test]
    fn folded_matches_case_and_punctuation_drift() {
        assert!(folded("UN14", "un14"));
        assert!(folded("CT-1", "ct 1"));
        assert!(!folded("CT1", "CT2"));
        assert!(!folded("-", "."));
    }

    #[test]
    fn numeric_value_examples() {
        assert!(numeric_value("02", "2"));
        assert!(numeric_value("0001", "1"));
        assert!(!numeric_value("2A", "2"));
        assert!(!numeric_value("2A", "2A"));
    }

    #[test]
    fn trailing_digits_examples() {
        assert!(trailing_digits_value("NO.6", "6"));
        assert!(trailing_digits_value("TGO1", "1"));
        assert!(trailing_digits_value("AL1", "AI1"));
        assert!(trailing_digits_value("GT01", "1"));
        assert!(!trailing_digits_value("CTA", "CTA"));
    }

    #[test]
    fn leading_digits_examples() {
        assert!(leading_digits_value("7-STG", "7S"));
        assert!(!leading_digits_value("7-STG", "8S"));
        assert!(!leading_digits_value("ST7", "ST7"));
    }

    #[test]
    fn digit_runs_beyond_float_precision_stay_distinct() {
        assert!(!numeric_value("12345678901234567890", "12345678901234567891"));
        assert!(numeric_value("012345678901234567890", "12345678901234567890"));
        assert!(!trailing_digits_value(
            "GT12345678901234567890",
            "GT12345678901234567891"
        ));
        assert!(!leading_digits_value(
            "12345678901234567890S",
            "12345678901234567891S"
        ));
    }

    #[test]
    fn trailing_suffix_is_literal() {
        assert!(trailing_suffix("PFL6A", "6A"));
        assert!(!trailing_suffix("PFL06A", "6A"));
        assert!(!trailing_suffix("6", "6"));
    }

    #[test]
    fn any_digit_run_examples() {
        assert!(any_digit_run("MGS1A", "MGS1"));
        assert!(!any_digit_run("MGS01", "MGS1"));
        assert!(!any_digit_run("STEAM", "STEAM"));
    }
}
