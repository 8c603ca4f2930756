//! Normalization library for free-text generator identifiers.
//!
//! - **extract**: digit-run and suffix extraction primitives
//! - **rules**: the equivalence relations used by each cascade phase
//!
//! Every function here is total: an identifier that cannot be normalized
//! simply does not match, it never raises.

pub mod extract;
pub mod rules;

pub use extract::{
    Number, first_digit_run, fold, leading_digits, leading_number, parse_number, trailing_alnum_suffix,
    trailing_digits, trailing_number,
};
pub use rules::{
    Equivalence, any_digit_run, folded, identity, leading_digits_value, numeric_value,
    trailing_digits_value, trailing_suffix,
};
