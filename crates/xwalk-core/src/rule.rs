//! The ordered phase list.

use xwalk_model::Phase;
use xwalk_normalization::{
    Equivalence, any_digit_run, folded, identity, leading_digits_value, numeric_value,
    trailing_digits_value, trailing_suffix,
};

/// One phase of the cascade: its label plus the identifier comparison it uses.
/// Facility keys must always agree exactly.
#[derive(Debug, Clone, Copy)]
pub struct MatchRule {
    pub phase: Phase,
    pub name: &'static str,
    pub description: &'static str,
    pub equivalent: Equivalence,
}

impl MatchRule {
    pub fn matches(&self, left: &str, right: &str) -> bool {
        (self.equivalent)(left, right)
    }
}

/// Phases in execution order, strictest first.
pub const CASCADE: [MatchRule; 7] = [
    MatchRule {
        phase: Phase::Step1,
        name: "identity",
        description: "exact identifier equality",
        equivalent: identity,
    },
    MatchRule {
        phase: Phase::Step2a,
        name: "fold",
        description: "equal after uppercasing and removing non-alphanumerics",
        equivalent: folded,
    },
    MatchRule {
        phase: Phase::Step2b,
        name: "numeric-value",
        description: "both parse as numbers with equal value",
        equivalent: numeric_value,
    },
    MatchRule {
        phase: Phase::Step2c,
        name: "trailing-digits",
        description: "trailing digit runs are numerically equal",
        equivalent: trailing_digits_value,
    },
    MatchRule {
        phase: Phase::Step2d,
        name: "leading-digits",
        description: "leading digit runs are numerically equal",
        equivalent: leading_digits_value,
    },
    MatchRule {
        phase: Phase::Step2e,
        name: "trailing-alnum-suffix",
        description: "identical trailing digits-then-letters suffix",
        equivalent: trailing_suffix,
    },
    MatchRule {
        phase: Phase::Step2f,
        name: "any-digit-substring",
        description: "identical first embedded digit run",
        equivalent: any_digit_run,
    },
];

pub fn rule_for(phase: Phase) -> &'static MatchRule {
    // CASCADE is indexed in Phase::ALL order.
    let idx = Phase::ALL
        .iter()
        .position(|candidate| *candidate == phase)
        .unwrap_or_default();
    &CASCADE[idx]
}
