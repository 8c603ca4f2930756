//! Provenance labels attached to every crosswalk row.

use std::fmt;
use std::str::FromStr;

/// One phase of the linkage cascade, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Exact identifier equality.
    Step1,
    /// Case and punctuation folded.
    Step2a,
    /// Numeric value.
    Step2b,
    /// Trailing digit run.
    Step2c,
    /// Leading digit run.
    Step2d,
    /// Trailing digits-then-letters suffix.
    Step2e,
    /// First embedded digit run.
    Step2f,
}

impl Phase {
    pub const ALL: [Phase; 7] = [
        Phase::Step1,
        Phase::Step2a,
        Phase::Step2b,
        Phase::Step2c,
        Phase::Step2d,
        Phase::Step2e,
        Phase::Step2f,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Phase::Step1 => "Step 1",
            Phase::Step2a => "Step 2a",
            Phase::Step2b => "Step 2b",
            Phase::Step2c => "Step 2c",
            Phase::Step2d => "Step 2d",
            Phase::Step2e => "Step 2e",
            Phase::Step2f => "Step 2f",
        }
    }

    /// The phase that follows this one, or `None` after the last phase.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Step1 => Some(Phase::Step2a),
            Phase::Step2a => Some(Phase::Step2b),
            Phase::Step2b => Some(Phase::Step2c),
            Phase::Step2c => Some(Phase::Step2d),
            Phase::Step2d => Some(Phase::Step2e),
            Phase::Step2e => Some(Phase::Step2f),
            Phase::Step2f => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a regulatory record left the cascade without a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TerminalReason {
    /// Facility key lies in the range reserved for non-grid facilities.
    NotGridConnected,
    /// The record has no generator identifier to compare.
    NoIdentifier,
    Unmatched,
}

impl TerminalReason {
    pub fn label(self) -> &'static str {
        match self {
            TerminalReason::NotGridConnected => "not grid-connected",
            TerminalReason::NoIdentifier => "no identifier present",
            TerminalReason::Unmatched => "unmatched",
        }
    }
}

impl fmt::Display for TerminalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed set of crosswalk row labels: one per phase plus the terminal reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchType {
    Matched(Phase),
    Terminal(TerminalReason),
}

impl MatchType {
    pub fn label(self) -> &'static str {
        match self {
            MatchType::Matched(phase) => phase.label(),
            MatchType::Terminal(reason) => reason.label(),
        }
    }

    pub fn is_match(self) -> bool {
        matches!(self, MatchType::Matched(_))
    }

    /// Every label in output order.
    pub fn all() -> impl Iterator<Item = MatchType> {
        Phase::ALL.into_iter().map(MatchType::Matched).chain([
            MatchType::Terminal(TerminalReason::NotGridConnected),
            MatchType::Terminal(TerminalReason::NoIdentifier),
            MatchType::Terminal(TerminalReason::Unmatched),
        ])
    }
}

impl From<Phase> for MatchType {
    fn from(phase: Phase) -> Self {
        MatchType::Matched(phase)
    }
}

impl From<TerminalReason> for MatchType {
    fn from(reason: TerminalReason) -> Self {
        MatchType::Terminal(reason)
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MatchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MatchType::all()
            .find(|candidate| candidate.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown match type: {trimmed}"))
    }
}

impl serde::Serialize for MatchType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> serde::Deserialize<'de> for MatchType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
