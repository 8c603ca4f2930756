//! Cascading record linkage between the regulatory unit inventory and the
//! market generator inventory.
//!
//! # Pipeline
//!
//! 1. Facility-key corrections are applied to the market records.
//! 2. Regulatory records inactive during the reporting year are dropped.
//! 3. The phases in [`CASCADE`] run in order over the residual pools. Market
//!    records with excluded fuels leave the pool before the first loosened
//!    phase.
//! 4. Leftover regulatory records get a terminal reason.
//! 5. Matched sets and leftovers are assembled into the crosswalk.
//!
//! # Example
//!
//! ```ignore
//! use xwalk_core::{LinkInput, LinkOptions, link};
//!
//! let crosswalk = link(LinkInput::new(units, generators), &LinkOptions::for_year(2023))?;
//! for summary in &crosswalk.phases {
//!     println!("{}: {} matched", summary.phase, summary.matched_units);
//! }
//! ```

pub mod assemble;
pub mod cascade;
pub mod classify;
pub mod corrections;
pub mod eligibility;
pub mod link;
pub mod options;
pub mod phase;
pub mod rule;

pub use assemble::assemble;
pub use cascade::{CascadeOutcome, CascadeState, PhaseMatches, run_cascade};
pub use classify::classify;
pub use corrections::{apply_corrections, correct_generator};
pub use eligibility::{filter_eligible, is_eligible};
pub use link::{LinkInput, link};
pub use options::{DEFAULT_EXCLUDED_FUELS, DEFAULT_NON_GRID_PREFIX, LinkOptions, ReportingYear};
pub use phase::{MatchedPair, PhaseOutcome, run_phase};
pub use rule::{CASCADE, MatchRule, rule_for};
