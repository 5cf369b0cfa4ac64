//! Probe outcomes to a percentage.

use crate::types::{CheckResult, Match};

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// `ratio` as a percentage with 2 decimals.
pub fn percentage(ratio: f64) -> f64 {
    round_half_up(ratio * 10_000.0) / 100.0
}

/// Build the result of a check from the number of probes evaluated and the
/// matches found, in probe order.
pub fn aggregate(checked: usize, matches: Vec<Match>) -> CheckResult {
    if checked == 0 {
        return CheckResult::default();
    }
    let matched = matches.len();
    debug_assert!(matched <= checked);

    CheckResult {
        score: percentage(matched as f64 / checked as f64),
        matches,
        checked,
        matched,
    }
}
