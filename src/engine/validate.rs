//! Candidate validation policies.
//!
//! Validation is the stage that separates plausible coordinates from the
//! unrelated numbers prose is full of (step counts, distances, dates). It is
//! expressed as an explicit strategy so alternative heuristics or confidence
//! scoring can be substituted without touching the matcher.
//!
//! The default policy, [`TemperateBandPolicy`], favors precision over recall
//! for low-precision pairs, since those are the pairs most likely to collide
//! with counts in prose. Its latitude band (35..=70) is a proxy for "looks
//! like a real place" tuned on Northern mid-latitude route text; callers who
//! need different geography should supply their own policy via
//! [`scan_with`](crate::scan_with).

use crate::Candidate;

/// Accept/reject decision over a single [`Candidate`].
///
/// Implementations must be stateless and side-effect free: the decision is a
/// pure function of the candidate, independent of any other candidate.
pub trait ValidationPolicy: Send + Sync {
    fn accept(&self, candidate: &Candidate) -> bool;
}

/// The default plausibility heuristic. Three rules, all must pass:
///
/// 1. Range: latitude in `[-90, 90]`, longitude in `[-180, 180]`.
/// 2. Round-number rejection: a literal containing the digit run `000` in a
///    representation of six characters or fewer is treated as a count
///    (steps, meters), not a coordinate.
/// 3. Low-precision plausibility: when both literals carry at most one
///    decimal digit, accept only a non-integer pair whose latitude falls in
///    the populated temperate band `[35, 70]`. Pairs with more decimal
///    digits skip this rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperateBandPolicy;

impl ValidationPolicy for TemperateBandPolicy {
    fn accept(&self, candidate: &Candidate) -> bool {
        if !in_range(candidate.latitude, candidate.longitude) {
            return false;
        }

        if looks_like_count(&candidate.lat_text) || looks_like_count(&candidate.lng_text) {
            return false;
        }

        if decimal_digits(&candidate.lat_text) <= 1 && decimal_digits(&candidate.lng_text) <= 1 {
            return plausible_low_precision(candidate);
        }

        true
    }
}

fn in_range(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}

/// Large round magnitudes are almost always counts rather than coordinates.
fn looks_like_count(literal: &str) -> bool {
    literal.contains("000") && literal.len() <= 6
}

/// Number of digits after the decimal point, zero if there is none.
fn decimal_digits(literal: &str) -> usize {
    literal.split_once('.').map_or(0, |(_, frac)| frac.len())
}

fn plausible_low_precision(candidate: &Candidate) -> bool {
    (35.0..=70.0).contains(&candidate.latitude)
        && (-180.0..=180.0).contains(&candidate.longitude)
        && !is_whole(candidate.latitude)
        && !is_whole(candidate.longitude)
}

fn is_whole(value: f64) -> bool {
    value.fract().abs() < f64::EPSILON
}
