//! Coordinate scanning pipeline.
//!
//! Scanning an input string is a fixed, stateless pipeline:
//!
//! ```text
//! input ── match_candidates ──── three ordered pattern passes   (matcher.rs)
//!                 │               (bracketed, parenthesized, compass)
//!                 v
//!         ValidationPolicy ───── accept/reject per candidate    (validate.rs)
//!                 │
//!                 v
//!             dedup ──────────── drop near-identical points     (dedup.rs)
//!                 │
//!                 v
//!          Vec<Coordinate>
//! ```
//!
//! Each pass collects all of its matches in left-to-right order before the
//! next pass runs, so output ordering is deterministic for a given input.
//! The passes are independent: a substring may in principle be captured by
//! two shapes, which surfaces as duplicate candidates and is resolved by the
//! deduplicator.
//!
//! No stage holds state across calls. The compiled patterns are shared
//! immutably (`regex!` statics); everything else is a fresh computation per
//! invocation, so concurrent callers need no coordination.

#[path = "engine/dedup.rs"]
mod dedup;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/validate.rs"]
mod validate;

pub use validate::{TemperateBandPolicy, ValidationPolicy};

use crate::Coordinate;

/// Run the full pipeline over `text` with the given policy.
pub(crate) fn run(text: &str, policy: &dyn ValidationPolicy) -> Vec<Coordinate> {
    let candidates = matcher::match_candidates(text);
    tracing::debug!(candidates = candidates.len(), "pattern passes complete");

    let mut validated = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if policy.accept(&candidate) {
            validated.push(Coordinate {
                latitude: candidate.latitude,
                longitude: candidate.longitude,
            });
        } else {
            tracing::trace!(
                lat = %candidate.lat_text,
                lng = %candidate.lng_text,
                pattern = candidate.pattern,
                "candidate rejected"
            );
        }
    }

    let coordinates = dedup::dedup(validated);
    tracing::debug!(accepted = coordinates.len(), "scan complete");
    coordinates
}
