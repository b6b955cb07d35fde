//! Near-duplicate removal.
//!
//! The pattern passes are independent, so the same textual pair can surface
//! more than once, and route text often repeats a waypoint verbatim. Two
//! coordinates count as duplicates when both axes differ by less than
//! [`EPSILON_DEGREES`]; the first occurrence wins and output order is the
//! order of first appearance.
//!
//! Comparison is pairwise against everything already retained. Quadratic in
//! the validated-candidate count, which is small by construction (typically
//! under a few dozen points per scan).

use crate::Coordinate;

/// Tolerance per axis, in degrees (roughly 11 m of latitude).
pub(crate) const EPSILON_DEGREES: f64 = 0.0001;

pub(crate) fn dedup(coordinates: Vec<Coordinate>) -> Vec<Coordinate> {
    let mut kept: Vec<Coordinate> = Vec::with_capacity(coordinates.len());

    for coordinate in coordinates {
        if !kept.iter().any(|existing| near(existing, &coordinate)) {
            kept.push(coordinate);
        } else {
            tracing::trace!(lat = coordinate.latitude, lng = coordinate.longitude, "near-duplicate dropped");
        }
    }

    kept
}

fn near(a: &Coordinate, b: &Coordinate) -> bool {
    (a.latitude - b.latitude).abs() < EPSILON_DEGREES
        && (a.longitude - b.longitude).abs() < EPSILON_DEGREES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate { latitude, longitude }
    }

    #[test]
    fn first_occurrence_wins() {
        let out = dedup(vec![coord(60.1691, 24.9522), coord(60.16915, 24.95225), coord(60.1691, 24.9522)]);
        assert_eq!(out, vec![coord(60.1691, 24.9522)]);
    }

    #[test]
    fn both_axes_must_be_close() {
        // Latitudes are identical but longitudes differ well beyond tolerance.
        let out = dedup(vec![coord(60.1691, 24.9522), coord(60.1691, 24.9590)]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn order_of_first_appearance_is_preserved() {
        let input = vec![coord(60.1691, 24.9522), coord(60.1669, 24.9525), coord(60.1691, 24.9522)];
        let out = dedup(input);
        assert_eq!(out, vec![coord(60.1691, 24.9522), coord(60.1669, 24.9525)]);
    }

    #[test]
    fn retained_pairs_satisfy_the_separation_invariant() {
        let out = dedup(vec![
            coord(60.1691, 24.9522),
            coord(60.16912, 24.95221),
            coord(60.1669, 24.9525),
            coord(60.1678, 24.9590),
        ]);

        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                assert!(
                    (a.latitude - b.latitude).abs() >= EPSILON_DEGREES
                        || (a.longitude - b.longitude).abs() >= EPSILON_DEGREES
                );
            }
        }
    }
}
