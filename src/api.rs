use crate::adapters;
use crate::engine::{self, TemperateBandPolicy, ValidationPolicy};
use crate::FeatureCollection;
use serde::Serialize;

/// A validated geographic point.
///
/// Every `Coordinate` that leaves the engine satisfies the range invariant:
/// latitude in `[-90, 90]` and longitude in `[-180, 180]`. Coordinates have
/// no identity beyond their value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// An unvalidated numeric pair produced by one of the matcher passes.
///
/// Candidates keep the literal lexemes of both numbers: the validation
/// heuristics inspect textual shape (digit runs, decimal places), not just
/// the parsed values. A candidate may violate the `Coordinate` range
/// invariant; it never escapes a scan unvalidated.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub latitude: f64,
    pub longitude: f64,
    /// Literal lexeme of the first number, as it appeared in the input.
    pub lat_text: String,
    /// Literal lexeme of the second number, as it appeared in the input.
    pub lng_text: String,
    /// Name of the pattern pass that produced this candidate.
    pub pattern: &'static str,
}

/// Result from [`scan`] and [`scan_with`].
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Validated coordinates, unique under the dedup tolerance, in order of
    /// first appearance.
    pub coordinates: Vec<Coordinate>,
    /// The original input, retained for traceability. Never reparsed.
    pub raw_text: String,
    /// True iff `coordinates` is non-empty.
    pub has_coordinates: bool,
}

/// Scan `text` for plausible geographic coordinates using the default
/// validation policy.
///
/// Never fails: inputs without coordinates yield an empty result. Each call
/// is a pure function of its input, safe to invoke concurrently.
///
/// # Example
/// ```
/// let out = geosift::scan("Meet me at (40.7128, -74.0060).");
/// assert_eq!(out.coordinates.len(), 1);
/// ```
pub fn scan(text: &str) -> ScanResult {
    scan_with(text, &TemperateBandPolicy)
}

/// Scan `text` using a caller-provided [`ValidationPolicy`].
///
/// Use this to substitute an alternative plausibility heuristic without
/// touching the matcher or deduplicator.
pub fn scan_with(text: &str, policy: &dyn ValidationPolicy) -> ScanResult {
    let coordinates = engine::run(text, policy);

    ScanResult {
        has_coordinates: !coordinates.is_empty(),
        raw_text: text.to_string(),
        coordinates,
    }
}

/// Convenience accessor for the coordinate sequence of [`scan`].
pub fn extract_for_map(text: &str) -> Vec<Coordinate> {
    scan(text).coordinates
}

/// True when `text` contains at least one valid coordinate.
pub fn has_valid(text: &str) -> bool {
    scan(text).has_coordinates
}

/// Render a coordinate sequence as a comma-separated list of bracketed
/// `latitude, longitude` pairs, for human-readable echo.
pub fn format(coordinates: &[Coordinate]) -> String {
    adapters::display(coordinates)
}

/// Scan `text` and reshape the result as a GeoJSON-style feature collection.
///
/// Point geometry is encoded in (longitude, latitude) axis order per the
/// geo-feature convention; the original latitude/longitude are repeated in
/// each feature's properties together with a zero-based index and a label.
pub fn to_geo_features(text: &str) -> FeatureCollection {
    adapters::feature_collection(&scan(text).coordinates)
}

/// Scan `text` and emit `(longitude, latitude)` pairs (map-rendering
/// convention). Order and cardinality match `scan(text).coordinates` exactly.
pub fn to_lng_lat(text: &str) -> Vec<(f64, f64)> {
    adapters::lng_lat_pairs(&scan(text).coordinates)
}

/// Scan `text` and emit `(latitude, longitude)` pairs (general-purpose
/// convention). Order and cardinality match `scan(text).coordinates` exactly.
pub fn to_lat_lng(text: &str) -> Vec<(f64, f64)> {
    adapters::lat_lng_pairs(&scan(text).coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELSINKI: &str = "Coordinates: [60.1691, 24.9522], [60.1669, 24.9525], [60.1678, 24.9590]";

    #[test]
    fn scan_returns_ordered_coordinates() {
        let res = scan(HELSINKI);

        assert_eq!(res.raw_text, HELSINKI);
        assert_eq!(res.coordinates.len(), 3);
        assert!(res.has_coordinates);

        assert_eq!(res.coordinates[0], Coordinate { latitude: 60.1691, longitude: 24.9522 });
        assert_eq!(res.coordinates[1], Coordinate { latitude: 60.1669, longitude: 24.9525 });
        assert_eq!(res.coordinates[2], Coordinate { latitude: 60.1678, longitude: 24.9590 });
    }

    #[test]
    fn presence_flag_tracks_sequence() {
        for input in [HELSINKI, "no numbers here", "walked 10,000 steps today"] {
            let res = scan(input);
            assert_eq!(res.has_coordinates, !res.coordinates.is_empty(), "input: {input}");
            assert_eq!(has_valid(input), res.has_coordinates);
        }
    }

    #[test]
    fn scan_is_deterministic() {
        let a = scan(HELSINKI);
        let b = scan(HELSINKI);
        assert_eq!(a.coordinates, b.coordinates);
    }

    #[test]
    fn extract_for_map_equals_scan_coordinates() {
        assert_eq!(extract_for_map(HELSINKI), scan(HELSINKI).coordinates);
    }

    #[test]
    fn axis_order_adapters_mirror_scan() {
        let coords = scan(HELSINKI).coordinates;
        let lng_lat = to_lng_lat(HELSINKI);
        let lat_lng = to_lat_lng(HELSINKI);

        assert_eq!(lng_lat.len(), coords.len());
        assert_eq!(lat_lng.len(), coords.len());
        for (i, c) in coords.iter().enumerate() {
            assert_eq!(lng_lat[i], (c.longitude, c.latitude));
            assert_eq!(lat_lng[i], (c.latitude, c.longitude));
        }
    }

    #[test]
    fn format_renders_bracketed_pairs() {
        let coords = [
            Coordinate { latitude: 60.1691, longitude: 24.9522 },
            Coordinate { latitude: 60.1669, longitude: 24.9525 },
        ];
        assert_eq!(format(&coords), "[60.1691, 24.9522], [60.1669, 24.9525]");
    }

    #[test]
    fn scan_with_accepts_custom_policy() {
        struct AcceptInRange;

        impl ValidationPolicy for AcceptInRange {
            fn accept(&self, candidate: &Candidate) -> bool {
                (-90.0..=90.0).contains(&candidate.latitude)
                    && (-180.0..=180.0).contains(&candidate.longitude)
            }
        }

        // The default policy rejects low-precision integer pairs; a pure
        // range policy keeps them.
        let input = "grid cell (45, 120)";
        assert_eq!(scan(input).coordinates.len(), 0);
        assert_eq!(scan_with(input, &AcceptInRange).coordinates.len(), 1);
    }
}
