//! geosift extracts geographic point coordinates from unstructured,
//! machine-generated prose (assistant responses describing walking routes)
//! and turns them into normalized, deduplicated point sequences.
//!
//! The hard part is disambiguation: the source text mixes genuine coordinate
//! pairs with step counts, distances and dates that share the same textual
//! shapes. The engine decides which numeric pairs are plausible coordinates
//! using fixed textual patterns and a swappable validation policy, without
//! any semantic understanding of the text.
//!
//! ```
//! let result = geosift::scan("Start at [60.1691, 24.9522], end at [60.1678, 24.9590].");
//! assert_eq!(result.coordinates.len(), 2);
//! assert!(result.has_coordinates);
//! ```

#[macro_use]
mod macros;
mod adapters;
mod api;
mod engine;
pub mod selfcheck;

pub use adapters::{Feature, FeatureCollection, Geometry, PointProperties};
pub use api::{
    Candidate, Coordinate, ScanResult, extract_for_map, format, has_valid, scan, scan_with,
    to_geo_features, to_lat_lng, to_lng_lat,
};
pub use engine::{TemperateBandPolicy, ValidationPolicy};
