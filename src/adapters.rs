//! Consumer-specific reshaping of a coordinate sequence.
//!
//! Adapters are pure transforms with no failure modes: the map surface wants
//! `(longitude, latitude)` pairs, general-purpose consumers want
//! `(latitude, longitude)`, the chat surface wants a human-readable echo,
//! and structured consumers want a GeoJSON-style feature collection.

use crate::Coordinate;
use serde::Serialize;

/// A GeoJSON-style collection of point features.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: PointProperties,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointProperties {
    /// Zero-based position in the scanned sequence.
    pub index: usize,
    /// Generated label, `Point {index + 1}`.
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// (longitude, latitude) axis order per the geo-feature convention.
    pub coordinates: [f64; 2],
}

pub(crate) fn feature_collection(coordinates: &[Coordinate]) -> FeatureCollection {
    let features = coordinates
        .iter()
        .enumerate()
        .map(|(index, c)| Feature {
            kind: "Feature".to_string(),
            properties: PointProperties {
                index,
                label: format!("Point {}", index + 1),
                latitude: c.latitude,
                longitude: c.longitude,
            },
            geometry: Geometry {
                kind: "Point".to_string(),
                coordinates: [c.longitude, c.latitude],
            },
        })
        .collect();

    FeatureCollection { kind: "FeatureCollection".to_string(), features }
}

pub(crate) fn lng_lat_pairs(coordinates: &[Coordinate]) -> Vec<(f64, f64)> {
    coordinates.iter().map(|c| (c.longitude, c.latitude)).collect()
}

pub(crate) fn lat_lng_pairs(coordinates: &[Coordinate]) -> Vec<(f64, f64)> {
    coordinates.iter().map(|c| (c.latitude, c.longitude)).collect()
}

pub(crate) fn display(coordinates: &[Coordinate]) -> String {
    coordinates
        .iter()
        .map(|c| format!("[{}, {}]", c.latitude, c.longitude))
        .collect::<Vec<_>>()
        .join(", ")
}
