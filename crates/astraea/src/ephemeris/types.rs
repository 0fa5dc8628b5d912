use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mean-longitude / mean-anomaly start values and daily rates for one body.
///
/// These pairs define the entire chart's numeric identity and are reproduced
/// exactly from the source data; they are a fixed lookup table, not derived
/// constants. Only the sun carries two distinct rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub l0: f64,
    pub g0: f64,
    pub rate_l: f64,
    pub rate_g: f64,
}

/// The sixteen chart bodies, in canonical order.
pub const BODY_NAMES: &[&str] = &[
    "sun",
    "moon",
    "mercury",
    "venus",
    "mars",
    "jupiter",
    "saturn",
    "uranus",
    "neptune",
    "pluto",
    "north_node",
    "south_node",
    "lilith",
    "chiron",
    "fortune",
    "vertex",
];

/// The four derived angle points (computed from latitude and obliquity
/// rather than from the rate table).
pub const ANGLE_POINTS: &[&str] = &["ascendant", "descendant", "midheaven", "ic"];

/// Ecliptic longitudes for every body and angle point, in degrees [0, 360).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyPositions {
    pub longitudes: BTreeMap<String, f64>,
}

impl BodyPositions {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.longitudes.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.longitudes.iter().map(|(name, lon)| (name.as_str(), *lon))
    }
}
