//! Atlas of the named sim worlds.
//!
//! Each world is a square lot on the game globe: the published lot area
//! gives its side length, and a fixed distribution list assigns every world
//! a latitude/longitude. The chart pipeline only consumes the latitude; the
//! rest feeds the globe visualization layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Equivalent globe radius in meters.
pub const GLOBE_RADIUS: f64 = 80.47;

#[derive(Error, Debug)]
pub enum WorldsError {
    #[error("World '{0}' not found.")]
    NotFound(String),
}

/// Fixed attributes of a named world, as consumed by the chart pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Side length of the square lot, meters.
    pub altitude: f64,
}

// (name, lot area m^2, latitude, longitude)
const WORLD_TABLE: &[(&str, f64, f64, f64)] = &[
    ("Willow Creek", 7147.23, 0.0, 0.0),
    ("Newcrest", 4712.58, 10.0, 30.0),
    ("Oasis Springs", 7147.23, -10.0, 60.0),
    ("Granite Falls", 2072.32, -20.0, -30.0),
    ("Magnolia Promenade", 2725.63, 30.0, -60.0),
    ("Windenburg", 11334.52, 40.0, 120.0),
    ("San Myshuno", 8493.38, -30.0, 150.0),
    ("Forgotten Hollow", 1648.66, -20.0, -120.0),
    ("Brindleton Bay", 5297.26, 20.0, -150.0),
    ("Selvadorada", 2067.63, 50.0, -90.0),
    ("Del Sol Valley", 3962.18, -40.0, 90.0),
    ("Strangerville", 2374.25, 0.0, -180.0),
    ("Sulani", 3345.12, -50.0, 60.0),
    ("Glimmerbrook", 1112.15, 60.0, 30.0),
    ("Britechester", 1904.98, -60.0, 0.0),
    ("Evergreen Harbor", 2145.89, 20.0, 90.0),
    ("Mt. Komorebi", 1975.19, 30.0, -90.0),
    ("Henford-On-Bagley", 2701.91, -10.0, 120.0),
    ("Taratosa", 1680.15, 10.0, -120.0),
    ("Moonwood Mill", 1657.63, -30.0, -60.0),
    ("Copperdale", 2266.54, 40.0, 60.0),
    ("San Sequoia", 2415.84, -20.0, 180.0),
    ("Chesnut Ridge", 2125.98, 50.0, -150.0),
];

#[derive(Debug, Clone)]
struct WorldRecord {
    name: &'static str,
    location: WorldLocation,
}

fn build_atlas() -> Vec<WorldRecord> {
    WORLD_TABLE
        .iter()
        .map(|(name, area, lat, lon)| WorldRecord {
            name,
            location: WorldLocation {
                latitude: *lat,
                longitude: *lon,
                altitude: area.sqrt(),
            },
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref ATLAS: Vec<WorldRecord> = build_atlas();
}

/// Look up a world by name.
///
/// An unknown name is a hard error for the caller; there is no fallback
/// location.
pub fn locate(world_name: &str) -> Result<WorldLocation, WorldsError> {
    ATLAS
        .iter()
        .find(|record| record.name == world_name)
        .map(|record| record.location)
        .ok_or_else(|| WorldsError::NotFound(world_name.to_string()))
}

/// Names of every known world, in atlas order.
pub fn world_names() -> Vec<&'static str> {
    ATLAS.iter().map(|record| record.name).collect()
}

/// Project a latitude/longitude onto the game globe.
pub fn lat_lon_to_xyz(lat: f64, lon: f64, radius: f64) -> (f64, f64, f64) {
    let lat_rad = lat.to_radians();
    let lon_rad = lon.to_radians();
    let x = radius * lat_rad.cos() * lon_rad.cos();
    let y = radius * lat_rad.cos() * lon_rad.sin();
    let z = radius * lat_rad.sin();
    (x, y, z)
}
