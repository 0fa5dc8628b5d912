//! Simplified periodic position model.
//!
//! Each body's ecliptic longitude is a fixed linear rate from the J2000
//! epoch plus a two-term sine correction on the mean anomaly. This is a
//! stylized approximation, not an ephemeris-grade calculation; the sim
//! world's sky only has to be deterministic, not accurate.

use crate::ephemeris::types::{BodyPositions, OrbitalElements};
use std::collections::BTreeMap;

/// Reference epoch (J2000.0) for the linear rates.
pub const EPOCH_JD: f64 = 2_451_545.0;

/// Fixed ecliptic obliquity used by the angle formulas, degrees.
pub const OBLIQUITY_DEG: f64 = 23.44;

/// Local sidereal offset simplification used by the ascendant formula,
/// degrees.
pub const SIDEREAL_E_DEG: f64 = 90.0;

/// Per-body orbital elements, keyed in [`crate::ephemeris::types::BODY_NAMES`] order.
///
/// north_node/south_node differ only by 180 degrees of phase; lilith and
/// chiron have their own slow rates; fortune and vertex reuse pluto's
/// elements in the source data.
pub const BODY_ELEMENTS: &[(&str, OrbitalElements)] = &[
    ("sun", OrbitalElements { l0: 280.460, g0: 357.528, rate_l: 0.985_647_4, rate_g: 0.985_600_28 }),
    ("moon", OrbitalElements { l0: 218.316, g0: 134.963, rate_l: 13.176_396, rate_g: 13.176_396 }),
    ("mercury", OrbitalElements { l0: 252.250, g0: 77.456, rate_l: 4.092_338_8, rate_g: 4.092_338_8 }),
    ("venus", OrbitalElements { l0: 181.979, g0: 131.563, rate_l: 1.602_130_3, rate_g: 1.602_130_3 }),
    ("mars", OrbitalElements { l0: 355.433, g0: 336.040, rate_l: 0.524_020_8, rate_g: 0.524_020_8 }),
    ("jupiter", OrbitalElements { l0: 34.351, g0: 14.331, rate_l: 0.083_091, rate_g: 0.083_091 }),
    ("saturn", OrbitalElements { l0: 50.077, g0: 93.056, rate_l: 0.033_459, rate_g: 0.033_459 }),
    ("uranus", OrbitalElements { l0: 314.055, g0: 173.005, rate_l: 0.011_733, rate_g: 0.011_733 }),
    ("neptune", OrbitalElements { l0: 304.348, g0: 48.123, rate_l: 0.006_021, rate_g: 0.006_021 }),
    ("pluto", OrbitalElements { l0: 238.929, g0: 224.066, rate_l: 0.003_963, rate_g: 0.003_963 }),
    ("north_node", OrbitalElements { l0: 174.873, g0: 123.448, rate_l: 0.001_479, rate_g: 0.001_479 }),
    ("south_node", OrbitalElements { l0: 354.873, g0: 243.448, rate_l: 0.001_479, rate_g: 0.001_479 }),
    ("lilith", OrbitalElements { l0: 120.982, g0: 142.102, rate_l: 0.004_925, rate_g: 0.004_925 }),
    ("chiron", OrbitalElements { l0: 209.515, g0: 172.439, rate_l: 0.007_166, rate_g: 0.007_166 }),
    ("fortune", OrbitalElements { l0: 238.929, g0: 224.066, rate_l: 0.003_963, rate_g: 0.003_963 }),
    ("vertex", OrbitalElements { l0: 238.929, g0: 224.066, rate_l: 0.003_963, rate_g: 0.003_963 }),
];

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    normalized
}

/// Longitude of one body at the given Julian date, degrees [0, 360).
pub fn body_longitude(jd: f64, elements: &OrbitalElements) -> f64 {
    let n = jd - EPOCH_JD;
    let l = normalize_degrees(elements.l0 + elements.rate_l * n);
    let g = normalize_degrees(elements.g0 + elements.rate_g * n);

    let g_rad = g.to_radians();
    normalize_degrees(l + 1.915 * g_rad.sin() + 0.020 * (2.0 * g_rad).sin())
}

/// Ascendant angle for a birth latitude, degrees [0, 360).
pub fn ascendant(latitude_deg: f64) -> f64 {
    let e = SIDEREAL_E_DEG.to_radians();
    let w = OBLIQUITY_DEG.to_radians();
    let a = latitude_deg.to_radians();

    let asc = (e.sin() / (e.cos() * w.cos() - w.sin() * a.tan())).atan();
    normalize_degrees(asc.to_degrees())
}

/// Midheaven angle, degrees [0, 360).
///
/// The source formula takes tan of a literal 90 degrees; the platform's
/// huge finite result is kept as-is rather than special-cased, because only
/// the value mod 360 feeds zodiac assignment. Flagged for review as a
/// probable transcription artifact of the ascendant formula.
pub fn midheaven() -> f64 {
    let w = OBLIQUITY_DEG.to_radians();
    let mc = ((90.0_f64.to_radians()).tan() / w.cos()).atan();
    normalize_degrees(mc.to_degrees())
}

/// Longitudes of all sixteen bodies plus the four angle points.
pub fn compute_positions(jd: f64, latitude_deg: f64) -> BodyPositions {
    let mut longitudes = BTreeMap::new();

    for (name, elements) in BODY_ELEMENTS {
        longitudes.insert((*name).to_string(), body_longitude(jd, elements));
    }

    let asc = ascendant(latitude_deg);
    let mc = midheaven();
    longitudes.insert("ascendant".to_string(), asc);
    longitudes.insert("descendant".to_string(), normalize_degrees(asc + 180.0));
    longitudes.insert("midheaven".to_string(), mc);
    longitudes.insert("ic".to_string(), normalize_degrees(mc + 180.0));

    BodyPositions { longitudes }
}
