//! Zodiac sign and house assignment, and the natal chart itself.

use crate::calendar::{BirthMoment, SimCalendar};
use crate::ephemeris::{compute_positions, BodyPositions, ANGLE_POINTS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ZODIAC_SIGNS: &[&str] = &[
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// Sign and house for one body or angle point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub sign: String,
    pub house: u8,
}

/// The computed natal chart: body-or-angle name -> sign and house.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NatalChart {
    pub entries: BTreeMap<String, ChartEntry>,
}

/// Chart plus the calendar context it was computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedChart {
    pub chart: NatalChart,
    pub birth_moment: BirthMoment,
    pub formatted_birthdate: String,
}

/// Sign index (0-11) for a longitude in [0, 360).
///
/// Boundary longitudes exactly divisible by 30 land in the higher sign.
pub fn sign_index(longitude: f64) -> usize {
    (longitude / 30.0) as usize % ZODIAC_SIGNS.len()
}

/// House number (1-12) for a sign index.
///
/// The simplified whole-sign convention shifts by one sign: house is
/// `(sign_index + 1) % 12 + 1`, deliberately not `sign_index + 1`.
pub fn house_for_sign(sign_index: usize) -> u8 {
    ((sign_index + 1) % 12 + 1) as u8
}

/// Partition every longitude into its sign and house.
pub fn assign_zodiac(positions: &BodyPositions) -> NatalChart {
    let mut entries = BTreeMap::new();
    for (name, longitude) in positions.iter() {
        let idx = sign_index(longitude);
        entries.insert(
            name.to_string(),
            ChartEntry {
                sign: ZODIAC_SIGNS[idx].to_string(),
                house: house_for_sign(idx),
            },
        );
    }
    NatalChart { entries }
}

impl NatalChart {
    /// Chart entries, optionally excluding the four angle points (the
    /// earlier pipeline revision matched bodies only).
    pub fn entries_for_matching(&self, include_angles: bool) -> Vec<(&str, &ChartEntry)> {
        self.entries
            .iter()
            .filter(|(name, _)| include_angles || !ANGLE_POINTS.contains(&name.as_str()))
            .map(|(name, entry)| (name.as_str(), entry))
            .collect()
    }

    /// Display lines of the form `Sun: Aries, House 2`.
    pub fn pretty_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, entry)| {
                format!("{}: {}, House {}", capitalize(name), entry.sign, entry.house)
            })
            .collect()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Run the full chart pipeline: calendar conversion, position model, and
/// zodiac assignment.
pub fn generate(
    calendar: &SimCalendar,
    sim_age: u32,
    current_sim_day: u32,
    latitude: f64,
) -> GeneratedChart {
    let birth_moment = calendar.birth_moment(sim_age, current_sim_day);
    let jd = birth_moment.julian_date();
    log::debug!(
        "birth moment year {} day {} -> jd {jd}",
        birth_moment.year,
        birth_moment.day_of_year
    );

    let positions = compute_positions(jd, latitude);
    GeneratedChart {
        chart: assign_zodiac(&positions),
        birth_moment,
        formatted_birthdate: calendar.format_birthdate(&birth_moment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_index_boundaries() {
        assert_eq!(sign_index(0.0), 0);
        assert_eq!(sign_index(29.999), 0);
        assert_eq!(sign_index(30.0), 1);
        assert_eq!(sign_index(359.999), 11);
    }

    #[test]
    fn test_full_coverage_no_gaps() {
        let mut step = 0.0;
        while step < 360.0 {
            let idx = sign_index(step);
            assert!(idx <= 11);
            let house = house_for_sign(idx);
            assert!((1..=12).contains(&house));
            step += 0.25;
        }
    }

    #[test]
    fn test_house_is_shifted_whole_sign() {
        assert_eq!(house_for_sign(0), 2);
        assert_eq!(house_for_sign(10), 12);
        assert_eq!(house_for_sign(11), 1);
    }

    #[test]
    fn test_entries_for_matching_excludes_angles() {
        let calendar = SimCalendar::default();
        let generated = generate(&calendar, 5, 40, 38.9072);

        let with_angles = generated.chart.entries_for_matching(true);
        let without = generated.chart.entries_for_matching(false);
        assert_eq!(with_angles.len(), 20);
        assert_eq!(without.len(), 16);
        assert!(without.iter().all(|(name, _)| *name != "ascendant"));
    }

    #[test]
    fn test_pretty_lines_shape() {
        let calendar = SimCalendar::default();
        let generated = generate(&calendar, 0, 0, 0.0);
        let lines = generated.chart.pretty_lines();
        assert_eq!(lines.len(), 20);
        assert!(lines.iter().any(|l| l.starts_with("Sun: ")));
        assert!(lines.iter().all(|l| l.contains(", House ")));
    }
}
