//! Sim-calendar arithmetic: birth moment derivation, Julian dates, and
//! human-readable birthdate formatting.
//!
//! The in-game calendar has a configurable year length and season length
//! (defaults: 28-day years, 7-day seasons). Years count from an epoch year
//! zero and may go negative for characters born "before chronicle".

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

pub const DEFAULT_YEAR_DAYS: u32 = 28;
pub const DEFAULT_SEASON_DAYS: u32 = 7;

pub const SEASONS: &[&str] = &["Spring", "Summer", "Fall", "Winter"];
pub const DAYS_OF_WEEK: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

/// The point on the sim calendar a character was born.
///
/// `day_of_year` is always normalized into `[0, year_days)` during
/// construction; `year` may be negative (rendered as "BC").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub year: i64,
    pub day_of_year: u32,
}

/// Calendar shape of the sim world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimCalendar {
    pub year_days: u32,
    pub season_days: u32,
}

impl Default for SimCalendar {
    fn default() -> Self {
        Self {
            year_days: DEFAULT_YEAR_DAYS,
            season_days: DEFAULT_SEASON_DAYS,
        }
    }
}

impl SimCalendar {
    pub fn new(year_days: u32, season_days: u32) -> Self {
        Self {
            year_days,
            season_days,
        }
    }

    /// Derive the birth moment from a character's age (in sim days) and the
    /// current sim day, borrowing across year boundaries so the resulting
    /// day-of-year lands in `[0, year_days)`.
    pub fn birth_moment(&self, sim_age: u32, current_sim_day: u32) -> BirthMoment {
        let year_days = i64::from(self.year_days);
        let full_years_passed = i64::from(current_sim_day) / year_days;
        let remaining_days = i64::from(current_sim_day) % year_days;

        let mut birth_year = full_years_passed - i64::from(sim_age) / year_days;
        let mut birth_day_of_year = remaining_days - i64::from(sim_age) % year_days;

        while birth_day_of_year < 0 {
            birth_year -= 1;
            birth_day_of_year += year_days;
        }

        BirthMoment {
            year: birth_year,
            day_of_year: birth_day_of_year as u32,
        }
    }

    /// Render a birth moment as an in-game date string, e.g.
    /// `"Summer Year 0 AC, Monday Day 1"`.
    pub fn format_birthdate(&self, moment: &BirthMoment) -> String {
        let day = moment.day_of_year;
        let season = SEASONS[(day / self.season_days) as usize % SEASONS.len()];
        let day_of_week = DAYS_OF_WEEK[(day % 7) as usize];
        let day_number = day % self.season_days + 1;

        let year_str = if moment.year < 0 {
            format!("{} BC", -moment.year)
        } else {
            format!("{} AC", moment.year)
        };

        format!("{} Year {}, {} Day {}", season, year_str, day_of_week, day_number)
    }
}

impl BirthMoment {
    /// Continuous day count used as the single time axis of the position
    /// model.
    ///
    /// Anchored at the Julian date of 0001-01-01 midnight and offset by
    /// `year * 365.25` whole sim years plus the day-of-year. Deliberately
    /// coarse (not leap-aware): the drift is part of the chart's numeric
    /// identity and must not be corrected.
    pub fn julian_date(&self) -> f64 {
        let anchor = NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(julian_date)
            .unwrap_or(JD_YEAR_ONE);
        anchor - self.year as f64 * 365.25 + f64::from(self.day_of_year)
    }
}

// Julian date of 0001-01-01 00:00, fallback for the (infallible) chrono
// construction above.
const JD_YEAR_ONE: f64 = 1_721_425.5;

/// Standard Gregorian calendar to Julian date conversion.
///
/// Integer Julian day number plus the fractional day from time-of-day;
/// midnight therefore carries the conventional -0.5 offset.
pub fn julian_date(dt: NaiveDateTime) -> f64 {
    let year = i64::from(dt.year());
    let month = i64::from(dt.month());
    let day = i64::from(dt.day());

    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    let jdn = day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;

    jdn as f64
        + (f64::from(dt.hour()) - 12.0) / 24.0
        + f64::from(dt.minute()) / 1440.0
        + f64::from(dt.second()) / 86400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth_moment_scenario() {
        let cal = SimCalendar::new(28, 7);
        let moment = cal.birth_moment(5, 40);
        assert_eq!(moment, BirthMoment { year: 0, day_of_year: 7 });
    }

    #[test]
    fn test_birth_moment_day_in_range() {
        for year_days in [7u32, 28, 30, 365] {
            let cal = SimCalendar::new(year_days, 7);
            for age in 0..80 {
                for current in 0..120 {
                    let moment = cal.birth_moment(age, current);
                    assert!(moment.day_of_year < year_days);
                }
            }
        }
    }

    #[test]
    fn test_birth_moment_borrows_into_previous_year() {
        let cal = SimCalendar::new(28, 7);
        // Age larger than the elapsed portion of the current year.
        let moment = cal.birth_moment(12, 5);
        assert_eq!(moment.year, -1);
        assert_eq!(moment.day_of_year, 21);
    }

    #[test]
    fn test_format_birthdate_scenario() {
        let cal = SimCalendar::new(28, 7);
        let formatted = cal.format_birthdate(&BirthMoment { year: 0, day_of_year: 7 });
        assert_eq!(formatted, "Summer Year 0 AC, Monday Day 1");
    }

    #[test]
    fn test_format_birthdate_bce() {
        let cal = SimCalendar::default();
        let formatted = cal.format_birthdate(&BirthMoment { year: -3, day_of_year: 0 });
        assert_eq!(formatted, "Spring Year 3 BC, Monday Day 1");
    }

    #[test]
    fn test_julian_date_year_one_midnight() {
        let dt = NaiveDate::from_ymd_opt(1, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(julian_date(dt), 1_721_425.5);
    }

    #[test]
    fn test_julian_date_j2000() {
        // 2000-01-01 12:00 UTC is the J2000 reference epoch.
        let dt = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
        assert_eq!(julian_date(dt), 2_451_545.0);
    }

    #[test]
    fn test_birth_moment_julian_date_anchor() {
        let jd = BirthMoment { year: 0, day_of_year: 0 }.julian_date();
        assert_eq!(jd, 1_721_425.5);

        // Negative years move the anchor forward by 365.25 days per year.
        let jd_bc = BirthMoment { year: -2, day_of_year: 3 }.julian_date();
        assert!((jd_bc - (1_721_425.5 + 2.0 * 365.25 + 3.0)).abs() < 1e-9);
    }
}
