use astraea::calendar::{BirthMoment, SimCalendar};
use astraea::chart;
use astraea::ephemeris::{compute_positions, ANGLE_POINTS, BODY_NAMES};

#[test]
fn test_pipeline_scenario_age_five() {
    let calendar = SimCalendar::new(28, 7);
    let generated = chart::generate(&calendar, 5, 40, 0.0);

    assert_eq!(generated.birth_moment, BirthMoment { year: 0, day_of_year: 7 });
    assert_eq!(generated.formatted_birthdate, "Summer Year 0 AC, Monday Day 1");
    assert_eq!(generated.chart.entries.len(), 20);
}

#[test]
fn test_chart_covers_every_body_and_angle() {
    let calendar = SimCalendar::default();
    let generated = chart::generate(&calendar, 12, 300, -27.5);

    for name in BODY_NAMES.iter().chain(ANGLE_POINTS.iter()) {
        let entry = generated.chart.entries.get(*name).unwrap_or_else(|| {
            panic!("chart missing {name}");
        });
        assert!((1..=12).contains(&entry.house));
        assert!(!entry.sign.is_empty());
    }
}

#[test]
fn test_same_inputs_same_chart() {
    let calendar = SimCalendar::new(28, 7);
    let a = chart::generate(&calendar, 9, 100, 10.0);
    let b = chart::generate(&calendar, 9, 100, 10.0);
    assert_eq!(a.chart.entries, b.chart.entries);
}

#[test]
fn test_fortune_and_vertex_share_plutos_elements() {
    // The source data reuses pluto's orbital elements for both derived
    // points, so all three always share a longitude.
    let positions = compute_positions(2_460_000.25, 0.0);
    let pluto = positions.get("pluto").unwrap();
    assert_eq!(positions.get("fortune").unwrap(), pluto);
    assert_eq!(positions.get("vertex").unwrap(), pluto);
}

#[test]
fn test_bce_birth_moment_still_charts() {
    let calendar = SimCalendar::new(28, 7);
    // Older than the whole chronicle: negative birth year.
    let generated = chart::generate(&calendar, 200, 40, 15.0);
    assert!(generated.birth_moment.year < 0);
    assert!(generated.formatted_birthdate.contains("BC"));
    assert_eq!(generated.chart.entries.len(), 20);
}
