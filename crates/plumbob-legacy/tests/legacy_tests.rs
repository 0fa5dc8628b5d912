use astraea::chart::{ChartEntry, NatalChart};
use plumbob_legacy::{evaluate_chart, render_report, write_report, MatchOptions, RankingMode, RulesTable};

const SAMPLE_CSV: &str = "\
Planet,Zodiac,House,Trait(s),Aspiration(s),Career,Best Skill(s),Worst Skill(s),Rule(s)
Sun,Aries,2,\"Ambitious, Active\",\"Athletic Prowess, Body Builder\",Athlete,\"Fitness, Wellness\",Cooking,\"Must master Fitness and Wellness. No fast food\"
Moon,Aries,2,\"Loyal, Active\",\"Athletic Prowess, Big Happy Family\",\"Athlete, Chef\",\"Fitness, Cooking\",Logic,\"Have three children, and no takeout\"
Ascendant,Leo,10,Self-Assured,Fabulously Wealthy,Entertainer,Charisma,Logic,Always throw parties
";

fn chart_with(entries: &[(&str, &str, u8)]) -> NatalChart {
    let mut chart = NatalChart::default();
    for (body, sign, house) in entries {
        chart.entries.insert(
            (*body).to_string(),
            ChartEntry {
                sign: (*sign).to_string(),
                house: *house,
            },
        );
    }
    chart
}

#[test]
fn test_full_evaluation_top_ranking() {
    let table = RulesTable::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    let chart = chart_with(&[("sun", "Aries", 2), ("moon", "Aries", 2)]);

    let result = evaluate_chart(&table, &chart, &MatchOptions::default());

    assert!(result.traits.contains("Ambitious"));
    assert!(result.traits.contains("Active"));
    assert!(result.traits.contains("Loyal"));

    // Athletic Prowess appears in both rows, so it leads the ranking.
    assert_eq!(result.aspirations.first().map(String::as_str), Some("Athletic Prowess"));

    // Fitness: 2 best, 0 worst. Cooking: 1 best, 1 worst (tie, dropped).
    assert!(result.best_skills.contains("Fitness"));
    assert!(!result.best_skills.contains("Cooking"));
    assert!(!result.worst_skills.contains("Cooking"));
    assert!(result.worst_skills.contains("Logic"));

    assert!(result.rules.contains(&"Must master Fitness".to_string()));
    assert!(result.rules.contains(&"Must master Wellness".to_string()));
    assert!(result.rules.contains(&"Have three children".to_string()));
    assert!(result.rules.contains(&"no takeout".to_string()));
}

#[test]
fn test_angle_points_matched_only_when_included() {
    let table = RulesTable::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    let chart = chart_with(&[("ascendant", "Leo", 10)]);

    let included = evaluate_chart(
        &table,
        &chart,
        &MatchOptions { include_angles: true, ranking: RankingMode::TopByFrequency },
    );
    assert!(included.traits.contains("Self-Assured"));

    let excluded = evaluate_chart(
        &table,
        &chart,
        &MatchOptions { include_angles: false, ranking: RankingMode::TopByFrequency },
    );
    assert!(excluded.traits.is_empty());
}

#[test]
fn test_all_distinct_ranking_keeps_cleaned_values() {
    let table = RulesTable::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    let chart = chart_with(&[("sun", "Aries", 2), ("moon", "Aries", 2)]);

    let result = evaluate_chart(
        &table,
        &chart,
        &MatchOptions { include_angles: true, ranking: RankingMode::AllDistinct },
    );
    assert!(result.careers.contains(&"Athlete".to_string()));
    assert!(result.careers.contains(&"Chef".to_string()));
}

#[test]
fn test_no_matches_is_recoverable() {
    let table = RulesTable::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    let chart = chart_with(&[("venus", "Pisces", 7)]);

    let result = evaluate_chart(&table, &chart, &MatchOptions::default());
    assert!(result.traits.is_empty());
    assert!(result.aspirations.is_empty());
    assert!(result.careers.is_empty());
    assert!(result.best_skills.is_empty());
    assert!(result.worst_skills.is_empty());
    assert!(result.rules.is_empty());
}

#[test]
fn test_report_written_to_disk() {
    let table = RulesTable::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    let chart = chart_with(&[("sun", "Aries", 2)]);
    let result = evaluate_chart(&table, &chart, &MatchOptions::default());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy_report.txt");
    write_report(&path, &result).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_report(&result));
    assert!(written.contains("Traits:"));
}
