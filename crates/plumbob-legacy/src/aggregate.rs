//! Aggregation of matched rule rows: token cleaning, rule normalization,
//! frequency ranking, and best-vs-worst skill voting.

use crate::table::{RuleRow, RulesTable};
use astraea::chart::NatalChart;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

/// How aspiration/career candidates are selected.
///
/// The earlier pipeline revision kept every distinct cleaned value; the
/// later one votes by raw-token frequency and keeps the top six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankingMode {
    #[serde(rename = "all")]
    AllDistinct,
    #[serde(rename = "top")]
    TopByFrequency,
}

impl FromStr for RankingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::AllDistinct),
            "top" => Ok(Self::TopByFrequency),
            other => Err(format!("unknown ranking mode '{other}' (expected 'all' or 'top')")),
        }
    }
}

/// Matching/aggregation configuration unifying the two observed pipeline
/// revisions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchOptions {
    pub include_angles: bool,
    pub ranking: RankingMode,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            include_angles: true,
            ranking: RankingMode::TopByFrequency,
        }
    }
}

/// The curated attribute collections derived from the chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedResult {
    pub traits: BTreeSet<String>,
    pub aspirations: Vec<String>,
    pub careers: Vec<String>,
    pub best_skills: BTreeSet<String>,
    pub worst_skills: BTreeSet<String>,
    pub rules: Vec<String>,
}

const TOP_SELECTION_COUNT: usize = 6;

/// Truncate a token at the first comma, then the first period, and trim.
///
/// Guards against inconsistent in-cell punctuation.
pub fn clean_split(entry: &str) -> String {
    let before_comma = entry.split(',').next().unwrap_or("");
    let before_period = before_comma.split('.').next().unwrap_or("");
    before_period.trim().to_string()
}

// Python-style capitalize: first character uppercased, the rest lowercased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}

/// Normalize one raw rule fragment into zero or more rule strings.
///
/// "Must master" fragments split on " and " so each mastery requirement
/// stands alone; everything else splits on ", " with each part capitalized,
/// trimmed, and stripped of a leading "And ".
pub fn normalize_rule_fragment(fragment: &str) -> Vec<String> {
    let mut out = Vec::new();
    if fragment.contains("Must master") {
        for part in fragment.split(" and ") {
            let cleaned = capitalize(part.replace("Must master", "").trim());
            out.push(format!("Must master {cleaned}"));
        }
    } else {
        for part in fragment.split(", ") {
            let mut cleaned = capitalize(part).trim().to_string();
            if let Some(stripped) = cleaned.strip_prefix("And ") {
                cleaned = stripped.to_string();
            }
            out.push(cleaned);
        }
    }
    out
}

/// Deduplicate, sort, and re-split normalized rules.
///
/// Normalization can reintroduce comma-joined composites (a "Must master"
/// requirement naming several skills, for instance), so a second pass splits
/// those before the final dedup. Idempotent under re-application.
pub fn finalize_rules(normalized: Vec<String>) -> Vec<String> {
    let unique: BTreeSet<String> = normalized.into_iter().collect();

    let mut seen = BTreeSet::new();
    for rule in unique {
        if seen.contains(&rule) {
            continue;
        }
        if rule.contains(", ") {
            for part in rule.split(", ") {
                let cleaned = capitalize(part).trim().to_string();
                seen.insert(cleaned);
            }
        } else {
            seen.insert(rule);
        }
    }
    seen.into_iter().collect()
}

// Occurrence counts per distinct raw token, remembering first-seen order for
// the deterministic tie-break.
struct TokenCounter {
    counts: HashMap<String, usize>,
    first_seen: Vec<String>,
}

impl TokenCounter {
    fn new() -> Self {
        Self {
            counts: HashMap::new(),
            first_seen: Vec::new(),
        }
    }

    fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), 1);
                self.first_seen.push(token.to_string());
            }
        }
    }

    /// Top `n` tokens by descending count; ties keep first-seen order.
    fn top(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<(usize, &String)> = self
            .first_seen
            .iter()
            .enumerate()
            .map(|(idx, token)| (idx, token))
            .collect();
        ranked.sort_by_key(|(idx, token)| (std::cmp::Reverse(self.counts[*token]), *idx));
        ranked.into_iter().take(n).map(|(_, token)| token.clone()).collect()
    }
}

/// Aggregate a set of matched rows into the final attribute collections.
pub fn aggregate_rows(rows: &[&RuleRow], ranking: RankingMode) -> AggregatedResult {
    let mut traits = BTreeSet::new();
    let mut aspiration_set = BTreeSet::new();
    let mut career_set = BTreeSet::new();
    let mut best_skills = BTreeSet::new();
    let mut worst_skills = BTreeSet::new();
    let mut normalized_rules = Vec::new();

    let mut aspiration_counts = TokenCounter::new();
    let mut career_counts = TokenCounter::new();
    let mut best_counts: HashMap<String, usize> = HashMap::new();
    let mut worst_counts: HashMap<String, usize> = HashMap::new();

    for row in rows {
        for token in &row.traits {
            traits.insert(clean_split(token));
        }
        for token in &row.aspirations {
            aspiration_set.insert(clean_split(token));
            aspiration_counts.add(token);
        }
        for token in &row.careers {
            career_set.insert(clean_split(token));
            career_counts.add(token);
        }
        for token in &row.best_skills {
            let cleaned = clean_split(token);
            *best_counts.entry(cleaned.clone()).or_insert(0) += 1;
            best_skills.insert(cleaned);
        }
        for token in &row.worst_skills {
            let cleaned = clean_split(token);
            *worst_counts.entry(cleaned.clone()).or_insert(0) += 1;
            worst_skills.insert(cleaned);
        }
        for fragment in &row.rules {
            normalized_rules.extend(normalize_rule_fragment(fragment));
        }
    }

    // A skill survives only if it strictly wins its column vote; ties
    // (including 0-0) drop from both sides.
    let final_best: BTreeSet<String> = best_skills
        .iter()
        .filter(|skill| {
            best_counts.get(*skill).copied().unwrap_or(0)
                > worst_counts.get(*skill).copied().unwrap_or(0)
        })
        .cloned()
        .collect();
    let final_worst: BTreeSet<String> = worst_skills
        .iter()
        .filter(|skill| {
            worst_counts.get(*skill).copied().unwrap_or(0)
                > best_counts.get(*skill).copied().unwrap_or(0)
        })
        .cloned()
        .collect();

    let (aspirations, careers) = match ranking {
        RankingMode::TopByFrequency => (
            aspiration_counts.top(TOP_SELECTION_COUNT),
            career_counts.top(TOP_SELECTION_COUNT),
        ),
        RankingMode::AllDistinct => (
            aspiration_set.into_iter().collect(),
            career_set.into_iter().collect(),
        ),
    };

    AggregatedResult {
        traits,
        aspirations,
        careers,
        best_skills: final_best,
        worst_skills: final_worst,
        rules: finalize_rules(normalized_rules),
    }
}

/// Join the chart against the rules table and aggregate the matches.
///
/// An empty match set is a recoverable condition yielding all-empty
/// collections.
pub fn evaluate_chart(
    table: &RulesTable,
    chart: &NatalChart,
    options: &MatchOptions,
) -> AggregatedResult {
    let rows = table.matching_rows(chart, options.include_angles);
    if rows.is_empty() {
        log::info!("no rule rows matched the chart");
        return AggregatedResult::default();
    }
    log::debug!("{} rule rows matched the chart", rows.len());
    aggregate_rows(&rows, options.ranking)
}
