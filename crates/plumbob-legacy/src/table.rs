//! The rules table: a read-only tabular dataset keyed by
//! (planet, zodiac sign, house).
//!
//! Cells hold free-text lists with ad hoc in-cell delimiters. They are
//! split once at load time into raw token lists so the matching and
//! aggregation code never re-parses cell text; the raw tokens are kept
//! because frequency ranking votes on the table's literal strings.

use astraea::chart::NatalChart;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LegacyError {
    #[error("Failed to open rules table {path}: {source}")]
    TableOpen {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse rules table: {0}")]
    TableParse(#[from] csv::Error),
    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: String,
        source: std::io::Error,
    },
}

/// One spreadsheet row, as serialized in the CSV export.
#[derive(Debug, Clone, Deserialize)]
struct RawRow {
    #[serde(rename = "Planet")]
    planet: String,
    #[serde(rename = "Zodiac")]
    zodiac: String,
    #[serde(rename = "House")]
    house: u8,
    #[serde(rename = "Trait(s)")]
    traits: String,
    #[serde(rename = "Aspiration(s)")]
    aspirations: String,
    #[serde(rename = "Career")]
    career: String,
    #[serde(rename = "Best Skill(s)")]
    best_skills: String,
    #[serde(rename = "Worst Skill(s)")]
    worst_skills: String,
    #[serde(rename = "Rule(s)")]
    rules: String,
}

/// One rule row with its list cells pre-split into raw tokens.
#[derive(Debug, Clone)]
pub struct RuleRow {
    pub planet: String,
    pub zodiac: String,
    pub house: u8,
    pub traits: Vec<String>,
    pub aspirations: Vec<String>,
    pub careers: Vec<String>,
    pub best_skills: Vec<String>,
    pub worst_skills: Vec<String>,
    pub rules: Vec<String>,
}

impl From<RawRow> for RuleRow {
    fn from(raw: RawRow) -> Self {
        Self {
            planet: raw.planet,
            zodiac: raw.zodiac,
            house: raw.house,
            traits: split_tokens(&raw.traits, ", "),
            aspirations: split_tokens(&raw.aspirations, ", "),
            careers: split_tokens(&raw.career, ", "),
            best_skills: split_tokens(&raw.best_skills, ", "),
            worst_skills: split_tokens(&raw.worst_skills, ", "),
            rules: split_tokens(&raw.rules, ". "),
        }
    }
}

fn split_tokens(cell: &str, separator: &str) -> Vec<String> {
    cell.split(separator).map(str::to_string).collect()
}

/// The full rules table, loaded into memory per invocation.
#[derive(Debug, Clone, Default)]
pub struct RulesTable {
    pub rows: Vec<RuleRow>,
}

impl RulesTable {
    /// Load the table from a CSV file with the canonical headers.
    pub fn load(path: &Path) -> Result<Self, LegacyError> {
        let file = File::open(path).map_err(|source| LegacyError::TableOpen {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parse the table from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LegacyError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut rows = Vec::new();
        for record in csv_reader.deserialize::<RawRow>() {
            rows.push(RuleRow::from(record?));
        }
        log::debug!("loaded {} rule rows", rows.len());
        Ok(Self { rows })
    }

    /// All rows matching the chart: for each entry, rows whose planet
    /// (title-cased body name), zodiac sign, and house all agree.
    pub fn matching_rows(&self, chart: &NatalChart, include_angles: bool) -> Vec<&RuleRow> {
        let mut matches = Vec::new();
        for (body, entry) in chart.entries_for_matching(include_angles) {
            let planet = title_case(body);
            matches.extend(self.rows.iter().filter(|row| {
                row.planet == planet && row.zodiac == entry.sign && row.house == entry.house
            }));
        }
        matches
    }
}

/// Title-case a body name the way the table stores it: every alphabetic run
/// starts uppercase and continues lowercase, so `north_node` becomes
/// `North_Node`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alphabetic = false;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}
