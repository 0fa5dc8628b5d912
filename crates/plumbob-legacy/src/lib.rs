//! Legacy-challenge derivation: joins a natal chart against the rules table
//! and aggregates the matched rows into curated trait/aspiration/career/
//! skill/rule collections, with a plain-text report as a side effect.

pub mod aggregate;
pub mod report;
pub mod table;

pub use aggregate::{evaluate_chart, AggregatedResult, MatchOptions, RankingMode};
pub use report::{render_report, write_report};
pub use table::{LegacyError, RuleRow, RulesTable};
