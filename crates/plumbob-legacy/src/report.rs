//! Plain-text report rendering and the report-file side effect.

use crate::aggregate::AggregatedResult;
use crate::table::LegacyError;
use std::path::Path;

fn sorted(items: &[String]) -> Vec<&str> {
    let mut list: Vec<&str> = items.iter().map(String::as_str).collect();
    list.sort_unstable();
    list
}

/// Render the result as UTF-8 text: fixed section order, each section a
/// sorted newline-joined list, sections blank-line separated.
pub fn render_report(result: &AggregatedResult) -> String {
    let traits: Vec<&str> = result.traits.iter().map(String::as_str).collect();
    let best: Vec<&str> = result.best_skills.iter().map(String::as_str).collect();
    let worst: Vec<&str> = result.worst_skills.iter().map(String::as_str).collect();

    let mut text = String::new();
    text.push_str("\nTraits:\n");
    text.push_str(&traits.join("\n"));
    text.push_str("\n\nAspirations:\n");
    text.push_str(&sorted(&result.aspirations).join("\n"));
    text.push_str("\n\nCareers:\n");
    text.push_str(&sorted(&result.careers).join("\n"));
    text.push_str("\n\nBest Skills:\n");
    text.push_str(&best.join("\n"));
    text.push_str("\n\nWorst Skills:\n");
    text.push_str(&worst.join("\n"));
    text.push_str("\n\nRules:\n");
    text.push_str(&sorted(&result.rules).join("\n"));
    text.push('\n');
    text
}

/// Write the rendered report to disk.
pub fn write_report(path: &Path, result: &AggregatedResult) -> Result<(), LegacyError> {
    std::fs::write(path, render_report(result)).map_err(|source| LegacyError::ReportWrite {
        path: path.display().to_string(),
        source,
    })
}
