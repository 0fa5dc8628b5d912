//! Settings layer for the plumbob pipeline.
//!
//! Settings live in a `[plumbob]` table of a TOML file. Every field has a
//! default, a missing file yields the defaults, and a malformed file is an
//! error. CLI flags override whatever was loaded.

use plumbob_legacy::RankingMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATHS: &[&str] = &["configs/plumbob.toml", "../../configs/plumbob.toml"];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub year_days: u32,
    pub season_days: u32,
    pub include_angles: bool,
    pub ranking: RankingMode,
    pub rules_table: PathBuf,
    pub report_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            year_days: 28,
            season_days: 7,
            include_angles: true,
            ranking: RankingMode::TopByFrequency,
            rules_table: PathBuf::from("static/natal_rules.csv"),
            report_path: PathBuf::from("cleaned_natal_chart_results.txt"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    plumbob: Option<Settings>,
}

/// Parse settings out of TOML text.
pub fn settings_from_str(text: &str) -> anyhow::Result<Settings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse plumbob settings: {e}"))?;
    Ok(root.plumbob.unwrap_or_default())
}

/// Load settings from an explicit file; the file must exist and parse.
pub fn load_settings_from(path: &Path) -> anyhow::Result<Settings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read settings file {}: {e}", path.display()))?;
    settings_from_str(&text)
}

/// Load settings from the first config file found on the common relative
/// paths, falling back to defaults when none exists.
pub fn load_settings() -> anyhow::Result<Settings> {
    for candidate in DEFAULT_CONFIG_PATHS {
        let path = Path::new(candidate);
        if path.exists() {
            return load_settings_from(path);
        }
    }
    Ok(Settings::default())
}
