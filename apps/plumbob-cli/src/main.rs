use anyhow::Context;
use astraea::chart;
use astraea::SimCalendar;
use clap::Parser;
use plumbob_legacy::{evaluate_chart, render_report, write_report, MatchOptions, RankingMode, RulesTable};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "plumbob", version, about = "Natal chart and legacy challenge generator")]
struct Args {
    /// Character age in sim days.
    #[arg(long)]
    age: u32,

    /// Current sim day.
    #[arg(long)]
    current_day: u32,

    /// Birth world name (e.g. "Willow Creek").
    #[arg(long)]
    world: String,

    /// Lot coordinates `x,y,z` within the world (accepted for interface
    /// parity; the atlas lookup is by world name).
    #[arg(long, value_delimiter = ',', num_args = 3)]
    coordinates: Option<Vec<f64>>,

    /// Override the configured sim year length, in days.
    #[arg(long)]
    year_days: Option<u32>,

    /// Override the configured sim season length, in days.
    #[arg(long)]
    season_days: Option<u32>,

    /// Settings file (default: probe configs/plumbob.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rules table CSV path override.
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Report output path override.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Whether angle points (ascendant etc.) join the table matching.
    #[arg(long)]
    include_angles: Option<bool>,

    /// Aspiration/career selection: "top" (top six by frequency) or "all".
    #[arg(long)]
    ranking: Option<RankingMode>,

    /// Emit the chart and result as JSON on stdout.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    world: &'a str,
    location: plumbob_worlds::WorldLocation,
    formatted_birthdate: &'a str,
    chart: &'a astraea::NatalChart,
    result: &'a plumbob_legacy::AggregatedResult,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => plumbob_config::load_settings_from(path)?,
        None => plumbob_config::load_settings()?,
    };
    if let Some(year_days) = args.year_days {
        settings.year_days = year_days;
    }
    if let Some(season_days) = args.season_days {
        settings.season_days = season_days;
    }
    if let Some(include_angles) = args.include_angles {
        settings.include_angles = include_angles;
    }
    if let Some(ranking) = args.ranking {
        settings.ranking = ranking;
    }
    if let Some(rules) = args.rules {
        settings.rules_table = rules;
    }
    if let Some(out) = args.out {
        settings.report_path = out;
    }

    let location = plumbob_worlds::locate(&args.world)
        .with_context(|| format!("looking up birth world '{}'", args.world))?;
    log::info!(
        "world '{}' at lat {} lon {} alt {:.2}",
        args.world,
        location.latitude,
        location.longitude,
        location.altitude
    );
    if let Some(coords) = &args.coordinates {
        let (x, y, z) = plumbob_worlds::lat_lon_to_xyz(
            location.latitude,
            location.longitude,
            plumbob_worlds::GLOBE_RADIUS,
        );
        log::debug!("lot coordinates {coords:?}; globe position ({x:.2}, {y:.2}, {z:.2})");
    }

    let calendar = SimCalendar::new(settings.year_days, settings.season_days);
    let generated = chart::generate(&calendar, args.age, args.current_day, location.latitude);

    let table = RulesTable::load(&settings.rules_table)?;
    let options = MatchOptions {
        include_angles: settings.include_angles,
        ranking: settings.ranking,
    };
    let result = evaluate_chart(&table, &generated.chart, &options);

    write_report(&settings.report_path, &result)?;
    log::info!("report written to {}", settings.report_path.display());

    if args.json {
        let output = JsonOutput {
            world: &args.world,
            location,
            formatted_birthdate: &generated.formatted_birthdate,
            chart: &generated.chart,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Born: {}", generated.formatted_birthdate);
    println!();
    for line in generated.chart.pretty_lines() {
        println!("{line}");
    }
    print!("{}", render_report(&result));
    Ok(())
}
