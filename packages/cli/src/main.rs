#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the shot chart tools.
//!
//! Imports shot CSVs with arbitrary column names, classifies each shot into
//! a court zone, exports the classified CSV, and prints per-zone make/miss
//! summaries.

mod interactive;

use std::io::Write as _;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use shot_chart_cli_utils::{IndicatifProgress, MultiProgress};
use shot_chart_shot::{
    ColumnMapping, FilterOptions, ShotFilter, ShotResult, ZoneSummary,
    classify_rows, classify_rows_indexed, demo_mapping, demo_table, normalize_columns,
    normalize_result, read_csv_path, read_shot_rows, summarize_by_zone, write_csv,
};
use shot_chart_shot_models::LogicalField;
use shot_chart_zone::{
    DEFAULT_COURT_IMAGE, Zone, ZoneIndex, ZoneSetDefinition, classify_point, court_dimensions,
    default_zone_set, load_zone_set_file, load_zones, scale_zone_set,
};

/// Environment variable overriding the default court image path.
const COURT_IMAGE_ENV: &str = "SHOT_CHART_COURT_IMAGE";

#[derive(Parser)]
#[command(name = "shot_chart", about = "Classify basketball shots into court zones")]
struct Cli {
    /// Court image whose size defines the pixel space
    /// [default: `$SHOT_CHART_COURT_IMAGE` or `court.png`]
    #[arg(long, global = true)]
    court: Option<PathBuf>,

    /// Zone set TOML file (defaults to the built-in half-court zones)
    #[arg(long, global = true)]
    zones: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a shot CSV, classify every row, and export it
    Classify {
        /// Source CSV file
        #[arg(long)]
        input: PathBuf,
        /// Column mapping entry `field=column` (fields: x, y, result, player, period)
        #[arg(long = "map", value_parser = parse_mapping_entry)]
        mappings: Vec<(LogicalField, String)>,
        /// Prompt for any required field missing from `--map`
        #[arg(long)]
        interactive: bool,
        /// Output CSV path (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print per-zone make/miss totals for a classified CSV
    Summary {
        /// Classified CSV written by `classify`
        #[arg(long)]
        input: PathBuf,
        /// Only include these players
        #[arg(long)]
        player: Vec<String>,
        /// Only include these periods
        #[arg(long)]
        period: Vec<i64>,
        /// Only include these zones
        #[arg(long)]
        zone: Vec<String>,
        /// Only include these outcomes (any make/miss token)
        #[arg(long, value_parser = parse_shot_result)]
        result: Vec<ShotResult>,
    },
    /// Classify a single pixel coordinate
    Point {
        /// Horizontal pixel coordinate
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Vertical pixel coordinate
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// List the zone set, scaled to the court image when one is available
    Zones,
    /// Classify the built-in demo dataset
    Demo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = shot_chart_cli_utils::init_logger();
    let cli = Cli::parse();

    let court = resolve_court_path(cli.court.clone());
    let definition = match &cli.zones {
        Some(path) => load_zone_set_file(path)?,
        None => default_zone_set(),
    };

    match cli.command {
        Commands::Classify {
            input,
            mappings,
            interactive,
            output,
        } => run_classify(
            &multi,
            &court,
            &definition,
            &input,
            mappings,
            interactive,
            output.as_deref(),
        )?,
        Commands::Summary {
            input,
            player,
            period,
            zone,
            result,
        } => {
            let rows = read_shot_rows(std::fs::File::open(&input)?)?;
            let filter = ShotFilter {
                players: player.into_iter().collect(),
                periods: period.into_iter().collect(),
                zones: zone.into_iter().collect(),
                results: result.into_iter().collect(),
            };
            let filtered = filter.apply(&rows);
            log::info!("{} of {} shots match the filter", filtered.len(), rows.len());

            if filtered.is_empty() {
                println!("No shots match the selected filters.");
                print_filter_options(&FilterOptions::from_rows(&rows));
            } else {
                print_summary(&summarize_by_zone(&filtered));
            }
        }
        Commands::Point { x, y } => {
            let zones = load_zones(&court, &definition)?;
            println!("{}", classify_point(x, y, &zones));
        }
        Commands::Zones => print_zones(&court, &definition)?,
        Commands::Demo => {
            let zones = load_zones(&court, &definition)?;
            let rows = normalize_columns(&demo_table(), &demo_mapping())?;
            let classified = classify_rows(&rows, &zones);

            write_csv(&classified, std::io::stdout().lock())?;
            println!();
            print_summary(&summarize_by_zone(&classified));
        }
    }

    Ok(())
}

fn run_classify(
    multi: &MultiProgress,
    court: &Path,
    definition: &ZoneSetDefinition,
    input: &Path,
    mappings: Vec<(LogicalField, String)>,
    interactive: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let zones = load_zones(court, definition)?;
    let table = read_csv_path(input)?;

    let mut mapping: ColumnMapping = mappings.into_iter().collect();
    if interactive {
        mapping = interactive::complete_mapping(&table, mapping)?;
    }

    let rows = normalize_columns(&table, &mapping)?;
    let progress = IndicatifProgress::rows_bar(multi, "Classifying shots");
    let classified = classify_rows_indexed(&rows, &ZoneIndex::new(&zones), &progress);

    match output {
        Some(path) => {
            write_csv(&classified, std::fs::File::create(path)?)?;
            log::info!("Wrote {} classified shots to {}", classified.len(), path.display());
        }
        None => write_csv(&classified, std::io::stdout().lock())?,
    }

    let mut stderr = std::io::stderr().lock();
    writeln!(stderr)?;
    for line in summary_lines(&summarize_by_zone(&classified)) {
        writeln!(stderr, "{line}")?;
    }

    Ok(())
}

fn resolve_court_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(COURT_IMAGE_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_COURT_IMAGE))
}

fn parse_mapping_entry(entry: &str) -> Result<(LogicalField, String), String> {
    let (field, column) = entry
        .split_once('=')
        .ok_or_else(|| format!("expected `field=column`, got '{entry}'"))?;
    let field = field
        .trim()
        .parse::<LogicalField>()
        .map_err(|_| format!("unknown field '{field}' (expected x, y, result, player, period)"))?;
    if column.is_empty() {
        return Err(format!("empty column name for field '{field}'"));
    }
    Ok((field, column.to_string()))
}

fn parse_shot_result(value: &str) -> Result<ShotResult, String> {
    normalize_result(value).map_err(|e| e.to_string())
}

fn print_zones(
    court: &Path,
    definition: &ZoneSetDefinition,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Zone set: {} ({})", definition.name, definition.id);

    // The listing is still useful without an image, so fall back to ratios.
    if !court.exists() {
        log::warn!("{} not found; listing vertex ratios", court.display());
        for (i, template) in definition.zones.iter().enumerate() {
            println!("{:>2}. {:<16} {:?}", i + 1, template.name, template.vertices);
        }
        return Ok(());
    }

    let (width, height) = court_dimensions(court)?;
    println!("Court image: {} ({width}x{height})", court.display());
    let zones = scale_zone_set(definition, f64::from(width), f64::from(height))?;
    for (i, zone) in zones.iter().enumerate() {
        println!("{:>2}. {:<16} {}", i + 1, zone.name, format_vertices(zone));
    }

    Ok(())
}

fn format_vertices(zone: &Zone) -> String {
    zone.polygon
        .iter()
        .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn summary_lines(summary: &[ZoneSummary]) -> Vec<String> {
    let mut lines = vec![
        format!("{:<18} {:>8} {:>6} {:>7}", "ZONE", "ATTEMPTS", "MAKES", "FG%"),
        "-".repeat(42),
    ];
    lines.extend(summary.iter().map(|s| {
        format!(
            "{:<18} {:>8} {:>6} {:>6.1}%",
            s.zone, s.attempts, s.makes, s.fg_pct
        )
    }));
    lines
}

fn print_summary(summary: &[ZoneSummary]) {
    for line in summary_lines(summary) {
        println!("{line}");
    }
}

fn print_filter_options(options: &FilterOptions) {
    let join = |values: Vec<String>| values.join(", ");
    println!("Available players: {}", join(options.players.iter().cloned().collect()));
    println!(
        "Available periods: {}",
        join(options.periods.iter().map(ToString::to_string).collect())
    );
    println!("Available zones:   {}", join(options.zones.iter().cloned().collect()));
}
