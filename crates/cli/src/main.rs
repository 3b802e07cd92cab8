mod cli;
mod watch;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use civic_core::config::{load_dotenv, Config};
use civic_core::{GeoReport, JsonFileSource, ReportSource};
use civic_heatmap::{find_nearby_duplicates, HeatmapEngine};
use civic_intent::IntentResolver;

use crate::cli::{CliArgs, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    load_dotenv();
    let args = CliArgs::parse();

    let mut config = Config::from_env();
    if let Some(path) = args.catalog {
        config.intent.catalog_path = Some(path);
    }
    config.log_summary();

    match args.command {
        Command::Heatmap {
            reports,
            radius,
            watch,
        } => {
            if let Some(radius) = radius {
                anyhow::ensure!(
                    radius.is_finite() && radius > 0.0,
                    "--radius must be a positive number of meters"
                );
                config.heatmap.cluster_radius_m = radius;
            }
            let engine = HeatmapEngine::new(config.heatmap);
            let source = JsonFileSource::new(reports);
            if watch {
                watch::watch_reports(&source, |reports| {
                    print_json(&engine.run(reports))
                })?;
            } else {
                let reports = load_reports(&source)?;
                print_json(&engine.run(&reports))?;
            }
        }
        Command::Duplicates {
            reports,
            lat,
            lon,
            category,
        } => {
            let reports = load_reports(&JsonFileSource::new(reports))?;
            let candidate = GeoReport::new(category.into(), lat, lon);
            anyhow::ensure!(
                candidate.has_valid_coordinates(),
                "coordinates ({lat}, {lon}) are out of range"
            );
            let nearby =
                find_nearby_duplicates(&candidate, &reports, config.heatmap.duplicate_radius_m);
            print_json(&nearby)?;
        }
        Command::Resolve { transcript } => {
            let resolver = build_resolver(&config)?;
            print_json(&resolver.resolve(&transcript.join(" ")))?;
        }
        Command::Suggest { limit, transcript } => {
            let resolver = build_resolver(&config)?;
            let limit = limit.unwrap_or(resolver.config().suggestion_limit);
            print_json(&resolver.rank_candidates(&transcript.join(" "), limit))?;
        }
        Command::Normalize { transcript } => {
            let resolver = build_resolver(&config)?;
            println!("{}", resolver.normalize(&transcript.join(" ")));
        }
        Command::Catalog => {
            let resolver = build_resolver(&config)?;
            let yaml = resolver
                .catalog()
                .to_yaml_string()
                .context("failed to serialize intent catalog")?;
            print!("{yaml}");
        }
    }

    Ok(())
}

fn load_reports(source: &JsonFileSource) -> Result<Vec<GeoReport>> {
    let reports = source
        .fetch_reports()
        .with_context(|| format!("failed to read reports from {}", source.path().display()))?;
    info!(count = reports.len(), path = %source.path().display(), "loaded reports");
    Ok(reports)
}

fn build_resolver(config: &Config) -> Result<IntentResolver> {
    IntentResolver::from_config(&config.intent).context("failed to load intent catalog")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
