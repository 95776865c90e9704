//! EcoVision seed-data tool.
//!
//! Loads a seed file into a fresh in-memory repository and prints a data
//! summary, failing on an unreadable or malformed file.
//!
//! # Usage
//!
//! ```bash
//! # Load and report (default mode)
//! cargo run --bin ecovision-seed -- load data/sample_data.json
//!
//! # Only check that the file parses, without storing anything
//! cargo run --bin ecovision-seed -- check data/sample_data.json
//! ```
//!
//! Without a path the configured seed file is used (`SEED_DATA_PATH`, then
//! `repository.toml`).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context};
use tracing::info;

use ecovision::db::{self, LocalRepository, RepositoryConfig};
use ecovision::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Load,
    Check,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "load" | "init" => Ok(Self::Load),
            "check" | "test" => Ok(Self::Check),
            other => Err(format!("Unknown mode '{}'. Use: load, check", other)),
        }
    }
}

fn configured_seed_file() -> Option<PathBuf> {
    RepositoryConfig::from_default_location()
        .unwrap_or_default()
        .seed_file()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    logging::init_logging();

    let mut args = env::args().skip(1);
    let mode = match args.next() {
        Some(arg) => Mode::from_str(&arg).map_err(anyhow::Error::msg)?,
        None => Mode::Load,
    };
    let path = match args.next().map(PathBuf::from).or_else(configured_seed_file) {
        Some(path) => path,
        None => bail!("No seed file given and none configured"),
    };

    let data = db::load_seed_file(&path)
        .with_context(|| format!("Failed to load seed file {}", path.display()))?;

    match mode {
        Mode::Check => {
            info!("Seed file {} is valid", path.display());
            println!("Seed file: {}", path.display());
            println!("  Locations: {}", data.locations.len());
            println!("  Metrics: {}", data.metrics.len());
            println!("  Climate Data Points: {}", data.climate_data.len());
        }
        Mode::Load => {
            let repo = LocalRepository::new();
            let summary = db::seed_repository(&repo, &data).await?;
            info!("Seeding complete: {}", summary);

            println!("Data Summary:");
            println!("  Locations: {}", repo.location_count());
            println!("  Metrics: {}", repo.metric_count());
            println!("  Climate Data Points: {}", repo.reading_count());
            if summary.readings_skipped > 0 {
                println!("  Skipped data points: {}", summary.readings_skipped);
            }
        }
    }

    Ok(())
}
