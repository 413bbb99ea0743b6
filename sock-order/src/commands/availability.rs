//! Availability writer
//!
//! Precedence, lowest first:
//! 1. every size the catalog lists is available
//! 2. each `--overrides` file, in the order given (last one has final say)
//!
//! A missing overrides file is skipped; a malformed one is logged and
//! skipped so a bad edit never blocks publishing.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use shared::models::{AvailabilityMap, AvailabilityOverrides, Catalog};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
#[command(about = "Write availability.json from the catalog and override files")]
pub struct AvailabilityArgs {
    /// Catalog document to seed from
    #[arg(long, default_value = "data/catalog.json")]
    pub catalog: PathBuf,

    /// Override files applied in order (repeatable)
    #[arg(long = "overrides", value_name = "PATH")]
    pub overrides: Vec<PathBuf>,

    /// Where to write the availability document
    #[arg(short, long, default_value = "data/availability.json")]
    pub out: PathBuf,
}

pub fn execute(args: AvailabilityArgs) -> Result<()> {
    let availability = write_availability(&args.catalog, &args.overrides, &args.out, Utc::now())?;
    println!(
        "Wrote {} ({} styles)",
        args.out.display(),
        availability.styles.len()
    );
    Ok(())
}

fn write_availability(
    catalog_path: &Path,
    overrides: &[PathBuf],
    out: &Path,
    now: DateTime<Utc>,
) -> Result<AvailabilityMap> {
    let raw = std::fs::read_to_string(catalog_path)
        .with_context(|| format!("Failed to read {}", catalog_path.display()))?;
    let catalog = Catalog::from_json(&raw)
        .with_context(|| format!("Failed to parse {}", catalog_path.display()))?;

    let mut availability = AvailabilityMap::seed_from_catalog(&catalog);
    for path in overrides {
        if let Some(extra) = read_overrides(path) {
            availability.apply_overrides(&extra);
        }
    }
    availability.stamp(now);

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(&availability)?;
    std::fs::write(out, json).with_context(|| format!("Failed to write {}", out.display()))?;

    tracing::info!(path = %out.display(), styles = availability.styles.len(), "Availability written");
    Ok(availability)
}

fn read_overrides(path: &Path) -> Option<AvailabilityOverrides> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "No overrides file");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(overrides) => Some(overrides),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed overrides file");
            None
        }
    }
}
